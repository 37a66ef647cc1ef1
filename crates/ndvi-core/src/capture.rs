//! Parcel geometry capture on top of a map drawing layer

use crate::models::ParcelFeature;
use crate::ports::MapCanvas;

/// Holds at most one drawn parcel and mirrors it on the map canvas
pub struct GeometryCapture {
    canvas: Box<dyn MapCanvas>,
    current: Option<ParcelFeature>,
}

impl GeometryCapture {
    pub fn new(canvas: Box<dyn MapCanvas>) -> Self {
        Self { canvas, current: None }
    }

    /// Called by the drawing tool when the user finishes a shape.
    /// Any previous shape is dropped from the canvas and from memory.
    pub fn on_draw_created(&mut self, feature: ParcelFeature) {
        self.canvas.clear_shapes();
        self.canvas.add_shape(&feature);
        tracing::debug!(geometry = ?feature.geometry_type(), "Parcel drawn");
        self.current = Some(feature);
    }

    pub fn current_feature(&self) -> Option<&ParcelFeature> {
        self.current.as_ref()
    }

    /// Forget the parcel and wipe the drawing layer
    pub fn clear(&mut self) {
        self.current = None;
        self.canvas.clear_shapes();
    }

    pub fn canvas_mut(&mut self) -> &mut dyn MapCanvas {
        self.canvas.as_mut()
    }
}
