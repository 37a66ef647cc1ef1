//! Port trait definitions
//!
//! These traits define the UI capabilities a front end must provide. The
//! workflow never touches a concrete widget; it only drives these ports.

use crate::models::{ChartSpec, MapView, Panel, ParcelFeature};
use std::time::Duration;

/// Text areas, alerts and panel visibility of the host UI
pub trait Surface: Send {
    /// Status line below the auth form
    fn set_status(&mut self, text: &str);

    /// Result area below the map
    fn set_result(&mut self, text: &str);

    /// Blocking alert for local precondition failures
    fn alert(&mut self, message: &str);

    fn set_panel_visible(&mut self, panel: Panel, visible: bool);

    /// Empty the email and password inputs
    fn clear_credentials(&mut self);
}

/// Map widget with a drawing layer
pub trait MapCanvas: Send {
    /// Remove every drawn shape
    fn clear_shapes(&mut self);

    fn add_shape(&mut self, feature: &ParcelFeature);

    /// Recalculate layout and recenter once `delay` has elapsed.
    ///
    /// Needed after the map container changes visibility, since the widget
    /// measures its container only when it is shown.
    fn schedule_refresh(&mut self, view: MapView, delay: Duration);

    /// Layer a rendered NDVI tile overlay served at `url`
    fn show_overlay(&mut self, url: &str);
}

/// Charting capability
pub trait ChartBackend: Send {
    fn create(&mut self, spec: ChartSpec) -> Box<dyn ChartInstance>;
}

/// A live chart. It cannot be updated in place; destroy it and create a new one.
pub trait ChartInstance: Send {
    fn destroy(self: Box<Self>);
}
