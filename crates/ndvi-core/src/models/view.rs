use serde::{Deserialize, Serialize};

/// Map viewport: center as `[lat, lon]` plus zoom level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: [f64; 2],
    pub zoom: u8,
}

impl MapView {
    pub fn new(lat: f64, lon: f64, zoom: u8) -> Self {
        Self { center: [lat, lon], zoom }
    }
}

impl Default for MapView {
    /// Central Rwanda at regional zoom
    fn default() -> Self {
        Self::new(-1.95, 30.06, 8)
    }
}

/// UI panels whose visibility the workflow drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Panel {
    /// Email/password form with login and signup buttons
    Auth,
    /// Map with drawing toolbar and the action buttons
    Map,
    /// Modal dialog hosting the NDVI chart
    ChartModal,
}
