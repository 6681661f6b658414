/// Camera framing the rendering boundary starts from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub max_zoom: f64,
    pub min_zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

impl Default for ViewState {
    /// World overview on the prime meridian, tilted enough to read the
    /// extruded shapes.
    fn default() -> Self {
        Self {
            latitude: 15.0,
            longitude: 0.0,
            zoom: 2.0,
            max_zoom: 16.0,
            min_zoom: 2.0,
            pitch: 50.0,
            bearing: 0.0,
        }
    }
}
