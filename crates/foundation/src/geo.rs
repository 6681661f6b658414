/// Longitude/latitude pair in decimal degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LonLat {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl LonLat {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }

    /// `[lon, lat]`, the wire order used by the datasets.
    pub fn to_array(self) -> [f64; 2] {
        [self.lon_deg, self.lat_deg]
    }
}

/// Bounding span (width, height in degrees) around a point.
///
/// Used to spread arc endpoints within a destination region so overlapping
/// flows stay distinguishable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Extent {
    pub lon_span_deg: f64,
    pub lat_span_deg: f64,
}

impl Extent {
    pub fn new(lon_span_deg: f64, lat_span_deg: f64) -> Self {
        Self {
            lon_span_deg,
            lat_span_deg,
        }
    }

    pub fn is_zero(self) -> bool {
        self.lon_span_deg == 0.0 && self.lat_span_deg == 0.0
    }
}
