use foundation::LonLat;

/// Stable index of a feature within its `FeatureCollection`.
///
/// Flow mappings use this id as their key space; an id from one collection
/// is meaningless in another.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FeatureId(pub u32);

impl FeatureId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A named geographic region with outbound flows to other features.
///
/// Immutable after load; the engine only ever reads these.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name: String,
    pub abbrev: Option<String>,
    /// Free-text type label driving the marker size class.
    pub kind: Option<String>,
    pub centroid: LonLat,
    /// Outbound flows keyed by destination feature, in dataset order.
    /// Values are signed; the magnitude drives the visual encoding.
    pub flows: Vec<(FeatureId, f64)>,
}

impl Feature {
    pub fn new(name: impl Into<String>, centroid: LonLat) -> Self {
        Self {
            name: name.into(),
            abbrev: None,
            kind: None,
            centroid,
            flows: Vec::new(),
        }
    }

    pub fn with_flows(mut self, flows: Vec<(FeatureId, f64)>) -> Self {
        self.flows = flows;
        self
    }
}
