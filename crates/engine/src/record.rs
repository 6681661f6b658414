use foundation::{Extent, LonLat};

/// One funding-flow record from the projects dataset.
///
/// Loaded once and read-only thereafter; the arc layer derives all visual
/// attributes from these fields per render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRecord {
    pub name: Option<String>,
    pub country: Option<String>,
    /// Free-text type label driving the size class.
    pub kind: Option<String>,
    pub from: LonLat,
    pub to: LonLat,
    /// Jitter bounds around `to`, in degrees. Absent means the target
    /// renders at its exact coordinate.
    pub to_extent: Option<Extent>,
    /// Non-negative magnitude driving the color and width encodings.
    pub outbound: f64,
}

impl FlowRecord {
    pub fn new(from: LonLat, to: LonLat, outbound: f64) -> Self {
        Self {
            name: None,
            country: None,
            kind: None,
            from,
            to,
            to_extent: None,
            outbound,
        }
    }

    pub fn with_extent(mut self, extent: Extent) -> Self {
        self.to_extent = Some(extent);
        self
    }
}

/// The record list plus normalization stats computed once at load.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlowDataset {
    pub records: Vec<FlowRecord>,
    /// Maximum observed `outbound`; 0 for an empty dataset, in which case
    /// every downstream ratio collapses to 0.
    pub max_outbound: f64,
}

impl FlowDataset {
    pub fn from_records(records: Vec<FlowRecord>) -> Self {
        let max_outbound = records.iter().map(|r| r.outbound).fold(0.0_f64, f64::max);
        Self {
            records,
            max_outbound,
        }
    }
}
