use serde::Deserialize;

use engine::record::{FlowDataset, FlowRecord};
use foundation::{Extent, LonLat};

#[derive(Debug)]
pub enum FlowDataError {
    Parse(serde_json::Error),
}

impl std::fmt::Display for FlowDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowDataError::Parse(e) => write!(f, "flow dataset parse error: {e}"),
        }
    }
}

impl std::error::Error for FlowDataError {}

#[derive(Debug, Deserialize)]
struct RawFlowRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    from: RawEndpoint,
    to: RawEndpoint,
    outbound: f64,
}

#[derive(Debug, Deserialize)]
struct RawEndpoint {
    coordinates: [f64; 2],
    #[serde(default)]
    extent: Option<[f64; 2]>,
}

/// Parses the funding-flow dataset (a JSON array of records) and computes
/// the normalization maximum in the same pass.
pub fn flows_from_json_str(payload: &str) -> Result<FlowDataset, FlowDataError> {
    let raw: Vec<RawFlowRecord> = serde_json::from_str(payload).map_err(FlowDataError::Parse)?;
    let records = raw.into_iter().map(record_from_raw).collect();
    Ok(FlowDataset::from_records(records))
}

fn record_from_raw(raw: RawFlowRecord) -> FlowRecord {
    FlowRecord {
        name: raw.name,
        country: raw.country,
        kind: raw.kind,
        from: lon_lat(raw.from.coordinates),
        to: lon_lat(raw.to.coordinates),
        // Only the target side jitters; a source extent in the data is
        // ignored.
        to_extent: raw.to.extent.map(|e| Extent::new(e[0], e[1])),
        outbound: raw.outbound,
    }
}

fn lon_lat(coords: [f64; 2]) -> LonLat {
    LonLat::new(coords[0], coords[1])
}
