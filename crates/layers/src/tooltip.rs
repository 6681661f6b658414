use engine::collection::FeatureCollection;
use engine::record::FlowRecord;
use engine::selection::{PickTarget, SelectionState};

/// Two-line tooltip copy for the hovered object, anchored at the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipLabel {
    pub heading: String,
    /// Secondary line; dropped for hex-junk record names.
    pub detail: Option<String>,
}

/// Resolves the hovered pick target to tooltip copy.
///
/// Returns `None` when nothing is hovered, when the target no longer
/// resolves against the current data, or when a record carries no text to
/// show.
pub fn tooltip_for(
    state: &SelectionState,
    data: &FeatureCollection,
    records: &[FlowRecord],
) -> Option<TooltipLabel> {
    match state.hovered? {
        PickTarget::Country(id) => {
            let feature = data.get(id)?;
            let heading = feature
                .abbrev
                .clone()
                .unwrap_or_else(|| feature.name.clone());
            Some(TooltipLabel {
                heading,
                detail: detail_line(&feature.name),
            })
        }
        PickTarget::Flow(index) => {
            let record = records.get(index)?;
            let heading = record.country.clone().or_else(|| record.name.clone())?;
            Some(TooltipLabel {
                heading,
                detail: record.name.as_deref().and_then(detail_line),
            })
        }
    }
}

// Project names in the funding dataset are sometimes raw hex identifiers;
// those add nothing to a tooltip.
fn detail_line(name: &str) -> Option<String> {
    if name.contains("0x") {
        return None;
    }
    Some(name.to_string())
}
