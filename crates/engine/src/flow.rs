use foundation::LonLat;

use crate::collection::FeatureCollection;
use crate::feature::FeatureId;
use crate::selection::{PickEvent, PickTarget, SelectionState};

/// Origin used when nothing has been selected yet.
pub const DEFAULT_ORIGIN: &str = "USA";

/// A directed flow edge between two feature centroids.
///
/// Derived data: the engine rebuilds the full list when the origin changes
/// and never mutates an arc in place.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlowArc {
    pub source: LonLat,
    pub target: LonLat,
    /// Signed flow value; the magnitude drives the visual encoding.
    pub value: f64,
}

/// Why a recomputation left the previous arc list untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecalcError {
    /// The collection holds no features; nothing to derive from.
    EmptyCollection,
    /// Neither the requested origin nor the default name resolves to a
    /// feature.
    OriginNotFound { wanted: String },
}

impl std::fmt::Display for RecalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecalcError::EmptyCollection => write!(f, "feature collection is empty"),
            RecalcError::OriginNotFound { wanted } => {
                write!(f, "no origin feature resolves for {wanted}")
            }
        }
    }
}

impl std::error::Error for RecalcError {}

/// Outcome of a successful recomputation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RecalcSummary {
    pub origin: FeatureId,
    /// Arcs emitted into the new list.
    pub emitted: usize,
    /// Flow keys that resolved to no feature and were dropped.
    pub skipped: usize,
}

/// Derives flow arcs and holds the interaction state for one map.
///
/// Every method runs synchronously on the caller's thread. The arc list is
/// swapped in a single assignment, so a reader between events observes
/// either the previous list or the new one in full, never a partial build.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEngine {
    default_origin: String,
    arcs: Vec<FlowArc>,
    state: SelectionState,
}

impl Default for FlowEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowEngine {
    pub fn new() -> Self {
        Self::with_default_origin(DEFAULT_ORIGIN)
    }

    pub fn with_default_origin(name: impl Into<String>) -> Self {
        Self {
            default_origin: name.into(),
            arcs: Vec::new(),
            state: SelectionState::default(),
        }
    }

    pub fn arcs(&self) -> &[FlowArc] {
        &self.arcs
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Rebuilds the arc list for `selected`, falling back to the current
    /// selection and then to the default origin name.
    ///
    /// On any error the previous arc list stays in place. Flow keys that
    /// resolve to no feature are dropped and counted in the summary.
    ///
    /// Ordering contract:
    /// - Arcs follow the origin's flow order (dataset insertion order).
    pub fn recalculate(
        &mut self,
        data: &FeatureCollection,
        selected: Option<FeatureId>,
    ) -> Result<RecalcSummary, RecalcError> {
        if data.is_empty() {
            return Err(RecalcError::EmptyCollection);
        }

        let origin_id = match selected.or(self.state.selected) {
            Some(id) => id,
            None => data.find_by_name(&self.default_origin).ok_or_else(|| {
                RecalcError::OriginNotFound {
                    wanted: self.default_origin.clone(),
                }
            })?,
        };
        let Some(origin) = data.get(origin_id) else {
            return Err(RecalcError::OriginNotFound {
                wanted: format!("feature #{}", origin_id.0),
            });
        };

        let mut next = Vec::with_capacity(origin.flows.len());
        let mut skipped = 0usize;
        for &(to_id, value) in &origin.flows {
            let Some(dest) = data.get(to_id) else {
                skipped += 1;
                continue;
            };
            next.push(FlowArc {
                source: origin.centroid,
                target: dest.centroid,
                value,
            });
        }

        let emitted = next.len();
        // Single assignment: readers never see a partially built list.
        self.arcs = next;

        Ok(RecalcSummary {
            origin: origin_id,
            emitted,
            skipped,
        })
    }

    /// Pointer moved. Pure state assignment; nothing is recomputed.
    pub fn on_hover(&mut self, event: PickEvent) {
        self.state.hovered = event.picked;
        self.state.pointer_x = event.x;
        self.state.pointer_y = event.y;
    }

    /// Pointer clicked. Clicking a country selects it; clicking an arc or
    /// empty space changes nothing.
    pub fn on_click(&mut self, event: PickEvent) {
        if let Some(PickTarget::Country(id)) = event.picked {
            self.state.selected = Some(id);
        }
    }

    /// Country chosen from the polygon layer: select it and rebuild arcs.
    ///
    /// An event that picked nothing (or picked an arc) is a no-op and
    /// returns `Ok(None)`.
    pub fn on_select(
        &mut self,
        data: &FeatureCollection,
        event: PickEvent,
    ) -> Result<Option<RecalcSummary>, RecalcError> {
        let Some(PickTarget::Country(id)) = event.picked else {
            return Ok(None);
        };
        self.state.selected = Some(id);
        self.recalculate(data, Some(id)).map(Some)
    }
}
