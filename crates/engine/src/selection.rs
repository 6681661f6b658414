use crate::feature::FeatureId;

/// What the pointer is over: a country shape or a flow arc, identified by
/// collection id or record index respectively.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PickTarget {
    Country(FeatureId),
    Flow(usize),
}

/// One pointer interaction against the pickable layers.
///
/// `picked` is `None` when the pointer is over empty space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickEvent {
    pub x: f64,
    pub y: f64,
    pub picked: Option<PickTarget>,
}

impl PickEvent {
    pub fn new(x: f64, y: f64, picked: Option<PickTarget>) -> Self {
        Self { x, y, picked }
    }

    /// An event over empty space.
    pub fn miss(x: f64, y: f64) -> Self {
        Self::new(x, y, None)
    }
}

/// Transient UI state, mutated one event at a time.
///
/// `hovered` points into the currently rendered feature/record set and is
/// only meaningful for the current render pass.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct SelectionState {
    pub hovered: Option<PickTarget>,
    pub selected: Option<FeatureId>,
    /// Pointer position in screen pixels, for tooltip placement.
    pub pointer_x: f64,
    pub pointer_y: f64,
}
