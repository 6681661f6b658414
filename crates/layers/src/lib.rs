pub mod arcs;
pub mod countries;
pub mod jitter;
pub mod layer;
pub mod symbology;
pub mod tooltip;
pub mod view;

pub use layer::*;
