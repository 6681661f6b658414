#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LayerId(pub u64);

/// A layer descriptor handed to the map-rendering boundary.
pub trait Layer {
    fn id(&self) -> LayerId;

    /// Whether the boundary should hit-test this layer's elements against
    /// pointer input.
    fn pickable(&self) -> bool {
        false
    }
}
