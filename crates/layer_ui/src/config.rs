//! Engine configuration.

use crate::layout::Density;
use layer_shared::constants::{DEFAULT_EVENT_CAPACITY, DISABLED_ALPHA};

/// Knobs the host sets once per engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Screen density used for every dp value.
    pub density: Density,
    /// Per-subscriber event queue capacity.
    pub event_capacity: usize,
    /// Opacity of disabled elements.
    pub disabled_alpha: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            density: Density::BASELINE,
            event_capacity: DEFAULT_EVENT_CAPACITY,
            disabled_alpha: DISABLED_ALPHA,
        }
    }
}

impl EngineConfig {
    /// Sets the density.
    #[must_use]
    pub const fn with_density(mut self, density: f32) -> Self {
        self.density = Density(density);
        self
    }

    /// Sets the event queue capacity.
    #[must_use]
    pub const fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }
}
