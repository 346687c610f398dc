use serde::{Deserialize, Serialize};

/// Pointer interaction mode of the chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    Panning,
}

/// Tracks whether pointer movement should pan the view.
///
/// Press and release transitions are idempotent: a release while idle or a
/// second press while panning leaves the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    mode: InteractionMode,
}

impl InteractionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.mode == InteractionMode::Panning
    }

    pub fn on_pointer_press(&mut self) {
        self.mode = InteractionMode::Panning;
    }

    pub fn on_pointer_release(&mut self) {
        self.mode = InteractionMode::Idle;
    }
}
