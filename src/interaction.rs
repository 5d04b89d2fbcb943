//! Pointer state consumed by the simulation, and the adapter that builds it
//! from raw press/move/release events.

use crate::float::Float;
use crate::vec::Vec2;

/// Which button is held. Primary drags, anything else cuts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerButton {
    #[default]
    Primary,
    Other,
}

impl PointerButton {
    /// Map a 1-based `which` code (1 = left, 2 = middle, 3 = right).
    pub fn from_which(which: u32) -> Self {
        if which == 1 { PointerButton::Primary } else { PointerButton::Other }
    }
}

/// Snapshot of the pointer for one step. Read-only to the simulation.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerState<F: Float> {
    pub down: bool,
    pub button: PointerButton,
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
}

impl<F: Float> PointerState<F> {
    /// Pointer released at the origin.
    pub fn idle() -> Self {
        PointerState {
            down: false,
            button: PointerButton::Primary,
            pos: Vec2::zero(),
            prev_pos: Vec2::zero(),
        }
    }

    /// Pointer held with `button`, having moved from `prev_pos` to `pos`.
    pub fn held(button: PointerButton, pos: Vec2<F>, prev_pos: Vec2<F>) -> Self {
        PointerState { down: true, button, pos, prev_pos }
    }

    /// Motion since the previous event.
    pub fn motion(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }
}

/// Turns host pointer events into a [`PointerState`].
///
/// Event coordinates are taken relative to `origin` (the top-left of the
/// drawing surface in client space).
#[derive(Clone, Debug, Default)]
pub struct PointerTracker<F: Float> {
    state: PointerState<F>,
    origin: Vec2<F>,
}

impl<F: Float> PointerTracker<F> {
    pub fn new() -> Self {
        PointerTracker { state: PointerState::idle(), origin: Vec2::zero() }
    }

    pub fn with_origin(mut self, origin: Vec2<F>) -> Self {
        self.origin = origin;
        self
    }

    /// Move the surface origin, e.g. after the canvas is re-laid out.
    pub fn set_origin(&mut self, origin: Vec2<F>) {
        self.origin = origin;
    }

    pub fn press(&mut self, x: F, y: F, button: PointerButton) {
        self.state.button = button;
        self.state.down = true;
        self.track(x, y);
    }

    pub fn moved(&mut self, x: F, y: F) {
        self.track(x, y);
    }

    pub fn release(&mut self) {
        self.state.down = false;
    }

    /// Always `true`: the host should suppress its context menu so the
    /// secondary button stays free for cutting.
    pub fn context_menu(&self) -> bool {
        true
    }

    pub fn state(&self) -> &PointerState<F> {
        &self.state
    }

    fn track(&mut self, x: F, y: F) {
        self.state.prev_pos = self.state.pos;
        self.state.pos = Vec2::new(x, y) - self.origin;
    }
}
