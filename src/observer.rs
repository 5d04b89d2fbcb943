//! Step observer trait for monitoring cloth simulation progress.

use crate::link::LinkId;

/// Trait for observing cloth steps.
///
/// Implement this trait to monitor the solver (e.g., for debugging, effects
/// on tearing, or profiling). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after each relaxation pass over all points.
    fn on_relax_iteration(&mut self, _iteration: usize) {}

    /// Called when a link stretched past the tear distance and was detached.
    fn on_link_torn(&mut self, _link: LinkId) {}

    /// Called when a pointer cut cleared a point's links.
    fn on_point_cut(&mut self, _point: usize, _links_removed: usize) {}

    /// Called after all points have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
