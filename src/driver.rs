//! Frame driver: turns host frame callbacks into bounded simulation steps.

use crate::error::ClothError;
use crate::float::Float;
use crate::grid::ClothGrid;
use crate::interaction::PointerState;
use crate::observer::StepObserver;
use crate::render::RenderSink;

/// How the per-frame delta is chosen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Timestep<F: Float> {
    /// Ignore wall-clock time and always step by this amount.
    Fixed(F),
    /// Use the measured frame time, clamped to `max`.
    Measured { max: F },
}

/// Runs update-then-render once per host frame.
///
/// Verlet stability depends on `delta²` staying bounded, so measured deltas
/// (infinite ones included) are clamped, and NaN or negative ones become zero.
#[derive(Clone, Debug)]
pub struct FrameDriver<F: Float> {
    timestep: Timestep<F>,
    running: bool,
    frames: u64,
}

impl<F: Float> FrameDriver<F> {
    /// Step by `dt` every frame regardless of elapsed time.
    pub fn fixed(dt: F) -> Result<Self, ClothError> {
        if !dt.is_finite_positive() {
            return Err(ClothError::InvalidTimestep);
        }
        Ok(FrameDriver { timestep: Timestep::Fixed(dt), running: true, frames: 0 })
    }

    /// Step by the measured frame time, never more than `max`.
    pub fn measured(max: F) -> Result<Self, ClothError> {
        if !max.is_finite_positive() {
            return Err(ClothError::InvalidTimestep);
        }
        Ok(FrameDriver { timestep: Timestep::Measured { max }, running: true, frames: 0 })
    }

    pub fn timestep(&self) -> Timestep<F> {
        self.timestep
    }

    /// The delta the next frame would use for `elapsed` seconds of wall time.
    pub fn delta(&self, elapsed: F) -> F {
        match self.timestep {
            Timestep::Fixed(dt) => dt,
            Timestep::Measured { max } => {
                // Also catches NaN; +inf falls through to the clamp.
                if !(elapsed >= F::zero()) {
                    log::warn!("discarding frame delta {:?}", elapsed);
                    F::zero()
                } else if elapsed > max {
                    log::warn!("clamping frame delta {:?} to {:?}", elapsed, max);
                    max
                } else {
                    elapsed
                }
            }
        }
    }

    /// Step the cloth, then draw it. Returns `false` once stopped.
    pub fn frame<S, O>(
        &mut self,
        cloth: &mut ClothGrid<F>,
        elapsed: F,
        pointer: &PointerState<F>,
        sink: &mut S,
        observer: &mut O,
    ) -> bool
    where
        S: RenderSink<F>,
        O: StepObserver,
    {
        if !self.running {
            return false;
        }
        let delta = self.delta(elapsed);
        cloth.step(delta, pointer, observer);
        cloth.draw(sink);
        self.frames += 1;
        true
    }

    /// Stop scheduling frames. There is no in-flight work to cancel.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl<F: Float> Default for FrameDriver<F> {
    /// Fixed 16 ms tick.
    fn default() -> Self {
        FrameDriver {
            timestep: Timestep::Fixed(F::from_f32(0.016)),
            running: true,
            frames: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_timesteps() {
        assert_eq!(FrameDriver::<f32>::fixed(0.0).unwrap_err(), ClothError::InvalidTimestep);
        assert_eq!(FrameDriver::<f32>::measured(f32::INFINITY).unwrap_err(), ClothError::InvalidTimestep);
    }

    #[test]
    fn measured_delta_is_sanitized() {
        let driver = FrameDriver::<f64>::measured(1.0 / 30.0).unwrap();
        assert_eq!(driver.delta(0.01), 0.01);
        assert_eq!(driver.delta(2.5), 1.0 / 30.0);
        assert_eq!(driver.delta(f64::NAN), 0.0);
        assert_eq!(driver.delta(-0.5), 0.0);
        assert_eq!(driver.delta(f64::INFINITY), 1.0 / 30.0);
        assert_eq!(driver.delta(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn fixed_delta_ignores_wall_clock() {
        let driver = FrameDriver::<f32>::default();
        assert_eq!(driver.delta(3.0), 0.016);
    }
}
