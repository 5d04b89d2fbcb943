//! Configuration types for the cloth and its grid.

use crate::error::ClothError;
use crate::float::Float;
use crate::vec::Vec2;

/// How a point is kept inside the viewport.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundsMode {
    /// After integration, clamp to the edge and reflect the previous position
    /// about it, scaled by `bounce`.
    Bounce,
    /// After link resolution, mirror the position about any crossed edge.
    Mirror,
}

/// How much of a stretched link's error is removed per resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Correction {
    /// Remove the full error in one pass (split half-and-half).
    Full,
    /// Scale the correction by `1 - rest/d`, easing in as the error shrinks.
    Eased,
}

/// Simulation tunables.
///
/// # Builder Pattern
/// ```
/// use tatter::config::ClothConfig;
/// use tatter::vec::Vec2;
///
/// let config: ClothConfig<f32> = ClothConfig::new()
///     .with_iterations(4)
///     .with_gravity(Vec2::new(0.0, 600.0))
///     .with_tear_distance(80.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClothConfig<F: Float> {
    /// Relaxation passes per step. More = stiffer cloth. Default: 5.
    pub iterations: usize,
    /// Constant force added to every free point each step. Default: (0, 400).
    pub gravity: Vec2<F>,
    /// Fraction of implicit velocity kept per step (friction). Default: 0.99.
    pub damping: F,
    /// Fraction of velocity kept when bouncing off a bound. Default: 0.5.
    pub bounce: F,
    /// Links stretched beyond this distance tear. Default: 60.
    pub tear_distance: F,
    /// Multiplier on pointer motion when dragging. Default: 1.0.
    pub drag_factor: F,
    /// Primary-button drag radius around the pointer. Default: 26.
    pub influence_radius: F,
    /// Secondary-button cut radius around the pointer. Default: 8.
    pub cut_radius: F,
    /// Optional quantization of the force accumulator (steps of `1 / r`).
    pub force_resolution: Option<F>,
    pub bounds_mode: BoundsMode,
    pub correction: Correction,
}

impl<F: Float> ClothConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        ClothConfig {
            iterations: 5,
            gravity: Vec2::new(F::zero(), F::from_f32(400.0)),
            damping: F::from_f32(0.99),
            bounce: F::half(),
            tear_distance: F::from_f32(60.0),
            drag_factor: F::one(),
            influence_radius: F::from_f32(26.0),
            cut_radius: F::from_f32(8.0),
            force_resolution: None,
            bounds_mode: BoundsMode::Bounce,
            correction: Correction::Eased,
        }
    }

    /// The older, simpler tuning: fewer passes, heavier gravity, amplified
    /// drag, quantized forces, mirrored bounds and full-strength correction.
    ///
    /// That variant accumulated 1200 and applied half of it, so gravity here
    /// is the effective 600.
    pub fn classic() -> Self {
        ClothConfig {
            iterations: 3,
            gravity: Vec2::new(F::zero(), F::from_f32(600.0)),
            drag_factor: F::from_f32(1.8),
            influence_radius: F::from_f32(20.0),
            cut_radius: F::from_f32(5.0),
            force_resolution: Some(F::from_f32(400.0)),
            bounds_mode: BoundsMode::Mirror,
            correction: Correction::Full,
            ..Self::new()
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_bounce(mut self, bounce: F) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn with_tear_distance(mut self, tear_distance: F) -> Self {
        self.tear_distance = tear_distance;
        self
    }

    pub fn with_drag_factor(mut self, drag_factor: F) -> Self {
        self.drag_factor = drag_factor;
        self
    }

    pub fn with_influence_radius(mut self, radius: F) -> Self {
        self.influence_radius = radius;
        self
    }

    pub fn with_cut_radius(mut self, radius: F) -> Self {
        self.cut_radius = radius;
        self
    }

    pub fn with_force_resolution(mut self, resolution: Option<F>) -> Self {
        self.force_resolution = resolution;
        self
    }

    pub fn with_bounds_mode(mut self, mode: BoundsMode) -> Self {
        self.bounds_mode = mode;
        self
    }

    pub fn with_correction(mut self, correction: Correction) -> Self {
        self.correction = correction;
        self
    }

    /// Reject non-finite or negative tunables.
    pub fn validate(&self) -> Result<(), ClothError> {
        if self.iterations == 0 {
            return Err(ClothError::InvalidIterations);
        }
        if !self.gravity.is_finite() {
            return Err(ClothError::InvalidParameter { name: "gravity" });
        }
        let non_negative = [
            ("damping", self.damping),
            ("bounce", self.bounce),
            ("drag_factor", self.drag_factor),
            ("influence_radius", self.influence_radius),
            ("cut_radius", self.cut_radius),
        ];
        for (name, value) in non_negative {
            if !value.is_finite_non_negative() {
                return Err(ClothError::InvalidParameter { name });
            }
        }
        if !self.tear_distance.is_finite_positive() {
            return Err(ClothError::InvalidParameter { name: "tear_distance" });
        }
        if let Some(resolution) = self.force_resolution {
            if !resolution.is_finite_positive() {
                return Err(ClothError::InvalidParameter { name: "force_resolution" });
            }
        }
        Ok(())
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shape of the cloth at construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig<F: Float> {
    /// Links per row; the grid has `cols + 1` points across.
    pub cols: usize,
    /// Links per column; the grid has `rows + 1` points down.
    pub rows: usize,
    /// Rest length of every link.
    pub spacing: F,
    /// Vertical offset of the pinned top row.
    pub start_y: F,
}

impl<F: Float> GridConfig<F> {
    pub fn new(cols: usize, rows: usize, spacing: F) -> Self {
        GridConfig { cols, rows, spacing, start_y: F::from_f32(20.0) }
    }

    pub fn with_start_y(mut self, start_y: F) -> Self {
        self.start_y = start_y;
        self
    }

    /// A single row (`rows == 0`) is a valid, fully pinned strip.
    pub fn validate(&self) -> Result<(), ClothError> {
        if self.cols == 0 {
            return Err(ClothError::InvalidGridDimensions);
        }
        if !self.spacing.is_finite_positive() {
            return Err(ClothError::InvalidSpacing);
        }
        if !self.start_y.is_finite() {
            return Err(ClothError::InvalidParameter { name: "start_y" });
        }
        Ok(())
    }
}

impl<F: Float> Default for GridConfig<F> {
    fn default() -> Self {
        GridConfig::new(54, 28, F::from_f32(8.0))
    }
}

/// Drawable area; also the box points are confined to.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport<F: Float> {
    pub width: F,
    pub height: F,
}

impl<F: Float> Viewport<F> {
    pub fn new(width: F, height: F) -> Self {
        Viewport { width, height }
    }

    pub fn validate(&self) -> Result<(), ClothError> {
        if self.width.is_finite_positive() && self.height.is_finite_positive() {
            Ok(())
        } else {
            Err(ClothError::InvalidViewport)
        }
    }

    pub fn min(&self) -> Vec2<F> {
        Vec2::zero()
    }

    pub fn max(&self) -> Vec2<F> {
        Vec2::new(self.width, self.height)
    }
}
