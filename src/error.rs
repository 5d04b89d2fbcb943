//! Error types for cloth construction and configuration.

use core::fmt;

/// Errors raised when building or reconfiguring a cloth.
///
/// Stepping a valid cloth never fails; every variant here is a rejected
/// precondition.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid must have at least one column of links. Zero rows is a single
    /// pinned strip and is allowed.
    InvalidGridDimensions,
    /// Spacing between points must be positive and finite.
    InvalidSpacing,
    /// Viewport width and height must be positive and finite.
    InvalidViewport,
    /// At least one relaxation iteration is required.
    InvalidIterations,
    /// A tunable is negative, zero where it must not be, or not finite.
    InvalidParameter { name: &'static str },
    /// Frame timestep must be positive and finite.
    InvalidTimestep,
    /// Point index is out of bounds.
    PointOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions => write!(f, "grid needs at least 1 column"),
            ClothError::InvalidSpacing => write!(f, "spacing must be positive and finite"),
            ClothError::InvalidViewport => write!(f, "viewport size must be positive and finite"),
            ClothError::InvalidIterations => write!(f, "iterations must be at least 1"),
            ClothError::InvalidParameter { name } => write!(f, "invalid value for `{}`", name),
            ClothError::InvalidTimestep => write!(f, "timestep must be positive and finite"),
            ClothError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
