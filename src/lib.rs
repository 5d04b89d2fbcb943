//! Tearable Verlet cloth for interactive 2D scenes.
//!
//! `tatter` simulates a hanging sheet of point masses joined by distance
//! links. Each frame relaxes the links, integrates the points under gravity
//! and pointer input, and hands the surviving links to a render sink.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Relaxation solver**: Stretch-only distance links, iterated per step
//! - **Tearing**: Links over-stretched past a threshold detach for good
//! - **Pointer interaction**: Primary button drags, any other button cuts
//! - **Bounds**: Bounce or mirror points back into the viewport
//! - **Observable**: Monitor relaxation, tears and cuts via `StepObserver`
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use tatter::{ClothConfig, ClothGrid, FrameDriver, GridConfig, NoOpStepObserver,
//!              PointerTracker, SegmentBuffer, Viewport};
//!
//! let mut cloth = ClothGrid::new(
//!     &GridConfig::new(20, 10, 8.0),
//!     ClothConfig::new(),
//!     Viewport::new(640.0f32, 480.0),
//! ).unwrap();
//! let mut driver = FrameDriver::default();
//! let pointer = PointerTracker::new();
//! let mut segments = SegmentBuffer::new();
//!
//! driver.frame(&mut cloth, 0.016, pointer.state(), &mut segments, &mut NoOpStepObserver);
//! assert_eq!(segments.len(), cloth.link_count());
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod link;
pub mod grid;
pub mod interaction;
pub mod render;
pub mod driver;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point::{Point, Interaction};
pub use link::{Link, LinkId, Resolution};
pub use grid::ClothGrid;
pub use interaction::{PointerButton, PointerState, PointerTracker};
pub use render::{RenderSink, SegmentBuffer};
pub use driver::{FrameDriver, Timestep};
pub use config::{BoundsMode, ClothConfig, Correction, GridConfig, Viewport};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::ClothError;
