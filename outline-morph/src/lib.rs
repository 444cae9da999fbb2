//! Shape morphing between closed vector outlines.
//!
//! Outlines are resampled by arc length into fixed-size point sets, given a
//! common winding, rotated into best correspondence and blended frame by
//! frame. The crate only produces path data; drawing is up to the host.

pub mod align;
pub mod easing;
pub mod engine;
pub mod error;
pub mod interpolate;
pub mod library;
pub mod outline;
pub mod point_set;
pub mod sampler;
pub mod shapes;
pub mod winding;

pub use engine::{Frame, MorphConfig, MorphEngine, Renderer, RestartFrom};
pub use error::{MorphError, Result};
pub use library::{Direction, ShapeLibrary};
pub use outline::Outline;
pub use point_set::PointSet;
pub use winding::Winding;
