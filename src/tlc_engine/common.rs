//! Common utilities module
//!
//! Error type and the small shape types shared by geometry, layout and hit-testing.

pub mod error;
pub mod shapes;

pub use error::{EngineError, Result};
pub use shapes::{Point, Rect, RectF};
