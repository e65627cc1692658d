//! Application domain model.
//!
//! This module contains pure geometry and layout (no FFI dependencies):
//! the window/button layout constants and the coordinate helpers the
//! platform backends share.

pub mod constants;
pub mod geometry;

pub use constants::*;
pub use geometry::{Point, RectF, Size};
