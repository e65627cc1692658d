//! UI components for Windows.

pub mod drawing;
pub mod window;

pub use drawing::*;
pub use window::*;
