//! FFI bindings for macOS frameworks.

pub mod accessibility;
pub mod bridge;
pub mod types;

pub use accessibility::*;
pub use types::*;
