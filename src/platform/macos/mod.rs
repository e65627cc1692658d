//! macOS implementation using AppKit via objc2 and Core Graphics.
//!
//! - `app`: NSApplication setup, delegate class, dispatch timer
//! - `window`: NSWindow + NSButton, coordinate flips
//! - `input`: cursor warp, cursor position, synthetic clicks
//! - `desktop`: the [`Desktop`](crate::desktop::Desktop) implementation

pub mod app;
pub mod desktop;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod window;

pub use app::{run, set_app_icon};
pub use desktop::MacDesktop;
