//! Windows implementation using the Win32 API through `windows-rs`.
//!
//! - `app`: window class, message loop, runtime state
//! - `ui`: window and owner-drawn button, GDI resources
//! - `input`: Ctrl+Q hotkey, cursor and `SendInput` clicks
//! - `icon`: HICON from PNG pixels
//! - `desktop`: the [`Desktop`](crate::desktop::Desktop) implementation

pub mod app;
pub mod desktop;
pub mod handlers;
pub mod icon;
pub mod input;
pub mod ui;

pub use app::{run, set_app_icon};
pub use desktop::WindowsDesktop;
