//! Input handling for Windows (hotkeys, synthetic mouse input).

pub mod hotkeys;
pub mod mouse;

pub use hotkeys::{register_quit_hotkey, unregister_quit_hotkey, HOTKEY_QUIT, TIMER_DISPATCH};
