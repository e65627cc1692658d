//! Global hotkeys and timers for Windows.

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{RegisterHotKey, UnregisterHotKey, MOD_CONTROL};

use crate::error::{PlatformError, PlatformResult};

// Hotkey IDs
pub const HOTKEY_QUIT: i32 = 1;

/// Virtual-key code of `Q`.
const VK_Q: u32 = 0x51;

// Timer IDs
pub const TIMER_DISPATCH: usize = 1;

/// Register Ctrl+Q as a system-wide quit shortcut.
pub fn register_quit_hotkey(hwnd: HWND) -> PlatformResult<()> {
    unsafe { RegisterHotKey(Some(hwnd), HOTKEY_QUIT, MOD_CONTROL, VK_Q) }
        .map_err(|e| PlatformError::Window(format!("RegisterHotKey(Ctrl+Q) failed: {e}")))
}

pub fn unregister_quit_hotkey(hwnd: HWND) {
    unsafe {
        let _ = UnregisterHotKey(Some(hwnd), HOTKEY_QUIT);
    }
}
