//! Cursor control and synthetic clicks.

use std::mem::size_of;

use windows::Win32::Foundation::POINT;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_MOUSE, MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP,
    MOUSE_EVENT_FLAGS, MOUSEINPUT,
};
use windows::Win32::UI::WindowsAndMessaging::{GetCursorPos, SetCursorPos};

use crate::error::{PlatformError, PlatformResult};
use crate::model::Point;

pub fn set_cursor_pos(pos: Point) -> PlatformResult<()> {
    unsafe { SetCursorPos(pos.x, pos.y) }
        .map_err(|e| PlatformError::Input(format!("SetCursorPos failed: {e}")))
}

pub fn cursor_pos() -> PlatformResult<Point> {
    let mut pt = POINT::default();
    unsafe { GetCursorPos(&mut pt) }
        .map_err(|e| PlatformError::Input(format!("GetCursorPos failed: {e}")))?;
    Ok(Point::new(pt.x, pt.y))
}

fn mouse_input(flags: MOUSE_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dwFlags: flags,
                ..Default::default()
            },
        },
    }
}

/// Left button down then up at the current cursor position.
pub fn click() -> PlatformResult<()> {
    let inputs = [
        mouse_input(MOUSEEVENTF_LEFTDOWN),
        mouse_input(MOUSEEVENTF_LEFTUP),
    ];
    let sent = unsafe { SendInput(&inputs, size_of::<INPUT>() as i32) };
    if sent as usize != inputs.len() {
        return Err(PlatformError::Input(format!(
            "SendInput injected {sent} of {} events",
            inputs.len()
        )));
    }
    Ok(())
}
