//! Main window and button creation.

use std::ffi::c_void;

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HINSTANCE, HWND, POINT, RECT};
use windows::Win32::Graphics::Gdi::{ClientToScreen, InvalidateRect, UpdateWindow, HBRUSH};
use windows::Win32::UI::WindowsAndMessaging::{
    AdjustWindowRectEx, CreateWindowExW, LoadCursorW, MoveWindow, RegisterClassW, SetWindowPos,
    ShowWindow, SystemParametersInfoW, BS_OWNERDRAW, CS_HREDRAW, CS_VREDRAW, HICON, HMENU,
    HWND_TOPMOST, IDC_ARROW, SPI_GETWORKAREA, SWP_NOMOVE, SWP_NOSIZE, SW_SHOW,
    SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS, WINDOW_EX_STYLE, WINDOW_STYLE, WNDCLASSW, WNDPROC,
    WS_CAPTION, WS_CHILD, WS_EX_TOPMOST, WS_SYSMENU, WS_TABSTOP, WS_VISIBLE,
};

use crate::error::{PlatformError, PlatformResult};
use crate::model::constants::*;
use crate::model::geometry::centered_origin;
use crate::model::{Point, Size};

use super::drawing::to_wide;

/// Control ID of the button, reported in `WM_COMMAND`.
pub const BUTTON_ID: usize = 1;

const WINDOW_STYLE_MAIN: WINDOW_STYLE = WINDOW_STYLE(WS_CAPTION.0 | WS_SYSMENU.0);
const WINDOW_EX_STYLE_MAIN: WINDOW_EX_STYLE = WS_EX_TOPMOST;

/// Register the window class and create the main window centred in the
/// work area, sized so the client area is exactly 300×300.
///
/// # Safety
/// Must be called from the GUI thread.
pub unsafe fn create_main_window(
    instance: HINSTANCE,
    wndproc: WNDPROC,
    background: HBRUSH,
    icon: HICON,
) -> PlatformResult<HWND> {
    let class_name = w!("KeepAliveClass");
    let wc = WNDCLASSW {
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: wndproc,
        hInstance: instance,
        hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
        hbrBackground: background,
        hIcon: icon,
        lpszClassName: class_name,
        ..Default::default()
    };
    if RegisterClassW(&wc) == 0 {
        return Err(PlatformError::Window("RegisterClassW failed".into()));
    }

    let mut frame = RECT {
        left: 0,
        top: 0,
        right: CLIENT_W,
        bottom: CLIENT_H,
    };
    AdjustWindowRectEx(&mut frame, WINDOW_STYLE_MAIN, false, WINDOW_EX_STYLE_MAIN)
        .map_err(|e| PlatformError::Window(format!("AdjustWindowRectEx failed: {e}")))?;
    let outer = Size::new(frame.right - frame.left, frame.bottom - frame.top);
    let origin = work_area_origin(outer);

    let title = to_wide(TITLE_WINDOWS);
    CreateWindowExW(
        WINDOW_EX_STYLE_MAIN,
        class_name,
        PCWSTR(title.as_ptr()),
        WINDOW_STYLE_MAIN | WS_VISIBLE,
        origin.x,
        origin.y,
        outer.width,
        outer.height,
        None,
        None,
        Some(instance),
        None,
    )
    .map_err(|e| PlatformError::Window(format!("CreateWindowExW failed: {e}")))
}

/// Centre `outer` in the primary monitor's work area.
unsafe fn work_area_origin(outer: Size) -> Point {
    let mut wa = RECT::default();
    let ok = SystemParametersInfoW(
        SPI_GETWORKAREA,
        0,
        Some(&mut wa as *mut RECT as *mut c_void),
        SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
    );
    if ok.is_err() {
        return Point::new(0, 0);
    }
    centered_origin(
        Point::new(wa.left, wa.top),
        Size::new(wa.right - wa.left, wa.bottom - wa.top),
        outer,
    )
}

/// Create the owner-drawn button at the centre of the client area.
///
/// # Safety
/// `parent` must be a live window on the calling thread.
pub unsafe fn create_button(parent: HWND, instance: HINSTANCE) -> PlatformResult<HWND> {
    let label = to_wide(LABEL_IDLE);
    CreateWindowExW(
        WINDOW_EX_STYLE(0),
        w!("BUTTON"),
        PCWSTR(label.as_ptr()),
        WS_CHILD | WS_VISIBLE | WS_TABSTOP | WINDOW_STYLE(BS_OWNERDRAW as u32),
        BUTTON_START.x,
        BUTTON_START.y,
        BUTTON_SIZE.width,
        BUTTON_SIZE.height,
        Some(parent),
        Some(HMENU(BUTTON_ID as *mut c_void)),
        Some(instance),
        None,
    )
    .map_err(|e| PlatformError::Window(format!("button creation failed: {e}")))
}

/// # Safety
/// GUI thread only.
pub unsafe fn show(hwnd: HWND) {
    let _ = ShowWindow(hwnd, SW_SHOW);
    let _ = UpdateWindow(hwnd);
}

/// # Safety
/// GUI thread only.
pub unsafe fn move_button(button: HWND, origin: Point) {
    let _ = MoveWindow(
        button,
        origin.x,
        origin.y,
        BUTTON_SIZE.width,
        BUTTON_SIZE.height,
        true,
    );
}

/// Schedule a repaint of the button.
///
/// # Safety
/// GUI thread only.
pub unsafe fn redraw_button(button: HWND) {
    let _ = InvalidateRect(Some(button), None, true);
}

/// # Safety
/// GUI thread only.
pub unsafe fn reinforce_topmost(hwnd: HWND) {
    let _ = SetWindowPos(hwnd, Some(HWND_TOPMOST), 0, 0, 0, 0, SWP_NOMOVE | SWP_NOSIZE);
}

/// Client to screen coordinates. Safe to call from any thread.
pub fn client_to_screen(hwnd: HWND, client: Point) -> PlatformResult<Point> {
    let mut pt = POINT {
        x: client.x,
        y: client.y,
    };
    let ok = unsafe { ClientToScreen(hwnd, &mut pt) };
    if !ok.as_bool() {
        return Err(PlatformError::Window("ClientToScreen failed".into()));
    }
    Ok(Point::new(pt.x, pt.y))
}
