//! Windows runtime state.
//!
//! Native handles live in a thread-local on the GUI thread. The main window
//! handle is also mirrored in an atomic so worker threads can call
//! `ClientToScreen` without touching the thread-local.

use std::cell::{Cell, RefCell};
use std::ffi::c_void;
use std::sync::atomic::{AtomicIsize, Ordering};

use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{HBRUSH, HFONT};
use windows::Win32::UI::WindowsAndMessaging::HICON;

use crate::controller::Controller;

/// GDI objects and window handles. All fields are plain handles and `Copy`,
/// so callers copy them out instead of holding a borrow across Win32 calls
/// that may re-enter the window procedure.
#[derive(Clone, Copy, Default)]
pub struct UiHandles {
    pub hwnd: HWND,
    pub button: HWND,
    pub font: HFONT,
    pub brush_background: HBRUSH,
    pub brush_idle: HBRUSH,
    pub brush_active: HBRUSH,
    pub icon: HICON,
}

thread_local! {
    static HANDLES: Cell<UiHandles> = Cell::new(UiHandles::default());

    /// Whether the button currently shows the active appearance.
    static BUTTON_ACTIVE: Cell<bool> = const { Cell::new(false) };

    static CONTROLLER: RefCell<Option<Controller>> = const { RefCell::new(None) };
}

/// Main window handle, readable from any thread.
static MAIN_HWND: AtomicIsize = AtomicIsize::new(0);

pub fn handles() -> UiHandles {
    HANDLES.with(Cell::get)
}

pub fn set_handles(handles: UiHandles) {
    HANDLES.with(|h| h.set(handles));
    MAIN_HWND.store(handles.hwnd.0 as isize, Ordering::SeqCst);
}

pub fn update_handles(f: impl FnOnce(&mut UiHandles)) {
    let mut current = handles();
    f(&mut current);
    set_handles(current);
}

/// The main window, or `None` before creation and after destruction.
pub fn main_hwnd() -> Option<HWND> {
    match MAIN_HWND.load(Ordering::SeqCst) {
        0 => None,
        raw => Some(HWND(raw as *mut c_void)),
    }
}

pub fn clear_main_hwnd() {
    MAIN_HWND.store(0, Ordering::SeqCst);
}

pub fn button_active() -> bool {
    BUTTON_ACTIVE.with(Cell::get)
}

pub fn set_button_active_flag(active: bool) {
    BUTTON_ACTIVE.with(|a| a.set(active));
}

pub fn install_controller(controller: Controller) {
    CONTROLLER.with(|c| *c.borrow_mut() = Some(controller));
}

pub fn take_controller() -> Option<Controller> {
    CONTROLLER.with(|c| c.borrow_mut().take())
}

/// Run `f` with the controller if it is installed and not already borrowed.
pub fn with_controller<R>(f: impl FnOnce(&Controller) -> R) -> Option<R> {
    CONTROLLER.with(|c| match c.try_borrow() {
        Ok(controller) => controller.as_ref().map(f),
        Err(_) => None,
    })
}
