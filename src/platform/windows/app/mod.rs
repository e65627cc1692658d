//! Windows application lifecycle: window setup, message loop, shutdown.

pub mod state;

use std::sync::Arc;

use tracing::{debug, info, warn};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Controls::DRAWITEMSTRUCT;
use windows::Win32::UI::WindowsAndMessaging::{
    DefWindowProcW, DispatchMessageW, GetMessageW, KillTimer, PostQuitMessage,
    SetProcessDPIAware, SetTimer, TranslateMessage, BN_CLICKED, HICON, MSG, WM_CLOSE, WM_COMMAND,
    WM_DESTROY, WM_DRAWITEM, WM_ERASEBKGND, WM_HOTKEY, WM_TIMER,
};

use crate::controller::Controller;
use crate::error::{PlatformError, PlatformResult};
use crate::events::{self, publish, AppEvent};
use crate::icon::IconImage;
use crate::model::constants::DISPATCH_INTERVAL_MS;
use crate::platform::windows::desktop::WindowsDesktop;
use crate::platform::windows::handlers::dispatch_events;
use crate::platform::windows::icon::{apply_window_icon, create_hicon, destroy_icon};
use crate::platform::windows::input::{
    register_quit_hotkey, unregister_quit_hotkey, HOTKEY_QUIT, TIMER_DISPATCH,
};
use crate::platform::windows::ui::{self, create_gdi_resources, delete_gdi_resources, BUTTON_ID};
use crate::platform::RunOptions;

use state::UiHandles;

/// Main entry point for Windows. Blocks until the window is destroyed.
pub fn run(options: RunOptions) -> PlatformResult<()> {
    events::init_event_bus();
    let publisher = events::publisher()
        .ok_or_else(|| PlatformError::Window("event bus unavailable".into()))?;

    unsafe {
        let _ = SetProcessDPIAware();

        let instance: HINSTANCE = GetModuleHandleW(None)
            .map_err(|e| PlatformError::Window(format!("GetModuleHandleW failed: {e}")))?
            .into();

        let gdi = create_gdi_resources();
        let icon = initial_icon(&options.icon_png);

        let hwnd = ui::create_main_window(instance, Some(wndproc), gdi.brush_background, icon)?;
        state::set_handles(UiHandles {
            hwnd,
            button: HWND::default(),
            font: gdi.font,
            brush_background: gdi.brush_background,
            brush_idle: gdi.brush_idle,
            brush_active: gdi.brush_active,
            icon,
        });
        if !icon.is_invalid() {
            apply_window_icon(hwnd, icon);
        }

        let button = ui::create_button(hwnd, instance)?;
        state::update_handles(|h| h.button = button);

        if let Err(e) = register_quit_hotkey(hwnd) {
            warn!("{e}; Ctrl+Q will only work through the close button");
        }

        let desktop = Arc::new(WindowsDesktop::new(publisher));
        state::install_controller(Controller::new(desktop, options.settings));

        SetTimer(Some(hwnd), TIMER_DISPATCH, DISPATCH_INTERVAL_MS, None);
        ui::show(hwnd);

        info!("entering message loop");
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        if let Some(controller) = state::take_controller() {
            controller.shutdown();
        }
        let handles = state::handles();
        delete_gdi_resources(&handles);
        destroy_icon(handles.icon);
    }
    info!("message loop finished");
    Ok(())
}

/// Decode the configured icon, logging and skipping it on failure.
fn initial_icon(png: &[u8]) -> HICON {
    if png.is_empty() {
        return HICON::default();
    }
    match IconImage::from_png(png).map_err(PlatformError::from).and_then(|img| create_hicon(&img)) {
        Ok(icon) => icon,
        Err(e) => {
            warn!("could not set application icon: {e}");
            HICON::default()
        }
    }
}

/// Replace the window icon with one decoded from `png`.
///
/// Must be called on the GUI thread after the window exists.
pub fn set_app_icon(png: &[u8]) -> PlatformResult<()> {
    let image = IconImage::from_png(png)?;
    let hwnd = state::main_hwnd().ok_or(PlatformError::WindowNotReady)?;
    let icon = create_hicon(&image)?;
    apply_window_icon(hwnd, icon);

    let previous = state::handles().icon;
    state::update_handles(|h| h.icon = icon);
    destroy_icon(previous);
    Ok(())
}

fn loword(value: usize) -> usize {
    value & 0xFFFF
}

fn hiword(value: usize) -> usize {
    (value >> 16) & 0xFFFF
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_ERASEBKGND => {
                ui::erase_background(hwnd, wparam, &state::handles());
                LRESULT(1)
            }

            WM_DRAWITEM => {
                let item = &*(lparam.0 as *const DRAWITEMSTRUCT);
                ui::draw_button(item, &state::handles(), state::button_active());
                LRESULT(1)
            }

            WM_COMMAND => {
                if hiword(wparam.0) == BN_CLICKED as usize && loword(wparam.0) == BUTTON_ID {
                    publish(AppEvent::ButtonClicked);
                }
                LRESULT(0)
            }

            WM_HOTKEY => {
                if wparam.0 as i32 == HOTKEY_QUIT {
                    publish(AppEvent::QuitRequested);
                }
                LRESULT(0)
            }

            WM_TIMER => {
                if wparam.0 == TIMER_DISPATCH {
                    dispatch_events();
                }
                LRESULT(0)
            }

            // The close button stops the loop the same way Ctrl+Q does
            WM_CLOSE => {
                publish(AppEvent::QuitRequested);
                LRESULT(0)
            }

            WM_DESTROY => {
                debug!("main window destroyed");
                let _ = KillTimer(Some(hwnd), TIMER_DISPATCH);
                unregister_quit_hotkey(hwnd);
                state::clear_main_hwnd();
                PostQuitMessage(0);
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_word_split() {
        let wparam = (BN_CLICKED as usize) << 16 | BUTTON_ID;
        assert_eq!(loword(wparam), BUTTON_ID);
        assert_eq!(hiword(wparam), BN_CLICKED as usize);
    }
}
