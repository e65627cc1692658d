//! Event dispatcher for Windows.
//!
//! Runs on `WM_TIMER`. Handles are copied out of the thread-local before
//! each Win32 call because calls like `DestroyWindow` re-enter the window
//! procedure synchronously.

use tracing::trace;
use windows::Win32::UI::WindowsAndMessaging::DestroyWindow;

use crate::events::{drain_events, AppEvent};
use crate::platform::windows::app::state;
use crate::platform::windows::ui;

/// Dispatch pending events from the event bus.
///
/// # Safety
/// Must be called from the GUI thread.
pub unsafe fn dispatch_events() {
    for event in drain_events() {
        trace!("dispatch: {}", event.description());
        let handles = state::handles();
        match event {
            AppEvent::ButtonClicked | AppEvent::QuitRequested => {
                state::with_controller(|controller| controller.handle_event(&event));
            }
            AppEvent::MoveButton(origin) => ui::move_button(handles.button, origin),
            AppEvent::SetButtonActive(active) => {
                state::set_button_active_flag(active);
                ui::redraw_button(handles.button);
            }
            AppEvent::ReinforceTopmost => ui::reinforce_topmost(handles.hwnd),
            AppEvent::Quit => {
                let _ = DestroyWindow(handles.hwnd);
                return;
            }
        }
    }
}
