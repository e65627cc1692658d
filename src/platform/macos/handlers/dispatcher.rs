//! Event dispatcher for the macOS GUI thread.
//!
//! Called from the dispatch timer. Drains the global bus and turns each
//! event into either a controller call or a window mutation.
//!
//! ```text
//! drain_events() → dispatch_events() → Controller / MainWindow
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::trace;

use crate::controller::Controller;
use crate::events::{drain_events, AppEvent};
use crate::platform::macos::window::MainWindow;

/// Guard against re-entrant ticks while a batch is being processed.
static DISPATCH_GUARD: AtomicBool = AtomicBool::new(false);

/// What the caller must do after a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Continue,
    Terminate,
}

/// Dispatch all pending events from the global event bus.
///
/// # Safety
///
/// Must be called from the main thread.
pub unsafe fn dispatch_events(window: &MainWindow, controller: &Controller) -> DispatchOutcome {
    if DISPATCH_GUARD
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return DispatchOutcome::Continue;
    }

    let mut outcome = DispatchOutcome::Continue;
    for event in drain_events() {
        trace!("dispatch: {}", event.description());
        if dispatch_single_event(window, controller, &event) == DispatchOutcome::Terminate {
            outcome = DispatchOutcome::Terminate;
            break;
        }
    }

    window.refresh_geometry();

    DISPATCH_GUARD.store(false, Ordering::SeqCst);
    outcome
}

/// # Safety
///
/// Must be called from the main thread.
unsafe fn dispatch_single_event(
    window: &MainWindow,
    controller: &Controller,
    event: &AppEvent,
) -> DispatchOutcome {
    match event {
        AppEvent::ButtonClicked | AppEvent::QuitRequested => controller.handle_event(event),
        AppEvent::MoveButton(origin) => window.move_button(*origin),
        AppEvent::SetButtonActive(active) => window.set_button_active(*active),
        AppEvent::ReinforceTopmost => window.reinforce_topmost(),
        AppEvent::Quit => return DispatchOutcome::Terminate,
    }
    DispatchOutcome::Continue
}
