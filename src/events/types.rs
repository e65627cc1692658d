//! Application events for inter-thread communication.
//!
//! Events flow in two directions over the same bus:
//! - GUI callbacks (button action, quit shortcut) notify the controller
//! - the alive worker asks the GUI thread to mutate the window
//!
//! This module is pure Rust with no FFI dependencies, making it fully testable.

use crate::model::Point;

/// Application-level events drained by the GUI thread's dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Input Events ===
    /// The Alive button was clicked (by the user or by a synthetic click)
    ButtonClicked,

    /// Quit shortcut pressed (Cmd+Q / Ctrl+Q)
    QuitRequested,

    // === UI Commands ===
    /// Move the button to the given client-area origin
    MoveButton(Point),

    /// Switch the button between idle and active appearance
    SetButtonActive(bool),

    /// Re-assert the window's always-on-top level
    ReinforceTopmost,

    /// Terminate the GUI event loop
    Quit,
}

impl AppEvent {
    /// Returns true if this event mutates native UI state and must run on
    /// the GUI thread.
    pub fn is_ui_command(&self) -> bool {
        matches!(
            self,
            AppEvent::MoveButton(_)
                | AppEvent::SetButtonActive(_)
                | AppEvent::ReinforceTopmost
                | AppEvent::Quit
        )
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::ButtonClicked => "Alive button clicked",
            AppEvent::QuitRequested => "Quit shortcut pressed",
            AppEvent::MoveButton(_) => "Move button",
            AppEvent::SetButtonActive(_) => "Change button appearance",
            AppEvent::ReinforceTopmost => "Reinforce topmost",
            AppEvent::Quit => "Quit application",
        }
    }
}
