//! The native desktop boundary.
//!
//! Each platform backend implements [`Desktop`]; the alive loop and the
//! controller only ever talk to this trait, which keeps them testable with
//! a recording mock.

use crate::error::PlatformResult;
use crate::events::{AppEvent, EventPublisher};
use crate::model::Point;

/// Operations the alive loop needs from the host desktop.
///
/// Coordinates are integer pixels with a top-left origin. Every method may
/// be called from any thread.
pub trait Desktop: Send + Sync {
    /// Warp the cursor to `pos` (global screen coordinates).
    fn set_cursor_pos(&self, pos: Point) -> PlatformResult<()>;

    /// Current cursor position (global screen coordinates).
    fn cursor_pos(&self) -> PlatformResult<Point>;

    /// Left-button press and release at the current cursor position.
    fn click(&self) -> PlatformResult<()>;

    /// Hold a power assertion that keeps the display awake. Idempotent.
    fn prevent_sleep(&self) -> PlatformResult<()>;

    /// Release the power assertion if held. Idempotent.
    fn allow_sleep(&self);

    /// Move the button to `origin` (client coordinates). Applied
    /// asynchronously on the GUI thread.
    fn move_button(&self, origin: Point);

    /// Convert a client point to global screen coordinates.
    fn client_to_screen(&self, client: Point) -> PlatformResult<Point>;

    /// Switch the button between idle and active appearance. Asynchronous.
    fn set_button_active(&self, active: bool);

    /// Re-assert the window's always-on-top level. Asynchronous.
    fn reinforce_topmost(&self);

    /// Terminate the GUI event loop. Asynchronous.
    fn quit(&self);
}

/// The asynchronous half of [`Desktop`], shared by both backends: UI
/// commands are published on the event bus and applied by the GUI thread.
#[derive(Clone)]
pub struct UiCommands {
    publisher: EventPublisher,
}

impl UiCommands {
    pub fn new(publisher: EventPublisher) -> Self {
        Self { publisher }
    }

    pub fn move_button(&self, origin: Point) {
        self.publisher.publish(AppEvent::MoveButton(origin));
    }

    pub fn set_button_active(&self, active: bool) {
        self.publisher.publish(AppEvent::SetButtonActive(active));
    }

    pub fn reinforce_topmost(&self) {
        self.publisher.publish(AppEvent::ReinforceTopmost);
    }

    pub fn quit(&self) {
        self.publisher.publish(AppEvent::Quit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;

    #[test]
    fn ui_commands_publish_matching_events() {
        let bus = EventBus::new();
        let ui = UiCommands::new(bus.publisher());

        ui.move_button(Point::new(210, 260));
        ui.set_button_active(true);
        ui.reinforce_topmost();
        ui.quit();

        assert_eq!(
            bus.drain(),
            vec![
                AppEvent::MoveButton(Point::new(210, 260)),
                AppEvent::SetButtonActive(true),
                AppEvent::ReinforceTopmost,
                AppEvent::Quit,
            ]
        );
    }
}
