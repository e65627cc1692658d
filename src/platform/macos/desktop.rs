//! [`Desktop`] for macOS.

use crate::desktop::{Desktop, UiCommands};
use crate::error::PlatformResult;
use crate::events::EventPublisher;
use crate::model::Point;
use crate::power::SleepInhibitor;

use super::input;
use super::window::current_geometry;

pub struct MacDesktop {
    ui: UiCommands,
    power: SleepInhibitor,
}

impl MacDesktop {
    pub fn new(publisher: EventPublisher) -> Self {
        Self {
            ui: UiCommands::new(publisher),
            power: SleepInhibitor::new(),
        }
    }
}

impl Desktop for MacDesktop {
    fn set_cursor_pos(&self, pos: Point) -> PlatformResult<()> {
        input::set_cursor_pos(pos)
    }

    fn cursor_pos(&self) -> PlatformResult<Point> {
        input::cursor_pos()
    }

    fn click(&self) -> PlatformResult<()> {
        input::click()
    }

    fn prevent_sleep(&self) -> PlatformResult<()> {
        self.power.prevent()
    }

    fn allow_sleep(&self) {
        self.power.allow();
    }

    fn move_button(&self, origin: Point) {
        self.ui.move_button(origin);
    }

    fn client_to_screen(&self, client: Point) -> PlatformResult<Point> {
        Ok(current_geometry()?.client_to_screen(client))
    }

    fn set_button_active(&self, active: bool) {
        self.ui.set_button_active(active);
    }

    fn reinforce_topmost(&self) {
        self.ui.reinforce_topmost();
    }

    fn quit(&self) {
        self.ui.quit();
    }
}
