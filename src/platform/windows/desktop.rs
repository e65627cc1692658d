//! [`Desktop`] for Windows.

use crate::desktop::{Desktop, UiCommands};
use crate::error::{PlatformError, PlatformResult};
use crate::events::EventPublisher;
use crate::model::Point;
use crate::power::SleepInhibitor;

use super::app::state::main_hwnd;
use super::input::mouse;
use super::ui;

pub struct WindowsDesktop {
    ui: UiCommands,
    power: SleepInhibitor,
}

impl WindowsDesktop {
    pub fn new(publisher: EventPublisher) -> Self {
        Self {
            ui: UiCommands::new(publisher),
            power: SleepInhibitor::new(),
        }
    }
}

impl Desktop for WindowsDesktop {
    fn set_cursor_pos(&self, pos: Point) -> PlatformResult<()> {
        mouse::set_cursor_pos(pos)
    }

    fn cursor_pos(&self) -> PlatformResult<Point> {
        mouse::cursor_pos()
    }

    fn click(&self) -> PlatformResult<()> {
        mouse::click()
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
        let hwnd = main_hwnd().ok_or(PlatformError::WindowNotReady)?;
        ui::client_to_screen(hwnd, client)
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
