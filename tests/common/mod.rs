//! Shared test doubles for the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use keepalive::config::{MotionSettings, Settings, TimingSettings};
use keepalive::motion::MotionStyle;
use keepalive::{ActiveFlag, Desktop, PlatformError, PlatformResult, Point};

/// Offset `client_to_screen` adds to every client point.
pub const WINDOW_ORIGIN: Point = Point::new(100, 200);

/// One recorded call on [`MockDesktop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SetCursorPos(Point),
    CursorPos,
    Click,
    PreventSleep,
    AllowSleep,
    MoveButton(Point),
    ClientToScreen(Point),
    SetButtonActive(bool),
    ReinforceTopmost,
    Quit,
}

/// A [`Desktop`] that records every call and keeps a fake cursor.
///
/// It can clear an [`ActiveFlag`] after a number of clicks or button moves,
/// which lets the alive loop run a known number of cycles.
pub struct MockDesktop {
    calls: Mutex<Vec<Call>>,
    cursor: Mutex<Point>,
    fail_client_to_screen: bool,
    stop: Option<Stop>,
}

struct Stop {
    flag: ActiveFlag,
    after_clicks: Option<usize>,
    after_moves: Option<usize>,
}

impl MockDesktop {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            cursor: Mutex::new(Point::new(0, 0)),
            fail_client_to_screen: false,
            stop: None,
        }
    }

    pub fn stop_after_clicks(mut self, flag: &ActiveFlag, clicks: usize) -> Self {
        self.stop = Some(Stop {
            flag: flag.clone(),
            after_clicks: Some(clicks),
            after_moves: None,
        });
        self
    }

    pub fn stop_after_moves(mut self, flag: &ActiveFlag, moves: usize) -> Self {
        self.stop = Some(Stop {
            flag: flag.clone(),
            after_clicks: None,
            after_moves: Some(moves),
        });
        self
    }

    pub fn failing_client_to_screen(mut self) -> Self {
        self.fail_client_to_screen = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| matches(c)).count()
    }

    pub fn clicks(&self) -> usize {
        self.count(|c| *c == Call::Click)
    }

    pub fn moves(&self) -> Vec<Point> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::MoveButton(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn cursor(&self) -> Point {
        *self.cursor.lock().unwrap()
    }

    fn record(&self, call: Call) {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);

        if let Some(stop) = &self.stop {
            let clicks = calls.iter().filter(|c| **c == Call::Click).count();
            let moves = calls
                .iter()
                .filter(|c| matches!(c, Call::MoveButton(_)))
                .count();
            if stop.after_clicks.is_some_and(|n| clicks >= n)
                || stop.after_moves.is_some_and(|n| moves >= n)
            {
                stop.flag.set(false);
            }
        }
    }
}

impl Default for MockDesktop {
    fn default() -> Self {
        Self::new()
    }
}

impl Desktop for MockDesktop {
    fn set_cursor_pos(&self, pos: Point) -> PlatformResult<()> {
        *self.cursor.lock().unwrap() = pos;
        self.record(Call::SetCursorPos(pos));
        Ok(())
    }

    fn cursor_pos(&self) -> PlatformResult<Point> {
        self.record(Call::CursorPos);
        Ok(self.cursor())
    }

    fn click(&self) -> PlatformResult<()> {
        self.record(Call::Click);
        Ok(())
    }

    fn prevent_sleep(&self) -> PlatformResult<()> {
        self.record(Call::PreventSleep);
        Ok(())
    }

    fn allow_sleep(&self) {
        self.record(Call::AllowSleep);
    }

    fn move_button(&self, origin: Point) {
        self.record(Call::MoveButton(origin));
    }

    fn client_to_screen(&self, client: Point) -> PlatformResult<Point> {
        self.record(Call::ClientToScreen(client));
        if self.fail_client_to_screen {
            return Err(PlatformError::WindowNotReady);
        }
        Ok(client.offset(WINDOW_ORIGIN.x, WINDOW_ORIGIN.y))
    }

    fn set_button_active(&self, active: bool) {
        self.record(Call::SetButtonActive(active));
    }

    fn reinforce_topmost(&self) {
        self.record(Call::ReinforceTopmost);
    }

    fn quit(&self) {
        self.record(Call::Quit);
    }
}

/// Settings with every pause shortened to a millisecond.
pub fn fast_settings(style: MotionStyle) -> Settings {
    Settings {
        timing: TimingSettings {
            settle_after_move_ms: 1,
            settle_before_click_ms: 1,
            min_delay_ms: 1,
            max_delay_ms: 2,
            cancel_poll_ms: 1,
        },
        motion: MotionSettings {
            style,
            steps: 5,
            step_delay_ms: 0,
        },
        ..Settings::default()
    }
}

/// Settings whose pauses are far longer than any test should wait.
pub fn slow_settings() -> Settings {
    let mut settings = fast_settings(MotionStyle::Linear);
    settings.timing.settle_after_move_ms = 60_000;
    settings.timing.min_delay_ms = 60_000;
    settings.timing.max_delay_ms = 60_000;
    settings.timing.cancel_poll_ms = 5;
    settings
}

/// Generous upper bound for anything that should finish "immediately".
pub const PROMPT: Duration = Duration::from_secs(2);
