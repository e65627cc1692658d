//! Serializable settings (pure Rust, no FFI).

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::constants::*;
use crate::motion::MotionStyle;

/// Complete user settings, serializable to/from `config.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    /// Pauses of the alive loop.
    pub timing: TimingSettings,
    /// How the cursor travels to the button.
    pub motion: MotionSettings,
    /// PNG file to use as the application icon instead of the built-in badge.
    pub icon_path: Option<PathBuf>,
    /// Log filter directive (e.g. "debug", "keepalive=trace").
    pub log_level: Option<String>,
}

/// Pauses of the alive loop, in milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TimingSettings {
    pub settle_after_move_ms: u64,
    pub settle_before_click_ms: u64,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub cancel_poll_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            settle_after_move_ms: DEFAULT_SETTLE_AFTER_MOVE_MS,
            settle_before_click_ms: DEFAULT_SETTLE_BEFORE_CLICK_MS,
            min_delay_ms: DEFAULT_MIN_DELAY_MS,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
            cancel_poll_ms: DEFAULT_CANCEL_POLL_MS,
        }
    }
}

impl TimingSettings {
    pub fn settle_after_move(&self) -> Duration {
        Duration::from_millis(self.settle_after_move_ms)
    }

    pub fn settle_before_click(&self) -> Duration {
        Duration::from_millis(self.settle_before_click_ms)
    }

    pub fn cancel_poll(&self) -> Duration {
        Duration::from_millis(self.cancel_poll_ms)
    }
}

/// Cursor glide parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MotionSettings {
    pub style: MotionStyle,
    pub steps: u32,
    pub step_delay_ms: u64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            style: MotionStyle::Bezier,
            steps: DEFAULT_MOTION_STEPS,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
        }
    }
}

impl MotionSettings {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

impl Settings {
    /// Clamps values into ranges the alive loop can work with.
    pub fn validate(&mut self) {
        self.motion.steps = self.motion.steps.max(1);
        self.timing.cancel_poll_ms = self.timing.cancel_poll_ms.max(1);
        if self.timing.max_delay_ms < self.timing.min_delay_ms {
            self.timing.max_delay_ms = self.timing.min_delay_ms;
        }
        if let Some(level) = &self.log_level {
            if level.trim().is_empty() {
                self.log_level = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_layout_constants() {
        let settings = Settings::default();
        assert_eq!(settings.timing.settle_after_move(), Duration::from_millis(400));
        assert_eq!(settings.timing.settle_before_click(), Duration::from_millis(200));
        assert_eq!(settings.timing.min_delay_ms, 1000);
        assert_eq!(settings.timing.max_delay_ms, 5000);
        assert_eq!(settings.motion.steps, 25);
        assert_eq!(settings.motion.step_delay(), Duration::from_millis(4));
        assert_eq!(settings.motion.style, MotionStyle::Bezier);
        assert!(settings.icon_path.is_none());
    }

    #[test]
    fn validate_fixes_inverted_delay_range() {
        let mut settings = Settings::default();
        settings.timing.min_delay_ms = 3000;
        settings.timing.max_delay_ms = 10;
        settings.validate();
        assert_eq!(settings.timing.max_delay_ms, 3000);
    }

    #[test]
    fn validate_enforces_minimums() {
        let mut settings = Settings::default();
        settings.motion.steps = 0;
        settings.timing.cancel_poll_ms = 0;
        settings.log_level = Some("   ".into());
        settings.validate();
        assert_eq!(settings.motion.steps, 1);
        assert_eq!(settings.timing.cancel_poll_ms, 1);
        assert!(settings.log_level.is_none());
    }
}
