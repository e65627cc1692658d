//! Layout constants and default values.
//!
//! This module contains the window/button layout, the colours and labels of
//! the button, and the timing defaults of the alive loop.

use super::geometry::{Point, Size};

// === Layout ===

/// Width of the window's client (content) area in pixels.
pub const CLIENT_W: i32 = 300;

/// Height of the window's client (content) area in pixels.
pub const CLIENT_H: i32 = 300;

/// Button width in pixels.
pub const BTN_W: i32 = 80;

/// Button height in pixels.
pub const BTN_H: i32 = 30;

/// Gap between the button and the edges of the client area.
pub const PAD: i32 = 10;

/// Client area size.
pub const CLIENT_SIZE: Size = Size::new(CLIENT_W, CLIENT_H);

/// Button size.
pub const BUTTON_SIZE: Size = Size::new(BTN_W, BTN_H);

/// Button origins (client coordinates, top-left origin) in visiting order:
/// top-left, top-right, bottom-right, bottom-left.
pub const BUTTON_CORNERS: [Point; 4] = [
    Point::new(PAD, PAD),
    Point::new(CLIENT_W - BTN_W - PAD, PAD),
    Point::new(CLIENT_W - BTN_W - PAD, CLIENT_H - BTN_H - PAD),
    Point::new(PAD, CLIENT_H - BTN_H - PAD),
];

/// Where the button sits before the first click: centred in the client area.
pub const BUTTON_START: Point = Point::new((CLIENT_W - BTN_W) / 2, (CLIENT_H - BTN_H) / 2);

/// Button origin for cycle `index` (wraps every four cycles).
pub fn corner(index: usize) -> Point {
    BUTTON_CORNERS[index % BUTTON_CORNERS.len()]
}

/// Centre of a button whose origin is `origin`, in the same coordinates.
pub fn button_center(origin: Point) -> Point {
    origin.offset(BTN_W / 2, BTN_H / 2)
}

// === Colours (0xRRGGBB) ===

/// Window background (#2B2B2B).
pub const COLOR_BACKGROUND: u32 = 0x2B2B2B;

/// Button fill while idle (#0078D4).
pub const COLOR_IDLE: u32 = 0x0078D4;

/// Button fill while active (#107C10).
pub const COLOR_ACTIVE: u32 = 0x107C10;

/// Button label colour.
pub const COLOR_TEXT: u32 = 0xFFFFFF;

/// Split 0xRRGGBB into normalised floats [0..1].
pub fn rgb_components(color: u32) -> (f64, f64, f64) {
    let r = ((color >> 16) & 0xFF) as f64 / 255.0;
    let g = ((color >> 8) & 0xFF) as f64 / 255.0;
    let b = (color & 0xFF) as f64 / 255.0;
    (r, g, b)
}

/// Split 0xRRGGBB into bytes.
pub fn rgb_bytes(color: u32) -> (u8, u8, u8) {
    ((color >> 16) as u8, (color >> 8) as u8, color as u8)
}

// === Labels ===

/// Button label while idle.
pub const LABEL_IDLE: &str = "Alive";

/// Button label while the alive loop runs.
pub const LABEL_ACTIVE: &str = "\u{25CF} Active";

/// Window title on macOS.
pub const TITLE_MACOS: &str = "KeepAlive (Cmd+Q = quit)";

/// Window title on Windows.
pub const TITLE_WINDOWS: &str = "KeepAlive (Ctrl+Q = quit)";

/// Label and fill colour for the given button state.
pub fn button_appearance(active: bool) -> (&'static str, u32) {
    if active {
        (LABEL_ACTIVE, COLOR_ACTIVE)
    } else {
        (LABEL_IDLE, COLOR_IDLE)
    }
}

// === Timing defaults (milliseconds) ===

/// Pause after moving the button before the cursor starts gliding.
pub const DEFAULT_SETTLE_AFTER_MOVE_MS: u64 = 400;

/// Pause after the cursor arrives before clicking.
pub const DEFAULT_SETTLE_BEFORE_CLICK_MS: u64 = 200;

/// Lower bound of the random pause between cycles.
pub const DEFAULT_MIN_DELAY_MS: u64 = 1000;

/// Upper bound of the random pause between cycles.
pub const DEFAULT_MAX_DELAY_MS: u64 = 5000;

/// How often a cancellable sleep re-checks the active flag.
pub const DEFAULT_CANCEL_POLL_MS: u64 = 100;

/// Number of cursor positions per glide.
pub const DEFAULT_MOTION_STEPS: u32 = 25;

/// Pause between two cursor positions of a glide.
pub const DEFAULT_STEP_DELAY_MS: u64 = 4;

/// Glides shorter than this jump straight to the target.
pub const MIN_GLIDE_DISTANCE: f64 = 2.0;

/// Interval of the GUI-thread timer that drains the event bus.
pub const DISPATCH_INTERVAL_MS: u32 = 16;
