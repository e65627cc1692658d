//! Integer pixel geometry (pure Rust, no FFI).
//!
//! Client and screen coordinates handed across the desktop boundary use a
//! top-left origin with y growing downwards. AppKit uses a bottom-left
//! origin; the `flip*` helpers translate between the two.

/// A point in integer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by (dx, dy).
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A size in integer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A rectangle in floating point points, as reported by AppKit
/// (origin at the bottom-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Origin that centres `inner` inside an area starting at `outer_origin`
/// with size `outer`.
pub fn centered_origin(outer_origin: Point, outer: Size, inner: Size) -> Point {
    Point::new(
        outer_origin.x + (outer.width - inner.width) / 2,
        outer_origin.y + (outer.height - inner.height) / 2,
    )
}

/// Convert a top-left button origin to the bottom-left frame origin AppKit
/// expects for a subview of a content view `content_height` tall.
pub fn flip_button_origin(origin: Point, content_height: f64, button_height: f64) -> (f64, f64) {
    (
        origin.x as f64,
        content_height - origin.y as f64 - button_height,
    )
}

/// Convert a client point (top-left origin) to global screen coordinates
/// (top-left origin of the main display).
///
/// `content` is the window's content rectangle in AppKit screen coordinates
/// and `screen_height` the height of the main display.
pub fn flipped_client_to_screen(client: Point, content: RectF, screen_height: f64) -> Point {
    let bl_x = content.x + client.x as f64;
    let bl_y = content.y + content.height - client.y as f64;
    Point::new(bl_x as i32, (screen_height - bl_y) as i32)
}
