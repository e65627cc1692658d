//! AppKit constants and opaque Core Graphics types.

use objc2::encode::{Encoding, RefEncode};

/// Opaque CGColor type for correct objc2 encoding.
/// objc2 expects `^{CGColor=}` not `^v` (void pointer).
#[repr(C)]
pub struct CGColor {
    _private: [u8; 0],
}

// SAFETY: CGColor is an opaque Core Graphics type
unsafe impl RefEncode for CGColor {
    const ENCODING_REF: Encoding = Encoding::Pointer(&Encoding::Struct("CGColor", &[]));
}

pub type CGColorRef = *const CGColor;

// === NSWindow ===

pub const NS_WINDOW_STYLE_TITLED: u64 = 1 << 0;
pub const NS_WINDOW_STYLE_CLOSABLE: u64 = 1 << 1;
pub const NS_BACKING_STORE_BUFFERED: u64 = 2;
pub const NS_FLOATING_WINDOW_LEVEL: i64 = 3;

// === NSApplication ===

pub const NS_ACTIVATION_POLICY_REGULAR: i64 = 0;
pub const NS_TERMINATE_CANCEL: u64 = 0;
pub const NS_TERMINATE_NOW: u64 = 1;

// === NSButton ===

pub const NS_BEZEL_STYLE_ROUNDED: u64 = 1;

/// Corner radius of the button's layer.
pub const BUTTON_CORNER_RADIUS: f64 = 4.0;
