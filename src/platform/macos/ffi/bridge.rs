//! Thin layer over objc2 for raw `msg_send!` code.
//!
//! The AppKit glue talks to Objective-C through untyped `id` pointers. This
//! module collects the aliases and helpers that style needs.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::CString;

pub use objc2::rc::Retained;
pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{msg_send, sel, ClassType};
pub use objc2_app_kit::NSApplication;
pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

use super::types::CGColorRef;
use crate::model::constants::rgb_components;

/// Objective-C object pointer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C `YES`.
pub const YES: Bool = Bool::YES;

/// Objective-C `NO`.
pub const NO: Bool = Bool::NO;

/// The shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString from a Rust string slice.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Look up a class registered with the Objective-C runtime.
///
/// Only used with AppKit/Foundation class names, which always exist.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = CString::new(name).unwrap_or_default();
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

/// `[NSColor colorWithRed:green:blue:alpha:]` for a 0xRRGGBB value.
///
/// # Safety
/// Must be called with a live autorelease pool.
pub unsafe fn nscolor(color: u32) -> id {
    let (r, g, b) = rgb_components(color);
    msg_send![
        get_class("NSColor"),
        colorWithRed: r,
        green: g,
        blue: b,
        alpha: 1.0f64
    ]
}

/// The `CGColor` backing an NSColor, for `CALayer` properties.
///
/// # Safety
/// `color` must be a valid NSColor.
pub unsafe fn cg_color(color: id) -> CGColorRef {
    msg_send![color, CGColor]
}

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
