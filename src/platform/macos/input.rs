//! Cursor control and synthetic clicks through Core Graphics.
//!
//! Core Graphics uses global display coordinates with the origin at the
//! top-left of the main display, the same space as [`Point`].

use core_graphics::display::CGDisplay;
use core_graphics::event::{CGEvent, CGEventTapLocation, CGEventType, CGMouseButton};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use core_graphics::geometry::CGPoint;

use crate::error::{PlatformError, PlatformResult};
use crate::model::Point;

fn event_source() -> PlatformResult<CGEventSource> {
    CGEventSource::new(CGEventSourceStateID::HIDSystemState)
        .map_err(|_| PlatformError::Input("failed to create CGEventSource".into()))
}

pub fn set_cursor_pos(pos: Point) -> PlatformResult<()> {
    CGDisplay::warp_mouse_cursor_position(CGPoint::new(pos.x as f64, pos.y as f64))
        .map_err(|err| PlatformError::Input(format!("CGWarpMouseCursorPosition failed ({err})")))
}

pub fn cursor_pos() -> PlatformResult<Point> {
    let event = CGEvent::new(event_source()?)
        .map_err(|_| PlatformError::Input("failed to create CGEvent".into()))?;
    let loc = event.location();
    Ok(Point::new(loc.x as i32, loc.y as i32))
}

/// Left button down then up at the current cursor position.
pub fn click() -> PlatformResult<()> {
    let pos = cursor_pos()?;
    let at = CGPoint::new(pos.x as f64, pos.y as f64);

    for kind in [CGEventType::LeftMouseDown, CGEventType::LeftMouseUp] {
        let event = CGEvent::new_mouse_event(event_source()?, kind, at, CGMouseButton::Left)
            .map_err(|_| PlatformError::Input("failed to create mouse event".into()))?;
        event.post(CGEventTapLocation::HID);
    }
    Ok(())
}
