//! The main window and its button.
//!
//! AppKit places views from the bottom-left corner; everything outside this
//! module works in top-left client coordinates, so the flips happen here.

use std::sync::Mutex;

use objc2_app_kit::NSForegroundColorAttributeName;
use objc2_foundation::NSRange;
use tracing::debug;

use super::ffi::bridge::{
    cg_color, get_class, id, msg_send, nil, nscolor, nsstring, sel, NSPoint, NSRect, NSSize, NO,
    YES,
};
use super::ffi::types::*;
use crate::error::{PlatformError, PlatformResult};
use crate::model::constants::*;
use crate::model::geometry::{flip_button_origin, flipped_client_to_screen, RectF};
use crate::model::Point;

/// Screen placement of the content area, captured on the GUI thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentGeometry {
    /// Content rectangle in AppKit screen coordinates (bottom-left origin).
    pub content: RectF,
    /// Height of the primary screen, the pivot of the y flip.
    pub screen_height: f64,
}

impl ContentGeometry {
    pub fn client_to_screen(&self, client: Point) -> Point {
        flipped_client_to_screen(client, self.content, self.screen_height)
    }
}

static GEOMETRY: Mutex<Option<ContentGeometry>> = Mutex::new(None);

/// Latest geometry recorded by [`MainWindow::refresh_geometry`].
pub fn current_geometry() -> PlatformResult<ContentGeometry> {
    let guard = GEOMETRY.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.ok_or(PlatformError::WindowNotReady)
}

/// Native handles of the window and button. GUI thread only.
pub struct MainWindow {
    window: id,
    button: id,
}

impl MainWindow {
    /// Create the window centred on the main screen with the button in the
    /// middle of the content area. Button actions go to `target`.
    ///
    /// # Safety
    /// Must be called from the main thread after NSApplication is set up.
    pub unsafe fn create(target: id) -> PlatformResult<Self> {
        let screen: id = msg_send![get_class("NSScreen"), mainScreen];
        if screen == nil {
            return Err(PlatformError::Window("no main screen".into()));
        }
        let screen_frame: NSRect = msg_send![screen, frame];
        let width = CLIENT_W as f64;
        let height = CLIENT_H as f64;
        let frame = NSRect::new(
            NSPoint::new(
                (screen_frame.size.width - width) / 2.0,
                (screen_frame.size.height - height) / 2.0,
            ),
            NSSize::new(width, height),
        );

        let window: id = msg_send![get_class("NSWindow"), alloc];
        let window: id = msg_send![
            window,
            initWithContentRect: frame,
            styleMask: NS_WINDOW_STYLE_TITLED | NS_WINDOW_STYLE_CLOSABLE,
            backing: NS_BACKING_STORE_BUFFERED,
            defer: NO
        ];
        if window == nil {
            return Err(PlatformError::Window("NSWindow init failed".into()));
        }
        let _: () = msg_send![window, setReleasedWhenClosed: NO];

        let title = nsstring(TITLE_MACOS);
        let _: () = msg_send![window, setTitle: &*title];
        let _: () = msg_send![window, setLevel: NS_FLOATING_WINDOW_LEVEL];
        let _: () = msg_send![window, setBackgroundColor: nscolor(COLOR_BACKGROUND)];

        let (bx, by) = flip_button_origin(BUTTON_START, height, BTN_H as f64);
        let button_frame = NSRect::new(
            NSPoint::new(bx, by),
            NSSize::new(BTN_W as f64, BTN_H as f64),
        );
        let button: id = msg_send![get_class("NSButton"), alloc];
        let button: id = msg_send![button, initWithFrame: button_frame];
        if button == nil {
            return Err(PlatformError::Window("NSButton init failed".into()));
        }
        let _: () = msg_send![button, setBezelStyle: NS_BEZEL_STYLE_ROUNDED];
        let _: () = msg_send![button, setWantsLayer: YES];
        let layer: id = msg_send![button, layer];
        if layer != nil {
            let _: () = msg_send![layer, setCornerRadius: BUTTON_CORNER_RADIUS];
        }
        let _: () = msg_send![button, setTarget: target];
        let _: () = msg_send![button, setAction: sel!(buttonClicked:)];

        let content: id = msg_send![window, contentView];
        let _: () = msg_send![content, addSubview: button];

        let main_window = Self { window, button };
        main_window.set_button_active(false);
        debug!("main window created");
        Ok(main_window)
    }

    /// # Safety
    /// Main thread only.
    pub unsafe fn show(&self) {
        let _: () = msg_send![self.window, makeKeyAndOrderFront: nil];
    }

    /// Place the button at `origin` (top-left client coordinates).
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn move_button(&self, origin: Point) {
        let content: id = msg_send![self.window, contentView];
        let content_frame: NSRect = msg_send![content, frame];
        let (x, y) = flip_button_origin(origin, content_frame.size.height, BTN_H as f64);
        let _: () = msg_send![self.button, setFrameOrigin: NSPoint::new(x, y)];
    }

    /// Swap fill colour and label between idle and active.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn set_button_active(&self, active: bool) {
        let (label, color) = button_appearance(active);

        let layer: id = msg_send![self.button, layer];
        if layer != nil {
            let _: () = msg_send![layer, setBackgroundColor: cg_color(nscolor(color))];
        }

        let text = nsstring(label);
        let title: id = msg_send![get_class("NSMutableAttributedString"), alloc];
        let title: id = msg_send![title, initWithString: &*text];
        let length: usize = msg_send![title, length];
        let white = nscolor(COLOR_TEXT);
        let _: () = msg_send![
            title,
            addAttribute: NSForegroundColorAttributeName,
            value: white,
            range: NSRange::new(0, length)
        ];
        let _: () = msg_send![self.button, setAttributedTitle: title];
        let _: () = msg_send![title, release];
    }

    /// # Safety
    /// Main thread only.
    pub unsafe fn reinforce_topmost(&self) {
        let _: () = msg_send![self.window, setLevel: NS_FLOATING_WINDOW_LEVEL];
    }

    /// Record where the content area sits on screen so worker threads can
    /// convert coordinates without touching AppKit.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn refresh_geometry(&self) {
        let frame: NSRect = msg_send![self.window, frame];
        let content: NSRect = msg_send![self.window, contentRectForFrameRect: frame];

        let screens: id = msg_send![get_class("NSScreen"), screens];
        let count: usize = msg_send![screens, count];
        if count == 0 {
            return;
        }
        // Global coordinates pivot on the primary screen, always index 0
        let primary: id = msg_send![screens, objectAtIndex: 0usize];
        let primary_frame: NSRect = msg_send![primary, frame];

        let geometry = ContentGeometry {
            content: RectF::new(
                content.origin.x,
                content.origin.y,
                content.size.width,
                content.size.height,
            ),
            screen_height: primary_frame.size.height,
        };
        let mut guard = GEOMETRY.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(geometry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_maps_button_centre() {
        let geometry = ContentGeometry {
            content: RectF::new(500.0, 300.0, 300.0, 300.0),
            screen_height: 1080.0,
        };
        // Bottom-left corner (10,260) → centre (50,275); content top at y=600
        let centre = button_center(BUTTON_CORNERS[3]);
        assert_eq!(geometry.client_to_screen(centre), Point::new(550, 755));
    }
}
