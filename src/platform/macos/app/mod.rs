//! macOS application lifecycle: setup, run loop, icon, shutdown.

mod delegate;

use std::cell::RefCell;
use std::ffi::c_void;
use std::sync::Arc;

use tracing::{info, warn};

use crate::controller::Controller;
use crate::error::{PlatformError, PlatformResult};
use crate::events::{self, EventPublisher};
use crate::icon::IconImage;
use crate::model::constants::DISPATCH_INTERVAL_MS;
use crate::platform::macos::desktop::MacDesktop;
use crate::platform::macos::ffi::bridge::{
    autoreleasepool, get_class, id, msg_send, nil, nsstring, sel, NSApp, YES,
};
use crate::platform::macos::ffi::ensure_accessibility_prompt;
use crate::platform::macos::ffi::types::NS_ACTIVATION_POLICY_REGULAR;
use crate::platform::macos::handlers::{dispatch_events, DispatchOutcome};
use crate::platform::macos::window::MainWindow;
use crate::platform::RunOptions;
use crate::APP_NAME;

/// GUI-thread state reachable from Objective-C callbacks.
struct Runtime {
    window: MainWindow,
    controller: Controller,
    timer: id,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

/// Main entry point for macOS. Blocks until the app terminates.
pub fn run(options: RunOptions) -> PlatformResult<()> {
    events::init_event_bus();
    let publisher = events::publisher()
        .ok_or_else(|| PlatformError::Window("event bus unavailable".into()))?;

    autoreleasepool(|| unsafe { run_app(options, publisher) })
}

unsafe fn run_app(options: RunOptions, publisher: EventPublisher) -> PlatformResult<()> {
    let app = NSApp();
    let _: bool = msg_send![app, setActivationPolicy: NS_ACTIVATION_POLICY_REGULAR];

    let delegate = delegate::create_delegate()?;
    let _: () = msg_send![app, setDelegate: delegate];

    if !options.icon_png.is_empty() {
        if let Err(e) = set_app_icon(&options.icon_png) {
            warn!("could not set application icon: {e}");
        }
    }

    if !ensure_accessibility_prompt() {
        warn!("Accessibility permission not granted; synthetic clicks will be dropped");
    }

    let window = MainWindow::create(delegate)?;
    install_main_menu();

    let desktop = Arc::new(MacDesktop::new(publisher));
    let controller = Controller::new(desktop, options.settings);

    window.refresh_geometry();
    window.show();
    let _: () = msg_send![app, activateIgnoringOtherApps: YES];

    let timer = create_timer(delegate, DISPATCH_INTERVAL_MS as f64 / 1000.0);
    RUNTIME.with(|rt| {
        *rt.borrow_mut() = Some(Runtime {
            window,
            controller,
            timer,
        })
    });

    info!("entering AppKit run loop");
    let _: () = msg_send![app, run];

    shutdown_runtime();
    Ok(())
}

/// Set the Dock icon from encoded image bytes.
///
/// Must be called on the main thread.
pub fn set_app_icon(png: &[u8]) -> PlatformResult<()> {
    // Validates the data and yields the same errors on every platform
    IconImage::from_png(png)?;

    unsafe {
        let data: id = msg_send![
            get_class("NSData"),
            dataWithBytes: png.as_ptr() as *const c_void,
            length: png.len()
        ];
        let image: id = msg_send![get_class("NSImage"), alloc];
        let image: id = msg_send![image, initWithData: data];
        if image == nil {
            return Err(PlatformError::Window("NSImage rejected icon data".into()));
        }
        let _: () = msg_send![NSApp(), setApplicationIconImage: image];
        let _: () = msg_send![image, release];
    }
    Ok(())
}

/// Called by the delegate's timer on every tick.
pub(crate) fn on_dispatch_tick() {
    let outcome = RUNTIME.with(|rt| match rt.try_borrow() {
        Ok(rt) => match rt.as_ref() {
            Some(rt) => unsafe { dispatch_events(&rt.window, &rt.controller) },
            None => DispatchOutcome::Continue,
        },
        Err(_) => DispatchOutcome::Continue,
    });

    if outcome == DispatchOutcome::Terminate {
        shutdown_runtime();
        info!("terminating");
        unsafe { delegate::terminate_now() };
    }
}

/// Stop the timer, join the worker and release the sleep assertion.
fn shutdown_runtime() {
    let runtime = RUNTIME.with(|rt| rt.borrow_mut().take());
    if let Some(runtime) = runtime {
        unsafe {
            let _: () = msg_send![runtime.timer, invalidate];
        }
        runtime.controller.shutdown();
    }
}

/// App menu with a single Quit item bound to Cmd+Q.
///
/// # Safety
/// Main thread only.
unsafe fn install_main_menu() {
    let menu_bar: id = msg_send![get_class("NSMenu"), new];
    let app_menu_item: id = msg_send![get_class("NSMenuItem"), new];
    let _: () = msg_send![menu_bar, addItem: app_menu_item];

    let app_menu: id = msg_send![get_class("NSMenu"), new];
    let title = nsstring(&format!("Quit {APP_NAME}"));
    let key = nsstring("q");
    let quit_item: id = msg_send![get_class("NSMenuItem"), alloc];
    let quit_item: id = msg_send![
        quit_item,
        initWithTitle: &*title,
        action: sel!(terminate:),
        keyEquivalent: &*key
    ];
    let _: () = msg_send![app_menu, addItem: quit_item];
    let _: () = msg_send![app_menu_item, setSubmenu: app_menu];
    let _: () = msg_send![NSApp(), setMainMenu: menu_bar];
}

/// Repeating AppKit timer that also fires during menu tracking.
///
/// # Safety
/// The target must respond to `dispatchTick:`.
unsafe fn create_timer(target: id, interval: f64) -> id {
    let timer: id = msg_send![
        get_class("NSTimer"),
        timerWithTimeInterval: interval,
        target: target,
        selector: sel!(dispatchTick:),
        userInfo: nil,
        repeats: YES
    ];
    let run_loop: id = msg_send![get_class("NSRunLoop"), currentRunLoop];
    let common_modes = nsstring("kCFRunLoopCommonModes");
    let _: () = msg_send![run_loop, addTimer: timer, forMode: &*common_modes];
    timer
}
