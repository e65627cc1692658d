//! `KeepAliveDelegate`: NSApplication delegate, button target and timer
//! target in one NSObject subclass.
//!
//! Every callback only publishes to the event bus or hands off to the
//! dispatcher; no Rust state lives in the Objective-C object.

use std::sync::atomic::{AtomicBool, Ordering};

use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
use tracing::debug;

use crate::error::{PlatformError, PlatformResult};
use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, sel, NSApp};
use crate::platform::macos::ffi::types::{NS_TERMINATE_CANCEL, NS_TERMINATE_NOW};

use super::on_dispatch_tick;

/// Set right before the app terminates itself so the delegate lets the
/// terminate request through.
static QUITTING: AtomicBool = AtomicBool::new(false);

/// Register the delegate class (once) and create an instance.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_delegate() -> PlatformResult<id> {
    let class_name = c"KeepAliveDelegate";
    let delegate_class = if let Some(cls) = AnyClass::get(class_name) {
        cls
    } else {
        let superclass = AnyClass::get(c"NSObject")
            .ok_or_else(|| PlatformError::Window("NSObject class missing".into()))?;
        let mut builder = ClassBuilder::new(class_name, superclass)
            .ok_or_else(|| PlatformError::Window("cannot declare KeepAliveDelegate".into()))?;

        builder.add_method(
            sel!(buttonClicked:),
            button_clicked as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(applicationShouldTerminate:),
            application_should_terminate as unsafe extern "C-unwind" fn(_, _, _) -> _,
        );
        builder.add_method(
            sel!(applicationShouldTerminateAfterLastWindowClosed:),
            terminate_after_last_window as unsafe extern "C-unwind" fn(_, _, _) -> _,
        );
        builder.add_method(
            sel!(dispatchTick:),
            dispatch_tick as unsafe extern "C-unwind" fn(_, _, _),
        );

        builder.register()
    };

    let delegate: id = msg_send![delegate_class, new];
    if delegate == nil {
        return Err(PlatformError::Window("KeepAliveDelegate init failed".into()));
    }
    Ok(delegate)
}

/// Terminate the application, bypassing the quit interception.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn terminate_now() {
    QUITTING.store(true, Ordering::SeqCst);
    let _: () = msg_send![NSApp(), terminate: nil];
}

unsafe extern "C-unwind" fn button_clicked(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::ButtonClicked);
}

/// Cmd+Q, the menu item and closing the window all land here. The request
/// is cancelled and routed through the controller instead.
unsafe extern "C-unwind" fn application_should_terminate(
    _this: &mut AnyObject,
    _cmd: Sel,
    _sender: id,
) -> u64 {
    if QUITTING.load(Ordering::SeqCst) {
        return NS_TERMINATE_NOW;
    }
    debug!("terminate intercepted");
    publish(AppEvent::QuitRequested);
    NS_TERMINATE_CANCEL
}

unsafe extern "C-unwind" fn terminate_after_last_window(
    _this: &mut AnyObject,
    _cmd: Sel,
    _sender: id,
) -> Bool {
    Bool::YES
}

unsafe extern "C-unwind" fn dispatch_tick(_this: &mut AnyObject, _cmd: Sel, _timer: id) {
    on_dispatch_tick();
}
