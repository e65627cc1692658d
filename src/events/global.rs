//! Global access to the application event bus.
//!
//! Native callbacks (Objective-C action methods, the Win32 window
//! procedure) have no Rust context to carry a publisher, so the bus is
//! reachable through statics. It must be initialized once at startup via
//! `init_event_bus()`.
//!
//! - `Sender` is stored in `OnceLock` - it's `Send + Sync`
//! - `Receiver` is stored in `Mutex` - only the GUI thread drains it

use std::sync::mpsc::Receiver;
use std::sync::{Mutex, OnceLock};

use super::bus::{EventBus, EventPublisher};
use super::types::AppEvent;

static PUBLISHER: OnceLock<EventPublisher> = OnceLock::new();

static RECEIVER: OnceLock<Mutex<Receiver<AppEvent>>> = OnceLock::new();

/// Initialize the global event bus.
///
/// Returns false (and leaves the existing bus untouched) if it was already
/// initialized.
pub fn init_event_bus() -> bool {
    if PUBLISHER.get().is_some() {
        return false;
    }
    let (publisher, receiver) = EventBus::new().into_parts();
    PUBLISHER.set(publisher).is_ok() && RECEIVER.set(Mutex::new(receiver)).is_ok()
}

/// Get a publisher handle for the global event bus, if initialized.
pub fn publisher() -> Option<EventPublisher> {
    PUBLISHER.get().cloned()
}

/// Publish an event to the global event bus.
///
/// Events published before `init_event_bus()` are dropped with a warning.
pub fn publish(event: AppEvent) {
    match PUBLISHER.get() {
        Some(publisher) => publisher.publish(event),
        None => tracing::warn!(?event, "event bus not initialized, dropping event"),
    }
}

/// Drain all pending events from the global event bus.
pub fn drain_events() -> Vec<AppEvent> {
    let Some(receiver) = RECEIVER.get() else {
        return Vec::new();
    };
    let receiver = match receiver.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    // The statics can be set only once per process, so everything about the
    // global bus is exercised in a single test.
    #[test]
    fn test_global_bus_lifecycle() {
        assert!(init_event_bus());
        assert!(!init_event_bus());

        publish(AppEvent::MoveButton(Point::new(210, 10)));
        publisher().unwrap().publish(AppEvent::ReinforceTopmost);

        assert_eq!(
            drain_events(),
            vec![
                AppEvent::MoveButton(Point::new(210, 10)),
                AppEvent::ReinforceTopmost
            ]
        );
        assert!(drain_events().is_empty());
    }
}
