//! Channel between the alive worker, native callbacks and the GUI thread.
//!
//! Publishers never block. The GUI thread polls the receiving end from its
//! dispatch timer, so nothing here needs a wakeup mechanism.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::trace;

use super::types::AppEvent;

/// Receiving end plus a template sender for handing out publishers.
///
/// ```
/// use keepalive::events::{AppEvent, EventBus};
/// use keepalive::Point;
///
/// let bus = EventBus::new();
/// let worker = bus.publisher();
///
/// worker.publish(AppEvent::MoveButton(Point::new(210, 10)));
/// worker.publish(AppEvent::ReinforceTopmost);
///
/// assert_eq!(
///     bus.drain(),
///     vec![AppEvent::MoveButton(Point::new(210, 10)), AppEvent::ReinforceTopmost]
/// );
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// A publisher for another thread or callback.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Next pending event, if any. Never blocks.
    ///
    /// The bus keeps its own sender alive, so an empty queue is the only
    /// reason this returns `None`.
    pub fn try_recv(&self) -> Option<AppEvent> {
        self.receiver.try_recv().ok()
    }

    /// Everything queued so far, in publish order.
    pub fn drain(&self) -> Vec<AppEvent> {
        self.receiver.try_iter().collect()
    }

    /// Hand the channel over to the process-wide bus in [`super::global`].
    pub fn into_parts(self) -> (EventPublisher, Receiver<AppEvent>) {
        let Self { sender, receiver } = self;
        (EventPublisher { sender }, receiver)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of the bus. Cheap to clone and `Send`.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Queue `event` for the GUI thread.
    ///
    /// Once the receiver is gone the GUI has shut down; late events from the
    /// worker are dropped.
    pub fn publish(&self, event: AppEvent) {
        if let Err(mpsc::SendError(event)) = self.sender.send(event) {
            trace!(?event, "receiver gone, event dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    #[test]
    fn new_bus_is_empty() {
        let bus = EventBus::new();
        assert_eq!(bus.try_recv(), None);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn one_cycle_of_ui_commands_keeps_order() {
        let bus = EventBus::new();
        let worker = bus.publisher();

        worker.publish(AppEvent::MoveButton(Point::new(210, 260)));
        worker.publish(AppEvent::ReinforceTopmost);

        assert_eq!(
            bus.try_recv(),
            Some(AppEvent::MoveButton(Point::new(210, 260)))
        );
        assert_eq!(bus.drain(), vec![AppEvent::ReinforceTopmost]);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn publishing_after_receiver_dropped_is_silent() {
        let (publisher, receiver) = EventBus::new().into_parts();
        drop(receiver);
        publisher.publish(AppEvent::Quit);
    }

    #[test]
    fn split_parts_stay_connected() {
        let (publisher, receiver) = EventBus::new().into_parts();
        publisher.clone().publish(AppEvent::QuitRequested);
        assert_eq!(receiver.try_recv().ok(), Some(AppEvent::QuitRequested));
    }
}
