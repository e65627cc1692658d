//! Tests for the event bus across threads and the global bus.

use std::thread;

use keepalive::events::{self, AppEvent, EventBus};
use keepalive::Point;

#[test]
fn events_from_worker_threads_arrive_in_publish_order() {
    let bus = EventBus::new();
    let publisher = bus.publisher();

    thread::spawn(move || {
        publisher.publish(AppEvent::MoveButton(Point::new(10, 10)));
        publisher.publish(AppEvent::ReinforceTopmost);
        publisher.publish(AppEvent::SetButtonActive(true));
    })
    .join()
    .unwrap();

    assert_eq!(
        bus.drain(),
        vec![
            AppEvent::MoveButton(Point::new(10, 10)),
            AppEvent::ReinforceTopmost,
            AppEvent::SetButtonActive(true),
        ]
    );
    assert!(bus.drain().is_empty());
}

#[test]
fn many_publishers_share_one_bus() {
    let bus = EventBus::new();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let publisher = bus.publisher();
            thread::spawn(move || {
                for _ in 0..25 {
                    publisher.publish(AppEvent::ButtonClicked);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(bus.drain().len(), 100);
}

// The global bus is process-wide; keep every assertion about it in one test.
#[test]
fn global_bus_initialises_once_and_drains() {
    assert!(events::publisher().is_none());
    events::publish(AppEvent::Quit);
    assert!(events::drain_events().is_empty());

    assert!(events::init_event_bus());
    assert!(!events::init_event_bus());

    events::publish(AppEvent::QuitRequested);
    events::publisher().unwrap().publish(AppEvent::Quit);
    assert_eq!(
        events::drain_events(),
        vec![AppEvent::QuitRequested, AppEvent::Quit]
    );
}
