//! Tests for the alive loop against a recording desktop.

mod common;

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use keepalive::alive::{glide_cursor, run_alive_loop};
use keepalive::config::MotionSettings;
use keepalive::model::{button_center, corner, BUTTON_CORNERS};
use keepalive::motion::MotionStyle;
use keepalive::{ActiveFlag, Desktop, Point};
use rand::rngs::StdRng;
use rand::SeedableRng;

use common::{fast_settings, slow_settings, Call, MockDesktop, PROMPT, WINDOW_ORIGIN};

fn screen_target(index: usize) -> Point {
    button_center(corner(index)).offset(WINDOW_ORIGIN.x, WINDOW_ORIGIN.y)
}

// === Full Cycles ===

#[test]
fn loop_visits_corners_in_order_and_clicks_each() {
    let flag = ActiveFlag::new();
    flag.set(true);
    let desktop = MockDesktop::new().stop_after_clicks(&flag, 4);
    let mut rng = StdRng::seed_from_u64(11);

    run_alive_loop(&desktop, &flag, &fast_settings(MotionStyle::Linear), &mut rng);

    assert_eq!(desktop.clicks(), 4);
    assert_eq!(desktop.moves(), BUTTON_CORNERS.to_vec());
    assert!(!flag.is_active());
}

#[test]
fn loop_holds_sleep_assertion_for_its_whole_run() {
    let flag = ActiveFlag::new();
    flag.set(true);
    let desktop = MockDesktop::new().stop_after_clicks(&flag, 2);
    let mut rng = StdRng::seed_from_u64(3);

    run_alive_loop(&desktop, &flag, &fast_settings(MotionStyle::Bezier), &mut rng);

    let calls = desktop.calls();
    assert_eq!(calls.first(), Some(&Call::PreventSleep));
    assert_eq!(calls.last(), Some(&Call::AllowSleep));
    assert_eq!(desktop.count(|c| *c == Call::PreventSleep), 1);
    assert_eq!(desktop.count(|c| *c == Call::AllowSleep), 1);
}

#[test]
fn cycle_steps_happen_in_order() {
    let flag = ActiveFlag::new();
    flag.set(true);
    let desktop = MockDesktop::new().stop_after_clicks(&flag, 1);
    let mut rng = StdRng::seed_from_u64(5);

    run_alive_loop(&desktop, &flag, &fast_settings(MotionStyle::Linear), &mut rng);

    let calls = desktop.calls();
    let first = corner(0);
    assert_eq!(calls[1], Call::MoveButton(first));
    assert_eq!(calls[2], Call::ReinforceTopmost);
    assert_eq!(calls[3], Call::ClientToScreen(button_center(first)));
    assert_eq!(calls[4], Call::CursorPos);

    let click = calls.iter().position(|c| *c == Call::Click).unwrap();
    assert_eq!(calls[click - 1], Call::SetCursorPos(screen_target(0)));
}

#[test]
fn bezier_glide_lands_on_every_button_centre() {
    let flag = ActiveFlag::new();
    flag.set(true);
    let desktop = MockDesktop::new().stop_after_clicks(&flag, 4);
    let mut rng = StdRng::seed_from_u64(99);

    run_alive_loop(&desktop, &flag, &fast_settings(MotionStyle::Bezier), &mut rng);

    let calls = desktop.calls();
    let before_clicks: Vec<&Call> = calls
        .windows(2)
        .filter(|w| w[1] == Call::Click)
        .map(|w| &w[0])
        .collect();
    let expected: Vec<Call> = (0..4).map(|i| Call::SetCursorPos(screen_target(i))).collect();
    assert_eq!(before_clicks, expected.iter().collect::<Vec<_>>());
    assert_eq!(desktop.cursor(), screen_target(3));
}

#[test]
fn loop_does_nothing_when_started_inactive() {
    let flag = ActiveFlag::new();
    let desktop = MockDesktop::new();
    let mut rng = StdRng::seed_from_u64(0);

    run_alive_loop(&desktop, &flag, &fast_settings(MotionStyle::Linear), &mut rng);

    assert_eq!(desktop.calls(), vec![Call::PreventSleep, Call::AllowSleep]);
}

// === Errors and Cancellation ===

#[test]
fn failing_cycle_is_skipped_and_loop_continues() {
    let flag = ActiveFlag::new();
    flag.set(true);
    let desktop = MockDesktop::new()
        .failing_client_to_screen()
        .stop_after_moves(&flag, 3);
    let mut rng = StdRng::seed_from_u64(8);

    run_alive_loop(&desktop, &flag, &fast_settings(MotionStyle::Linear), &mut rng);

    assert_eq!(desktop.clicks(), 0);
    assert_eq!(desktop.moves(), BUTTON_CORNERS[..3].to_vec());
    assert_eq!(desktop.count(|c| matches!(c, Call::ClientToScreen(_))), 2);
    assert_eq!(desktop.calls().last(), Some(&Call::AllowSleep));
}

#[test]
fn clearing_flag_interrupts_long_settle() {
    let flag = ActiveFlag::new();
    flag.set(true);
    let desktop = Arc::new(MockDesktop::new());

    let worker = {
        let desktop = Arc::clone(&desktop);
        let flag = flag.clone();
        thread::spawn(move || {
            let mut rng = StdRng::seed_from_u64(1);
            run_alive_loop(desktop.as_ref(), &flag, &slow_settings(), &mut rng);
        })
    };

    let deadline = Instant::now() + PROMPT;
    while desktop.moves().is_empty() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }
    let start = Instant::now();
    flag.set(false);
    worker.join().unwrap();

    assert!(start.elapsed() < PROMPT);
    assert_eq!(desktop.clicks(), 0);
    assert_eq!(desktop.moves(), vec![corner(0)]);
    assert_eq!(desktop.calls().last(), Some(&Call::AllowSleep));
}

// === Glide ===

#[test]
fn linear_glide_visits_equal_steps() {
    let desktop = MockDesktop::new();
    let motion = MotionSettings {
        style: MotionStyle::Linear,
        steps: 5,
        step_delay_ms: 0,
    };
    let mut rng = StdRng::seed_from_u64(2);

    glide_cursor(&desktop, Point::new(100, 50), &motion, &mut rng).unwrap();

    let positions: Vec<Call> = desktop
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::SetCursorPos(_)))
        .collect();
    assert_eq!(
        positions,
        vec![
            Call::SetCursorPos(Point::new(20, 10)),
            Call::SetCursorPos(Point::new(40, 20)),
            Call::SetCursorPos(Point::new(60, 30)),
            Call::SetCursorPos(Point::new(80, 40)),
            Call::SetCursorPos(Point::new(100, 50)),
        ]
    );
}

#[test]
fn glide_to_current_position_sets_cursor_once() {
    let desktop = MockDesktop::new();
    let target = Point::new(250, 300);
    desktop.set_cursor_pos(target).unwrap();
    let mut rng = StdRng::seed_from_u64(4);

    glide_cursor(&desktop, target, &MotionSettings::default(), &mut rng).unwrap();

    assert_eq!(
        desktop.calls(),
        vec![
            Call::SetCursorPos(target),
            Call::CursorPos,
            Call::SetCursorPos(target),
        ]
    );
}
