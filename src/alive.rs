//! The alive loop: move the button, glide the cursor onto it, click, wait.
//!
//! Runs on a worker thread until the shared [`ActiveFlag`] is cleared.
//! Every pause is cancellable so quitting never waits out a random delay.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::{MotionSettings, Settings, TimingSettings};
use crate::desktop::Desktop;
use crate::error::PlatformResult;
use crate::model::{button_center, corner, Point};
use crate::motion::{glide_path, random_bend};

/// Shared on/off switch of the alive loop.
#[derive(Debug, Clone, Default)]
pub struct ActiveFlag(Arc<AtomicBool>);

impl ActiveFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn set(&self, active: bool) {
        self.0.store(active, Ordering::SeqCst);
    }

    /// Flip from inactive to active. Returns false if it was already active.
    pub fn activate(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

/// Sleep for `duration`, waking every `poll` to check `flag`.
///
/// Returns true if the full duration elapsed with the flag still set.
pub fn sleep_with_cancel(flag: &ActiveFlag, duration: Duration, poll: Duration) -> bool {
    let end = Instant::now() + duration;
    let poll = poll.max(Duration::from_millis(1));
    while flag.is_active() {
        let now = Instant::now();
        if now >= end {
            return true;
        }
        thread::sleep((end - now).min(poll));
    }
    false
}

/// Random pause between cycles, uniform in [min_delay_ms, max_delay_ms].
pub fn random_delay<R: Rng + ?Sized>(rng: &mut R, timing: &TimingSettings) -> Duration {
    let lo = timing.min_delay_ms;
    let hi = timing.max_delay_ms.max(lo);
    Duration::from_millis(rng.random_range(lo..=hi))
}

/// Glide the cursor from where it is now to `target`.
pub fn glide_cursor<D, R>(
    desktop: &D,
    target: Point,
    motion: &MotionSettings,
    rng: &mut R,
) -> PlatformResult<()>
where
    D: Desktop + ?Sized,
    R: Rng + ?Sized,
{
    let from = desktop.cursor_pos()?;
    let path = glide_path(motion.style, from, target, random_bend(rng), motion.steps);

    if path.len() == 1 {
        return desktop.set_cursor_pos(target);
    }

    for pos in path {
        desktop.set_cursor_pos(pos)?;
        thread::sleep(motion.step_delay());
    }
    Ok(())
}

/// Releases the sleep assertion on every exit path of the loop.
struct SleepGuard<'a, D: Desktop + ?Sized>(&'a D);

impl<D: Desktop + ?Sized> Drop for SleepGuard<'_, D> {
    fn drop(&mut self) {
        self.0.allow_sleep();
    }
}

/// What a single cycle ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cycle {
    Clicked,
    Cancelled,
}

/// Run cycles until `flag` is cleared.
///
/// A failing platform call abandons the current cycle; the loop carries on
/// with the next corner after the usual random pause.
pub fn run_alive_loop<D, R>(desktop: &D, flag: &ActiveFlag, settings: &Settings, rng: &mut R)
where
    D: Desktop + ?Sized,
    R: Rng + ?Sized,
{
    info!("alive loop started");
    if let Err(e) = desktop.prevent_sleep() {
        warn!("could not prevent sleep: {e}");
    }
    let _sleep_guard = SleepGuard(desktop);

    let timing = &settings.timing;
    let mut index = 0usize;
    while flag.is_active() {
        match run_cycle(desktop, flag, settings, index, rng) {
            Ok(Cycle::Cancelled) => break,
            Ok(Cycle::Clicked) => debug!(index, "cycle complete"),
            Err(e) => warn!(index, "cycle abandoned: {e}"),
        }

        let pause = random_delay(rng, timing);
        sleep_with_cancel(flag, pause, timing.cancel_poll());
        index += 1;
    }
    info!(cycles = index, "alive loop stopped");
}

fn run_cycle<D, R>(
    desktop: &D,
    flag: &ActiveFlag,
    settings: &Settings,
    index: usize,
    rng: &mut R,
) -> PlatformResult<Cycle>
where
    D: Desktop + ?Sized,
    R: Rng + ?Sized,
{
    let timing = &settings.timing;
    let origin = corner(index);

    desktop.move_button(origin);
    desktop.reinforce_topmost();

    if !sleep_with_cancel(flag, timing.settle_after_move(), timing.cancel_poll()) {
        return Ok(Cycle::Cancelled);
    }

    let target = desktop.client_to_screen(button_center(origin))?;
    glide_cursor(desktop, target, &settings.motion, rng)?;

    if !sleep_with_cancel(flag, timing.settle_before_click(), timing.cancel_poll()) {
        return Ok(Cycle::Cancelled);
    }

    desktop.click()?;
    Ok(Cycle::Clicked)
}
