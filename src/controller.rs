//! Glue between GUI callbacks and the alive loop.
//!
//! The GUI thread owns the [`Controller`]. A button click starts the loop on
//! a worker thread; a quit request clears the flag and asks the backend to
//! leave its event loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use tracing::{debug, error, info, warn};

use crate::alive::{run_alive_loop, ActiveFlag};
use crate::config::Settings;
use crate::desktop::Desktop;
use crate::events::AppEvent;

/// Name of the worker thread running the alive loop.
pub const WORKER_THREAD_NAME: &str = "alive-loop";

pub struct Controller {
    desktop: Arc<dyn Desktop>,
    flag: ActiveFlag,
    settings: Settings,
    worker: Mutex<Option<JoinHandle<()>>>,
    /// Set by [`Controller::handle_quit`]; later clicks are ignored.
    quitting: AtomicBool,
}

impl Controller {
    pub fn new(desktop: Arc<dyn Desktop>, settings: Settings) -> Self {
        Self {
            desktop,
            flag: ActiveFlag::new(),
            settings,
            worker: Mutex::new(None),
            quitting: AtomicBool::new(false),
        }
    }

    pub fn is_active(&self) -> bool {
        self.flag.is_active()
    }

    /// Start the alive loop. Returns false when it is already running, a
    /// quit is in progress or the worker thread could not be spawned.
    pub fn handle_button_click(&self) -> bool {
        if self.quitting.load(Ordering::SeqCst) {
            debug!("button clicked while quitting, ignoring");
            return false;
        }
        if self.flag.is_active() {
            debug!("button clicked while active, ignoring");
            return false;
        }

        // A stopped worker may still be winding down; it must release its
        // sleep assertion before the next one takes it.
        self.join_worker();

        if !self.flag.activate() {
            return false;
        }

        self.desktop.set_button_active(true);

        let desktop = Arc::clone(&self.desktop);
        let flag = self.flag.clone();
        let settings = self.settings.clone();
        let spawned = thread::Builder::new()
            .name(WORKER_THREAD_NAME.into())
            .spawn(move || {
                let mut rng = rand::rng();
                run_alive_loop(desktop.as_ref(), &flag, &settings, &mut rng);
            });

        match spawned {
            Ok(handle) => {
                match self.worker.lock() {
                    Ok(mut worker) => *worker = Some(handle),
                    Err(poisoned) => *poisoned.into_inner() = Some(handle),
                }
                info!("alive loop activated");
                true
            }
            Err(e) => {
                error!("failed to spawn {WORKER_THREAD_NAME}: {e}");
                self.flag.set(false);
                self.desktop.set_button_active(false);
                false
            }
        }
    }

    /// Stop the loop (if running) and ask the GUI to terminate.
    pub fn handle_quit(&self) {
        info!("quit requested");
        self.quitting.store(true, Ordering::SeqCst);
        self.flag.set(false);
        self.desktop.quit();
    }

    /// Route a GUI-originated event. UI commands are not handled here.
    pub fn handle_event(&self, event: &AppEvent) {
        match event {
            AppEvent::ButtonClicked => {
                self.handle_button_click();
            }
            AppEvent::QuitRequested => self.handle_quit(),
            other => debug!("controller ignores {}", other.description()),
        }
    }

    /// Clear the flag and wait for the worker to finish.
    pub fn shutdown(&self) {
        self.flag.set(false);
        self.join_worker();
    }

    fn join_worker(&self) {
        let handle = match self.worker.lock() {
            Ok(mut worker) => worker.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(handle) = handle {
            if handle.join().is_err() {
                warn!("{WORKER_THREAD_NAME} panicked");
            }
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.shutdown();
    }
}
