//! Display-sleep assertion shared by both backends.

use std::sync::{Mutex, MutexGuard};

use keepawake::{Builder, KeepAwake};
use tracing::debug;

use crate::error::{PlatformError, PlatformResult};
use crate::{APP_NAME, APP_REVERSE_DOMAIN};

const KEEP_AWAKE_REASON: &str = "KeepAlive is simulating user activity";

/// Holds at most one power assertion; dropping the handle releases it.
#[derive(Default)]
pub struct SleepInhibitor {
    handle: Mutex<Option<KeepAwake>>,
}

impl SleepInhibitor {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_handle(&self) -> MutexGuard<'_, Option<KeepAwake>> {
        self.handle.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn acquire() -> PlatformResult<KeepAwake> {
        Builder::default()
            .display(true)
            .idle(true)
            .reason(KEEP_AWAKE_REASON)
            .app_name(APP_NAME)
            .app_reverse_domain(APP_REVERSE_DOMAIN)
            .create()
            .map_err(|err| PlatformError::Power(err.to_string()))
    }

    /// Acquire the assertion if none is held.
    pub fn prevent(&self) -> PlatformResult<()> {
        let mut handle = self.lock_handle();
        if handle.is_none() {
            *handle = Some(Self::acquire()?);
            debug!("display sleep prevented");
        }
        Ok(())
    }

    /// Release the assertion if held.
    pub fn allow(&self) {
        if self.lock_handle().take().is_some() {
            debug!("display sleep allowed");
        }
    }

    pub fn is_held(&self) -> bool {
        self.lock_handle().is_some()
    }
}
