//! runtime.rs
//! Explicit, process-wide, one-time initialisation.
//!
//! Native libraries that need setup before their first call get a static
//! `InitGuard`. The first successful `get_or_try_init` stores the value; every
//! later call is a no-op that hands the stored value back. A failed attempt
//! stores nothing, so the next caller tries again.

use std::sync::{Mutex, OnceLock};

/// Which call actually performed the initialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    Initialized,
    AlreadyInitialized,
}

#[derive(Debug)]
pub struct InitGuard<T> {
    value: OnceLock<T>,
    lock: Mutex<()>,
}

impl<T> InitGuard<T> {
    pub const fn new() -> Self {
        Self { value: OnceLock::new(), lock: Mutex::new(()) }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }

    /// Run `init` unless a previous call already succeeded.
    ///
    /// Concurrent callers serialise here; exactly one of them runs `init`.
    pub fn get_or_try_init<E, F>(&self, init: F) -> Result<(&T, InitState), E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.value.get() {
            return Ok((value, InitState::AlreadyInitialized));
        }

        // A poisoned lock only means an earlier `init` panicked; the cell is still empty.
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(value) = self.value.get() {
            return Ok((value, InitState::AlreadyInitialized));
        }

        let value = init()?;
        Ok((self.value.get_or_init(|| value), InitState::Initialized))
    }
}

impl<T> Default for InitGuard<T> {
    fn default() -> Self {
        Self::new()
    }
}
