//! Exactly-once initialization latch for authorities
//!
//! Uses `parking_lot::Mutex` held across the initializer because:
//! - concurrent callers must not both run the underlying initialization
//! - a failed attempt must leave the latch open for a later retry
//! - `parking_lot` locks do not poison, so a panicking initializer leaves the
//!   latch uninitialized rather than wedged

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// What a successful [`InitLatch::try_initialize`] call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchTransition {
    /// This call ran the initializer and closed the latch
    Initialized,
    /// The latch was already closed; the initializer was not run
    AlreadyInitialized,
}

/// Two-state latch {uninitialized, initialized} holding the state produced by
/// the one successful initialization.
pub struct InitLatch<T> {
    state: Mutex<Option<Arc<T>>>,
}

impl<T> InitLatch<T> {
    /// Create an uninitialized latch
    pub fn new() -> Self {
        Self {
            state: Mutex::new(None),
        }
    }

    /// Run `init` unless the latch is already closed.
    ///
    /// The check and the transition happen under one lock, so at most one
    /// initializer ever succeeds. An `Err` from `init` leaves the latch open.
    pub fn try_initialize<E>(
        &self,
        init: impl FnOnce() -> Result<T, E>,
    ) -> Result<LatchTransition, E> {
        let mut state = self.state.lock();
        if state.is_some() {
            return Ok(LatchTransition::AlreadyInitialized);
        }

        let value = init()?;
        *state = Some(Arc::new(value));
        Ok(LatchTransition::Initialized)
    }

    /// Whether a previous initialization succeeded
    pub fn is_initialized(&self) -> bool {
        self.state.lock().is_some()
    }

    /// State produced by the successful initialization, if any
    pub fn get(&self) -> Option<Arc<T>> {
        self.state.lock().clone()
    }
}

impl<T> Default for InitLatch<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for InitLatch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitLatch")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
