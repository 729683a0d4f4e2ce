//! Door lock state and the toggle action.
//!
//! There is no device link yet: toggling only records the new state and logs
//! what would be sent.

use crate::types::LockState;
use tracing::info;

#[derive(Debug, Default)]
pub struct DoorLock {
    state: LockState,
}

impl DoorLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    /// Flip the lock and log the intended device command. Returns the new state.
    pub fn toggle(&mut self) -> LockState {
        self.state = self.state.toggled();
        // Device control call goes here
        match self.state {
            LockState::Locked => info!(target: "door", action = "lock", "Locking door..."),
            LockState::Unlocked => info!(target: "door", action = "unlock", "Unlocking door..."),
        }
        self.state
    }
}
