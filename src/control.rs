//! Control messages from a control context to the audio context.
//!
//! The channel holds at most one pending update. Sending coalesces into it:
//! the latest activation state and the latest target formants win, older
//! values are dropped. The audio side polls once per block and never waits
//! for the lock; a poll that finds it held leaves the update for the next
//! block.

use alloc::sync::Arc;

use spin::Mutex;

use crate::formant::FormantSet;

/// Discrete control message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Starts (`true`) or hard-mutes (`false`) the output.
    Activate(bool),

    /// Replaces the formants used for lanes the host does not automate.
    SetTargetFormants(FormantSet),
}

/// Coalesced state of all commands sent since the last poll.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PendingUpdate {
    pub active: Option<bool>,
    pub target_formants: Option<FormantSet>,
}

impl PendingUpdate {
    pub fn is_empty(&self) -> bool {
        self.active.is_none() && self.target_formants.is_none()
    }

    /// Merges `command` into the update, replacing an older value of the same kind.
    pub fn push(&mut self, command: Command) {
        match command {
            Command::Activate(active) => self.active = Some(active),
            Command::SetTargetFormants(formants) => self.target_formants = Some(formants),
        }
    }
}

/// Creates a connected sender/receiver pair.
pub fn channel() -> (ControlSender, ControlReceiver) {
    let slot = Arc::new(Mutex::new(PendingUpdate::default()));

    (
        ControlSender { slot: slot.clone() },
        ControlReceiver { slot },
    )
}

/// Control side of the channel.
#[derive(Debug)]
pub struct ControlSender {
    slot: Arc<Mutex<PendingUpdate>>,
}

impl ControlSender {
    pub fn send(&self, command: Command) {
        match &command {
            Command::Activate(active) => log::debug!("Activate: {active}"),
            Command::SetTargetFormants(formants) => log::debug!(
                "Target formants: {:.0}/{:.0}/{:.0}/{:.0} Hz",
                formants[0].frequency,
                formants[1].frequency,
                formants[2].frequency,
                formants[3].frequency
            ),
        }

        self.slot.lock().push(command);
    }
}

/// Audio side of the channel.
#[derive(Debug)]
pub struct ControlReceiver {
    slot: Arc<Mutex<PendingUpdate>>,
}

impl ControlReceiver {
    /// Takes the pending update, if any.
    ///
    /// Returns `None` when nothing was sent or when the sender currently holds
    /// the slot.
    #[inline]
    pub fn poll(&self) -> Option<PendingUpdate> {
        let mut slot = self.slot.try_lock()?;
        if slot.is_empty() {
            return None;
        }

        Some(core::mem::take(&mut *slot))
    }
}
