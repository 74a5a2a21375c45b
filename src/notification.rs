//! Notification slot for surfacing store errors to the user.
//!
//! Models a single visible notification field. Posting a message clears the
//! field right away and publishes the message on the next redraw tick, so the
//! same message posted twice in a row is shown again instead of being ignored.

use parking_lot::Mutex;

/// Receives user-facing messages, typically error strings from the store
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str);
}

#[derive(Debug, Default)]
struct SlotState {
    current: String,
    pending: Option<String>,
}

/// A single notification field updated on tick boundaries.
///
/// The host's redraw loop calls [`NotificationSlot::tick`] once per cycle.
/// When several messages arrive within one cycle, the last one wins.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    state: Mutex<SlotState>,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The message currently shown, empty when there is none
    pub fn current(&self) -> String {
        self.state.lock().current.clone()
    }

    /// Whether a message is waiting for the next tick
    pub fn has_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }

    /// Publish the pending message, if any.
    ///
    /// Returns true if the visible notification changed.
    pub fn tick(&self) -> bool {
        let mut state = self.state.lock();
        match state.pending.take() {
            Some(message) => {
                state.current = message;
                true
            }
            None => false,
        }
    }

    /// Drop both the visible and the pending message
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.current.clear();
        state.pending = None;
    }
}

impl NotificationSink for NotificationSlot {
    fn notify(&self, message: &str) {
        let mut state = self.state.lock();
        state.current.clear();
        state.pending = Some(message.to_string());
    }
}

#[cfg(test)]
#[path = "notification_test.rs"]
mod tests;
