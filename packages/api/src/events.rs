//! Application-level session events.
//!
//! The HTTP layer never navigates. When an authenticated request is refused
//! with 401 it clears the stored tokens and publishes
//! [`SessionEvent::Invalidated`]; whoever owns routing subscribes and decides
//! what to show next.

use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backend rejected the stored token; the session is gone.
    Invalidated,
}

/// Broadcast hub for [`SessionEvent`]s. Clones share the same channel.
#[derive(Debug, Clone)]
pub struct SessionEvents {
    sender: broadcast::Sender<SessionEvent>,
}

impl SessionEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    /// Publish an event. Having no subscribers is not an error.
    pub fn notify(&self, event: SessionEvent) {
        let delivered = self.sender.send(event).unwrap_or(0);
        tracing::debug!("Session event {:?} delivered to {} listeners", event, delivered);
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new()
    }
}
