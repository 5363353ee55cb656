//! In-process refresh signalling backed by a `tokio::sync::broadcast` channel.
//!
//! A mutation that changes data shown by another section publishes a
//! [`RefreshSignal`]; the event workspace and the dashboard drain pending
//! signals and refetch the matching sections. Refetch stays the only consistency
//! mechanism: a signal carries no data.

use mywedding_core::types::EntityId;
use tokio::sync::broadcast;

/// Which backend resource changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Events,
    Event,
    Budget,
    Activity,
    Polls,
    Preferences,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshSignal {
    /// `None` for user-wide resources such as the event list.
    pub event_id: Option<EntityId>,
    pub resource: Resource,
}

impl RefreshSignal {
    pub fn event(event_id: impl Into<EntityId>, resource: Resource) -> Self {
        Self {
            event_id: Some(event_id.into()),
            resource,
        }
    }

    pub fn global(resource: Resource) -> Self {
        Self {
            event_id: None,
            resource,
        }
    }

    /// Whether a workspace for `event_id` should act on this signal.
    pub fn concerns(&self, event_id: &str) -> bool {
        self.event_id.as_deref().map_or(true, |id| id == event_id)
    }
}

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 64;

/// Fan-out bus for [`RefreshSignal`]s. Clones share the channel.
#[derive(Debug, Clone)]
pub struct RefreshBus {
    sender: broadcast::Sender<RefreshSignal>,
}

impl RefreshBus {
    /// When the buffer is full the oldest signals are dropped and slow
    /// receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, signal: RefreshSignal) {
        tracing::debug!(event_id = ?signal.event_id, resource = ?signal.resource, "Refresh requested");
        // Zero receivers just means no workspace is mounted.
        let _ = self.sender.send(signal);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RefreshSignal> {
        self.sender.subscribe()
    }
}

impl Default for RefreshBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
