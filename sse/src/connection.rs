use crate::config::OverflowPolicy;
use crate::message::Event;
use log::*;
use std::collections::HashMap;
use std::fmt;
use tokio::select;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;

/// Unique identifier for a subscriber connection (server-generated)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The set of live subscriber channels.
///
/// Owned by the broker's control loop and never shared, so none of these
/// methods need synchronisation.
pub(crate) struct Registry {
    connections: HashMap<ConnectionId, Sender<Event>>,
    overflow_policy: OverflowPolicy,
}

impl Registry {
    pub(crate) fn new(overflow_policy: OverflowPolicy) -> Self {
        Self {
            connections: HashMap::new(),
            overflow_policy,
        }
    }

    /// Registers a connection and returns the number of live connections.
    pub(crate) fn register(&mut self, connection_id: ConnectionId, sender: Sender<Event>) -> usize {
        self.connections.insert(connection_id, sender);
        self.connections.len()
    }

    /// Returns `false` when the connection was not registered.
    pub(crate) fn unregister(&mut self, connection_id: &ConnectionId) -> bool {
        self.connections.remove(connection_id).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.connections.len()
    }

    pub(crate) fn clear(&mut self) {
        self.connections.clear();
    }

    /// Hands `event` to every registered connection, one at a time.
    ///
    /// Under [`OverflowPolicy::Block`] a full channel suspends the whole
    /// broadcast until its reader catches up or `cancel_token` fires.
    pub(crate) async fn broadcast(&self, event: &Event, cancel_token: &CancellationToken) {
        for (connection_id, sender) in self.connections.iter() {
            match self.overflow_policy {
                OverflowPolicy::Block => {
                    select! {
                        result = sender.send(event.clone()) => {
                            if result.is_err() {
                                debug!(
                                    "Connection {connection_id} is gone but still registered, event {} not delivered",
                                    event.id()
                                );
                            }
                        }
                        _ = cancel_token.cancelled() => return,
                    }
                }
                OverflowPolicy::Drop => match sender.try_send(event.clone()) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        warn!(
                            "Connection {connection_id} is not keeping up, dropped event {}",
                            event.id()
                        );
                    }
                    Err(TrySendError::Closed(_)) => {
                        debug!(
                            "Connection {connection_id} is gone but still registered, event {} not delivered",
                            event.id()
                        );
                    }
                },
            }
        }
    }
}
