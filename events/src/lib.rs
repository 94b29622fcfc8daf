//! Event system infrastructure for the live demo servers.
//!
//! This crate provides the event system that decouples the demo's state
//! changes from infrastructure concerns (like SSE notifications).
//!
//! # Architecture
//!
//! - **DomainEvent**: Enum representing every state change the demo announces
//! - **EventHandler**: Trait for implementing event handlers
//! - **EventPublisher**: Publishes events to registered handlers
//! - **IdGenerator**: Capability for minting event and entity ids
//!
//! This crate has no dependencies on internal crates (domain, sse, etc.),
//! avoiding circular dependencies.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

pub mod id;

pub use id::{IdGenerator, SequentialIdGenerator, UuidGenerator};

/// Event name the browser listens on to refresh counter fragments.
pub const UPDATE_COUNTER: &str = "update-counter";

/// Event name the browser listens on to refresh todo fragments.
pub const UPDATE_TODOS: &str = "update-todos";

/// Domain events that represent state changes in the demo.
/// These events are emitted after a mutation of the store completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DomainEvent {
    /// Emitted when the counter has been incremented.
    CounterUpdated {
        /// The counter value after the increment.
        value: u64,
    },
    /// Emitted when a todo was added to or removed from the list.
    TodosUpdated {
        /// Number of todos after the change.
        count: usize,
    },
}

impl DomainEvent {
    /// The name clients subscribe to for this kind of event.
    pub fn name(&self) -> &'static str {
        match self {
            DomainEvent::CounterUpdated { .. } => UPDATE_COUNTER,
            DomainEvent::TodosUpdated { .. } => UPDATE_TODOS,
        }
    }

    /// The event body as a JSON value.
    pub fn payload(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Trait for handling domain events.
/// Implementations can perform side effects like sending notifications,
/// updating caches, logging, etc.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &DomainEvent);
}

/// Publishes domain events to registered handlers.
/// Handlers are called sequentially in registration order.
#[derive(Clone)]
pub struct EventPublisher {
    handlers: Arc<Vec<Arc<dyn EventHandler>>>,
}

impl EventPublisher {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Vec::new()),
        }
    }

    /// Register a new event handler.
    /// Note: This creates a new publisher instance with the additional handler.
    /// Store the returned publisher in your application state.
    pub fn with_handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
        let mut handlers = (*self.handlers).clone();
        handlers.push(handler);
        self.handlers = Arc::new(handlers);
        self
    }

    /// Publish an event to all registered handlers, one after the other.
    pub async fn publish(&self, event: DomainEvent) {
        for handler in self.handlers.iter() {
            handler.handle(&event).await;
        }
    }
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingHandler {
        label: &'static str,
        seen: Arc<Mutex<Vec<(&'static str, DomainEvent)>>>,
    }

    #[async_trait]
    impl EventHandler for RecordingHandler {
        async fn handle(&self, event: &DomainEvent) {
            self.seen.lock().await.push((self.label, event.clone()));
        }
    }

    #[test]
    fn test_event_names_match_client_listeners() {
        assert_eq!(
            DomainEvent::CounterUpdated { value: 3 }.name(),
            "update-counter"
        );
        assert_eq!(DomainEvent::TodosUpdated { count: 1 }.name(), "update-todos");
    }

    #[test]
    fn test_payload_is_flat_json() {
        assert_eq!(
            DomainEvent::CounterUpdated { value: 7 }.payload(),
            json!({"value": 7})
        );
        assert_eq!(
            DomainEvent::TodosUpdated { count: 2 }.payload(),
            json!({"count": 2})
        );
    }

    #[tokio::test]
    async fn test_publish_without_handlers_is_a_no_op() {
        EventPublisher::default()
            .publish(DomainEvent::TodosUpdated { count: 0 })
            .await;
    }

    #[tokio::test]
    async fn test_handlers_run_in_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let publisher = EventPublisher::new()
            .with_handler(Arc::new(RecordingHandler {
                label: "first",
                seen: seen.clone(),
            }))
            .with_handler(Arc::new(RecordingHandler {
                label: "second",
                seen: seen.clone(),
            }));

        publisher
            .publish(DomainEvent::CounterUpdated { value: 1 })
            .await;

        let seen = seen.lock().await;
        let labels: Vec<_> = seen.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["first", "second"]);
        assert!(seen
            .iter()
            .all(|(_, event)| *event == DomainEvent::CounterUpdated { value: 1 }));
    }
}
