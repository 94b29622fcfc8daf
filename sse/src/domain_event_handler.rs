use crate::message::Event as SseEvent;
use crate::Broker;
use async_trait::async_trait;
use events::{DomainEvent, EventHandler, IdGenerator};
use log::*;
use std::sync::Arc;

/// Handles domain events by converting them to SSE events and publishing them
/// on the broker.
///
/// Each SSE event gets a fresh id from the injected generator, the domain
/// event's name and its JSON payload.
pub struct SseDomainEventHandler {
    broker: Broker,
    ids: Arc<dyn IdGenerator>,
}

impl SseDomainEventHandler {
    pub fn new(broker: Broker, ids: Arc<dyn IdGenerator>) -> Self {
        Self { broker, ids }
    }
}

#[async_trait]
impl EventHandler for SseDomainEventHandler {
    async fn handle(&self, event: &DomainEvent) {
        let sse_event = SseEvent::new(
            self.ids.next_id(),
            event.name(),
            event.payload().to_string(),
        );

        debug!(
            "Publishing SSE event {} ({}) for {event:?}",
            sse_event.id(),
            sse_event.name()
        );

        self.broker.publish(sse_event).await;
    }
}
