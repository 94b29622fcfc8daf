use config::Config;
use domain::Store;
use events::{EventPublisher, IdGenerator};
use log::info;
use sse::domain_event_handler::SseDomainEventHandler;
use sse::Broker;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub mod config;
pub mod logging;

/// Starts the SSE broker's control loop. It stops when `cancel_token` fires.
pub fn init_broker(config: &Config, cancel_token: CancellationToken) -> Broker {
    let broker_config = config.broker_config();
    info!(
        "SSE broker config: subscriber_capacity={}, overflow_policy={}",
        broker_config.subscriber_capacity, broker_config.overflow_policy,
    );

    Broker::start(broker_config, cancel_token)
}

// Service-level state shared by every request handler.
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<Store>,
    pub broker: Broker,
    pub event_publisher: Arc<EventPublisher>,
    pub id_generator: Arc<dyn IdGenerator>,
}

impl AppState {
    /// Wires the store's domain events into the broker.
    pub fn new(
        app_config: Config,
        store: Store,
        broker: Broker,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        let event_publisher = EventPublisher::new().with_handler(Arc::new(
            SseDomainEventHandler::new(broker.clone(), Arc::clone(&id_generator)),
        ));

        Self {
            config: app_config,
            store: Arc::new(store),
            broker,
            event_publisher: Arc::new(event_publisher),
            id_generator,
        }
    }

    pub fn store_ref(&self) -> &Store {
        self.store.as_ref()
    }

    pub fn ids_ref(&self) -> &dyn IdGenerator {
        self.id_generator.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use events::{DomainEvent, SequentialIdGenerator};
    use sse::Event;

    #[tokio::test]
    async fn test_app_state_forwards_domain_events_to_the_broker() {
        let config = Config::parse_from(["sse_demo"]);
        let broker = init_broker(&config, CancellationToken::new());
        let app_state = AppState::new(
            config,
            Store::new(),
            broker,
            Arc::new(SequentialIdGenerator::new()),
        );
        let mut subscription = app_state.broker.subscribe().await;

        app_state
            .event_publisher
            .publish(DomainEvent::TodosUpdated { count: 1 })
            .await;

        assert_eq!(
            subscription.recv().await,
            Some(Event::new("1", "update-todos", r#"{"count":1}"#))
        );
    }
}
