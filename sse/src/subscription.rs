use crate::broker::Broker;
use crate::connection::ConnectionId;
use crate::message::Event;
use log::*;
use tokio::sync::mpsc::Receiver;

/// The receiving end of a broker registration, owned by one connection.
///
/// Dropping a subscription that was not explicitly unsubscribed closes its
/// channel and sends the removal request from a background task.
#[derive(Debug)]
pub struct Subscription {
    connection_id: ConnectionId,
    receiver: Receiver<Event>,
    broker: Broker,
    unsubscribed: bool,
}

impl Subscription {
    pub(crate) fn new(connection_id: ConnectionId, receiver: Receiver<Event>, broker: Broker) -> Self {
        Self {
            connection_id,
            receiver,
            broker,
            unsubscribed: false,
        }
    }

    pub fn id(&self) -> &ConnectionId {
        &self.connection_id
    }

    /// Waits for the next event. `None` once the broker removed this
    /// subscription or stopped.
    pub async fn recv(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }

    /// Returns an already delivered event without waiting.
    pub fn try_recv(&mut self) -> Option<Event> {
        self.receiver.try_recv().ok()
    }

    /// Stops reading and waits until the control loop has dropped the
    /// registration.
    pub async fn unsubscribe(mut self) {
        // Closing first releases a control loop blocked on our full channel.
        self.receiver.close();
        self.unsubscribed = true;
        self.broker.unsubscribe(&self.connection_id).await;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.unsubscribed {
            return;
        }
        self.receiver.close();

        let broker = self.broker.clone();
        let connection_id = self.connection_id.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                runtime.spawn(async move { broker.unsubscribe(&connection_id).await });
            }
            Err(_) => {
                warn!("No runtime to unsubscribe connection {connection_id}, it stays registered")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Broker, BrokerConfig, Event};
    use std::time::Duration;
    use tokio::time::timeout;
    use tokio_util::sync::CancellationToken;

    #[test]
    fn test_drop_after_runtime_shutdown_leaves_registration_without_panicking() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let subscription = runtime.block_on(async {
            let broker = Broker::start(BrokerConfig::default(), CancellationToken::new());
            broker.subscribe().await
        });
        drop(runtime);

        assert!(tokio::runtime::Handle::try_current().is_err());
        drop(subscription);
    }

    #[tokio::test]
    async fn test_explicit_unsubscribe_releases_a_blocked_broadcast() {
        let broker = Broker::start(BrokerConfig::default(), CancellationToken::new());
        let stalled = broker.subscribe().await;

        broker.publish(Event::new("1", "update-todos", "")).await;
        // Slot is full now, the loop blocks delivering this one to `stalled`.
        broker.publish(Event::new("2", "update-todos", "")).await;

        timeout(Duration::from_secs(5), stalled.unsubscribe())
            .await
            .expect("unsubscribe must not deadlock with a blocked broadcast");
        assert_eq!(broker.subscriber_count().await, 0);
    }

    #[tokio::test]
    async fn test_events_already_delivered_survive_removal() {
        let broker = Broker::start(BrokerConfig::default(), CancellationToken::new());
        let mut subscription = broker.subscribe().await;

        broker.publish(Event::new("1", "update-todos", "")).await;
        // Wait for the broadcast to finish before removing.
        assert_eq!(broker.subscriber_count().await, 1);
        broker.unsubscribe(subscription.id()).await;

        assert_eq!(
            subscription.recv().await,
            Some(Event::new("1", "update-todos", ""))
        );
        assert_eq!(subscription.recv().await, None);
    }
}
