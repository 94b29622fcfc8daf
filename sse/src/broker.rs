use crate::config::BrokerConfig;
use crate::connection::{ConnectionId, Registry};
use crate::message::Event;
use crate::subscription::Subscription;
use log::*;
use tokio::select;
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;

/// Slots in each request queue. One slot keeps a caller waiting until the
/// control loop has taken the previous request.
const REQUEST_QUEUE_CAPACITY: usize = 1;

/// A request for the control loop, acknowledged once the loop has taken it.
struct Request<T> {
    payload: T,
    accepted: oneshot::Sender<()>,
}

impl<T> Request<T> {
    fn accept(self) -> T {
        let _ = self.accepted.send(());
        self.payload
    }
}

type Registration = (ConnectionId, mpsc::Sender<Event>);

/// Cloneable front end to the broker's control loop.
///
/// Every operation is a message to the loop; the registration table itself is
/// only ever touched by the loop task.
#[derive(Clone, Debug)]
pub struct Broker {
    subscribe_tx: mpsc::Sender<Request<Registration>>,
    unsubscribe_tx: mpsc::Sender<Request<ConnectionId>>,
    publish_tx: mpsc::Sender<Request<Event>>,
    count_tx: mpsc::Sender<oneshot::Sender<usize>>,
    config: BrokerConfig,
}

impl Broker {
    /// Spawns the control loop on the current runtime and returns its handle.
    /// The loop runs until `cancel_token` is cancelled.
    pub fn start(config: BrokerConfig, cancel_token: CancellationToken) -> Self {
        let (broker, control_loop) = Self::new(config, cancel_token);
        tokio::spawn(control_loop.run());
        broker
    }

    fn new(config: BrokerConfig, cancel_token: CancellationToken) -> (Self, ControlLoop) {
        let (subscribe_tx, subscribe_rx) = mpsc::channel(REQUEST_QUEUE_CAPACITY);
        let (unsubscribe_tx, unsubscribe_rx) = mpsc::channel(REQUEST_QUEUE_CAPACITY);
        let (publish_tx, publish_rx) = mpsc::channel(REQUEST_QUEUE_CAPACITY);
        let (count_tx, count_rx) = mpsc::channel(REQUEST_QUEUE_CAPACITY);

        let broker = Self {
            subscribe_tx,
            unsubscribe_tx,
            publish_tx,
            count_tx,
            config,
        };
        let control_loop = ControlLoop {
            subscribe_rx,
            unsubscribe_rx,
            publish_rx,
            count_rx,
            registry: Registry::new(config.overflow_policy),
            cancel_token,
        };
        (broker, control_loop)
    }

    pub fn config(&self) -> BrokerConfig {
        self.config
    }

    /// Opens a new delivery channel and registers it.
    ///
    /// Returns once the control loop has taken the registration, so any event
    /// published after this call returns reaches the new subscription. On a
    /// stopped broker the returned subscription is already closed.
    pub async fn subscribe(&self) -> Subscription {
        let connection_id = ConnectionId::new();
        let (sender, receiver) = mpsc::channel(self.config.subscriber_capacity);

        if !submit(&self.subscribe_tx, (connection_id.clone(), sender)).await {
            warn!("SSE broker is stopped, subscription {connection_id} will not receive events");
        }

        Subscription::new(connection_id, receiver, self.clone())
    }

    /// Removes a subscription. Removing one that is already gone is a no-op.
    ///
    /// Events the loop handed over before it processed the removal stay in the
    /// subscription's channel.
    pub async fn unsubscribe(&self, connection_id: &ConnectionId) {
        if !submit(&self.unsubscribe_tx, connection_id.clone()).await {
            debug!("SSE broker is stopped, nothing to unsubscribe for {connection_id}");
        }
    }

    /// Hands `event` to the control loop for delivery to every current
    /// subscriber. Waits for the loop to take the event, not for delivery.
    pub async fn publish(&self, event: Event) {
        let event_id = event.id().to_owned();
        if !submit(&self.publish_tx, event).await {
            warn!("SSE broker is stopped, event {event_id} dropped");
        }
    }

    /// Number of registered subscriptions, or 0 once the broker is stopped.
    pub async fn subscriber_count(&self) -> usize {
        let (reply, count) = oneshot::channel();
        if self.count_tx.send(reply).await.is_err() {
            return 0;
        }
        count.await.unwrap_or(0)
    }
}

/// Queues `payload` and waits for the control loop to accept it.
/// Returns `false` if the loop has stopped.
async fn submit<T>(queue: &mpsc::Sender<Request<T>>, payload: T) -> bool {
    let (accepted, acknowledgement) = oneshot::channel();
    if queue.send(Request { payload, accepted }).await.is_err() {
        return false;
    }
    acknowledgement.await.is_ok()
}

/// The single task that owns the registration table. Requests are taken one
/// at a time; when several queues are ready the pick is random.
struct ControlLoop {
    subscribe_rx: mpsc::Receiver<Request<Registration>>,
    unsubscribe_rx: mpsc::Receiver<Request<ConnectionId>>,
    publish_rx: mpsc::Receiver<Request<Event>>,
    count_rx: mpsc::Receiver<oneshot::Sender<usize>>,
    registry: Registry,
    cancel_token: CancellationToken,
}

impl ControlLoop {
    async fn run(mut self) {
        info!("SSE broker started");
        loop {
            select! {
                _ = self.cancel_token.cancelled() => break,
                Some(request) = self.subscribe_rx.recv() => {
                    let (connection_id, sender) = request.accept();
                    let count = self.registry.register(connection_id, sender);
                    info!("Client added. {count} registered clients");
                }
                Some(request) = self.unsubscribe_rx.recv() => {
                    let connection_id = request.accept();
                    if self.registry.unregister(&connection_id) {
                        info!("Removed client. {} registered clients", self.registry.len());
                    } else {
                        debug!("Connection {connection_id} was already removed");
                    }
                }
                Some(request) = self.publish_rx.recv() => {
                    let event = request.accept();
                    trace!(
                        "Broadcasting event {} ({}) to {} clients",
                        event.id(),
                        event.name(),
                        self.registry.len()
                    );
                    self.registry.broadcast(&event, &self.cancel_token).await;
                }
                Some(reply) = self.count_rx.recv() => {
                    let _ = reply.send(self.registry.len());
                }
                else => break,
            }
        }
        self.registry.clear();
        info!("SSE broker stopped");
    }
}
