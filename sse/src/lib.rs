//! Server-Sent Events (SSE) broker for live page updates.
//!
//! This crate fans every published update out to all connected browsers.
//!
//! # Architecture
//!
//! - **Single control loop**: one task owns the registration table. Subscribe,
//!   unsubscribe and publish requests arrive on their own queues and are
//!   processed one at a time, so the table needs no lock.
//! - **Acknowledged hand-off**: callers wait until the loop has taken their
//!   request, never for fan-out to finish.
//! - **Ephemeral events**: nothing is retained; a subscriber only sees events
//!   published after its registration was taken.
//! - **Overflow policy**: by default the loop waits on a full subscriber
//!   channel (one slow reader delays everyone). `OverflowPolicy::Drop` skips
//!   the event for the full subscriber instead.
//!
//! # Message Flow
//!
//! 1. Browser opens `/events`; the handler calls `Broker::subscribe`
//! 2. A form post mutates the store, which publishes a `DomainEvent`
//! 3. `SseDomainEventHandler` turns it into an `Event` and calls `Broker::publish`
//! 4. The control loop hands the event to every registered subscription
//! 5. The handler frames it as `id:`/`event:`/`data:` lines and flushes it
//! 6. When the browser goes away the subscription is dropped and unregistered
//!
//! # Example
//!
//! ```rust,ignore
//! let broker = Broker::start(BrokerConfig::default(), cancel_token.clone());
//! let mut subscription = broker.subscribe().await;
//! broker.publish(Event::new("1", "update-counter", "")).await;
//! assert_eq!(subscription.recv().await.unwrap().name(), "update-counter");
//! ```
//!
//! # Modules
//!
//! - `broker`: the `Broker` handle and its control loop
//! - `config`: `BrokerConfig` and `OverflowPolicy`
//! - `connection`: `ConnectionId` and the loop-owned registration table
//! - `domain_event_handler`: adapter from domain events to SSE events
//! - `message`: the `Event` record and its wire encoding
//! - `subscription`: the per-connection receiving handle

pub mod broker;
pub mod config;
pub mod connection;
pub mod domain_event_handler;
pub mod message;
pub mod subscription;

pub use broker::Broker;
pub use config::{BrokerConfig, OverflowPolicy};
pub use connection::ConnectionId;
pub use message::Event;
pub use subscription::Subscription;
