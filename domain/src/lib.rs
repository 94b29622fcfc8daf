//! The demo's state and the operations that change it.
//!
//! Every mutation publishes a `DomainEvent` through the `EventPublisher` it is
//! given, so browsers can refresh the affected fragments.
pub use events::{DomainEvent, EventPublisher, IdGenerator};
pub use store::{Store, Todo};

pub mod counter;
pub mod error;
pub mod store;
pub mod todo;
