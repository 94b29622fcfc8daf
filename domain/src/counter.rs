use crate::error::Error;
use crate::Store;
use events::{DomainEvent, EventPublisher};
use log::*;

/// Adds the submitted form value to the counter and announces the new value.
///
/// `value` must be a positive integer.
pub async fn increment(
    store: &Store,
    event_publisher: &EventPublisher,
    value: &str,
) -> Result<u64, Error> {
    let amount: i64 = value.trim().parse()?;
    if amount <= 0 {
        return Err(Error::invalid(format!(
            "counter increment must be positive, got {amount}"
        )));
    }

    let value = store.add_to_counter(amount as u64);
    debug!("Counter incremented by {amount} to {value}");

    event_publisher
        .publish(DomainEvent::CounterUpdated { value })
        .await;

    Ok(value)
}

/// The counter value, multiplied when a multiplier is given.
pub fn read(store: &Store, multiplier: Option<u64>) -> u64 {
    let value = store.counter();
    match multiplier {
        Some(m) => value.saturating_mul(m),
        None => value,
    }
}
