use crate::AppState;
use async_stream::stream;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use log::*;
use std::convert::Infallible;

/// SSE handler that keeps a long-lived connection open and forwards every
/// broker event to it.
///
/// When the client goes away axum drops the stream, and with it the
/// subscription, which unregisters itself from the broker.
pub(crate) async fn sse_handler(
    State(app_state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut subscription = app_state.broker.subscribe().await;
    let connection_id = subscription.id().clone();
    debug!("Established SSE connection {connection_id}");

    let stream = stream! {
        while let Some(event) = subscription.recv().await {
            trace!("Sending event {} to SSE connection {connection_id}", event.id());
            yield Ok::<_, Infallible>(Event::from(event));
        }

        // Broker stopped, the server is shutting down
        debug!("SSE connection {connection_id} closed by the broker");
    };

    Sse::new(stream).keep_alive(KeepAlive::new().interval(app_state.config.sse_keep_alive()))
}
