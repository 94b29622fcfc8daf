//! HTTP front end of the live demos: pages, htmx fragments, form posts and the
//! `/events` stream.

use log::*;
use std::io;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

pub use error::{Error, Result};
pub use service::AppState;

mod controller;
mod error;
mod middleware;
mod params;
mod response;
pub mod router;
mod sse;

/// Which of the two demo servers to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// Counter, doubled counter, todo list and todo count.
    Full,
    /// Counter pages and the event stream only.
    Counter,
}

/// Binds the configured address and serves until `shutdown` is cancelled.
///
/// The broker should stop on the same token so open event streams end and
/// graceful shutdown can complete.
pub async fn init_server(
    app_state: AppState,
    demo: Demo,
    shutdown: CancellationToken,
) -> io::Result<()> {
    let host = app_state.config.interface().to_string();
    let port = app_state.config.port;

    let listener = TcpListener::bind((host.as_str(), port)).await?;
    info!("Server starting... listening for connections on http://{host}:{port} ({demo:?} demo)");

    let router = router::define_routes(app_state, demo);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Server stopped");
    Ok(())
}
