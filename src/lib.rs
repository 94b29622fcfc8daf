use domain::Store;
use events::UuidGenerator;
use log::*;
use service::{config::Config, logging::Logger, AppState};
use std::future::Future;
use std::io;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use web::Demo;

/// Loads configuration, starts the broker and serves `demo` until Ctrl-C.
pub async fn run(demo: Demo) {
    let config = Config::new();

    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to start logger: {e}");
    }

    info!("Starting up the {demo:?} demo...");

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_signal(tokio::signal::ctrl_c(), shutdown.clone()));

    let ids = Arc::new(UuidGenerator);
    let store = match demo {
        Demo::Full => Store::seeded(ids.as_ref()),
        Demo::Counter => Store::new(),
    };
    let broker = service::init_broker(&config, shutdown.clone());
    let app_state = AppState::new(config, store, broker, ids);

    if let Err(e) = web::init_server(app_state, demo, shutdown).await {
        error!("Server failed: {e}");
        std::process::exit(1);
    }
}

/// Cancels `shutdown` once `signal` fires. If the signal handler cannot be
/// installed the server keeps running and has to be stopped externally.
async fn cancel_on_signal<F>(signal: F, shutdown: CancellationToken)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        error!("Unable to listen for Ctrl-C, graceful shutdown is disabled: {e}");
        return;
    }
    info!("Shutdown requested");
    shutdown.cancel();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::ready;

    #[tokio::test]
    async fn test_signal_cancels_shutdown() {
        let shutdown = CancellationToken::new();
        cancel_on_signal(ready(Ok(())), shutdown.clone()).await;
        assert!(shutdown.is_cancelled());
    }

    #[tokio::test]
    async fn test_failed_signal_handler_keeps_server_running() {
        let shutdown = CancellationToken::new();
        let failed = ready(Err(io::Error::new(io::ErrorKind::Other, "no signal driver")));

        cancel_on_signal(failed, shutdown.clone()).await;

        assert!(!shutdown.is_cancelled());
    }
}
