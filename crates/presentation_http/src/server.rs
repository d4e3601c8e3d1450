//! Server loop with a bounded graceful shutdown

use std::{future::IntoFuture, sync::Arc, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::Notify};
use tracing::{info, warn};

/// Serve `app` until `signal` resolves, then drain for at most `timeout`
///
/// Connections still open when the timeout expires are abandoned.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    timeout: Duration,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let triggered = Arc::new(Notify::new());
    let notifier = Arc::clone(&triggered);

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            notifier.notify_one();
        })
        .into_future();

    let deadline = async {
        triggered.notified().await;
        info!("Waiting up to {:?} for connections to close...", timeout);
        tokio::time::sleep(timeout).await;
    };

    tokio::select! {
        result = server => result,
        () = deadline => {
            warn!(?timeout, "Shutdown timeout elapsed, dropping open connections");
            Ok(())
        }
    }
}
