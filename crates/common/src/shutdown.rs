//! Process shutdown signalling shared by the server binaries.

use tokio::signal;

/// Resolves once the process receives SIGINT (or SIGTERM on unix).
///
/// Meant for `axum::serve(..).with_graceful_shutdown(..)`.
pub async fn shutdown_signal() {
    let signal_name = tokio::select! {
        () = interrupt() => "SIGINT",
        () = terminate() => "SIGTERM",
    };
    tracing::info!(signal = signal_name, "starting graceful shutdown");
}

async fn interrupt() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install SIGINT handler");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to install SIGTERM handler");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}
