use tokio::signal;
use tracing::info;

/// Resolves once the host asks the process to stop: Ctrl+C everywhere,
/// SIGTERM additionally on unix (what the container runtime sends).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Ctrl+C handler installation failed");
        "Ctrl+C"
    };

    #[cfg(unix)]
    let sigterm = async {
        let mut stream = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation failed");
        stream.recv().await;
        "SIGTERM"
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<&str>();

    let reason = tokio::select! {
        r = ctrl_c => r,
        r = sigterm => r,
    };

    info!("{} received, draining connections before exit", reason);
}
