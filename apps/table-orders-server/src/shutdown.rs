//! Shutdown: wait for the process to be asked to stop, then settle whatever
//! QR work is still running in the background.

use anyhow::{Context, Result};
use table_orders::infra::qr::QrSummary;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Interrupt,
    #[cfg_attr(not(unix), allow(dead_code))]
    Terminate,
}

impl StopReason {
    fn signal_name(self) -> &'static str {
        match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        }
    }
}

/// Resolve on Ctrl+C, or SIGTERM on unix.
///
/// # Errors
/// Returns an error if a signal listener cannot be installed.
pub async fn stop_requested() -> Result<StopReason> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate =
            signal(SignalKind::terminate()).context("failed to install SIGTERM listener")?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                res.context("failed to listen for Ctrl+C")?;
                Ok(StopReason::Interrupt)
            }
            _ = terminate.recv() => Ok(StopReason::Terminate),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .context("failed to listen for Ctrl+C")?;
        Ok(StopReason::Interrupt)
    }
}

/// Graceful-shutdown future for the HTTP server. A listener failure also
/// stops the server, since it could otherwise never be stopped cleanly.
pub async fn server_shutdown() {
    match stop_requested().await {
        Ok(reason) => tracing::info!(
            signal = reason.signal_name(),
            "Shutdown requested, draining connections"
        ),
        Err(e) => tracing::error!(error = %e, "Signal handling failed; shutting down"),
    }
}

/// Abort QR generation that is still running once the server has stopped.
///
/// Returns the summary when generation had already finished.
pub async fn settle_qr_drain(drain: Option<JoinHandle<QrSummary>>) -> Option<QrSummary> {
    let drain = drain?;
    if !drain.is_finished() {
        tracing::warn!("QR generation still running at shutdown; aborting remaining tables");
        drain.abort();
    }

    match drain.await {
        Ok(summary) => Some(summary),
        Err(e) if e.is_cancelled() => None,
        Err(e) => {
            tracing::error!(error = %e, "QR generation task failed");
            None
        }
    }
}
