//! Periodic self-ping task.
//!
//! A background tokio task issues an HTTP GET against the service's own
//! health-check URL on a fixed period. Every outcome is logged and contained:
//! a failed tick never propagates and the next tick is the only retry. The
//! task is owned through a [`PingHandle`] so it can be stopped gracefully in
//! tests; in production the handle lives until process exit.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Handle to the running self-ping task.
///
/// Supports graceful shutdown via [`stop`](Self::stop); dropping the handle
/// sends a best-effort stop signal and aborts the task if it has not finished.
pub struct PingHandle {
    inner: Option<JoinHandle<()>>,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl PingHandle {
    /// Signal the task to stop and wait for it to finish.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.inner.take() {
            let _ = handle.await;
        }
    }

    /// `true` once the underlying task has completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.inner.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for PingHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.inner.take()
            && !handle.is_finished()
        {
            handle.abort();
        }
    }
}

/// Spawn the self-ping task against `url`, ticking every `period`.
///
/// The first ping fires one full period after spawn, matching a plain interval
/// timer rather than an immediate probe.
pub fn spawn(url: String, period: Duration) -> PingHandle {
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
    let client = reqwest::Client::new();

    let inner = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // interval's first tick completes immediately; consume it so ticks
        // land at period boundaries.
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = &mut stop_rx => break,
                _ = ticker.tick() => ping_once(&client, &url).await,
            }
        }
    });

    PingHandle {
        inner: Some(inner),
        stop_tx: Some(stop_tx),
    }
}

/// One tick: GET the health URL and log the outcome, whatever it is.
async fn ping_once(client: &reqwest::Client, url: &str) {
    match client.get(url).send().await {
        Ok(resp) => info!(status = %resp.status(), url, "self-ping ok"),
        Err(err) => warn!(%err, url, "self-ping failed"),
    }
}
