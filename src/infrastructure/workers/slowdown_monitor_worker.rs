use std::time::Duration;

use log::{error, info};
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::sleep;

use crate::infrastructure::slowdown::slowdown_monitor::SlowdownMonitor;

pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(30);

/// Keeps the slowdown state current when there is no traffic. Runs until
/// `shutdown` flips to `true` or its sender is dropped.
pub async fn slowdown_monitor_worker(
	monitor: SlowdownMonitor,
	check_interval: Duration,
	mut shutdown: watch::Receiver<bool>,
) {
	loop {
		tokio::select! {
			_ = sleep(check_interval) => {
				if let Err(e) = monitor.refresh().await {
					error!("Error in slowdown monitoring task: {e}");
				}
			}
			changed = shutdown.changed() => {
				if changed.is_err() || *shutdown.borrow() {
					info!("Slowdown monitoring task cancelled");
					return;
				}
			}
		}
	}
}

/// Signals the worker to stop and waits for it. A worker that panicked is
/// reported rather than dropped.
pub async fn stop_slowdown_monitor_worker(
	shutdown: &watch::Sender<bool>,
	worker: JoinHandle<()>,
) -> Result<(), JoinError> {
	let _ = shutdown.send(true);
	worker.await.inspect_err(|e| {
		error!("Slowdown monitoring task failed: {e}");
	})
}
