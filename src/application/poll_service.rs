// Poll loop - Periodically refreshes camera and mask URLs from the backend
use crate::application::dashboard_backend::{BackendError, DashboardBackend};
use crate::application::recurring_task::{RecurringTask, delayed_interval};
use crate::application::store::DashboardStore;
use crate::domain::dashboard::ImageUpdate;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio::time::{Duration, MissedTickBehavior};
use tracing::{debug, error, warn};

pub struct PollLoop {
    backend: Arc<dyn DashboardBackend>,
    store: DashboardStore,
    period: Duration,
}

impl PollLoop {
    pub fn new(backend: Arc<dyn DashboardBackend>, store: DashboardStore, period: Duration) -> Self {
        Self {
            backend,
            store,
            period,
        }
    }

    pub fn start(self) -> RecurringTask {
        RecurringTask::spawn("poll loop", self.run())
    }

    /// Fires one request per tick without waiting for earlier ones.
    ///
    /// Results are applied here rather than inside the request tasks, so
    /// aborting this loop drops the `JoinSet` and with it every request
    /// still in flight. Completion order decides which update sticks.
    async fn run(self) {
        let mut ticker = delayed_interval(self.period, MissedTickBehavior::Skip);
        let mut in_flight = JoinSet::new();

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let backend = Arc::clone(&self.backend);
                    in_flight.spawn(async move { backend.refresh_images().await });
                    debug!("Image refresh requested ({} in flight)", in_flight.len());
                }
                Some(joined) = in_flight.join_next() => match joined {
                    Ok(result) => apply_refresh(&self.store, result),
                    Err(e) => warn!("Image refresh task failed: {}", e),
                },
            }
        }
    }
}

/// Apply one refresh outcome; failures leave the state untouched
fn apply_refresh(store: &DashboardStore, result: Result<ImageUpdate, BackendError>) {
    match result {
        Ok(update) => {
            debug!("Applying image update: {:?}", update);
            store.apply_update(update);
        }
        Err(e) => {
            error!("Error refreshing camera images: {}", e);
        }
    }
}
