// Connectivity probe - Liveness check against the backend
use crate::application::dashboard_backend::{BackendError, DashboardBackend};
use crate::application::notifier::UserNotifier;
use std::sync::Arc;
use tracing::{error, info, warn};

const EXPECTED_REPLY: &str = "pong";

#[derive(Clone)]
pub struct ConnectivityProbe {
    backend: Arc<dyn DashboardBackend>,
    notifier: Arc<dyn UserNotifier>,
}

impl ConnectivityProbe {
    pub fn new(backend: Arc<dyn DashboardBackend>, notifier: Arc<dyn UserNotifier>) -> Self {
        Self { backend, notifier }
    }

    /// Ping the backend and log the reply. With `notify` the outcome is
    /// also shown to the user. Nothing is stored either way.
    pub async fn probe(&self, notify: bool) -> Result<String, BackendError> {
        let result = self.backend.ping().await;

        match &result {
            Ok(message) => {
                info!("Response from backend: {}", message);
                if message != EXPECTED_REPLY {
                    warn!("Unexpected ping reply {:?}, expected {:?}", message, EXPECTED_REPLY);
                }
                if notify {
                    self.notifier.notify(&format!("Backend says: {}", message));
                }
            }
            Err(e) => {
                error!("Failed to connect to backend: {}", e);
                if notify {
                    self.notifier.notify("Failed to connect to backend.");
                }
            }
        }

        result
    }
}
