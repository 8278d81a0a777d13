// State container shared by the recurring tasks and the view
use crate::domain::dashboard::{DashboardState, ImageUpdate};
use std::sync::Arc;
use tokio::sync::watch;

/// Owns the dashboard state and publishes every change to subscribers.
///
/// Writers go through `watch::Sender::send_modify`, so the poll loop and the
/// clock can run on different worker threads without extra locking.
#[derive(Clone)]
pub struct DashboardStore {
    tx: Arc<watch::Sender<DashboardState>>,
}

impl DashboardStore {
    pub fn new(initial: DashboardState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn snapshot(&self) -> DashboardState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.tx.subscribe()
    }

    pub fn apply_update(&self, update: ImageUpdate) {
        self.tx.send_modify(|state| state.apply_update(update));
    }

    pub fn tick(&self) {
        self.tx.send_modify(DashboardState::tick);
    }
}
