// In-memory doubles for exercising the application layer
use crate::application::dashboard_backend::{BackendError, DashboardBackend};
use crate::application::notifier::UserNotifier;
use crate::domain::dashboard::ImageUpdate;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn sample_update(tag: &str) -> ImageUpdate {
    ImageUpdate {
        front_left_image: format!("{tag}/fl.jpg"),
        front_right_image: format!("{tag}/fr.jpg"),
        back_left_image: format!("{tag}/bl.jpg"),
        back_right_image: format!("{tag}/br.jpg"),
        front_left_mask: format!("{tag}/fl_mask.jpg"),
        front_right_mask: format!("{tag}/fr_mask.jpg"),
        back_left_mask: format!("{tag}/bl_mask.jpg"),
        back_right_mask: format!("{tag}/br_mask.jpg"),
    }
}

struct Step<T> {
    delay: Duration,
    result: Result<T, BackendError>,
}

/// Backend that replays queued responses, then fails with 503
#[derive(Default)]
pub struct ScriptedBackend {
    refreshes: Mutex<VecDeque<Step<ImageUpdate>>>,
    pings: Mutex<VecDeque<Step<String>>>,
    refresh_calls: AtomicUsize,
    ping_calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh_ok(self, update: ImageUpdate) -> Self {
        self.refresh_after(Duration::ZERO, Ok(update))
    }

    pub fn refresh_err(self, error: BackendError) -> Self {
        self.refresh_after(Duration::ZERO, Err(error))
    }

    pub fn refresh_after(self, delay: Duration, result: Result<ImageUpdate, BackendError>) -> Self {
        self.refreshes.lock().unwrap().push_back(Step { delay, result });
        self
    }

    pub fn ping_reply(self, result: Result<String, BackendError>) -> Self {
        self.ping_after(Duration::ZERO, result)
    }

    pub fn ping_after(self, delay: Duration, result: Result<String, BackendError>) -> Self {
        self.pings.lock().unwrap().push_back(Step { delay, result });
        self
    }

    pub fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn ping_calls(&self) -> usize {
        self.ping_calls.load(Ordering::SeqCst)
    }

    async fn play<T>(queue: &Mutex<VecDeque<Step<T>>>) -> Result<T, BackendError> {
        let step = queue.lock().unwrap().pop_front();
        match step {
            Some(step) => {
                if !step.delay.is_zero() {
                    tokio::time::sleep(step.delay).await;
                }
                step.result
            }
            None => Err(BackendError::status(503, "script exhausted")),
        }
    }
}

#[async_trait]
impl DashboardBackend for ScriptedBackend {
    async fn refresh_images(&self) -> Result<ImageUpdate, BackendError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        Self::play(&self.refreshes).await
    }

    async fn ping(&self) -> Result<String, BackendError> {
        self.ping_calls.fetch_add(1, Ordering::SeqCst);
        Self::play(&self.pings).await
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl UserNotifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
