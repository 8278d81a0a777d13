// Cancellable handle over a background loop
use std::future::Future;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant, Interval, MissedTickBehavior};

/// A spawned loop that stops when cancelled or dropped
pub struct RecurringTask {
    name: &'static str,
    handle: Option<JoinHandle<()>>,
}

impl RecurringTask {
    pub fn spawn<F>(name: &'static str, body: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::debug!("Starting {}", name);
        Self {
            name,
            handle: Some(tokio::spawn(body)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Abort the loop and wait until it has actually stopped
    pub async fn cancel(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    tracing::warn!("{} ended abnormally: {}", self.name, e);
                }
            }
        }
        tracing::debug!("Stopped {}", self.name);
    }
}

impl Drop for RecurringTask {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Interval whose first tick lands one full period from now
pub fn delayed_interval(period: Duration, missed: MissedTickBehavior) -> Interval {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(missed);
    ticker
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_task(counter: Arc<AtomicUsize>) -> RecurringTask {
        RecurringTask::spawn("counter", async move {
            let mut ticker = delayed_interval(Duration::from_secs(1), MissedTickBehavior::Burst);
            loop {
                ticker.tick().await;
                counter.fetch_add(1, Ordering::SeqCst);
            }
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_waits_one_period() {
        let counter = Arc::new(AtomicUsize::new(0));
        let task = counting_task(counter.clone());

        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        task.cancel().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let counter = Arc::new(AtomicUsize::new(0));
        let task = counting_task(counter.clone());

        time::sleep(Duration::from_millis(2500)).await;
        assert!(task.is_running());
        task.cancel().await;

        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_task() {
        let counter = Arc::new(AtomicUsize::new(0));
        drop(counting_task(counter.clone()));

        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
