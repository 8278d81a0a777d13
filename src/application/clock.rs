// Clock - Advances the elapsed-time counter
use crate::application::recurring_task::{RecurringTask, delayed_interval};
use crate::application::store::DashboardStore;
use tokio::time::{Duration, MissedTickBehavior};

/// Missed ticks are replayed so the counter keeps pace with wall time.
pub fn start_clock(store: DashboardStore, period: Duration) -> RecurringTask {
    RecurringTask::spawn("clock", async move {
        let mut ticker = delayed_interval(period, MissedTickBehavior::Burst);
        loop {
            ticker.tick().await;
            store.tick();
        }
    })
}
