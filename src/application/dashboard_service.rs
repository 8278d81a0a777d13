// Dashboard service - Mounts the view and owns its recurring tasks
use crate::application::clock::start_clock;
use crate::application::dashboard_backend::DashboardBackend;
use crate::application::notifier::UserNotifier;
use crate::application::poll_service::PollLoop;
use crate::application::probe_service::ConnectivityProbe;
use crate::application::recurring_task::RecurringTask;
use crate::application::store::DashboardStore;
use crate::domain::dashboard::DashboardState;
use crate::infrastructure::config::DashboardSettings;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinSet;

/// A mounted dashboard. Dropping it aborts both recurring tasks and any
/// connectivity probe still waiting on the backend.
pub struct Dashboard {
    store: DashboardStore,
    probe: ConnectivityProbe,
    probes: JoinSet<()>,
    poll_loop: RecurringTask,
    clock: RecurringTask,
}

impl Dashboard {
    /// Must be called from within a tokio runtime
    pub fn mount(
        backend: Arc<dyn DashboardBackend>,
        settings: &DashboardSettings,
        notifier: Arc<dyn UserNotifier>,
    ) -> Self {
        let store = DashboardStore::new(DashboardState::new(&settings.placeholder_image));
        let probe = ConnectivityProbe::new(Arc::clone(&backend), notifier);

        let mut probes = JoinSet::new();
        let startup = probe.clone();
        probes.spawn(async move {
            let _ = startup.probe(false).await;
        });

        let poll_loop = PollLoop::new(backend, store.clone(), settings.poll_interval).start();
        let clock = start_clock(store.clone(), settings.clock_interval);

        tracing::info!(
            "Dashboard mounted (poll every {:?}, clock every {:?})",
            settings.poll_interval,
            settings.clock_interval
        );

        Self {
            store,
            probe,
            probes,
            poll_loop,
            clock,
        }
    }

    /// Operator-triggered probe. Runs in the background and reports its
    /// outcome through the notifier.
    pub fn ping(&mut self) {
        while self.probes.try_join_next().is_some() {}

        let probe = self.probe.clone();
        self.probes.spawn(async move {
            let _ = probe.probe(true).await;
        });
    }

    pub fn snapshot(&self) -> DashboardState {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.store.subscribe()
    }

    /// Stop both recurring tasks. Once this returns the state no longer changes.
    pub async fn unmount(self) -> DashboardState {
        let Self {
            store,
            mut probes,
            poll_loop,
            clock,
            ..
        } = self;

        probes.shutdown().await;
        poll_loop.cancel().await;
        clock.cancel().await;

        let last = store.snapshot();
        tracing::info!("Dashboard unmounted after {}s", last.elapsed_seconds);
        last
    }
}
