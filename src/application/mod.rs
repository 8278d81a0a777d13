// Application layer - Dashboard use cases and their recurring tasks
pub mod clock;
pub mod dashboard_backend;
pub mod dashboard_service;
pub mod notifier;
pub mod poll_service;
pub mod probe_service;
pub mod recurring_task;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;
