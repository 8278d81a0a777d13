// Blocking user-facing notifications

/// Surfaces a message to whoever is operating the dashboard
pub trait UserNotifier: Send + Sync {
    fn notify(&self, message: &str);
}
