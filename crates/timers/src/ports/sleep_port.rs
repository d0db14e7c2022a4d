//! Host scheduling primitive
//!
//! "Resume after elapsed wall-clock time" is the only thing a delay needs
//! from its host. Abstracting it behind a port enables:
//! 1. Deterministic testing with mock implementations
//! 2. Swapping the timer backend without touching callers

use async_trait::async_trait;

/// Suspends the caller for at least the given time.
///
/// # Example
///
/// ```ignore
/// pub struct Poller {
///     sleeper: Arc<dyn SleepPort>,
/// }
///
/// impl Poller {
///     pub async fn wait_interval(&self) {
///         self.sleeper.sleep(std::time::Duration::from_secs(5)).await;
///     }
/// }
/// ```
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait SleepPort: Send + Sync {
    /// Resolve once `duration` has elapsed.
    ///
    /// Implementations may resume late but never early. The wait is not
    /// cancellable: dropping the future abandons it, nothing more.
    async fn sleep(&self, duration: std::time::Duration);
}
