//! Tokio-backed sleep provider

use async_trait::async_trait;

use crate::ports::SleepPort;

/// Sleep provider using the tokio timer
///
/// Must be awaited inside a tokio runtime with the time driver enabled;
/// tokio panics otherwise, and that panic is left to reach the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleepProvider;

#[async_trait]
impl SleepPort for TokioSleepProvider {
    async fn sleep(&self, duration: std::time::Duration) {
        tokio::time::sleep(duration).await;
    }
}
