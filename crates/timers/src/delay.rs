//! Delay operations for [`Duration`]
//!
//! A delay is pending until its length has elapsed, then resolves once with
//! no value. Each call creates an independent future; there is no handle to
//! cancel it, and dropping it simply abandons the wait.
//!
//! # Length policy
//!
//! The timer needs a real, non-negative length, but an unchecked
//! [`Duration`] may hold anything. Lengths outside the timer's range are
//! adjusted and logged, never rejected:
//!
//! - negative or NaN lengths sleep for zero time
//! - +∞ and anything beyond `std::time::Duration::MAX` saturate to it, which
//!   tokio treats as "far future"

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use primkit_domain::{Duration, Milliseconds};

use crate::ports::SleepPort;

/// Future returned by the port-backed delay entry points
pub type PortDelay<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Delay driven by the tokio timer.
///
/// Created by [`DelayExt::delay`] or [`delay`].
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[derive(Debug)]
pub struct Delay {
    sleep: Pin<Box<tokio::time::Sleep>>,
    requested_ms: f64,
}

impl Delay {
    fn new(duration: Duration) -> Self {
        let length = timer_length(&duration);
        let requested_ms = duration.to_milliseconds().value();
        tracing::trace!(delay_ms = requested_ms, "Delay scheduled");
        Self {
            sleep: Box::pin(tokio::time::sleep(length)),
            requested_ms,
        }
    }

    /// Length that was asked for, before any clamping.
    pub fn requested(&self) -> Milliseconds {
        Milliseconds(self.requested_ms)
    }
}

impl Future for Delay {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        match self.sleep.as_mut().poll(cx) {
            Poll::Ready(()) => {
                tracing::trace!(delay_ms = self.requested_ms, "Delay elapsed");
                Poll::Ready(())
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Adds the delay operation to [`Duration`].
///
/// # Examples
///
/// ```no_run
/// use primkit_domain::{Duration, Seconds};
/// use primkit_timers::DelayExt;
///
/// # async fn run() {
/// Duration::from_seconds(Seconds(2.0)).delay().await;
/// # }
/// ```
pub trait DelayExt {
    /// Suspend for this duration on the tokio timer.
    ///
    /// # Panics
    ///
    /// Panics when called, not when polled, if there is no tokio runtime
    /// with time enabled.
    fn delay(&self) -> Delay;

    /// Suspend for this duration through an injected sleep port.
    ///
    /// Failures of the port surface when the returned future is polled.
    fn delay_with<'a>(&self, sleeper: &'a dyn SleepPort) -> PortDelay<'a>;
}

impl DelayExt for Duration {
    fn delay(&self) -> Delay {
        Delay::new(*self)
    }

    fn delay_with<'a>(&self, sleeper: &'a dyn SleepPort) -> PortDelay<'a> {
        let length = timer_length(self);
        tracing::trace!(
            delay_ms = self.to_milliseconds().value(),
            "Delay scheduled on sleep port"
        );
        sleeper.sleep(length)
    }
}

/// Suspend for `ms` milliseconds.
///
/// Same as `Duration::from_milliseconds(ms).delay()`.
pub fn delay(ms: Milliseconds) -> Delay {
    Duration::from_milliseconds(ms).delay()
}

/// Suspend for `ms` milliseconds through an injected sleep port.
pub fn delay_with(sleeper: &dyn SleepPort, ms: Milliseconds) -> PortDelay<'_> {
    Duration::from_milliseconds(ms).delay_with(sleeper)
}

/// Maps a duration onto the timer's range.
fn timer_length(duration: &Duration) -> std::time::Duration {
    match std::time::Duration::try_from(*duration) {
        Ok(length) => length,
        Err(error) => {
            let clamped = duration.to_std_saturating();
            tracing::warn!(
                requested_ms = duration.to_milliseconds().value(),
                clamped_ms = clamped.as_millis() as u64,
                error = %error,
                "Delay length out of timer range, clamping"
            );
            clamped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::TokioSleepProvider;
    use crate::ports::MockSleepPort;
    use futures_util::FutureExt;
    use mockall::predicate::eq;
    use primkit_domain::{Hours, Seconds};
    use tokio::time::{advance, Instant};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn ms(n: u64) -> std::time::Duration {
        std::time::Duration::from_millis(n)
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_until_length_elapses() {
        init_tracing();
        let mut pending = Box::pin(delay(Milliseconds(500.0)));

        assert!(pending.as_mut().now_or_never().is_none());

        advance(ms(499)).await;
        assert!(pending.as_mut().now_or_never().is_none());

        advance(ms(1)).await;
        assert!(pending.as_mut().now_or_never().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_awaited_delay_takes_requested_time() {
        let start = Instant::now();
        Duration::from_seconds(Seconds(1.5)).delay().await;

        let elapsed = start.elapsed();
        assert!(elapsed >= ms(1500));
        assert!(elapsed < ms(1501));
    }

    #[tokio::test(start_paused = true)]
    async fn test_free_function_matches_instance_delay() {
        let start = Instant::now();
        delay(Milliseconds(250.0)).await;
        let via_free = start.elapsed();

        let start = Instant::now();
        Duration::from_milliseconds(Milliseconds(250.0)).delay().await;
        let via_instance = start.elapsed();

        assert_eq!(via_free, via_instance);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shorter_delay_resolves_first() {
        let long = Duration::from_milliseconds(Milliseconds(200.0)).delay();
        let short = Duration::from_milliseconds(Milliseconds(100.0)).delay();

        tokio::select! {
            biased;
            _ = long => panic!("longer delay resolved first"),
            _ = short => {}
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_delays_are_independent() {
        let start = Instant::now();
        let first = delay(Milliseconds(300.0));
        let second = delay(Milliseconds(300.0));
        tokio::join!(first, second);

        assert!(start.elapsed() >= ms(300));
        assert!(start.elapsed() < ms(600));
    }

    #[tokio::test(start_paused = true)]
    async fn test_negative_and_nan_lengths_resolve_immediately() {
        init_tracing();
        for requested in [-10.0, f64::NAN] {
            let start = Instant::now();
            delay(Milliseconds(requested)).await;
            assert!(start.elapsed() < ms(1));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_infinite_length_never_resolves() {
        let mut forever = Box::pin(delay(Milliseconds(f64::INFINITY)));
        advance(std::time::Duration::from_secs(60 * 60 * 24 * 365)).await;
        assert!(forever.as_mut().now_or_never().is_none());
    }

    #[test]
    fn test_requested_keeps_original_value() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let _guard = runtime.enter();

        let pending = delay(Milliseconds(-5.0));
        assert_eq!(pending.requested(), Milliseconds(-5.0));
    }

    #[test]
    #[should_panic]
    fn test_delay_outside_runtime_panics() {
        let _ = delay(Milliseconds(1.0));
    }

    #[test]
    #[should_panic]
    fn test_tokio_port_outside_runtime_panics_on_poll() {
        let provider = TokioSleepProvider;
        let pending = delay_with(&provider, Milliseconds(1.0));
        let _ = pending.now_or_never();
    }

    #[tokio::test]
    async fn test_delay_with_passes_length_to_port() {
        let mut port = MockSleepPort::new();
        port.expect_sleep()
            .with(eq(ms(1500)))
            .times(1)
            .returning(|_| ());

        Duration::from_seconds(Seconds(1.5)).delay_with(&port).await;
    }

    #[tokio::test]
    async fn test_free_delay_with_matches_instance() {
        let mut port = MockSleepPort::new();
        port.expect_sleep()
            .with(eq(ms(3_600_000)))
            .times(2)
            .returning(|_| ());

        delay_with(&port, Milliseconds(3_600_000.0)).await;
        Duration::from_hours(Hours(1.0)).delay_with(&port).await;
    }

    #[tokio::test]
    async fn test_delay_with_clamps_out_of_range_lengths() {
        init_tracing();
        let mut port = MockSleepPort::new();
        port.expect_sleep()
            .with(eq(std::time::Duration::ZERO))
            .times(1)
            .returning(|_| ());
        port.expect_sleep()
            .with(eq(std::time::Duration::MAX))
            .times(1)
            .returning(|_| ());

        delay_with(&port, Milliseconds(-1.0)).await;
        delay_with(&port, Milliseconds(f64::INFINITY)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_with_tokio_provider() {
        let provider = TokioSleepProvider;
        let start = Instant::now();
        Duration::from_milliseconds(Milliseconds(40.0))
            .delay_with(&provider)
            .await;
        assert!(start.elapsed() >= ms(40));
    }
}
