//! primkit Timers - the asynchronous side of [`Duration`].
//!
//! Adds a delay operation to the pure domain types:
//!
//! - [`DelayExt`] gives every [`Duration`] a `delay()` future
//! - [`delay`] is the same thing for a bare millisecond count
//! - [`SleepPort`] abstracts the host timer, with [`TokioSleepProvider`]
//!   as the default adapter
//!
//! Enable the `testing` feature to get `MockSleepPort` in downstream tests.

pub mod delay;
pub mod infrastructure;
pub mod ports;

pub use delay::{delay, delay_with, Delay, DelayExt, PortDelay};
pub use infrastructure::TokioSleepProvider;
pub use ports::SleepPort;

#[cfg(feature = "testing")]
pub use ports::MockSleepPort;

// Re-export the domain types so callers only need one import path
pub use primkit_domain::{Duration, DurationError, Milliseconds};
