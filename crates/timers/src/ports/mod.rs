//! Outbound ports
//!
//! Traits for the host capabilities this crate relies on. Concrete
//! implementations live in `infrastructure`.

mod sleep_port;

pub use sleep_port::SleepPort;

#[cfg(any(test, feature = "testing"))]
pub use sleep_port::MockSleepPort;
