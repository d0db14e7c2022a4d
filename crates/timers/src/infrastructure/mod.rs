//! Concrete adapters for the ports in `crate::ports`.

mod tokio_sleep;

pub use tokio_sleep::TokioSleepProvider;
