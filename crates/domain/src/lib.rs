//! primkit Domain - unit-safe durations over primitive numbers.
//!
//! This crate is the pure layer of primkit:
//!
//! - **Unit newtypes** ([`Milliseconds`] .. [`Years`]) tag plain `f64`s
//!   so units can't be mixed by accident
//! - **[`Duration`]** stores milliseconds and converts to/from every unit
//! - **[`shorthand`]** turns a plain number of some unit into milliseconds
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O, no async runtime
//! - **WASM compatible** - all code must work in both native and WASM targets
//!
//! The delay operation lives in `primkit-timers`, which adds the scheduling
//! side on top of these types.

pub mod duration;
pub mod error;
pub mod shorthand;
pub mod units;

pub use duration::Duration;
pub use error::DurationError;

// Re-export unit types
pub use units::{
    Days, Hours, Milliseconds, Minutes, Seconds, TimeUnit, UnitKind, Weeks, Years, MS_PER_DAY,
    MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, MS_PER_WEEK, MS_PER_YEAR,
};

// Re-export shorthands at crate root for convenience
pub use shorthand::{days, hours, milliseconds, minutes, seconds, weeks, years};
