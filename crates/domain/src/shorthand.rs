//! Plain-number shorthands: unit in, milliseconds out.
//!
//! Each function is `Duration::from_X(value).to_milliseconds()` with the
//! tags stripped, for call sites that just need a millisecond count
//! (timeouts, intervals, TTLs).
//!
//! # Examples
//!
//! ```
//! use primkit_domain::shorthand;
//!
//! assert_eq!(shorthand::seconds(1.0), 1_000.0);
//! assert_eq!(shorthand::hours(1.0), 3_600_000.0);
//! assert_eq!(shorthand::years(1.0), 31_536_000_000.0);
//! ```

use crate::duration::Duration;
use crate::units::{Days, Hours, Milliseconds, Minutes, Seconds, TimeUnit, Weeks, Years};

fn to_millis<U: TimeUnit>(value: f64) -> f64 {
    Duration::from_unit(U::new(value)).to_milliseconds().value()
}

pub fn milliseconds(value: f64) -> f64 {
    to_millis::<Milliseconds>(value)
}

pub fn seconds(value: f64) -> f64 {
    to_millis::<Seconds>(value)
}

pub fn minutes(value: f64) -> f64 {
    to_millis::<Minutes>(value)
}

pub fn hours(value: f64) -> f64 {
    to_millis::<Hours>(value)
}

pub fn days(value: f64) -> f64 {
    to_millis::<Days>(value)
}

pub fn weeks(value: f64) -> f64 {
    to_millis::<Weeks>(value)
}

/// 365-day years.
pub fn years(value: f64) -> f64 {
    to_millis::<Years>(value)
}
