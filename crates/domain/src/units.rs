//! Unit-tagged numbers
//!
//! Each unit is a zero-cost newtype over `f64`, so a number of seconds can't
//! be passed where minutes are expected. At runtime a tagged value is just
//! the number: the wrappers are `#[repr(transparent)]` and serialize as a
//! bare number.
//!
//! # Tier Classification
//!
//! - **Tier 1: Tagged Newtype** - no validation, tagging only

use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds per second
pub const MS_PER_SECOND: f64 = 1_000.0;
/// Milliseconds per minute
pub const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
/// Milliseconds per hour
pub const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
/// Milliseconds per day
pub const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;
/// Milliseconds per week
pub const MS_PER_WEEK: f64 = 7.0 * MS_PER_DAY;
/// Milliseconds per 365-day year (no leap-year adjustment)
pub const MS_PER_YEAR: f64 = 365.0 * MS_PER_DAY;

// =============================================================================
// Unit Kind
// =============================================================================

/// Runtime identifier for a supported time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Year,
}

impl UnitKind {
    /// Conversion factor into the base unit.
    pub fn millis_per_unit(&self) -> f64 {
        match self {
            UnitKind::Millisecond => 1.0,
            UnitKind::Second => MS_PER_SECOND,
            UnitKind::Minute => MS_PER_MINUTE,
            UnitKind::Hour => MS_PER_HOUR,
            UnitKind::Day => MS_PER_DAY,
            UnitKind::Week => MS_PER_WEEK,
            UnitKind::Year => MS_PER_YEAR,
        }
    }

    /// Short suffix used in the text form, e.g. `"ms"` or `"h"`.
    pub fn suffix(&self) -> &'static str {
        match self {
            UnitKind::Millisecond => "ms",
            UnitKind::Second => "s",
            UnitKind::Minute => "m",
            UnitKind::Hour => "h",
            UnitKind::Day => "d",
            UnitKind::Week => "w",
            UnitKind::Year => "y",
        }
    }

    /// Looks a unit up by its suffix. Matching is case-sensitive, since
    /// `m` (minute) and `M` would otherwise be ambiguous.
    pub fn from_suffix(suffix: &str) -> Option<UnitKind> {
        Self::all().into_iter().find(|kind| kind.suffix() == suffix)
    }

    /// Returns all units, smallest first.
    pub fn all() -> [UnitKind; 7] {
        [
            UnitKind::Millisecond,
            UnitKind::Second,
            UnitKind::Minute,
            UnitKind::Hour,
            UnitKind::Day,
            UnitKind::Week,
            UnitKind::Year,
        ]
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

// =============================================================================
// Tagged Unit Types
// =============================================================================

/// A number tagged with a time unit.
///
/// Implemented by every unit newtype so generic code can go through
/// [`Duration::from_unit`](crate::Duration::from_unit) and
/// [`Duration::to_unit`](crate::Duration::to_unit).
pub trait TimeUnit: Copy {
    /// Runtime identifier of this unit
    const KIND: UnitKind;

    /// Conversion factor into milliseconds
    const MILLIS_PER_UNIT: f64;

    /// Tags a plain number with this unit.
    fn new(value: f64) -> Self;

    /// Strips the tag.
    fn value(self) -> f64;
}

macro_rules! define_unit {
    ($(#[$meta:meta])* $name:ident, $kind:ident, $factor:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(pub f64);

        impl $name {
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn value(self) -> f64 {
                self.0
            }
        }

        impl TimeUnit for $name {
            const KIND: UnitKind = UnitKind::$kind;
            const MILLIS_PER_UNIT: f64 = $factor;

            fn new(value: f64) -> Self {
                Self(value)
            }

            fn value(self) -> f64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", self.0, UnitKind::$kind.suffix())
            }
        }

        impl From<f64> for $name {
            fn from(value: f64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_unit!(
    /// A number of milliseconds (the base unit)
    Milliseconds,
    Millisecond,
    1.0
);
define_unit!(
    /// A number of seconds
    Seconds,
    Second,
    MS_PER_SECOND
);
define_unit!(
    /// A number of minutes
    Minutes,
    Minute,
    MS_PER_MINUTE
);
define_unit!(
    /// A number of hours
    Hours,
    Hour,
    MS_PER_HOUR
);
define_unit!(
    /// A number of days
    Days,
    Day,
    MS_PER_DAY
);
define_unit!(
    /// A number of weeks
    Weeks,
    Week,
    MS_PER_WEEK
);
define_unit!(
    /// A number of 365-day years
    Years,
    Year,
    MS_PER_YEAR
);
