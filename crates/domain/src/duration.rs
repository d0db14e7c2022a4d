//! Unit-safe elapsed-time quantity
//!
//! [`Duration`] holds a single `f64` of milliseconds. Every constructor
//! multiplies by its unit's factor and every accessor divides by it. Nothing
//! in between rounds, so `to_X(from_X(v))` is exactly the
//! multiply-then-divide round trip.
//!
//! Unchecked construction follows plain float arithmetic: negative values,
//! NaN and infinities pass through untouched. Use [`Duration::validate`] or
//! [`Duration::try_from_millis`] at boundaries that need a real,
//! non-negative length.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use crate::error::DurationError;
use crate::units::{
    Days, Hours, Milliseconds, Minutes, Seconds, TimeUnit, UnitKind, Weeks, Years,
};

/// Immutable, unit-safe time quantity.
///
/// # Examples
///
/// ```
/// use primkit_domain::{Duration, Hours, Milliseconds, Seconds};
///
/// let d = Duration::from_milliseconds(Milliseconds(1000.0));
/// assert_eq!(d.to_seconds(), Seconds(1.0));
///
/// let hour = Duration::from_hours(Hours(1.0));
/// assert_eq!(hour.to_days().value(), 1.0 / 24.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Duration {
    millis: f64,
}

impl Duration {
    /// Zero-length duration
    pub const ZERO: Duration = Duration { millis: 0.0 };

    /// Builds a duration from any tagged unit.
    ///
    /// ```
    /// use primkit_domain::{Duration, Minutes};
    ///
    /// let d = Duration::from_unit(Minutes(2.0));
    /// assert_eq!(d.to_milliseconds().value(), 120_000.0);
    /// ```
    #[inline]
    pub fn from_unit<U: TimeUnit>(value: U) -> Self {
        Self {
            millis: value.value() * U::MILLIS_PER_UNIT,
        }
    }

    /// Reads the duration back in any tagged unit.
    ///
    /// ```
    /// use primkit_domain::{Days, Duration, Weeks};
    ///
    /// let d = Duration::from_days(Days(7.0));
    /// assert_eq!(d.to_unit::<Weeks>(), Weeks(1.0));
    /// ```
    #[inline]
    pub fn to_unit<U: TimeUnit>(&self) -> U {
        U::new(self.millis / U::MILLIS_PER_UNIT)
    }

    /// Builds a duration from a runtime unit identifier.
    pub fn from_kind(value: f64, kind: UnitKind) -> Self {
        Self {
            millis: value * kind.millis_per_unit(),
        }
    }

    /// Reads the duration in a unit chosen at runtime.
    pub fn in_kind(&self, kind: UnitKind) -> f64 {
        self.millis / kind.millis_per_unit()
    }

    pub fn from_milliseconds(value: Milliseconds) -> Self {
        Self::from_unit(value)
    }

    pub fn from_seconds(value: Seconds) -> Self {
        Self::from_unit(value)
    }

    pub fn from_minutes(value: Minutes) -> Self {
        Self::from_unit(value)
    }

    pub fn from_hours(value: Hours) -> Self {
        Self::from_unit(value)
    }

    pub fn from_days(value: Days) -> Self {
        Self::from_unit(value)
    }

    pub fn from_weeks(value: Weeks) -> Self {
        Self::from_unit(value)
    }

    /// From 365-day years; leap years are not accounted for.
    pub fn from_years(value: Years) -> Self {
        Self::from_unit(value)
    }

    /// Identity projection of the stored value.
    pub fn to_milliseconds(&self) -> Milliseconds {
        Milliseconds(self.millis)
    }

    pub fn to_seconds(&self) -> Seconds {
        self.to_unit()
    }

    pub fn to_minutes(&self) -> Minutes {
        self.to_unit()
    }

    pub fn to_hours(&self) -> Hours {
        self.to_unit()
    }

    pub fn to_days(&self) -> Days {
        self.to_unit()
    }

    pub fn to_weeks(&self) -> Weeks {
        self.to_unit()
    }

    pub fn to_years(&self) -> Years {
        self.to_unit()
    }

    /// Builds a duration from milliseconds, rejecting NaN, infinities and
    /// negative values.
    ///
    /// # Errors
    ///
    /// Returns [`DurationError::NotFinite`] or [`DurationError::Negative`].
    ///
    /// # Examples
    ///
    /// ```
    /// use primkit_domain::Duration;
    ///
    /// assert!(Duration::try_from_millis(500.0).is_ok());
    /// assert!(Duration::try_from_millis(-1.0).is_err());
    /// assert!(Duration::try_from_millis(f64::NAN).is_err());
    /// ```
    pub fn try_from_millis(millis: f64) -> Result<Self, DurationError> {
        Self { millis }.validate()
    }

    /// Returns `self` if it is a finite, non-negative length.
    ///
    /// Negative zero counts as zero.
    pub fn validate(self) -> Result<Self, DurationError> {
        if !self.millis.is_finite() {
            return Err(DurationError::NotFinite(self.millis));
        }
        if self.millis < 0.0 {
            return Err(DurationError::Negative(self.millis));
        }
        Ok(self)
    }

    pub fn is_zero(&self) -> bool {
        self.millis == 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.millis < 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.millis.is_finite()
    }

    /// Converts to `std::time::Duration`, never failing.
    ///
    /// Negative and NaN lengths become zero; +∞ and anything past the
    /// `std` range saturate at `std::time::Duration::MAX`. Sub-nanosecond
    /// precision is lost.
    ///
    /// ```
    /// use primkit_domain::{Duration, Milliseconds};
    ///
    /// let negative = Duration::from_milliseconds(Milliseconds(-10.0));
    /// assert_eq!(negative.to_std_saturating(), std::time::Duration::ZERO);
    ///
    /// let forever = Duration::from_milliseconds(Milliseconds(f64::INFINITY));
    /// assert_eq!(forever.to_std_saturating(), std::time::Duration::MAX);
    /// ```
    pub fn to_std_saturating(&self) -> std::time::Duration {
        if self.millis.is_nan() || self.millis <= 0.0 {
            return std::time::Duration::ZERO;
        }
        std::time::Duration::try_from_secs_f64(self.millis / 1_000.0)
            .unwrap_or(std::time::Duration::MAX)
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! impl_from_unit {
    ($($unit:ty),+ $(,)?) => {
        $(
            impl From<$unit> for Duration {
                fn from(value: $unit) -> Self {
                    Duration::from_unit(value)
                }
            }
        )+
    };
}

impl_from_unit!(Milliseconds, Seconds, Minutes, Hours, Days, Weeks, Years);

impl From<std::time::Duration> for Duration {
    fn from(value: std::time::Duration) -> Self {
        Self {
            millis: value.as_secs_f64() * 1_000.0,
        }
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = DurationError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        let valid = value.validate()?;
        std::time::Duration::try_from_secs_f64(valid.millis / 1_000.0)
            .map_err(|_| DurationError::Overflow(valid.millis))
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration {
            millis: self.millis + rhs.millis,
        }
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration {
            millis: self.millis - rhs.millis,
        }
    }
}

impl Mul<f64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: f64) -> Duration {
        Duration {
            millis: self.millis * rhs,
        }
    }
}

impl Div<f64> for Duration {
    type Output = Duration;

    fn div(self, rhs: f64) -> Duration {
        Duration {
            millis: self.millis / rhs,
        }
    }
}

// =============================================================================
// Text form
// =============================================================================

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.millis)
    }
}

/// Parses `<number><suffix>`, e.g. `"500ms"`, `"1.5h"`, `"2 w"`.
///
/// A bare number is read as milliseconds. Anything `f64` parses is a valid
/// number, including `inf` and `NaN`, so `Display` output always parses back.
impl FromStr for Duration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(DurationError::parse("empty input"));
        }

        for kind in suffixes_longest_first() {
            if let Some(number) = input.strip_suffix(kind.suffix()) {
                if let Ok(value) = number.trim_end().parse::<f64>() {
                    return Ok(Duration::from_kind(value, kind));
                }
            }
        }

        if let Ok(value) = input.parse::<f64>() {
            return Ok(Duration::from_kind(value, UnitKind::Millisecond));
        }

        // Nothing matched; work out which half is at fault.
        let unit_start = input
            .rfind(|c: char| !c.is_ascii_alphabetic())
            .map_or(0, |idx| idx + 1);
        let (number, suffix) = input.split_at(unit_start);
        let number = number.trim_end();

        if number.is_empty() {
            return Err(DurationError::parse(format!("missing number in '{input}'")));
        }
        if number.parse::<f64>().is_ok() {
            return Err(DurationError::unknown_unit(suffix));
        }
        Err(DurationError::parse(format!("'{number}' is not a number")))
    }
}

/// Units ordered so `ms` is tried before `m` and `s`.
fn suffixes_longest_first() -> [UnitKind; 7] {
    let mut kinds = UnitKind::all();
    kinds.sort_by_key(|kind| std::cmp::Reverse(kind.suffix().len()));
    kinds
}

// =============================================================================
// Serde
// =============================================================================

/// Finite values are written as a millisecond number. NaN and infinities
/// have no JSON number form, so they are written as text (`"infms"`).
impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.millis.is_finite() {
            serializer.serialize_f64(self.millis)
        } else {
            serializer.collect_str(self)
        }
    }
}

/// Wire form accepted on input: plain milliseconds or suffixed text.
#[derive(Deserialize)]
#[serde(untagged)]
enum DurationRepr {
    Millis(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match DurationRepr::deserialize(deserializer)? {
            DurationRepr::Millis(millis) => Ok(Duration { millis }),
            DurationRepr::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}
