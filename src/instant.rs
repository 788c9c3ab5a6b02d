// This is a part of Timepoint.
// See README.md for license details.

//! A point on the UTC timeline with nanosecond precision.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::str::FromStr;
#[cfg(feature = "std")]
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "alloc")]
use alloc::string::{String, ToString};

use crate::arith::{
    self, div_mod_floor, split_millis, MILLIS_PER_SEC, NANOS_PER_MILLI, NANOS_PER_SEC,
};
use crate::format::{parse_iso_instant, write_iso_instant, ParseError};
use crate::query::Accessor;
use crate::{Clock, Duration, Error};

/// An instantaneous point on the timeline, counted from the epoch `1970-01-01T00:00:00Z`.
///
/// The value is a signed number of seconds since the epoch plus a nanosecond-of-second in
/// `0..1_000_000_000`. Instants before the epoch keep a non-negative nanosecond part, so
/// the last nanosecond of 1969 is `(-1, 999_999_999)`.
///
/// The time-scale has no leap seconds: every day is exactly 86,400 seconds long.
///
/// Instants are totally ordered by position on the timeline, and two instants are equal
/// exactly when both fields are equal.
///
/// # Example
///
/// ```
/// use timepoint::{Duration, Instant};
///
/// let t = Instant::from_epoch_milli(-1);
/// assert_eq!((t.epoch_second(), t.nano_of_second()), (-1, 999_000_000));
/// assert_eq!(t.to_string(), "1969-12-31T23:59:59.999000000Z");
///
/// let u = t.checked_add(Duration::from_millis(1))?;
/// assert_eq!(u, Instant::EPOCH);
/// assert!(t.is_before(u));
/// # Ok::<(), timepoint::Error>(())
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant {
    secs: i64,
    nanos: u32, // Always 0 <= nanos < NANOS_PER_SEC
}

impl Instant {
    /// The epoch, `1970-01-01T00:00:00Z`.
    pub const EPOCH: Instant = Instant { secs: 0, nanos: 0 };

    /// The earliest representable instant, `-292277022657-01-27T08:29:52Z`.
    pub const MIN: Instant = Instant { secs: i64::MIN, nanos: 0 };

    /// The latest representable instant, `+292277026596-12-04T15:30:07.999999999Z`.
    pub const MAX: Instant = Instant { secs: i64::MAX, nanos: 999_999_999 };

    /// Makes a new `Instant` a whole number of seconds from the epoch.
    #[inline]
    pub const fn from_epoch_second(epoch_second: i64) -> Instant {
        Instant { secs: epoch_second, nanos: 0 }
    }

    /// Makes a new `Instant` from seconds since the epoch and a nanosecond adjustment.
    ///
    /// The adjustment may be negative or larger than a second; it is carried into the
    /// seconds with floor semantics, so `(3, 1)`, `(4, -999_999_999)` and
    /// `(2, 1_000_000_001)` all give the same instant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the carry takes the seconds out of the `i64` range.
    ///
    /// # Example
    ///
    /// ```
    /// use timepoint::Instant;
    ///
    /// assert_eq!(Instant::new(3, 1)?, Instant::new(4, -999_999_999)?);
    /// assert_eq!(Instant::new(2, 1_000_000_001)?, Instant::new(3, 1)?);
    /// assert!(Instant::new(i64::MIN, -1).is_err());
    /// # Ok::<(), timepoint::Error>(())
    /// ```
    pub fn new(epoch_second: i64, nano_adjustment: i64) -> Result<Instant, Error> {
        let (secs, nanos) = arith::normalize(epoch_second, nano_adjustment)?;
        Ok(Instant { secs, nanos })
    }

    /// Makes a new `Instant` from milliseconds since the epoch.
    ///
    /// Every `i64` millisecond count is representable; negative counts are split with
    /// floor semantics.
    ///
    /// # Example
    ///
    /// ```
    /// use timepoint::Instant;
    ///
    /// let t = Instant::from_epoch_milli(-1001);
    /// assert_eq!((t.epoch_second(), t.nano_of_second()), (-2, 999_000_000));
    /// ```
    #[inline]
    pub const fn from_epoch_milli(epoch_milli: i64) -> Instant {
        let (secs, millis) = div_mod_floor(epoch_milli, MILLIS_PER_SEC);
        Instant { secs, nanos: (millis * NANOS_PER_MILLI) as u32 }
    }

    /// Makes a new `Instant` from already-canonical parts.
    ///
    /// Unlike [`Instant::new`] nothing is normalized: `nano_of_second` must be in
    /// `0..1_000_000_000`. This is the constructor for values read back from storage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `nano_of_second` is out of range.
    pub fn from_parts(epoch_second: i64, nano_of_second: i32) -> Result<Instant, Error> {
        if nano_of_second < 0 || i64::from(nano_of_second) >= NANOS_PER_SEC {
            return Err(Error::InvalidArgument("nanosecond out of range"));
        }
        Ok(Instant { secs: epoch_second, nanos: nano_of_second as u32 })
    }

    /// Reads the current instant from `clock`.
    ///
    /// # Errors
    ///
    /// Passes on any error of the clock.
    #[inline]
    pub fn now<C: Clock + ?Sized>(clock: &C) -> Result<Instant, Error> {
        clock.instant()
    }

    /// Returns the number of whole seconds since the epoch, negative before it.
    #[inline]
    pub const fn epoch_second(&self) -> i64 {
        self.secs
    }

    /// Returns the nanoseconds within the second, always in `0..1_000_000_000`.
    ///
    /// This counts forward from [`epoch_second`](Instant::epoch_second), also for instants
    /// before the epoch.
    #[inline]
    pub const fn nano_of_second(&self) -> u32 {
        self.nanos
    }

    /// Returns the number of milliseconds since the epoch.
    ///
    /// Sub-millisecond precision is dropped, rounding toward negative infinity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the millisecond count does not fit an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use timepoint::Instant;
    ///
    /// assert_eq!(Instant::new(-1, 999_999_999)?.to_epoch_milli(), Ok(-1));
    /// assert!(Instant::MAX.to_epoch_milli().is_err());
    /// # Ok::<(), timepoint::Error>(())
    /// ```
    pub fn to_epoch_milli(&self) -> Result<i64, Error> {
        arith::to_units(self.secs, self.nanos, MILLIS_PER_SEC, NANOS_PER_MILLI)
    }

    /// Adds a duration to this instant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn checked_add(&self, rhs: Duration) -> Result<Instant, Error> {
        self.add_parts(rhs.secs(), rhs.subsec_nanos().into())
    }

    /// Subtracts a duration from this instant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn checked_sub(&self, rhs: Duration) -> Result<Instant, Error> {
        // whole seconds first, then the nanoseconds as a separate step
        self.checked_sub_seconds(rhs.secs())?.checked_sub_nanos(rhs.subsec_nanos().into())
    }

    /// Adds a number of seconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn checked_add_seconds(&self, seconds: i64) -> Result<Instant, Error> {
        self.add_parts(seconds, 0)
    }

    /// Adds a number of milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn checked_add_millis(&self, millis: i64) -> Result<Instant, Error> {
        let (secs, nanos) = split_millis(millis);
        self.add_parts(secs, nanos)
    }

    /// Adds a number of nanoseconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn checked_add_nanos(&self, nanos: i64) -> Result<Instant, Error> {
        self.add_parts(0, nanos)
    }

    /// Subtracts a number of seconds.
    ///
    /// `i64::MIN` is accepted, and moves the instant `2^63` seconds forward.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn checked_sub_seconds(&self, seconds: i64) -> Result<Instant, Error> {
        self.sub_parts(seconds, 0)
    }

    /// Subtracts a number of milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn checked_sub_millis(&self, millis: i64) -> Result<Instant, Error> {
        let (secs, nanos) = split_millis(millis);
        self.sub_parts(secs, nanos)
    }

    /// Subtracts a number of nanoseconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn checked_sub_nanos(&self, nanos: i64) -> Result<Instant, Error> {
        self.sub_parts(0, nanos)
    }

    fn add_parts(&self, secs: i64, nanos: i64) -> Result<Instant, Error> {
        let (secs, nanos) = arith::add_parts(self.secs, self.nanos, secs, nanos)?;
        Ok(Instant { secs, nanos })
    }

    fn sub_parts(&self, secs: i64, nanos: i64) -> Result<Instant, Error> {
        let (secs, nanos) = arith::sub_parts(self.secs, self.nanos, secs, nanos)?;
        Ok(Instant { secs, nanos })
    }

    /// Returns `true` if this instant is strictly before `other` on the timeline.
    #[inline]
    pub fn is_before(&self, other: Instant) -> bool {
        *self < other
    }

    /// Returns `true` if this instant is strictly after `other` on the timeline.
    #[inline]
    pub fn is_after(&self, other: Instant) -> bool {
        *self > other
    }

    /// The duration from `earlier` to this instant, negative if `earlier` is actually later.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the span does not fit a [`Duration`].
    #[inline]
    pub fn duration_since(&self, earlier: Instant) -> Result<Duration, Error> {
        Duration::between(earlier, *self)
    }

    /// The duration from this instant to `later`, negative if `later` is actually earlier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the span does not fit a [`Duration`].
    #[inline]
    pub fn duration_until(&self, later: Instant) -> Result<Duration, Error> {
        Duration::between(*self, later)
    }

    /// Runs a query against this instant and returns its result unchanged.
    ///
    /// The query receives an [`Accessor`] describing the instant. Any function or closure
    /// of the right shape works; ready-made ones live in the [`query`](crate::query)
    /// module.
    ///
    /// # Example
    ///
    /// ```
    /// use timepoint::{query, Instant, TimeUnit};
    ///
    /// let t = Instant::from_epoch_second(1);
    /// assert_eq!(t.query(query::precision), TimeUnit::Nanos);
    /// assert_eq!(t.query(query::zone), None);
    /// assert_eq!(t.query(|a| a.instant().epoch_second() * 2), 2);
    /// ```
    #[inline]
    pub fn query<R, F>(&self, query: F) -> R
    where
        F: FnOnce(Accessor) -> R,
    {
        query(Accessor::new(*self))
    }

    /// Parses an instant from its ISO 8601 text form, such as `2007-12-03T10:15:30.00Z`.
    ///
    /// The whole input must match; see the [`format`](crate::format) module for the exact
    /// grammar.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] carrying the kind of failure and the byte position where
    /// the input stopped matching.
    ///
    /// # Example
    ///
    /// ```
    /// use timepoint::{Instant, ParseErrorKind};
    ///
    /// let t = Instant::parse("1969-12-31T23:59:59.5Z")?;
    /// assert_eq!((t.epoch_second(), t.nano_of_second()), (-1, 500_000_000));
    ///
    /// let err = Instant::parse("1970-01-01T00:00:00").unwrap_err();
    /// assert_eq!(err.kind(), ParseErrorKind::TooShort);
    /// assert_eq!(err.position(), 19);
    /// # Ok::<(), timepoint::ParseError>(())
    /// ```
    pub fn parse(s: &str) -> Result<Instant, ParseError> {
        parse_iso_instant(s)
    }

    /// Returns the canonical ISO 8601 text, the same as the `Display` output.
    #[cfg(feature = "alloc")]
    pub fn to_iso_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Instant {
    /// Writes the canonical form `YYYY-MM-DDTHH:MM:SS.nnnnnnnnnZ`, always with nine
    /// fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_iso_instant(f, self.secs, self.nanos)
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Instant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Instant, ParseError> {
        parse_iso_instant(s)
    }
}

/// Add a `Duration` to an `Instant`.
///
/// # Panics
///
/// Panics if the resulting instant would be out of range.
/// Consider using [`Instant::checked_add`] to get an `Err` instead.
impl Add<Duration> for Instant {
    type Output = Instant;

    #[inline]
    fn add(self, rhs: Duration) -> Instant {
        self.checked_add(rhs).expect("`Instant + Duration` overflowed")
    }
}

/// Add-assign a `Duration` to an `Instant`.
///
/// # Panics
///
/// Panics if the resulting instant would be out of range.
impl AddAssign<Duration> for Instant {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = self.checked_add(rhs).expect("`Instant + Duration` overflowed");
    }
}

/// Subtract a `Duration` from an `Instant`.
///
/// # Panics
///
/// Panics if the resulting instant would be out of range.
/// Consider using [`Instant::checked_sub`] to get an `Err` instead.
impl Sub<Duration> for Instant {
    type Output = Instant;

    #[inline]
    fn sub(self, rhs: Duration) -> Instant {
        self.checked_sub(rhs).expect("`Instant - Duration` overflowed")
    }
}

/// Subtract-assign a `Duration` from an `Instant`.
///
/// # Panics
///
/// Panics if the resulting instant would be out of range.
impl SubAssign<Duration> for Instant {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        *self = self.checked_sub(rhs).expect("`Instant - Duration` overflowed");
    }
}

/// Subtracts another `Instant` from the current instant, giving the `Duration` between them.
///
/// # Panics
///
/// Panics if the instants are more than `i64::MAX` seconds apart.
/// Consider using [`Instant::duration_since`] to get an `Err` instead.
impl Sub<Instant> for Instant {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Instant) -> Duration {
        self.duration_since(rhs).expect("`Instant - Instant` overflowed")
    }
}

#[cfg(feature = "std")]
impl TryFrom<SystemTime> for Instant {
    type Error = Error;

    fn try_from(t: SystemTime) -> Result<Instant, Error> {
        match t.duration_since(UNIX_EPOCH) {
            Ok(after) => Instant::EPOCH.checked_add(Duration::from_std(after)?),
            Err(e) => Instant::EPOCH.checked_sub(Duration::from_std(e.duration())?),
        }
    }
}

#[cfg(feature = "std")]
impl TryFrom<Instant> for SystemTime {
    type Error = Error;

    fn try_from(t: Instant) -> Result<SystemTime, Error> {
        let since_epoch = Duration::between(Instant::EPOCH, t)?;
        let sys = if since_epoch.is_negative() {
            UNIX_EPOCH.checked_sub(since_epoch.checked_abs()?.to_std()?)
        } else {
            UNIX_EPOCH.checked_add(since_epoch.to_std()?)
        };
        sys.ok_or(Error::Overflow)
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for Instant {
    fn arbitrary(u: &mut arbitrary::Unstructured) -> arbitrary::Result<Instant> {
        let secs = u.arbitrary::<i64>()?;
        let nanos = u.int_in_range(0..=(NANOS_PER_SEC as u32 - 1))?;
        Ok(Instant { secs, nanos })
    }
}
