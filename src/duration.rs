//! Temporal quantification

use core::fmt::{self, Write};
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use core::time::Duration as StdDuration;

use crate::arith::{
    self, div_mod_floor, MILLIS_PER_SEC, NANOS_PER_MILLI, NANOS_PER_SEC, SECS_PER_DAY,
    SECS_PER_HOUR, SECS_PER_MINUTE,
};
use crate::{Error, Instant};

/// A signed amount of time with nanosecond precision, such as `34.5 seconds`.
///
/// A `Duration` is not tied to any point on the timeline. It is represented as a number of
/// seconds and a nanosecond adjustment that is always in `0..1_000_000_000`, so a negative
/// duration keeps a non-negative nanosecond part: minus half a second is stored as
/// `(-1, 500_000_000)`.
///
/// The range is the full `i64` range of seconds, from [`Duration::MIN`] (`i64::MIN`
/// seconds) to [`Duration::MAX`] (`i64::MAX` seconds plus 999,999,999 nanoseconds).
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duration {
    secs: i64,
    nanos: u32, // Always 0 <= nanos < NANOS_PER_SEC
}

impl Duration {
    /// A duration of zero length.
    pub const ZERO: Duration = Duration { secs: 0, nanos: 0 };

    /// The minimum possible `Duration`: `i64::MIN` seconds.
    pub const MIN: Duration = Duration { secs: i64::MIN, nanos: 0 };

    /// The maximum possible `Duration`: `i64::MAX` seconds and 999,999,999 nanoseconds.
    pub const MAX: Duration = Duration { secs: i64::MAX, nanos: 999_999_999 };

    /// Makes a new `Duration` from a number of seconds and a nanosecond adjustment.
    ///
    /// The adjustment may be any value, including a negative one or one larger than a
    /// second; it is carried into the seconds with floor semantics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the carry takes the seconds out of the `i64` range.
    ///
    /// # Example
    ///
    /// ```
    /// use timepoint::Duration;
    ///
    /// let d = Duration::new(3, -1)?;
    /// assert_eq!((d.secs(), d.subsec_nanos()), (2, 999_999_999));
    /// assert!(Duration::new(i64::MAX, 1_000_000_000).is_err());
    /// # Ok::<(), timepoint::Error>(())
    /// ```
    pub fn new(secs: i64, nano_adjustment: i64) -> Result<Duration, Error> {
        let (secs, nanos) = arith::normalize(secs, nano_adjustment)?;
        Ok(Duration { secs, nanos })
    }

    /// Makes a new `Duration` with the given number of seconds.
    #[inline]
    pub const fn from_secs(secs: i64) -> Duration {
        Duration { secs, nanos: 0 }
    }

    /// Makes a new `Duration` with the given number of milliseconds.
    ///
    /// Every `i64` millisecond count is representable.
    #[inline]
    pub const fn from_millis(millis: i64) -> Duration {
        let (secs, millis) = div_mod_floor(millis, MILLIS_PER_SEC);
        Duration { secs, nanos: (millis * NANOS_PER_MILLI) as u32 }
    }

    /// Makes a new `Duration` with the given number of nanoseconds.
    ///
    /// Every `i64` nanosecond count is representable.
    #[inline]
    pub const fn from_nanos(nanos: i64) -> Duration {
        let (secs, nanos) = div_mod_floor(nanos, NANOS_PER_SEC);
        Duration { secs, nanos: nanos as u32 }
    }

    /// Makes a new `Duration` with the given number of minutes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] when the duration is out of bounds.
    #[inline]
    pub fn from_minutes(minutes: i64) -> Result<Duration, Error> {
        Ok(Duration::from_secs(arith::mul(minutes, SECS_PER_MINUTE)?))
    }

    /// Makes a new `Duration` with the given number of hours.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] when the duration is out of bounds.
    #[inline]
    pub fn from_hours(hours: i64) -> Result<Duration, Error> {
        Ok(Duration::from_secs(arith::mul(hours, SECS_PER_HOUR)?))
    }

    /// Makes a new `Duration` with the given number of 86,400-second days.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] when the duration is out of bounds.
    #[inline]
    pub fn from_days(days: i64) -> Result<Duration, Error> {
        Ok(Duration::from_secs(arith::mul(days, SECS_PER_DAY)?))
    }

    /// The exact span from `start` to `end`, negative if `end` is before `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the span does not fit a `Duration`, which can only
    /// happen for instants more than `i64::MAX` seconds apart.
    ///
    /// # Example
    ///
    /// ```
    /// use timepoint::{Duration, Instant};
    ///
    /// let start = Instant::new(10, 500_000_000)?;
    /// let end = Instant::from_epoch_second(9);
    /// assert_eq!(Duration::between(start, end)?, Duration::from_millis(-1500));
    /// # Ok::<(), timepoint::Error>(())
    /// ```
    pub fn between(start: Instant, end: Instant) -> Result<Duration, Error> {
        let secs = i128::from(end.epoch_second()) - i128::from(start.epoch_second());
        let nanos = i128::from(end.nano_of_second()) - i128::from(start.nano_of_second());
        Duration::from_total_nanos(secs * i128::from(NANOS_PER_SEC) + nanos)
    }

    /// Builds a `Duration` from an exact nanosecond count.
    fn from_total_nanos(total: i128) -> Result<Duration, Error> {
        let per_sec = i128::from(NANOS_PER_SEC);
        let secs = i64::try_from(total.div_euclid(per_sec)).map_err(|_| Error::Overflow)?;
        Ok(Duration { secs, nanos: total.rem_euclid(per_sec) as u32 })
    }

    /// The exact number of nanoseconds in this duration.
    fn total_nanos(&self) -> i128 {
        i128::from(self.secs) * i128::from(NANOS_PER_SEC) + i128::from(self.nanos)
    }

    /// Returns the whole-second part of the duration.
    ///
    /// For negative durations this is rounded toward negative infinity, and
    /// [`subsec_nanos`](Duration::subsec_nanos) is added on top.
    #[inline]
    pub const fn secs(&self) -> i64 {
        self.secs
    }

    /// Returns the nanosecond adjustment, always in `0..1_000_000_000`.
    #[inline]
    pub const fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    /// Returns `true` if the duration equals `Duration::ZERO`.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.secs == 0 && self.nanos == 0
    }

    /// Returns `true` if the duration is shorter than zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.secs < 0
    }

    /// Returns the total number of whole milliseconds, rounded toward negative infinity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the count does not fit an `i64`.
    pub fn num_millis(&self) -> Result<i64, Error> {
        arith::to_units(self.secs, self.nanos, MILLIS_PER_SEC, NANOS_PER_MILLI)
    }

    /// Returns the total number of nanoseconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the count does not fit an `i64`.
    pub fn num_nanos(&self) -> Result<i64, Error> {
        arith::to_units(self.secs, self.nanos, NANOS_PER_SEC, 1)
    }

    /// Add two durations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the sum is out of range.
    pub fn checked_add(&self, rhs: Duration) -> Result<Duration, Error> {
        let (secs, nanos) = arith::add_parts(self.secs, self.nanos, rhs.secs, rhs.nanos.into())?;
        Ok(Duration { secs, nanos })
    }

    /// Subtract two durations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the difference is out of range.
    pub fn checked_sub(&self, rhs: Duration) -> Result<Duration, Error> {
        let (secs, nanos) = arith::sub_parts(self.secs, self.nanos, rhs.secs, rhs.nanos.into())?;
        Ok(Duration { secs, nanos })
    }

    /// Returns the duration with its sign flipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] for [`Duration::MIN`], which has no positive counterpart.
    pub fn checked_neg(&self) -> Result<Duration, Error> {
        Duration::ZERO.checked_sub(*self)
    }

    /// Returns the absolute value of the duration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] for [`Duration::MIN`].
    pub fn checked_abs(&self) -> Result<Duration, Error> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(*self)
        }
    }

    /// Multiplies the duration by a scalar, exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the product is out of range.
    pub fn checked_mul(&self, rhs: i64) -> Result<Duration, Error> {
        let total = self.total_nanos().checked_mul(i128::from(rhs)).ok_or(Error::Overflow)?;
        Duration::from_total_nanos(total)
    }

    /// Divides the duration by a scalar, truncating toward zero at nanosecond precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when dividing by zero and [`Error::Overflow`] for
    /// `Duration::MIN / -1`.
    pub fn checked_div(&self, rhs: i64) -> Result<Duration, Error> {
        if rhs == 0 {
            return Err(Error::InvalidArgument("division by zero"));
        }
        Duration::from_total_nanos(self.total_nanos() / i128::from(rhs))
    }

    /// Creates a `Duration` from a standard library [`Duration`](core::time::Duration).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the duration has more than `i64::MAX` seconds.
    pub fn from_std(duration: StdDuration) -> Result<Duration, Error> {
        let secs = i64::try_from(duration.as_secs()).map_err(|_| Error::Overflow)?;
        Ok(Duration { secs, nanos: duration.subsec_nanos() })
    }

    /// Creates a standard library [`Duration`](core::time::Duration) from this `Duration`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the duration is negative, as the standard
    /// library type cannot represent that.
    pub fn to_std(&self) -> Result<StdDuration, Error> {
        if self.is_negative() {
            return Err(Error::InvalidArgument("negative duration"));
        }
        Ok(StdDuration::new(self.secs as u64, self.nanos))
    }
}

impl Neg for Duration {
    type Output = Duration;

    /// # Panics
    ///
    /// Panics when negating [`Duration::MIN`].
    #[inline]
    fn neg(self) -> Duration {
        self.checked_neg().expect("`-Duration` overflowed")
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        self.checked_add(rhs).expect("`Duration + Duration` overflowed")
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        self.checked_sub(rhs).expect("`Duration - Duration` overflowed")
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        let new = self.checked_add(rhs).expect("`Duration + Duration` overflowed");
        *self = new;
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Duration) {
        let new = self.checked_sub(rhs).expect("`Duration - Duration` overflowed");
        *self = new;
    }
}

impl<'a> core::iter::Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, |acc, x| acc + *x)
    }
}

impl core::iter::Sum<Duration> for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, |acc, x| acc + x)
    }
}

impl fmt::Display for Duration {
    /// Format a duration using the [ISO 8601] format, `PTnHnMn.nS`
    ///
    /// Hours, minutes and seconds all carry the sign of the duration, so minus one and a
    /// half seconds is `PT-1.5S`. Trailing zeros of the fraction are dropped.
    ///
    /// [ISO 8601]: https://en.wikipedia.org/wiki/ISO_8601#Durations
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }

        // the fraction is written as a magnitude, so a negative value with a fraction is
        // split from the next whole second towards zero
        let borrow = self.secs < 0 && self.nanos > 0;
        let whole = if borrow { self.secs + 1 } else { self.secs };
        let hours = whole / SECS_PER_HOUR;
        let minutes = (whole % SECS_PER_HOUR) / SECS_PER_MINUTE;
        let secs = whole % SECS_PER_MINUTE;

        f.write_str("PT")?;
        if hours != 0 {
            write!(f, "{}H", hours)?;
        }
        if minutes != 0 {
            write!(f, "{}M", minutes)?;
        }
        if secs == 0 && self.nanos == 0 {
            return Ok(());
        }

        if borrow && secs == 0 {
            f.write_str("-0")?;
        } else {
            write!(f, "{}", secs)?;
        }
        if self.nanos > 0 {
            let mut frac = if borrow { NANOS_PER_SEC as u32 - self.nanos } else { self.nanos };
            let mut width = 9;
            while frac % 10 == 0 {
                frac /= 10;
                width -= 1;
            }
            write!(f, ".{:0width$}", frac, width = width)?;
        }
        f.write_char('S')
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for Duration {
    fn arbitrary(u: &mut arbitrary::Unstructured) -> arbitrary::Result<Duration> {
        let secs = u.arbitrary::<i64>()?;
        let nanos = u.int_in_range(0..=(NANOS_PER_SEC as u32 - 1))?;
        Ok(Duration { secs, nanos })
    }
}
