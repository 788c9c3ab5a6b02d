// This is a part of Timepoint.
// See README.md for license details.

//! Overflow-checked integer arithmetic and the `(seconds, nanoseconds)` normalization
//! shared by [`Instant`](crate::Instant) and [`Duration`](crate::Duration).
//!
//! Every function here either returns the exact mathematical result or
//! [`Error::Overflow`]; nothing wraps.

use crate::Error;

/// The number of nanoseconds in a second.
pub(crate) const NANOS_PER_SEC: i64 = 1_000_000_000;
/// The number of nanoseconds in a millisecond.
pub(crate) const NANOS_PER_MILLI: i64 = 1_000_000;
/// The number of milliseconds in a second.
pub(crate) const MILLIS_PER_SEC: i64 = 1000;
/// The number of seconds in a minute.
pub(crate) const SECS_PER_MINUTE: i64 = 60;
/// The number of seconds in an hour.
pub(crate) const SECS_PER_HOUR: i64 = 3600;
/// The number of seconds in a day.
pub(crate) const SECS_PER_DAY: i64 = 86_400;

/// `a + b`, failing instead of wrapping.
///
/// The bound is checked before the addition is evaluated.
#[inline]
pub(crate) const fn add(a: i64, b: i64) -> Result<i64, Error> {
    if (b > 0 && a > i64::MAX - b) || (b < 0 && a < i64::MIN - b) {
        return Err(Error::Overflow);
    }
    Ok(a + b)
}

/// `a - b`, failing instead of wrapping.
#[inline]
pub(crate) const fn sub(a: i64, b: i64) -> Result<i64, Error> {
    if (b > 0 && a < i64::MIN + b) || (b < 0 && a > i64::MAX + b) {
        return Err(Error::Overflow);
    }
    Ok(a - b)
}

/// `a * b`, failing instead of wrapping.
#[inline]
pub(crate) const fn mul(a: i64, b: i64) -> Result<i64, Error> {
    match a.checked_mul(b) {
        Some(v) => Ok(v),
        None => Err(Error::Overflow),
    }
}

/// Floored division and modulo for a positive divisor.
///
/// The remainder always has the sign of the divisor, so it is never negative here.
#[inline]
pub(crate) const fn div_mod_floor(a: i64, b: i64) -> (i64, i64) {
    (a.div_euclid(b), a.rem_euclid(b))
}

/// Brings a raw `(secs, nanos)` pair into canonical form, `0 <= nanos < 1_000_000_000`.
///
/// `nanos` may be any value, including negative ones. The carry is taken with floor
/// semantics, so `(5, -1)` becomes `(4, 999_999_999)`.
#[inline]
pub(crate) const fn normalize(secs: i64, nanos: i64) -> Result<(i64, u32), Error> {
    let (carry, nanos) = div_mod_floor(nanos, NANOS_PER_SEC);
    match add(secs, carry) {
        Ok(secs) => Ok((secs, nanos as u32)),
        Err(e) => Err(e),
    }
}

/// Adds a raw `(add_secs, add_nanos)` amount to a canonical `(secs, nanos)` pair.
///
/// Each step is checked on its own: the seconds are combined first, then the whole
/// seconds contained in `add_nanos`, then the remaining nanoseconds are normalized. A
/// sum that leaves the range at any of these steps fails, even when a later carry would
/// have brought it back.
pub(crate) const fn add_parts(
    secs: i64,
    nanos: u32,
    add_secs: i64,
    add_nanos: i64,
) -> Result<(i64, u32), Error> {
    let secs = match add(secs, add_secs) {
        Ok(s) => s,
        Err(e) => return Err(e),
    };
    let secs = match add(secs, add_nanos / NANOS_PER_SEC) {
        Ok(s) => s,
        Err(e) => return Err(e),
    };
    normalize(secs, nanos as i64 + add_nanos % NANOS_PER_SEC)
}

/// Subtracts a raw `(sub_secs, sub_nanos)` amount from a canonical `(secs, nanos)` pair.
///
/// This is [`add_parts`] with the amount negated. `i64::MIN` cannot be negated, so an
/// operand of `i64::MIN` is applied as `i64::MAX` followed by one more unit.
pub(crate) const fn sub_parts(
    secs: i64,
    nanos: u32,
    sub_secs: i64,
    sub_nanos: i64,
) -> Result<(i64, u32), Error> {
    let step = if sub_secs == i64::MIN {
        add_parts(secs, nanos, i64::MAX, -sub_nanos)
    } else if sub_nanos == i64::MIN {
        add_parts(secs, nanos, -sub_secs, i64::MAX)
    } else {
        return add_parts(secs, nanos, -sub_secs, -sub_nanos);
    };
    match step {
        Ok((s, n)) if sub_secs == i64::MIN => add_parts(s, n, 1, 0),
        Ok((s, n)) => add_parts(s, n, 0, 1),
        Err(e) => Err(e),
    }
}

/// Counts the whole units in a canonical `(secs, nanos)` pair, rounding toward negative
/// infinity. One second must be exactly `units_per_sec * nanos_per_unit` nanoseconds.
///
/// A negative value with a nanosecond part is counted from `secs + 1`, so the smallest
/// count that fits an `i64` does not overflow on the way.
pub(crate) fn to_units(
    secs: i64,
    nanos: u32,
    units_per_sec: i64,
    nanos_per_unit: i64,
) -> Result<i64, Error> {
    let units = i64::from(nanos) / nanos_per_unit;
    if secs < 0 && nanos > 0 {
        add(mul(secs + 1, units_per_sec)?, units - units_per_sec)
    } else {
        add(mul(secs, units_per_sec)?, units)
    }
}

/// Splits a millisecond amount into whole seconds and a nanosecond remainder that keeps
/// the sign of `millis`.
#[inline]
pub(crate) const fn split_millis(millis: i64) -> (i64, i64) {
    (millis / MILLIS_PER_SEC, (millis % MILLIS_PER_SEC) * NANOS_PER_MILLI)
}
