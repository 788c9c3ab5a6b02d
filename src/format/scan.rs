// This is a part of Timepoint.
// See README.md for license details.

/*!
 * Various scanning routines for the parser.
 */

use super::{Failure, ParseErrorKind, ScanResult};

/// The error for running out of input or finding something else at `s`.
#[inline]
fn unexpected(s: &str) -> Failure<'_> {
    let kind = if s.is_empty() { ParseErrorKind::TooShort } else { ParseErrorKind::Invalid };
    Failure::new(kind, s)
}

/// The number of leading ASCII digits in `s`.
#[inline]
pub(crate) fn digits(s: &str) -> usize {
    s.as_bytes().iter().take_while(|c| c.is_ascii_digit()).count()
}

/// Tries to parse the non-negative number from `min` to `max` digits.
///
/// The absence of digits at all is an unconditional error.
/// More than `max` digits are consumed up to the first `max` digits.
/// Any number that does not fit in `i64` is an error.
pub(crate) fn number(s: &str, min: usize, max: usize) -> ScanResult<'_, i64> {
    assert!(min <= max);

    // limit `s` to given number of digits
    let mut window = s.as_bytes();
    if window.len() > max {
        window = &window[..max];
    }

    // scan digits
    let upto = window.iter().position(|&c| !c.is_ascii_digit()).unwrap_or(window.len());
    if upto < min {
        return Err(unexpected(&s[upto..]));
    }

    let mut n = 0i64;
    for &c in &window[..upto] {
        n = match n.checked_mul(10).and_then(|n| n.checked_add((c - b'0') as i64)) {
            Some(n) => n,
            None => return Err(Failure::new(ParseErrorKind::OutOfRange, s)),
        };
    }

    Ok((&s[upto..], n))
}

/// Tries to consume exactly one given character.
pub(crate) fn char(s: &str, c1: u8) -> Result<&str, Failure<'_>> {
    match s.as_bytes().first() {
        Some(&c) if c == c1 => Ok(&s[1..]),
        _ => Err(unexpected(s)),
    }
}

/// Tries to consume one given ASCII letter in either case.
pub(crate) fn char_ignore_case(s: &str, c1: u8) -> Result<&str, Failure<'_>> {
    match s.as_bytes().first() {
        Some(&c) if c.eq_ignore_ascii_case(&c1) => Ok(&s[1..]),
        _ => Err(unexpected(s)),
    }
}

/// Tries to parse the fractional part of a second, the digits after the `.`.
///
/// Between one and nine digits are accepted. Returns the value scaled to nanoseconds, so
/// `5` and `500` both give `500_000_000`.
pub(crate) fn nanosecond(s: &str) -> ScanResult<'_, u32> {
    // record the number of digits consumed for later scaling.
    let upto = digits(s);
    if upto == 0 {
        return Err(unexpected(s));
    }
    if upto > 9 {
        return Err(Failure::new(ParseErrorKind::Invalid, &s[9..]));
    }

    let (rest, v) = number(s, upto, upto)?;
    static SCALE: [u32; 10] =
        [0, 100_000_000, 10_000_000, 1_000_000, 100_000, 10_000, 1_000, 100, 10, 1];
    Ok((rest, v as u32 * SCALE[upto]))
}

/// Tries to parse a year: four digits without a sign, or a sign and at least four digits.
///
/// Only the forms the formatter writes are accepted: a `+` needs more than four digits and
/// a `-` needs a year other than zero.
pub(crate) fn year(s: &str) -> ScanResult<'_, i64> {
    let negative = match s.as_bytes().first() {
        Some(&b'+') => false,
        Some(&b'-') => true,
        _ => return number(s, 4, 4),
    };
    let unsigned = &s[1..];
    let upto = digits(unsigned);
    if upto < 4 {
        return Err(unexpected(&unsigned[upto..]));
    }
    let (rest, year) = number(unsigned, upto, upto).map_err(|e| Failure::new(e.kind, s))?;
    match (negative, year) {
        (false, _) if upto == 4 => Err(Failure::new(ParseErrorKind::Invalid, s)),
        (true, 0) => Err(Failure::new(ParseErrorKind::Invalid, s)),
        (true, year) => Ok((rest, -year)),
        (false, year) => Ok((rest, year)),
    }
}
