// This is a part of Timepoint.
// See README.md for license details.

//! Parsing of the ISO 8601 instant form.

use super::scan;
use super::{Failure, ParseError, ParseErrorKind, ParseResult};
use crate::arith::SECS_PER_DAY;
use crate::calendar::{days_from_civil, days_in_month};
use crate::Instant;

/// Years beyond this magnitude cannot produce a representable instant.
const YEAR_LIMIT: i64 = 1_000_000_000_000;

/// The fields of an instant as they appear in the text.
#[derive(Debug, PartialEq)]
struct Fields {
    year: i64,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
}

/// Parses the whole of `input` as an ISO 8601 instant.
///
/// The entire string must match the grammar; there is no partial consumption and no
/// surrounding whitespace is skipped.
pub(crate) fn parse_iso_instant(input: &str) -> ParseResult<Instant> {
    let fields = parse_fields(input).map_err(|e| e.locate(input))?;

    let days = days_from_civil(fields.year, fields.month, fields.day);
    let second_of_day = fields.hour * 3600 + fields.minute * 60 + fields.second;
    let secs = i128::from(days) * i128::from(SECS_PER_DAY) + i128::from(second_of_day);
    let out_of_range = ParseError::new(ParseErrorKind::OutOfRange, 0);
    let secs = i64::try_from(secs).map_err(|_| out_of_range)?;
    Instant::from_parts(secs, fields.nanosecond as i32).map_err(|_| out_of_range)
}

fn parse_fields(mut s: &str) -> Result<Fields, Failure<'_>> {
    macro_rules! try_consume {
        ($e:expr) => {{
            let (s_, v) = $e?;
            s = s_;
            v
        }};
    }

    // checks `lo <= v <= hi` for a field that started at `at`
    fn in_range(v: i64, lo: i64, hi: i64, at: &str) -> Result<u32, Failure<'_>> {
        if v < lo || v > hi {
            return Err(Failure::new(ParseErrorKind::OutOfRange, at));
        }
        Ok(v as u32)
    }

    let at = s;
    let year = try_consume!(scan::year(s));
    if year.abs() > YEAR_LIMIT {
        return Err(Failure::new(ParseErrorKind::OutOfRange, at));
    }
    s = scan::char(s, b'-')?;

    let at = s;
    let month = in_range(try_consume!(scan::number(s, 2, 2)), 1, 12, at)?;
    s = scan::char(s, b'-')?;

    let at = s;
    let day = try_consume!(scan::number(s, 2, 2));
    let last_day = days_in_month(year, month).unwrap_or(31);
    let day = in_range(day, 1, i64::from(last_day), at)?;

    s = scan::char_ignore_case(s, b'T')?;

    let at = s;
    let hour = in_range(try_consume!(scan::number(s, 2, 2)), 0, 23, at)?;
    s = scan::char(s, b':')?;
    let at = s;
    let minute = in_range(try_consume!(scan::number(s, 2, 2)), 0, 59, at)?;
    s = scan::char(s, b':')?;
    let at = s;
    let second = in_range(try_consume!(scan::number(s, 2, 2)), 0, 59, at)?;

    let nanosecond = match s.as_bytes().first() {
        Some(&b'.') => try_consume!(scan::nanosecond(&s[1..])),
        _ => 0,
    };

    s = scan::char_ignore_case(s, b'Z')?;
    if !s.is_empty() {
        return Err(Failure::new(ParseErrorKind::TooLong, s));
    }

    Ok(Fields { year, month, day, hour, minute, second, nanosecond })
}
