// This is a part of Timepoint.
// See README.md for license details.

//! Writing the canonical ISO 8601 instant form.

use core::fmt::{self, Write};

use crate::arith::{div_mod_floor, SECS_PER_DAY};
use crate::calendar::civil_from_days;

/// Writes `epoch_second` and `nano_of_second` as `YYYY-MM-DDTHH:MM:SS.nnnnnnnnnZ`.
///
/// Years outside `0..=9999` get an explicit sign and at least four digits.
pub(crate) fn write_iso_instant(
    w: &mut impl Write,
    epoch_second: i64,
    nano_of_second: u32,
) -> fmt::Result {
    let (days, second_of_day) = div_mod_floor(epoch_second, SECS_PER_DAY);
    let (year, month, day) = civil_from_days(days);

    if (0..=9999).contains(&year) {
        write_hundreds(w, (year / 100) as u8)?;
        write_hundreds(w, (year % 100) as u8)?;
    } else {
        // ISO 8601 requires the explicit sign for out-of-range years
        write!(w, "{:+05}", year)?;
    }
    w.write_char('-')?;
    write_hundreds(w, month as u8)?;
    w.write_char('-')?;
    write_hundreds(w, day as u8)?;

    w.write_char('T')?;

    let second_of_day = second_of_day as u32;
    write_hundreds(w, (second_of_day / 3600) as u8)?;
    w.write_char(':')?;
    write_hundreds(w, (second_of_day / 60 % 60) as u8)?;
    w.write_char(':')?;
    write_hundreds(w, (second_of_day % 60) as u8)?;
    write!(w, ".{:09}", nano_of_second)?;
    w.write_char('Z')
}

/// Equivalent to `{:02}` formatting for n < 100.
pub(crate) fn write_hundreds(w: &mut impl Write, n: u8) -> fmt::Result {
    if n >= 100 {
        return Err(fmt::Error);
    }

    let tens = b'0' + n / 10;
    let ones = b'0' + n % 10;
    w.write_char(tens as char)?;
    w.write_char(ones as char)
}
