//! Allocation-free assertions on formatted output, usable without `std`.

use core::fmt::{self, Write};

/// Checks that formatting `value` with `Display` writes exactly `expected`.
#[track_caller]
pub(crate) fn assert_display_eq<D: fmt::Display>(value: D, expected: &str) {
    assert_writes(expected, |w| write!(w, "{}", value));
}

/// Checks that formatting `value` with `Debug` writes exactly `expected`.
#[track_caller]
pub(crate) fn assert_debug_eq<D: fmt::Debug>(value: D, expected: &str) {
    assert_writes(expected, |w| write!(w, "{:?}", value));
}

#[track_caller]
fn assert_writes<F>(expected: &str, write: F)
where
    F: FnOnce(&mut WriteCompare) -> fmt::Result,
{
    let mut w = WriteCompare::new(expected);
    let result = write(&mut w);
    let written = w.written();
    assert!(result.is_ok(), "output diverged after {:?}, expected {:?}", written, expected);
    assert!(w.is_done(), "output {:?} stops short of {:?}", written, expected);
}

/// A `fmt::Write` sink that fails as soon as the output departs from `expected`.
pub(crate) struct WriteCompare<'a> {
    expected: &'a str,
    remainder: &'a str,
}

impl<'a> WriteCompare<'a> {
    pub(crate) fn new(expected: &'a str) -> Self {
        Self { expected, remainder: expected }
    }

    /// The matching prefix written so far.
    pub(crate) fn written(&self) -> &'a str {
        &self.expected[..self.expected.len() - self.remainder.len()]
    }

    /// Returns `true` once all of `expected` has been written.
    pub(crate) fn is_done(&self) -> bool {
        self.remainder.is_empty()
    }
}

impl Write for WriteCompare<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.remainder = self.remainder.strip_prefix(s).ok_or(fmt::Error)?;
        Ok(())
    }
}
