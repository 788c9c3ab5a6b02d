// This is a part of Timepoint.
// See README.md for license details.

//! The ISO 8601 text form of an [`Instant`](crate::Instant).
//!
//! Only one profile is supported, the UTC instant form:
//!
//! ```text
//! instant  = year "-" month "-" day ("T" / "t") hour ":" minute ":" second [fraction] ("Z" / "z")
//! year     = 4DIGIT / ("+" / "-") 4*DIGIT
//! month    = 2DIGIT ; 01-12
//! day      = 2DIGIT ; 01-28, 01-29, 01-30, 01-31 based on month/year
//! hour     = 2DIGIT ; 00-23
//! minute   = 2DIGIT ; 00-59
//! second   = 2DIGIT ; 00-59, leap seconds are not accepted
//! fraction = "." 1*9DIGIT
//! ```
//!
//! Numeric offsets are not part of this profile; an instant is always written in UTC.
//!
//! Formatting always produces the canonical form: nine fractional digits, an uppercase
//! `T` and `Z`, and an explicit sign on years outside `0000..=9999`. Parsing the
//! canonical form of any instant gives back the same instant.

use core::fmt;

pub(crate) mod formatting;
pub(crate) mod parse;
pub(crate) mod scan;

pub(crate) use formatting::write_iso_instant;
pub(crate) use parse::parse_iso_instant;

/// An error from parsing the ISO 8601 text form.
///
/// Carries the kind of failure and the byte offset in the input where it was detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseError {
    kind: ParseErrorKind,
    position: usize,
}

impl ParseError {
    pub(crate) const fn new(kind: ParseErrorKind, position: usize) -> ParseError {
        ParseError { kind, position }
    }

    /// The category of parse error.
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The byte offset in the input at which the error was detected.
    pub const fn position(&self) -> usize {
        self.position
    }
}

/// The category of parse error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseErrorKind {
    /// Given field is out of permitted range, or the resulting instant is not representable.
    OutOfRange,

    /// The input contains a character that is not allowed at this position.
    Invalid,

    /// The input ended before a complete instant was read. This includes the empty string.
    TooShort,

    /// The input has trailing characters after the zone designator.
    TooLong,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ParseErrorKind::OutOfRange => write!(f, "input is out of range")?,
            ParseErrorKind::Invalid => write!(f, "input contains invalid characters")?,
            ParseErrorKind::TooShort => write!(f, "premature end of input")?,
            ParseErrorKind::TooLong => write!(f, "trailing input")?,
        }
        write!(f, " at {}", self.position)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Same as `Result<T, ParseError>`.
pub type ParseResult<T> = Result<T, ParseError>;

/// A failure inside one of the scanning routines: the kind of failure and the input that
/// was left at the point it was detected.
#[derive(Debug, PartialEq)]
pub(crate) struct Failure<'a> {
    pub(crate) kind: ParseErrorKind,
    pub(crate) at: &'a str,
}

impl<'a> Failure<'a> {
    pub(crate) const fn new(kind: ParseErrorKind, at: &'a str) -> Failure<'a> {
        Failure { kind, at }
    }

    /// Turns the failure into a [`ParseError`] positioned relative to the whole `input`.
    pub(crate) fn locate(self, input: &str) -> ParseError {
        ParseError::new(self.kind, input.len() - self.at.len())
    }
}

/// The result of a scanning routine: the unconsumed input and the value read.
pub(crate) type ScanResult<'a, T> = Result<(&'a str, T), Failure<'a>>;
