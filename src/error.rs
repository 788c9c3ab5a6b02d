use core::fmt;

use crate::format::ParseError;

/// The error raised by the fallible operations of this crate.
///
/// Every error is reported to the immediate caller; there are no retries and no partial
/// results. An operation that fails leaves its receiver untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The mathematical result does not fit the signed 64-bit second range.
    Overflow,

    /// An argument was representable but not acceptable, with a short description of why.
    InvalidArgument(&'static str),

    /// Text did not conform to the ISO 8601 instant grammar.
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Overflow => write!(f, "arithmetic overflow"),
            Error::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            Error::Parse(err) => write!(f, "parse error: {}", err),
        }
    }
}

impl From<ParseError> for Error {
    #[inline]
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::format::{ParseError, ParseErrorKind};
    use crate::utils::assert_display_eq;

    #[test]
    fn test_error_display() {
        assert_display_eq(Error::Overflow, "arithmetic overflow");
        assert_display_eq(
            Error::InvalidArgument("nanosecond out of range"),
            "invalid argument: nanosecond out of range",
        );
        let err = ParseError::new(ParseErrorKind::Invalid, 4);
        assert_display_eq(Error::from(err), "parse error: input contains invalid characters at 4");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_error_source() {
        use std::error::Error as _;

        assert!(Error::Overflow.source().is_none());
        let err = Error::from(ParseError::new(ParseErrorKind::TooShort, 0));
        assert!(err.source().is_some());
    }
}
