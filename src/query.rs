// This is a part of Timepoint.
// See README.md for license details.

//! Queries that can be run against an [`Instant`] with [`Instant::query`].
//!
//! A query is any function taking an [`Accessor`]. The functions in this module are the
//! ready-made ones:
//!
//! ```
//! use timepoint::{query, Instant, TimeUnit};
//!
//! let t = Instant::EPOCH;
//! assert_eq!(t.query(query::precision), TimeUnit::Nanos);
//! assert_eq!(t.query(query::calendar), None);
//! ```

use core::fmt;

use crate::{Duration, Instant};

/// A fixed-length unit of time.
///
/// Every unit has an exact [`Duration`]; there are no units of variable length such as
/// months.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeUnit {
    /// One nanosecond.
    Nanos,
    /// One microsecond, 1,000 nanoseconds.
    Micros,
    /// One millisecond, 1,000 microseconds.
    Millis,
    /// One second.
    Seconds,
    /// 60 seconds.
    Minutes,
    /// 60 minutes.
    Hours,
    /// 12 hours.
    HalfDays,
    /// 24 hours.
    Days,
}

impl TimeUnit {
    /// The length of one unit.
    ///
    /// ```
    /// use timepoint::{Duration, TimeUnit};
    ///
    /// assert_eq!(TimeUnit::Micros.duration(), Duration::from_nanos(1000));
    /// assert_eq!(TimeUnit::HalfDays.duration(), Duration::from_secs(43_200));
    /// ```
    pub const fn duration(self) -> Duration {
        match self {
            TimeUnit::Nanos => Duration::from_nanos(1),
            TimeUnit::Micros => Duration::from_nanos(1000),
            TimeUnit::Millis => Duration::from_millis(1),
            TimeUnit::Seconds => Duration::from_secs(1),
            TimeUnit::Minutes => Duration::from_secs(60),
            TimeUnit::Hours => Duration::from_secs(3600),
            TimeUnit::HalfDays => Duration::from_secs(43_200),
            TimeUnit::Days => Duration::from_secs(86_400),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            TimeUnit::Nanos => "Nanos",
            TimeUnit::Micros => "Micros",
            TimeUnit::Millis => "Millis",
            TimeUnit::Seconds => "Seconds",
            TimeUnit::Minutes => "Minutes",
            TimeUnit::Hours => "Hours",
            TimeUnit::HalfDays => "HalfDays",
            TimeUnit::Days => "Days",
        })
    }
}

/// The view of an [`Instant`] handed to a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accessor {
    instant: Instant,
}

impl Accessor {
    pub(crate) const fn new(instant: Instant) -> Accessor {
        Accessor { instant }
    }

    /// The instant being queried.
    #[inline]
    pub const fn instant(&self) -> Instant {
        self.instant
    }

    /// The smallest unit the value can represent.
    #[inline]
    pub const fn precision(&self) -> TimeUnit {
        TimeUnit::Nanos
    }

    /// The time zone of the value. An instant is always on the UTC timeline and has none.
    #[inline]
    pub const fn zone(&self) -> Option<&'static str> {
        None
    }

    /// The calendar system of the value. An instant is not tied to a calendar.
    #[inline]
    pub const fn calendar(&self) -> Option<&'static str> {
        None
    }
}

/// Asks for the precision of the value.
pub fn precision(accessor: Accessor) -> TimeUnit {
    accessor.precision()
}

/// Asks for the time zone of the value.
pub fn zone(accessor: Accessor) -> Option<&'static str> {
    accessor.zone()
}

/// Asks for the calendar system of the value.
pub fn calendar(accessor: Accessor) -> Option<&'static str> {
    accessor.calendar()
}
