// This is a part of Timepoint.
// See README.md for license details.

//! Sources of the current instant.

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, sync::Arc};
#[cfg(feature = "clock")]
use std::time::SystemTime;

use crate::{Duration, Error, Instant};

/// A source of the current instant.
///
/// Code that needs to know the time should take a `Clock` rather than reading the system
/// time directly, so tests can substitute a [`FixedClock`] or an [`OffsetClock`].
///
/// # Example
///
/// ```
/// use timepoint::{Clock, Duration, FixedClock, Instant, OffsetClock};
///
/// let base = FixedClock::new(Instant::from_epoch_second(100));
/// let late = OffsetClock::new(&base, Duration::from_secs(5));
/// assert_eq!(late.instant()?, Instant::from_epoch_second(105));
/// # Ok::<(), timepoint::Error>(())
/// ```
pub trait Clock {
    /// Returns the current instant according to this clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the clock cannot produce a representable instant.
    fn instant(&self) -> Result<Instant, Error>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn instant(&self) -> Result<Instant, Error> {
        (**self).instant()
    }
}

#[cfg(feature = "alloc")]
impl<C: Clock + ?Sized> Clock for Box<C> {
    fn instant(&self) -> Result<Instant, Error> {
        (**self).instant()
    }
}

#[cfg(feature = "alloc")]
impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn instant(&self) -> Result<Instant, Error> {
        (**self).instant()
    }
}

/// The system wall clock.
///
/// The reading is whatever the operating system reports and may jump backwards or
/// forwards when the system time is adjusted.
#[cfg(feature = "clock")]
#[cfg_attr(docsrs, doc(cfg(feature = "clock")))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SystemClock;

#[cfg(feature = "clock")]
impl Clock for SystemClock {
    fn instant(&self) -> Result<Instant, Error> {
        Instant::try_from(SystemTime::now())
    }
}

/// A clock that always returns the same instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedClock {
    instant: Instant,
}

impl FixedClock {
    /// Makes a clock stopped at `instant`.
    pub const fn new(instant: Instant) -> FixedClock {
        FixedClock { instant }
    }
}

impl Clock for FixedClock {
    fn instant(&self) -> Result<Instant, Error> {
        Ok(self.instant)
    }
}

/// A clock that runs a fixed [`Duration`] ahead of (or, with a negative offset, behind)
/// another clock.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OffsetClock<C> {
    inner: C,
    offset: Duration,
}

impl<C: Clock> OffsetClock<C> {
    /// Makes a clock that reads `inner` and adds `offset`.
    pub const fn new(inner: C, offset: Duration) -> OffsetClock<C> {
        OffsetClock { inner, offset }
    }

    /// The offset applied to the underlying clock.
    pub const fn offset(&self) -> Duration {
        self.offset
    }
}

impl<C: Clock> Clock for OffsetClock<C> {
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if shifting the underlying reading leaves the range of
    /// [`Instant`], and passes on errors of the underlying clock.
    fn instant(&self) -> Result<Instant, Error> {
        self.inner.instant()?.checked_add(self.offset)
    }
}
