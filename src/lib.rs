// This is a part of Timepoint.
// See README.md for license details.

//! # Timepoint: instants and durations for Rust
//!
//! Timepoint models a point on a continuous UTC timeline with nanosecond resolution
//! ([`Instant`]) and a signed span between two such points ([`Duration`]). Both are small,
//! `Copy` value types made of a signed 64-bit second count and a nanosecond-of-second
//! adjustment that is always kept in `0..1_000_000_000`.
//!
//! All arithmetic is exact integer arithmetic. Every operation that could leave the
//! representable range returns an [`Error::Overflow`] instead of wrapping, and no
//! partially-updated value is ever observable.
//!
//! Leap seconds are not represented: every minute is exactly 60 seconds long.
//!
//! ### Features
//!
//! Default features:
//!
//! - `alloc`: Enable features that depend on allocation (primarily string formatting).
//! - `std`: Enables functionality that depends on the standard library. This is a superset
//!   of `alloc` and adds interoperation with standard library types and traits.
//! - `clock`: Enables reading the system time (`SystemClock`).
//!
//! Optional features:
//!
//! - `serde`: Enable serialization/deserialization via [serde].
//! - `arbitrary`: Construct arbitrary instances of a type with the Arbitrary crate.
//! - `defmt`: Enable formatting of the public types with [defmt].
//!
//! [serde]: https://github.com/serde-rs/serde
//! [defmt]: https://github.com/knurling-rs/defmt
//!
//! ## Overview
//!
//! ### Instant
//!
//! An [`Instant`] is identified by the number of seconds since the epoch
//! `1970-01-01T00:00:00Z` and a nanosecond within that second. The nanosecond part is
//! never negative, so the instant half a second before the epoch is `(-1, 500_000_000)`.
//!
//! ```
//! use timepoint::{Duration, Instant};
//!
//! let t = Instant::new(2, -1)?;
//! assert_eq!((t.epoch_second(), t.nano_of_second()), (1, 999_999_999));
//!
//! let later = t.checked_add(Duration::from_millis(1))?;
//! assert_eq!(later.to_string(), "1970-01-01T00:00:02.000999999Z");
//! # Ok::<(), timepoint::Error>(())
//! ```
//!
//! ### Text form
//!
//! Instants are formatted and parsed in a strict ISO 8601 profile,
//! `YYYY-MM-DDTHH:MM:SS[.fffffffff]Z`. Formatting always writes nine fractional digits.
//!
//! ```
//! use timepoint::Instant;
//!
//! let t: Instant = "2012-09-16T21:17:59.338Z".parse()?;
//! assert_eq!(t.to_epoch_milli(), Ok(1_347_830_279_338));
//! assert_eq!(t.to_string(), "2012-09-16T21:17:59.338000000Z");
//! # Ok::<(), timepoint::ParseError>(())
//! ```
//!
//! ### Time sources
//!
//! There is no ambient "current time". Code that needs it takes a [`Clock`]:
//!
//! ```
//! use timepoint::{Clock, FixedClock, Instant};
//!
//! fn stamp(clock: &impl Clock) -> Result<String, timepoint::Error> {
//!     Ok(Instant::now(clock)?.to_string())
//! }
//!
//! let clock = FixedClock::new(Instant::from_epoch_second(86_400));
//! assert_eq!(stamp(&clock)?, "1970-01-02T00:00:00.000000000Z");
//! # Ok::<(), timepoint::Error>(())
//! ```

#![doc(html_root_url = "https://docs.rs/timepoint/latest/", test(attr(deny(warnings))))]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![deny(clippy::tests_outside_test_module)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

mod arith;

pub mod calendar;

mod clock;
#[cfg(feature = "clock")]
pub use clock::SystemClock;
pub use clock::{Clock, FixedClock, OffsetClock};

mod duration;
pub use duration::Duration;

mod error;
pub use error::Error;

pub mod format;
#[doc(no_inline)]
pub use format::{ParseError, ParseErrorKind};

mod instant;
pub use instant::Instant;

pub mod query;
#[doc(no_inline)]
pub use query::{Accessor, TimeUnit};

#[cfg(feature = "serde")]
mod serde;

#[cfg(test)]
mod utils;

/// A convenience module appropriate for glob imports (`use timepoint::prelude::*;`).
pub mod prelude {
    #[cfg(feature = "clock")]
    pub use crate::SystemClock;
    pub use crate::{Clock, Duration, FixedClock, Instant, OffsetClock, TimeUnit};
}
