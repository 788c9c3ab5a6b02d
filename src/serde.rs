//! Serialization/Deserialization with serde.
//!
//! `Instant` is written as its ISO 8601 text to human-readable formats such as JSON, and
//! as the pair `(epoch_second: i64, nano_of_second: i32)` to compact binary formats.
//! `Duration` is always the pair `(secs: i64, nanos: i32)`.
//!
//! Deserialization accepts only canonical pairs: a nanosecond part outside
//! `0..1_000_000_000` is rejected rather than normalized.
//!
//! *Available on crate feature 'serde' only.*

use core::fmt;
use serde::{de, ser, Serialize};

use crate::arith::NANOS_PER_SEC;
use crate::{Duration, Instant};

/// Create a custom `de::Error` with `SerdeError::InvalidPair`.
fn invalid_pair<E>(secs: i64, nanos: i32) -> E
where
    E: de::Error,
{
    E::custom(SerdeError::InvalidPair(secs, nanos))
}

enum SerdeError {
    InvalidPair(i64, i32),
}

impl fmt::Display for SerdeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SerdeError::InvalidPair(secs, nanos) => {
                write!(
                    f,
                    "value is not a canonical (seconds, nanoseconds) pair: ({}, {})",
                    secs, nanos
                )
            }
        }
    }
}

/// Reads the two elements of a `(i64, i32)` pair.
fn next_pair<'de, A, V>(mut seq: A, visitor: &V) -> Result<(i64, i32), A::Error>
where
    A: de::SeqAccess<'de>,
    V: de::Visitor<'de>,
{
    let secs = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(0, visitor))?;
    let nanos = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(1, visitor))?;
    Ok((secs, nanos))
}

/// Serialize into an ISO 8601 string for human-readable formats, or an
/// `(epoch_second, nano_of_second)` pair otherwise.
impl ser::Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            // the nanosecond is always below 10^9, which fits an i32
            (self.epoch_second(), self.nano_of_second() as i32).serialize(serializer)
        }
    }
}

struct InstantVisitor;

impl<'de> de::Visitor<'de> for InstantVisitor {
    type Value = Instant;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an ISO 8601 instant or an (epoch second, nanosecond) pair")
    }

    fn visit_str<E>(self, value: &str) -> Result<Instant, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }

    fn visit_seq<A>(self, seq: A) -> Result<Instant, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let (secs, nanos) = next_pair(seq, &self)?;
        Instant::from_parts(secs, nanos).map_err(|_| invalid_pair(secs, nanos))
    }
}

/// Deserialize from an ISO 8601 string for human-readable formats, or an
/// `(epoch_second, nano_of_second)` pair otherwise.
impl<'de> de::Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(InstantVisitor)
        } else {
            deserializer.deserialize_tuple(2, InstantVisitor)
        }
    }
}

/// Serialize as a `(secs, nanos)` pair.
impl ser::Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        (self.secs(), self.subsec_nanos() as i32).serialize(serializer)
    }
}

struct DurationVisitor;

impl<'de> de::Visitor<'de> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a (seconds, nanoseconds) pair")
    }

    fn visit_seq<A>(self, seq: A) -> Result<Duration, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let (secs, nanos) = next_pair(seq, &self)?;
        if nanos < 0 || i64::from(nanos) >= NANOS_PER_SEC {
            return Err(invalid_pair(secs, nanos));
        }
        // canonical parts never carry, so this cannot overflow
        Duration::new(secs, nanos.into()).map_err(de::Error::custom)
    }
}

impl<'de> de::Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_tuple(2, DurationVisitor)
    }
}
