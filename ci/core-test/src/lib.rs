#![no_std]

use timepoint::{Clock, Duration, FixedClock, Instant};

pub fn shift_parsed() -> Result<Instant, timepoint::Error> {
    let t = Instant::parse("2019-01-01T00:00:00Z")?;
    let clock = FixedClock::new(t.checked_add(Duration::from_millis(1500))?);
    clock.instant()?.checked_sub_nanos(1)
}
