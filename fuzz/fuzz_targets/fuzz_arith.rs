#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (timepoint::Instant, timepoint::Duration, i64)| {
    use timepoint::{Duration, Instant};

    let (t, d, n) = data;
    if let Ok(sum) = t.checked_add(d) {
        assert_eq!(Duration::between(t, sum), Ok(d));
        // each step of the subtraction is checked, so it may fail even though `t` fits
        if let Ok(back) = sum.checked_sub(d) {
            assert_eq!(back, t);
        }
    }
    if let Ok(later) = t.checked_add_nanos(n) {
        if let Ok(back) = later.checked_sub_nanos(n) {
            assert_eq!(back, t);
        }
    }
    if let Ok(millis) = t.to_epoch_milli() {
        let truncated = Instant::from_epoch_milli(millis);
        assert!(truncated <= t);
        assert!(t.duration_since(truncated).unwrap() < Duration::from_millis(1));
    }
});
