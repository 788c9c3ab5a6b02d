#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use timepoint::Instant;
    if let Ok(data) = std::str::from_utf8(data) {
        if let Ok(t) = Instant::parse(data) {
            assert_eq!(Instant::parse(&t.to_string()), Ok(t));
        }
    }
});
