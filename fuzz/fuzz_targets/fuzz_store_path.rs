#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(candidate) = std::str::from_utf8(data) {
        // Fuzz candidate-path validation - this should never panic, and
        // anything it accepts must be free of traversal segments.
        if let Ok(parsed) = storekeep::StorePath::parse(candidate) {
            assert!(parsed.segments().all(|s| s != ".." && !s.is_empty()));
            assert!(!parsed.to_rel_path().is_absolute());
        }
    }
});
