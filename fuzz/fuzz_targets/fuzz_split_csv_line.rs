#![no_main]
use libfuzzer_sys::fuzz_target;
use pnov_bridge::parsers::split_csv_line;

/// Fuzz the line splitter.
///
/// Unquoted input must split into exactly one more cell than it has commas.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let cells = split_csv_line(s);
        assert!(!cells.is_empty());
        if !s.contains('"') {
            assert_eq!(cells.len(), s.matches(',').count() + 1);
        }
    }
});
