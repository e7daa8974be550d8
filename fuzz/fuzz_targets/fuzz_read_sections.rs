#![no_main]
use libfuzzer_sys::fuzz_target;
use pnov_bridge::reports::read_sections;

/// Fuzz the bridge section reader on arbitrary text.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = read_sections(s);
    }
});
