#![no_main]

use libfuzzer_sys::fuzz_target;

use bm1pi_core::{parse_input, Input};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // Parsing never panics; accepted digit strings re-render without leading zeros.
    if let Ok(Input::Digits(digits)) = parse_input(s) {
        let rendered = digits.to_string();
        let trimmed = s.trim_start_matches('0');
        assert_eq!(rendered, if trimmed.is_empty() { "0" } else { trimmed });
    }
});
