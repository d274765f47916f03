#![no_main]

use libfuzzer_sys::fuzz_target;

use polyfft_match::{find_matches, find_matches_fft, find_substrings, find_substrings_fft};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks the pattern length, capped at 16
    let m = usize::from(data[0] % 16) + 1;
    let rest = &data[1..];
    let (pattern, text) = rest.split_at(m.min(rest.len()));

    assert_eq!(
        find_substrings_fft(text, pattern),
        find_substrings(text, pattern),
        "exact search disagrees"
    );
    assert_eq!(
        find_matches_fft(text, pattern),
        find_matches(text, pattern),
        "wildcard search disagrees"
    );
});
