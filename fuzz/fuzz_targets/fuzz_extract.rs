#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pbglean::{ExtractOptions, FilterOptions, extract_readable_text, is_plausible_text};

/// Raw log bytes plus fuzzer-chosen thresholds, so option edge cases
/// (zero floors, zero depth, extreme noise tolerance) are explored too.
#[derive(Arbitrary, Debug)]
struct Input<'a> {
    data: &'a [u8],
    min_len: u8,
    min_harvest_len: u8,
    noise_percent: u8,
    max_depth: u8,
}

fuzz_target!(|input: Input| {
    let options = ExtractOptions {
        max_depth: usize::from(input.max_depth % 32),
        min_harvest_len: usize::from(input.min_harvest_len % 16),
        filter: FilterOptions {
            min_len: usize::from(input.min_len),
            max_noise_ratio: f64::from(input.noise_percent % 101) / 100.0,
        },
    };

    let fragments = extract_readable_text(input.data, &options);
    for fragment in &fragments {
        assert!(is_plausible_text(fragment, &options.filter));
        assert_eq!(fragment.trim(), fragment);
    }

    // Truncation must only ever shorten the result, never crash.
    if !input.data.is_empty() {
        let cut = input.data.len() / 2;
        let _ = extract_readable_text(&input.data[..cut], &options);
    }
});
