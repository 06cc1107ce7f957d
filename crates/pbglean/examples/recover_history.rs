//! Recovers the readable fragments of a synthetic conversation log.
//!
//! Real logs come from an editor that persists each conversation as an
//! undocumented binary file; here we hand-build a small buffer with the same
//! shape — identifiers, prose in two languages, a nested message, and
//! opaque scalar records — and show what the extraction pipeline keeps.
//!
//! Run with
//!
//! ```bash
//! cargo run -p pbglean --example recover_history
//! ```

use pbglean::{ExtractOptions, FilterOptions, extract_readable_text};

fn varint(mut v: u64) -> Vec<u8> {
    let mut out = Vec::new();
    loop {
        let mut byte = (v & 0x7f) as u8;
        v >>= 7;
        if v != 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if v == 0 {
            return out;
        }
    }
}

fn length_delimited(field: u64, payload: &[u8]) -> Vec<u8> {
    let mut out = varint((field << 3) | 2);
    out.extend(varint(payload.len() as u64));
    out.extend_from_slice(payload);
    out
}

fn main() {
    let mut log = Vec::new();
    log.extend(length_delimited(
        1,
        b"550e8400-e29b-41d4-a716-446655440000",
    ));
    log.extend(length_delimited(2, "빌드 로그를 확인해 주세요".as_bytes()));
    let reply = length_delimited(1, b"retrying the failed build");
    log.extend(length_delimited(3, &reply));
    log.extend(length_delimited(4, b"ok"));
    log.extend(varint(5 << 3));
    log.extend(varint(1_722_000_000));

    println!("meaningful fragments:");
    for fragment in extract_readable_text(&log, &ExtractOptions::default()) {
        println!("  {fragment}");
    }

    // Drop the filter floor to see everything the decoder can harvest.
    let raw = ExtractOptions {
        filter: FilterOptions {
            min_len: 2,
            ..Default::default()
        },
        ..Default::default()
    };
    println!("raw harvest:");
    for fragment in extract_readable_text(&log, &raw) {
        println!("  {fragment}");
    }
}
