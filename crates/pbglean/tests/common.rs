#![allow(missing_docs)]
#![allow(dead_code)] // each integration test binary uses a subset

//! Hand-rolled record encoders for building synthetic log buffers.

/// Encodes `v` as a base-128 varint.
pub fn varint(mut v: u64) -> Vec<u8> {
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

/// Record header for `field` with the given wire type.
pub fn tag(field: u64, wire_type: u64) -> Vec<u8> {
    varint((field << 3) | wire_type)
}

/// A length-delimited record wrapping arbitrary payload bytes.
pub fn length_delimited(field: u64, payload: &[u8]) -> Vec<u8> {
    let mut out = tag(field, 2);
    out.extend(varint(payload.len() as u64));
    out.extend_from_slice(payload);
    out
}

/// A length-delimited record wrapping UTF-8 text.
pub fn text_record(field: u64, text: &str) -> Vec<u8> {
    length_delimited(field, text.as_bytes())
}

/// A varint scalar record.
pub fn varint_record(field: u64, value: u64) -> Vec<u8> {
    let mut out = tag(field, 0);
    out.extend(varint(value));
    out
}

/// A fixed64 scalar record.
pub fn fixed64_record(field: u64, value: u64) -> Vec<u8> {
    let mut out = tag(field, 1);
    out.extend_from_slice(&value.to_le_bytes());
    out
}

/// Wraps `payload` in `times` nested length-delimited records on field 16.
///
/// Field 16 encodes its header as the two bytes `0x82 0x01`, and a payload
/// starting with the continuation byte `0x82` can never decode as UTF-8 —
/// so the wrappers themselves are guaranteed not to surface as text
/// candidates, leaving the innermost payload as the only possible fragment.
pub fn wrap_opaque(payload: &[u8], times: usize) -> Vec<u8> {
    let mut buf = payload.to_vec();
    for _ in 0..times {
        buf = length_delimited(16, &buf);
    }
    buf
}
