//! Schema-less record walking over tag-length-value byte streams.
//!
//! No schema for the log format exists, so the walker trusts wire-type
//! self-description and nothing else: a record header is a varint tag whose
//! low three bits select how many bytes to skip or capture, and the field
//! number in the high bits is decoded but never interpreted.
//!
//! Dual interpretation
//! - The same byte range in these logs is sometimes literal text and
//!   sometimes a nested message, and there is no way to tell up front. Every
//!   length-delimited payload is therefore tried both ways: first as a UTF-8
//!   leaf string, then as a sub-stream of further records. The harvest keeps
//!   results from both interpretations; a downstream plausibility filter
//!   does the semantic work a schema would otherwise do.
//!
//! Failure scoping
//! - Any inconsistency (truncated varint, length running past the slice end,
//!   a wire type outside the known set) means "this is not further
//!   decodable" and terminates the *current* nesting level only. Siblings
//!   already collected are kept, and the failure never propagates out of the
//!   top-level call. Preferring partial results over hard errors is what
//!   makes the decoder usable on logs that are routinely mid-write.
//!
//! Ordering
//! - Candidates are appended depth-first: a payload's own leaf decode comes
//!   before any candidates found inside it. File order approximates
//!   chronological order in the source logs, so this ordering is preserved
//!   all the way to the public output.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use bstr::ByteSlice;

use crate::{options::ExtractOptions, varint::read_varint};


/// Wire types observed in the log format.
///
/// Values 3 and 4 (group delimiters in ancient protobuf) and 6–7 never
/// appear in well-formed input; hitting one means the walker has lost sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WireType {
    Varint,
    Fixed64,
    LengthDelimited,
    Fixed32,
}

impl WireType {
    pub(crate) fn from_tag(tag: u64) -> Option<Self> {
        match tag & 7 {
            0 => Some(Self::Varint),
            1 => Some(Self::Fixed64),
            2 => Some(Self::LengthDelimited),
            5 => Some(Self::Fixed32),
            _ => None,
        }
    }
}

/// Walks `slice` as a record stream, appending every harvested text
/// candidate to `out` in discovery order.
///
/// Called at depth 0 for the whole buffer and recursively for every
/// length-delimited payload. Entering beyond `options.max_depth` contributes
/// nothing, which bounds total work on adversarial input.
pub(crate) fn harvest(slice: &[u8], depth: usize, options: &ExtractOptions, out: &mut Vec<String>) {
    if depth > options.max_depth {
        return;
    }
    let mut pos = 0;
    while pos < slice.len() {
        let Ok((tag, next)) = read_varint(slice, pos) else {
            return;
        };
        pos = next;
        let Some(wire_type) = WireType::from_tag(tag) else {
            return;
        };
        match wire_type {
            WireType::Varint => {
                let Ok((_, next)) = read_varint(slice, pos) else {
                    return;
                };
                pos = next;
            }
            WireType::Fixed64 => pos += 8,
            WireType::Fixed32 => pos += 4,
            WireType::LengthDelimited => {
                let Ok((length, next)) = read_varint(slice, pos) else {
                    return;
                };
                pos = next;
                let Ok(length) = usize::try_from(length) else {
                    return;
                };
                let Some(end) = pos.checked_add(length) else {
                    return;
                };
                if end > slice.len() {
                    return;
                }
                let payload = &slice[pos..end];
                pos = end;

                if let Some(text) = leaf_text(payload, options.min_harvest_len) {
                    out.push(text);
                }
                harvest(payload, depth + 1, options, out);
            }
        }
    }
}

/// Leaf interpretation of a payload: valid UTF-8, free of control characters
/// other than tab/newline/CR, and at least `min_chars` characters once
/// trimmed.
fn leaf_text(payload: &[u8], min_chars: usize) -> Option<String> {
    let text = payload.to_str().ok()?;
    if text.chars().any(is_disqualifying_control) {
        return None;
    }
    let trimmed = text.trim();
    if trimmed.chars().count() < min_chars {
        return None;
    }
    Some(trimmed.to_string())
}

fn is_disqualifying_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}')
}
