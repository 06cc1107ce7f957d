//! Heuristic plausibility filtering of harvested candidates.
//!
//! With no schema to say which payloads are conversation text, the filter
//! does the semantic work: it rejects the identifiers, hashes, and
//! structural fragments that a conversation log is full of, and keeps what
//! reads like natural language (Latin or Korean, in the logs this was tuned
//! against).

use crate::options::FilterOptions;

/// Returns `true` if `s` looks like human-readable content rather than an
/// identifier or binary noise.
///
/// Stateless and order-independent. A candidate is rejected when any of the
/// following holds:
///
/// - fewer than [`min_len`](FilterOptions::min_len) characters;
/// - shaped like a 36-character UUID;
/// - a pure hex string of 16–64 characters (hashes, object ids);
/// - an embedded run of 20 or more hex/hyphen characters anywhere inside;
/// - more than [`max_noise_ratio`](FilterOptions::max_noise_ratio) of its
///   characters outside the allowed set;
/// - no Latin letter and no Hangul syllable at all;
/// - a bare structural fragment (`{}`, `[]`, `()`, or brace-delimited with
///   no quote inside).
#[must_use]
pub fn is_plausible_text(s: &str, options: &FilterOptions) -> bool {
    let total = s.chars().count();
    if total == 0 || total < options.min_len {
        return false;
    }
    if is_uuid_shaped(s, total) || is_hex_id(s, total) || has_long_hex_run(s) {
        return false;
    }
    let noise = s.chars().filter(|&c| !is_allowed(c)).count();
    #[allow(clippy::cast_precision_loss)]
    if noise as f64 / total as f64 > options.max_noise_ratio {
        return false;
    }
    if !s.chars().any(|c| c.is_ascii_alphabetic() || is_hangul(c)) {
        return false;
    }
    if is_structural_fragment(s) {
        return false;
    }
    true
}

/// Exactly 36 characters, all hex digits or hyphens.
fn is_uuid_shaped(s: &str, total: usize) -> bool {
    total == 36 && s.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
}

/// A pure hex string long enough to be a hash or object id.
fn is_hex_id(s: &str, total: usize) -> bool {
    (16..=64).contains(&total) && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// A run of 20+ consecutive hex/hyphen characters anywhere in the string
/// catches ids pasted into otherwise readable fragments.
fn has_long_hex_run(s: &str) -> bool {
    let mut run = 0usize;
    for c in s.chars() {
        if c.is_ascii_hexdigit() || c == '-' {
            run += 1;
            if run >= 20 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || is_hangul(c)
        || matches!(
            c,
            '.' | ','
                | '?'
                | '!'
                | ';'
                | ':'
                | '('
                | ')'
                | '['
                | ']'
                | '\''
                | '"'
                | '<'
                | '>'
                | '/'
                | '_'
                | '='
                | '-'
        )
}

/// Precomposed Hangul syllables (U+AC00–U+D7A3).
fn is_hangul(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Empty bracket pairs and quote-free brace blobs are leaked structure, not
/// prose.
fn is_structural_fragment(s: &str) -> bool {
    if s == "{}" || s == "[]" || s == "()" {
        return true;
    }
    s.starts_with('{') && s.ends_with('}') && !s.contains('"')
}
