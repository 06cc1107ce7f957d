//! Speculative tag-length-value decoding of undocumented binary logs.
//!
//! `pbglean` recovers human-readable text from binary conversation logs whose
//! schema is unknown. The buffer is walked as a protobuf-shaped record stream
//! purely by wire-type self-description: every length-delimited payload is
//! tried *both* as a UTF-8 leaf string and as a nested message, and the
//! harvested strings are narrowed to plausible natural-language content by a
//! heuristic filter.
//!
//! The decoder is total: truncated varints, lengths running past the buffer
//! end, and unknown wire types all terminate the *current* nesting level and
//! keep whatever was already collected. Nothing at decode level is an error
//! at the public boundary.
//!
//! ```
//! use pbglean::{ExtractOptions, extract_readable_text};
//!
//! // tag (field 1, length-delimited) + length + payload
//! let mut log = vec![0x0a, 26];
//! log.extend_from_slice(b"hello world this is a test");
//!
//! let fragments = extract_readable_text(&log, &ExtractOptions::default());
//! assert_eq!(fragments, ["hello world this is a test"]);
//! ```
//!
//! The crate is `no_std` + `alloc`; the `std` feature (on by default) adds
//! file-backed entry points ([`extract_from_path`], [`latest_log_file`]).

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod decoder;
#[cfg(feature = "std")]
mod error;
mod extract;
mod filter;
mod options;
mod varint;

#[cfg(feature = "std")]
pub use error::ExtractError;
pub use extract::extract_readable_text;
#[cfg(feature = "std")]
pub use extract::{extract_from_path, latest_log_file};
pub use filter::is_plausible_text;
pub use options::{ExtractOptions, FilterOptions};
