//! Configuration for extraction and filtering.
//!
//! Every threshold in this crate was tuned empirically against one family of
//! log files, so all of them are exposed as plain fields rather than baked-in
//! constants. Construct with struct-update syntax:
//!
//! ```
//! use pbglean::{ExtractOptions, FilterOptions};
//!
//! let options = ExtractOptions {
//!     filter: FilterOptions {
//!         min_len: 5,
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! # let _ = options;
//! ```

/// Configuration for the plausibility filter.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterOptions {
    /// Minimum number of characters a fragment must have to be kept.
    ///
    /// Use `10` (the default) when extracting meaningful conversation
    /// content for display; drop to `2` to see everything the decoder can
    /// harvest.
    ///
    /// # Default
    ///
    /// `10`
    pub min_len: usize,

    /// Highest tolerated fraction of characters outside the allowed set
    /// (ASCII alphanumerics, whitespace, Hangul syllables, and common
    /// sentence punctuation).
    ///
    /// The comparison is strict: a fragment sitting exactly at the threshold
    /// is kept.
    ///
    /// # Default
    ///
    /// `0.3`
    pub max_noise_ratio: f64,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            min_len: 10,
            max_noise_ratio: 0.3,
        }
    }
}

/// Configuration for the record walker and extraction entry points.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractOptions {
    /// Hard cap on recursion into length-delimited payloads.
    ///
    /// Levels entered beyond the cap contribute no candidates. Together with
    /// the bounds checks this guarantees termination in
    /// O(buffer size × depth cap) even on adversarial input.
    ///
    /// # Default
    ///
    /// `10`
    pub max_depth: usize,

    /// Minimum number of characters (after trimming) for a decoded payload
    /// to be recorded as a raw candidate at all.
    ///
    /// This floor is intentionally lower than [`FilterOptions::min_len`]:
    /// the walker harvests liberally and leaves judgement to the filter.
    ///
    /// # Default
    ///
    /// `2`
    pub min_harvest_len: usize,

    /// Filter applied to raw candidates by
    /// [`extract_readable_text`](crate::extract_readable_text).
    pub filter: FilterOptions,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_depth: 10,
            min_harvest_len: 2,
            filter: FilterOptions::default(),
        }
    }
}
