//! Errors for the file-backed entry points.
//!
//! Decode-level anomalies never surface here; they are absorbed inside the
//! walker with partial-result semantics. Only failures to obtain a log
//! buffer from the filesystem are reported.

use std::{io, path::PathBuf, string::String};

use thiserror::Error;

/// Failure to obtain a log buffer from the filesystem.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The log file (or directory) could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The directory contained no file with the requested extension.
    #[error("no .{extension} log files in {}", dir.display())]
    NoLogFiles {
        /// Directory that was scanned.
        dir: PathBuf,
        /// Extension that was looked for, without the leading dot.
        extension: String,
    },
}
