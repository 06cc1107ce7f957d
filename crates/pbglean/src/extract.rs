//! Extraction entry points.

use alloc::{string::String, vec::Vec};

use crate::{decoder, filter::is_plausible_text, options::ExtractOptions};

/// Recovers plausible human-readable fragments from a binary log buffer.
///
/// The buffer is walked as a speculative tag-length-value record stream
/// (see [the crate docs](crate)); every surviving fragment is trimmed and
/// passed the plausibility filter. Fragments appear in discovery order —
/// outer payloads before the candidates found nested inside them — which
/// approximates chronological order in the source logs.
///
/// This function is total: malformed, truncated, or adversarial input yields
/// a shorter (possibly empty) result, never an error or a panic. An empty
/// result simply means nothing in the buffer survived filtering.
///
/// ```
/// use pbglean::{ExtractOptions, extract_readable_text};
///
/// let mut log = vec![0x0a, 13];
/// log.extend_from_slice(b"first message");
/// log.extend_from_slice(&[0x12, 14]);
/// log.extend_from_slice(b"second message");
///
/// let fragments = extract_readable_text(&log, &ExtractOptions::default());
/// assert_eq!(fragments, ["first message", "second message"]);
/// ```
#[must_use]
pub fn extract_readable_text(buf: &[u8], options: &ExtractOptions) -> Vec<String> {
    let mut candidates = Vec::new();
    decoder::harvest(buf, 0, options, &mut candidates);
    candidates.retain(|s| is_plausible_text(s, &options.filter));
    candidates
}

/// Reads `path` fully into memory and extracts readable fragments from it.
///
/// Only the file read can fail; decoding itself is total. Zero surviving
/// fragments is `Ok(vec![])`, distinct from a file-access error.
///
/// # Errors
///
/// [`ExtractError::Read`] if the file cannot be read.
#[cfg(feature = "std")]
pub fn extract_from_path(
    path: &std::path::Path,
    options: &ExtractOptions,
) -> Result<Vec<String>, crate::ExtractError> {
    let data = std::fs::read(path).map_err(|source| crate::ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_readable_text(&data, options))
}

/// Returns the most recently modified file in `dir` with the given
/// extension (without the leading dot).
///
/// One logical conversation lives in one log file, and the newest file is
/// the conversation currently in progress — callers that want "the latest
/// history" chain this into [`extract_from_path`].
///
/// # Errors
///
/// [`ExtractError::Read`] if the directory cannot be listed or a candidate
/// file's metadata is unavailable; [`ExtractError::NoLogFiles`] if nothing
/// with the extension is present.
#[cfg(feature = "std")]
pub fn latest_log_file(
    dir: &std::path::Path,
    extension: &str,
) -> Result<std::path::PathBuf, crate::ExtractError> {
    use alloc::string::ToString;

    use crate::ExtractError;

    let entries = std::fs::read_dir(dir).map_err(|source| ExtractError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut newest: Option<(std::time::SystemTime, std::path::PathBuf)> = None;
    for entry in entries {
        let entry = entry.map_err(|source| ExtractError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .map_err(|source| ExtractError::Read {
                path: path.clone(),
                source,
            })?;
        if newest.as_ref().is_none_or(|(stamp, _)| modified > *stamp) {
            newest = Some((modified, path));
        }
    }

    newest
        .map(|(_, path)| path)
        .ok_or_else(|| ExtractError::NoLogFiles {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
        })
}
