#![allow(missing_docs)]
#![cfg(feature = "std")]

//! File-backed entry points: reading, selection, and error reporting.

mod common;

use std::fs;

use common::text_record;
use pbglean::{ExtractError, ExtractOptions, extract_from_path, latest_log_file};

#[test]
fn extracts_from_a_log_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conversation.pb");
    fs::write(&path, text_record(1, "message stored on disk")).unwrap();

    let fragments = extract_from_path(&path, &ExtractOptions::default()).unwrap();
    assert_eq!(fragments, ["message stored on disk"]);
}

#[test]
fn garbage_file_is_an_empty_result_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noise.pb");
    fs::write(&path, [0xff, 0xfe, 0xfd, 0x07, 0x03]).unwrap();

    let fragments = extract_from_path(&path, &ExtractOptions::default()).unwrap();
    assert!(fragments.is_empty());
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.pb");

    let err = extract_from_path(&path, &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, ExtractError::Read { .. }));
    assert!(err.to_string().contains("does-not-exist.pb"));
}

#[test]
fn latest_log_file_ignores_other_extensions() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), b"not a log").unwrap();
    fs::write(dir.path().join("current.pb"), b"").unwrap();

    let picked = latest_log_file(dir.path(), "pb").unwrap();
    assert_eq!(picked.file_name().unwrap(), "current.pb");
}

#[test]
fn directory_without_logs_reports_no_log_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), b"not a log").unwrap();

    let err = latest_log_file(dir.path(), "pb").unwrap_err();
    assert!(matches!(err, ExtractError::NoLogFiles { .. }));
    assert!(err.to_string().contains(".pb"));
}

#[test]
fn missing_directory_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("nope");

    let err = latest_log_file(&gone, "pb").unwrap_err();
    assert!(matches!(err, ExtractError::Read { .. }));
}
