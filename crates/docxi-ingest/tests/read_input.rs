//! Tests for reading input files.

use std::fs;

use docxi_ingest::read_input;
use docxi_model::ReadErrorKind;

#[test]
fn reads_lines_with_terminators() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("script.txt");
    fs::write(&path, "hello\n  \n你好\nworld").expect("write input");

    let document = read_input(&path).expect("read input");

    assert_eq!(document.path(), path.as_path());
    assert_eq!(document.lines(), ["hello\n", "  \n", "你好\n", "world"]);
}

#[test]
fn carriage_returns_end_lines() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("mac.txt");
    fs::write(&path, "keep me\r你好\rmore\r").expect("write input");

    let document = read_input(&path).expect("read input");

    assert_eq!(document.lines(), ["keep me\n", "你好\n", "more\n"]);
}

#[test]
fn mixed_terminators_are_normalized() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("mixed.txt");
    fs::write(&path, "a\r\nb\rc\nd").expect("write input");

    let document = read_input(&path).expect("read input");

    assert_eq!(document.lines(), ["a\n", "b\n", "c\n", "d"]);
}

#[test]
fn empty_file_has_no_lines() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").expect("write input");

    let document = read_input(&path).expect("read input");

    assert!(document.is_empty());
}

#[test]
fn missing_file_is_open_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.txt");

    let error = read_input(&path).expect_err("missing file");

    assert_eq!(error.path, path);
    assert!(matches!(error.kind, ReadErrorKind::Open(_)));
}

#[test]
fn invalid_utf8_is_decode_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9\n").expect("write input");

    let error = read_input(&path).expect_err("invalid utf-8");

    assert!(matches!(
        error.kind,
        ReadErrorKind::Decode { valid_up_to: 3 }
    ));
}

#[test]
fn directory_is_open_error() {
    let dir = tempfile::tempdir().expect("temp dir");

    let error = read_input(dir.path()).expect_err("directory");

    assert!(!error.is_decode());
}
