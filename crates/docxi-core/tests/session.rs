//! Integration tests for the session state machine.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use docxi_core::{ExportStatus, Session, SessionState};
use docxi_model::{ExportError, ExportOutcome, ExportRequest, FilterOption, FilterOptions};
use docxi_report::{DocumentSink, DocxSink};

const SAMPLE: &str = "hello\n  \n你好\nworld\n";

/// Sink that records requests instead of writing anything.
#[derive(Default)]
struct RecordingSink {
    requests: RefCell<Vec<ExportRequest>>,
}

impl DocumentSink for RecordingSink {
    fn name(&self) -> &str {
        "recording"
    }

    fn export(&self, request: &ExportRequest) -> Result<ExportOutcome, ExportError> {
        self.requests.borrow_mut().push(request.clone());
        Ok(ExportOutcome {
            destination: request.destination.clone(),
            paragraphs: request.text.lines().count(),
            bytes_written: request.text.len() as u64,
        })
    }
}

/// Sink standing in for an unreachable document application.
struct UnavailableSink;

impl DocumentSink for UnavailableSink {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn export(&self, _request: &ExportRequest) -> Result<ExportOutcome, ExportError> {
        Err(ExportError::Rejected("document application unavailable".to_string()))
    }
}

fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write input");
    path
}

#[test]
fn starts_empty() {
    let session = Session::new(RecordingSink::default());
    assert_eq!(session.state(), SessionState::Empty);
    assert!(session.preview().is_empty());
    assert!(session.document().is_none());
    assert!(session.default_destination().is_none());
    assert_eq!(session.options(), FilterOptions::default());
}

#[test]
fn selecting_input_loads_and_previews() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_input(dir.path(), "script.txt", SAMPLE);
    let mut session = Session::new(RecordingSink::default());

    let preview = session.select_input(&path).expect("select input");

    assert_eq!(preview.as_str(), SAMPLE);
    assert_eq!(session.state(), SessionState::Loaded);
    assert_eq!(session.report().total, 4);
    assert_eq!(
        session.default_destination(),
        Some(dir.path().join("script.docx"))
    );
}

#[test]
fn toggles_recompute_from_raw_lines() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_input(dir.path(), "script.txt", SAMPLE);
    let mut session = Session::new(RecordingSink::default());
    session.select_input(&path).expect("select input");

    let preview = session
        .set_option(FilterOption::DropBlank, true)
        .expect("loaded");
    assert_eq!(preview.as_str(), "hello\n你好\nworld\n");

    let preview = session
        .set_option(FilterOption::DropCjk, true)
        .expect("loaded");
    assert_eq!(preview.as_str(), "hello\nworld\n");
    assert_eq!(session.report().dropped(), 2);

    let preview = session
        .set_option(FilterOption::DropBlank, false)
        .expect("loaded");
    assert_eq!(preview.as_str(), "hello\n  \nworld\n");

    assert!(!session.toggle_option(FilterOption::DropCjk));
    assert_eq!(session.preview().as_str(), SAMPLE);
}

#[test]
fn carriage_return_file_is_filtered_per_line() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_input(dir.path(), "mac.txt", "keep me\r你好\rmore\r");
    let mut session = Session::new(RecordingSink::default())
        .with_options(FilterOptions::default().with(FilterOption::DropCjk, true));

    let preview = session.select_input(&path).expect("select input");

    assert_eq!(preview.as_str(), "keep me\nmore\n");
    assert_eq!(session.report().total, 3);
    assert_eq!(session.report().dropped_cjk, 1);
}

#[test]
fn options_set_before_loading_apply_to_next_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_input(dir.path(), "script.txt", SAMPLE);
    let mut session = Session::new(RecordingSink::default());

    assert!(session.set_option(FilterOption::DropCjk, true).is_none());
    assert!(session.preview().is_empty());
    assert_eq!(session.state(), SessionState::Empty);

    let preview = session.select_input(&path).expect("select input");
    assert_eq!(preview.as_str(), "hello\n  \nworld\n");
}

#[test]
fn options_persist_across_selections() {
    let dir = tempfile::tempdir().expect("temp dir");
    let first = write_input(dir.path(), "first.txt", SAMPLE);
    let second = write_input(dir.path(), "second.txt", "a\n\n中文\nb");
    let mut session = Session::new(RecordingSink::default()).with_options(FilterOptions::all());

    session.select_input(&first).expect("select first");
    let preview = session.select_input(&second).expect("select second");

    assert_eq!(preview.as_str(), "a\nb");
    assert_eq!(
        session.document().map(|document| document.path()),
        Some(second.as_path())
    );
}

#[test]
fn failed_selection_keeps_previous_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    let good = write_input(dir.path(), "good.txt", SAMPLE);
    let bad = dir.path().join("bad.txt");
    fs::write(&bad, b"\xff\xfe broken").expect("write bad input");
    let mut session = Session::new(RecordingSink::default());
    session.select_input(&good).expect("select good");

    let error = session.select_input(&bad).expect_err("invalid utf-8");
    assert!(error.is_decode());

    let missing = session
        .select_input(&dir.path().join("missing.txt"))
        .expect_err("missing");
    assert!(!missing.is_decode());

    assert_eq!(session.state(), SessionState::Loaded);
    assert_eq!(session.preview().as_str(), SAMPLE);
    assert_eq!(
        session.document().map(|document| document.path()),
        Some(good.as_path())
    );
}

#[test]
fn export_sends_trimmed_preview_and_font() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_input(dir.path(), "script.txt", "\n\nhello\n  \n你好\nworld\n\n");
    let mut session = Session::new(RecordingSink::default())
        .with_options(FilterOptions::default().with(FilterOption::DropCjk, true))
        .with_font("Calibri");
    session.select_input(&path).expect("select input");
    let destination = dir.path().join("out.docx");

    let status = session.export_current_preview(&destination).clone();

    assert!(status.is_success());
    assert_eq!(status.status_line(), "File saved successfully!");
    let requests = session.sink().requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].destination, destination);
    assert_eq!(requests[0].text, "hello\n  \nworld");
    assert_eq!(requests[0].font, "Calibri");
}

#[test]
fn export_failure_leaves_session_unchanged() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_input(dir.path(), "script.txt", SAMPLE);
    let mut session = Session::new(UnavailableSink).with_options(FilterOptions::all());
    session.select_input(&path).expect("select input");
    let before = session.preview().clone();

    let status = session
        .export_current_preview(&dir.path().join("out.docx"))
        .clone();

    match &status {
        ExportStatus::Failed(message) => {
            assert_eq!(
                message,
                "Error: export rejected: document application unavailable"
            );
        }
        ExportStatus::Succeeded(_) => panic!("export should fail"),
    }
    assert_eq!(session.last_export(), Some(&status));
    assert_eq!(session.state(), SessionState::Loaded);
    assert_eq!(session.preview(), &before);
    assert_eq!(session.options(), FilterOptions::all());

    // Still usable afterwards.
    let preview = session
        .set_option(FilterOption::DropBlank, false)
        .expect("loaded");
    assert_eq!(preview.as_str(), "hello\n  \nworld\n");
}

#[test]
fn export_without_input_writes_empty_document() {
    let dir = tempfile::tempdir().expect("temp dir");
    let destination = dir.path().join("blank.docx");
    let mut session = Session::new(DocxSink::new());

    let status = session.export_current_preview(&destination);

    match status {
        ExportStatus::Succeeded(outcome) => assert_eq!(outcome.paragraphs, 1),
        ExportStatus::Failed(message) => panic!("unexpected failure: {message}"),
    }
    assert!(destination.is_file());
    assert_eq!(session.state(), SessionState::Empty);
}

#[test]
fn docx_export_round_trip_through_session() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_input(dir.path(), "script.txt", SAMPLE);
    let mut session = Session::new(DocxSink::new()).with_options(FilterOptions::all());
    session.select_input(&path).expect("select input");
    let destination = session.default_destination().expect("default destination");

    let status = session.export_current_preview(&destination);

    match status {
        ExportStatus::Succeeded(outcome) => {
            assert_eq!(outcome.destination, dir.path().join("script.docx"));
            assert_eq!(outcome.paragraphs, 2);
        }
        ExportStatus::Failed(message) => panic!("unexpected failure: {message}"),
    }
}
