//! Scripted runs of the interactive session shell.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use docxi_cli::shell::{self, Flow, ShellCommand};
use docxi_core::{Session, SessionState};
use docxi_model::FilterOption;
use docxi_report::DocxSink;

fn run_script(session: &mut Session<DocxSink>, script: &str) -> String {
    let mut out = Vec::new();
    shell::run(session, Cursor::new(script), &mut out, false).expect("run shell");
    String::from_utf8(out).expect("utf-8 output")
}

fn write_input(dir: &Path) -> String {
    let path = dir.join("script.txt");
    fs::write(&path, "hello\n  \n你好\nworld\n").expect("write input");
    path.display().to_string()
}

#[test]
fn status_of_empty_session() {
    let mut session = Session::new(DocxSink::new());
    let output = run_script(&mut session, "status\n");
    insta::assert_snapshot!(output, @r"
File: No file selected
  [cjk] Remove lines with Chinese characters: off
  [blank] Remove empty lines: off
Lines: 0 shown, 0 removed (0 CJK, 0 blank), 0 total
Font: Arial
");
}

#[test]
fn open_filter_show_and_export() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path());
    let mut session = Session::new(DocxSink::new());

    let script = format!("open {input}\nset blank on\ntoggle cjk\nshow\nexport\nquit\nshow\n");
    let output = run_script(&mut session, &script);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        lines,
        [
            format!("Loaded {input}: 4 of 4 lines shown").as_str(),
            "Remove empty lines: on (3 of 4 lines shown)",
            "Remove lines with Chinese characters: on (2 of 4 lines shown)",
            "hello",
            "world",
            "File saved successfully!",
        ]
    );
    assert!(dir.path().join("script.docx").is_file());
    assert_eq!(session.state(), SessionState::Loaded);
}

#[test]
fn errors_do_not_end_the_session() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path());
    let missing = dir.path().join("missing.txt");
    let mut session = Session::new(DocxSink::new());

    let script = format!(
        "open {}\nfrobnicate\nset cjk sideways\nexport\n\nopen {input}\nshow\n",
        missing.display()
    );
    let output = run_script(&mut session, &script);
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with("Error: cannot read"));
    assert_eq!(lines[1], "Error: unknown command 'frobnicate' (try 'help')");
    assert_eq!(lines[2], "Error: expected 'on' or 'off', got 'sideways'");
    assert_eq!(lines[3], "Error: no file selected; give a destination path");
    assert!(lines[4].starts_with("Loaded "));
    assert_eq!(&lines[5..], ["hello", "  ", "你好", "world"]);
}

#[test]
fn failed_export_is_reported_and_state_kept() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path());
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "file").expect("write blocker");
    let mut session = Session::new(DocxSink::new());

    let script = format!(
        "open {input}\nset cjk on\nexport {}\nstatus\n",
        blocker.join("out").display()
    );
    let output = run_script(&mut session, &script);

    assert!(output.contains("Error: cannot write"));
    assert!(output.contains("Last export: Error: cannot write"));
    assert!(output.contains("Lines: 3 shown, 1 removed (1 CJK, 0 blank), 4 total"));
    assert_eq!(session.preview().as_str(), "hello\n  \nworld\n");
}

#[test]
fn export_path_gets_docx_extension() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path());
    let target = dir.path().join("renamed");
    let mut session = Session::new(DocxSink::new());

    run_script(
        &mut session,
        &format!("open {input}\nexport {}\n", target.display()),
    );

    assert!(dir.path().join("renamed.docx").is_file());
}

#[test]
fn options_before_open_carry_over() {
    let mut session = Session::new(DocxSink::new());
    let mut out = Vec::new();

    let flow = shell::execute(
        &mut session,
        ShellCommand::Set(FilterOption::DropCjk, true),
        &mut out,
    )
    .expect("execute");

    assert_eq!(flow, Flow::Continue);
    assert_eq!(
        String::from_utf8(out).expect("utf-8"),
        "Remove lines with Chinese characters: on\n"
    );
    assert!(session.options().drop_cjk);
}

#[test]
fn quit_stops_reading() {
    let mut session = Session::new(DocxSink::new());
    let output = run_script(&mut session, "quit\nhelp\n");
    assert!(output.is_empty());
}
