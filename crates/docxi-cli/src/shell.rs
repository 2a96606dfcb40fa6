//! Interactive session shell.
//!
//! Reads one command per line and runs it against a [`Session`] before
//! reading the next. Errors are printed as status messages; only `quit`,
//! end of input or a failing output stream end the loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use docxi_core::{Session, SessionState};
use docxi_model::{FilterOption, ParseOptionError};
use docxi_report::{DocumentSink, with_docx_extension};

pub const PROMPT: &str = "docxi> ";

pub const HELP: &str = "\
Commands:
  open PATH              load a text file
  set cjk|blank on|off   enable or disable a filter
  toggle cjk|blank       flip a filter
  show                   print the preview
  status                 show the loaded file, filters and last export
  export [PATH]          save the preview as .docx (default: input name)
  help                   show this help
  quit                   leave the session";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Open(PathBuf),
    Set(FilterOption, bool),
    Toggle(FilterOption),
    Show,
    Status,
    Export(Option<PathBuf>),
    Help,
    Quit,
}

/// Why a shell line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("expected 'on' or 'off', got '{0}'")]
    InvalidSwitch(String),
    #[error(transparent)]
    Filter(#[from] ParseOptionError),
}

fn parse_switch(value: &str) -> Result<bool, ShellParseError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(ShellParseError::InvalidSwitch(value.to_string())),
    }
}

impl FromStr for ShellCommand {
    type Err = ShellParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        match command.to_ascii_lowercase().as_str() {
            "" => Err(ShellParseError::Empty),
            "open" => {
                if rest.is_empty() {
                    Err(ShellParseError::MissingArgument("file path"))
                } else {
                    Ok(Self::Open(PathBuf::from(rest)))
                }
            }
            "set" => {
                let mut words = rest.split_whitespace();
                let option = words
                    .next()
                    .ok_or(ShellParseError::MissingArgument("filter name"))?
                    .parse::<FilterOption>()?;
                let value = words
                    .next()
                    .ok_or(ShellParseError::MissingArgument("'on' or 'off'"))?;
                Ok(Self::Set(option, parse_switch(value)?))
            }
            "toggle" => {
                if rest.is_empty() {
                    Err(ShellParseError::MissingArgument("filter name"))
                } else {
                    Ok(Self::Toggle(rest.parse::<FilterOption>()?))
                }
            }
            "show" | "preview" => Ok(Self::Show),
            "status" => Ok(Self::Status),
            "export" | "save" => Ok(Self::Export(
                (!rest.is_empty()).then(|| PathBuf::from(rest)),
            )),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(ShellParseError::Unknown(other.to_string())),
        }
    }
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run one command and print its outcome.
pub fn execute<S, W>(
    session: &mut Session<S>,
    command: ShellCommand,
    out: &mut W,
) -> io::Result<Flow>
where
    S: DocumentSink,
    W: Write,
{
    match command {
        ShellCommand::Open(path) => match session.select_input(&path).map(|_| ()) {
            Ok(()) => {
                let report = session.report();
                writeln!(
                    out,
                    "Loaded {}: {} of {} lines shown",
                    path.display(),
                    report.kept,
                    report.total
                )?;
            }
            Err(error) => writeln!(out, "Error: {error}")?,
        },
        ShellCommand::Set(option, value) => {
            let shown = session.set_option(option, value).is_some();
            write_option_change(session, option, shown, out)?;
        }
        ShellCommand::Toggle(option) => {
            session.toggle_option(option);
            let shown = session.state() == SessionState::Loaded;
            write_option_change(session, option, shown, out)?;
        }
        ShellCommand::Show => {
            let preview = session.preview();
            if preview.is_empty() {
                writeln!(out, "(preview is empty)")?;
            } else {
                out.write_all(preview.as_str().as_bytes())?;
                if !preview.as_str().ends_with('\n') {
                    writeln!(out)?;
                }
            }
        }
        ShellCommand::Status => write_status(session, out)?,
        ShellCommand::Export(path) => {
            let destination = path
                .map(|path| with_docx_extension(&path))
                .or_else(|| session.default_destination());
            match destination {
                Some(destination) => {
                    let status = session.export_current_preview(&destination);
                    writeln!(out, "{}", status.status_line())?;
                }
                None => writeln!(out, "Error: no file selected; give a destination path")?,
            }
        }
        ShellCommand::Help => writeln!(out, "{HELP}")?,
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn write_option_change<S, W>(
    session: &Session<S>,
    option: FilterOption,
    shown: bool,
    out: &mut W,
) -> io::Result<()>
where
    S: DocumentSink,
    W: Write,
{
    let state = if session.options().get(option) { "on" } else { "off" };
    if shown {
        let report = session.report();
        writeln!(
            out,
            "{}: {state} ({} of {} lines shown)",
            option.label(),
            report.kept,
            report.total
        )
    } else {
        writeln!(out, "{}: {state}", option.label())
    }
}

fn write_status<S, W>(session: &Session<S>, out: &mut W) -> io::Result<()>
where
    S: DocumentSink,
    W: Write,
{
    match session.document() {
        Some(document) => writeln!(out, "File: {}", document.path().display())?,
        None => writeln!(out, "File: No file selected")?,
    }
    let options = session.options();
    for option in FilterOption::ALL {
        let state = if options.get(option) { "on" } else { "off" };
        writeln!(out, "  [{}] {}: {state}", option.name(), option.label())?;
    }
    let report = session.report();
    writeln!(
        out,
        "Lines: {} shown, {} removed ({} CJK, {} blank), {} total",
        report.kept,
        report.dropped(),
        report.dropped_cjk,
        report.dropped_blank,
        report.total
    )?;
    writeln!(out, "Font: {}", session.font())?;
    if let Some(status) = session.last_export() {
        writeln!(out, "Last export: {}", status.status_line())?;
    }
    Ok(())
}

/// Read commands from `input` until `quit` or end of input.
///
/// The prompt is written only when `interactive` is set.
pub fn run<S, R, W>(
    session: &mut Session<S>,
    input: R,
    out: &mut W,
    interactive: bool,
) -> io::Result<()>
where
    S: DocumentSink,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match line.parse::<ShellCommand>() {
            Ok(command) => {
                if execute(session, command, out)? == Flow::Quit {
                    break;
                }
            }
            Err(ShellParseError::Empty) => {}
            Err(error) => writeln!(out, "Error: {error}")?,
        }
    }
    Ok(())
}
