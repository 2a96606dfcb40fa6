use std::io::{self, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{info_span, warn};

use docxi_cli::shell;
use docxi_core::{ExportStatus, Session};
use docxi_ingest::is_text_file;
use docxi_report::{DocxSink, default_output_path, with_docx_extension};

use crate::cli::{ExportArgs, PreviewArgs, SessionArgs};
use crate::types::{ExportResult, PreviewResult};

fn check_extension(path: &Path) {
    if !is_text_file(path) {
        warn!(path = %path.display(), "input is not a .txt file; reading it as UTF-8 text anyway");
    }
}

pub fn run_preview(args: &PreviewArgs) -> Result<PreviewResult> {
    let span = info_span!("preview", input = %args.input.display());
    let _guard = span.enter();
    check_extension(&args.input);
    let mut session = Session::new(DocxSink::new()).with_options(args.filters.options());
    session.select_input(&args.input).context("load input")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(session.preview().as_str().as_bytes())
        .context("write preview")?;
    stdout.flush().context("write preview")?;

    Ok(PreviewResult {
        input: args.input.clone(),
        options: session.options(),
        report: session.report(),
    })
}

pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    let span = info_span!("export", input = %args.input.display());
    let _guard = span.enter();
    check_extension(&args.input);
    let mut session = Session::new(DocxSink::new())
        .with_options(args.filters.options())
        .with_font(args.font.as_str());
    session.select_input(&args.input).context("load input")?;

    let destination = args
        .output
        .as_deref()
        .map_or_else(|| default_output_path(&args.input), with_docx_extension);
    let status = session.export_current_preview(&destination).clone();
    match status {
        ExportStatus::Succeeded(outcome) => Ok(ExportResult {
            input: args.input.clone(),
            destination: outcome.destination,
            font: session.font().to_string(),
            options: session.options(),
            report: session.report(),
            paragraphs: outcome.paragraphs,
            bytes_written: outcome.bytes_written,
        }),
        ExportStatus::Failed(message) => Err(anyhow!("{message}")),
    }
}

pub fn run_session(args: &SessionArgs) -> Result<()> {
    let mut session = Session::new(DocxSink::new())
        .with_options(args.filters.options())
        .with_font(args.font.as_str());
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout().lock();

    if let Some(input) = &args.input {
        check_extension(input);
        shell::execute(
            &mut session,
            shell::ShellCommand::Open(input.clone()),
            &mut stdout,
        )
        .context("write session output")?;
    } else if interactive {
        writeln!(stdout, "No file selected. Type 'help' for commands.")
            .context("write session output")?;
    }

    shell::run(&mut session, stdin.lock(), &mut stdout, interactive).context("session i/o")?;
    Ok(())
}
