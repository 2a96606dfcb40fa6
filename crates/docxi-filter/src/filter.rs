//! Order-preserving line filtering.

use std::time::Instant;

use tracing::debug;

use docxi_model::{FilterOptions, FilterReport, InputDocument, PreviewText};

use crate::predicates::{contains_cjk, is_blank};

/// Which enabled predicate drops `line`, if any. CJK is checked first.
fn drop_reason(line: &str, options: &FilterOptions) -> Option<DropReason> {
    if options.drop_cjk && contains_cjk(line) {
        return Some(DropReason::Cjk);
    }
    if options.drop_blank && is_blank(line) {
        return Some(DropReason::Blank);
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DropReason {
    Cjk,
    Blank,
}

/// Keep the lines no enabled predicate matches, in their original order.
pub fn filter_lines<'a, S>(lines: &'a [S], options: &FilterOptions) -> Vec<&'a str>
where
    S: AsRef<str>,
{
    filter_lines_with_report(lines, options).0
}

/// [`filter_lines`] plus per-predicate statistics.
pub fn filter_lines_with_report<'a, S>(
    lines: &'a [S],
    options: &FilterOptions,
) -> (Vec<&'a str>, FilterReport)
where
    S: AsRef<str>,
{
    let mut report = FilterReport {
        total: lines.len(),
        ..FilterReport::default()
    };
    let mut kept = Vec::with_capacity(lines.len());
    for line in lines {
        let line = line.as_ref();
        match drop_reason(line, options) {
            Some(DropReason::Cjk) => report.dropped_cjk += 1,
            Some(DropReason::Blank) => report.dropped_blank += 1,
            None => kept.push(line),
        }
    }
    report.kept = kept.len();
    (kept, report)
}

/// Recompute the preview of `document` under `options`.
///
/// Surviving lines are concatenated with their `\n` terminators.
pub fn render_preview(
    document: &InputDocument,
    options: &FilterOptions,
) -> (PreviewText, FilterReport) {
    let start = Instant::now();
    let (kept, report) = filter_lines_with_report(document.lines(), options);
    let preview = PreviewText::new(kept.concat());
    debug!(
        total = report.total,
        kept = report.kept,
        dropped_cjk = report.dropped_cjk,
        dropped_blank = report.dropped_blank,
        duration_ms = start.elapsed().as_millis(),
        "preview recomputed"
    );
    (preview, report)
}
