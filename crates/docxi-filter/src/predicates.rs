//! Per-line drop predicates.

use std::sync::LazyLock;

use regex::Regex;

/// CJK Unified Ideographs block, U+4E00 through U+9FFF.
static CJK_IDEOGRAPH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{4E00}-\x{9FFF}]").expect("Invalid CJK ideograph regex"));

/// True if any character of `line` is a CJK Unified Ideograph.
pub fn contains_cjk(line: &str) -> bool {
    CJK_IDEOGRAPH_REGEX.is_match(line)
}

/// True if `line` holds nothing but whitespace and its terminator.
///
/// The information separators U+001C..=U+001F count as whitespace here, which
/// `char::is_whitespace` alone does not cover.
pub fn is_blank(line: &str) -> bool {
    line.chars().all(|ch| ch.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&ch))
}
