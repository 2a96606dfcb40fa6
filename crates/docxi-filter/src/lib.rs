//! Line filtering for Docxi.
//!
//! This crate provides the filter applied between loading and preview:
//!
//! - **predicates**: the CJK ideograph and blank-line tests
//! - **filter**: order-preserving filtering of raw lines and preview rendering
//!
//! Filtering always starts from the raw lines of an
//! [`InputDocument`](docxi_model::InputDocument). Previews are never filtered
//! again, so disabling a predicate brings back every line it removed.

pub mod filter;
pub mod predicates;

pub use filter::{filter_lines, filter_lines_with_report, render_preview};
pub use predicates::{contains_cjk, is_blank};
