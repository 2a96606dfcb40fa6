use serde::{Deserialize, Serialize};

/// Statistics for one filter pass.
///
/// A line matched by both predicates is counted under `dropped_cjk`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterReport {
    pub total: usize,
    pub kept: usize,
    pub dropped_cjk: usize,
    pub dropped_blank: usize,
}

impl FilterReport {
    pub fn dropped(&self) -> usize {
        self.dropped_cjk + self.dropped_blank
    }
}
