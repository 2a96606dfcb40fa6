//! Line filter toggles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseOptionError;

/// One independently toggleable drop predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOption {
    /// Drop lines containing a CJK Unified Ideograph (U+4E00..=U+9FFF).
    DropCjk,
    /// Drop lines that are empty after trimming whitespace.
    DropBlank,
}

impl FilterOption {
    pub const ALL: [FilterOption; 2] = [FilterOption::DropCjk, FilterOption::DropBlank];

    /// Short name used on the command line and in the session shell.
    pub fn name(self) -> &'static str {
        match self {
            Self::DropCjk => "cjk",
            Self::DropBlank => "blank",
        }
    }

    /// Label shown next to the toggle.
    pub fn label(self) -> &'static str {
        match self {
            Self::DropCjk => "Remove lines with Chinese characters",
            Self::DropBlank => "Remove empty lines",
        }
    }
}

impl fmt::Display for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterOption {
    type Err = ParseOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cjk" | "chinese" => Ok(Self::DropCjk),
            "blank" | "empty" => Ok(Self::DropBlank),
            _ => Err(ParseOptionError(value.to_string())),
        }
    }
}

/// Options controlling which lines survive the filter.
///
/// Both predicates start disabled. A line survives only if every enabled
/// predicate rejects it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub drop_cjk: bool,
    pub drop_blank: bool,
}

impl FilterOptions {
    /// Both predicates enabled.
    pub fn all() -> Self {
        Self {
            drop_cjk: true,
            drop_blank: true,
        }
    }

    pub fn get(&self, option: FilterOption) -> bool {
        match option {
            FilterOption::DropCjk => self.drop_cjk,
            FilterOption::DropBlank => self.drop_blank,
        }
    }

    pub fn set(&mut self, option: FilterOption, value: bool) {
        match option {
            FilterOption::DropCjk => self.drop_cjk = value,
            FilterOption::DropBlank => self.drop_blank = value,
        }
    }

    #[must_use]
    pub fn with(mut self, option: FilterOption, value: bool) -> Self {
        self.set(option, value);
        self
    }
}
