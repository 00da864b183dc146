mod scanner;
mod usage;

pub use scanner::Scanner;
pub use usage::{is_used, UsageMatcher};

use crate::discovery::SkipReason;
use crate::naming::{ComponentRecord, NamingError};
use std::path::PathBuf;

/// How a component was classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Usage {
    /// A candidate name appears in another file
    Used { referenced_by: PathBuf },
    /// Matched a retain pattern, never searched
    Retained,
    /// No candidate name appears outside the component's own file
    Unused,
}

impl Usage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Usage::Used { .. } => "used",
            Usage::Retained => "retained",
            Usage::Unused => "unused",
        }
    }
}

impl std::fmt::Display for Usage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A component together with its usage verdict
#[derive(Debug, Clone)]
pub struct Classification {
    pub record: ComponentRecord,
    pub usage: Usage,
}

impl Classification {
    pub fn is_used(&self) -> bool {
        !matches!(self.usage, Usage::Unused)
    }

    /// File that first referenced the component, if any
    pub fn referenced_by(&self) -> Option<&PathBuf> {
        match &self.usage {
            Usage::Used { referenced_by } => Some(referenced_by),
            _ => None,
        }
    }
}

/// Outcome of one scan
///
/// `used` and `unused` are both sorted by relative component path.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub total: usize,
    pub used: Vec<Classification>,
    pub unused: Vec<Classification>,
    /// Target files left out of the corpus
    pub skipped: Vec<(PathBuf, SkipReason)>,
    /// Component files with no usable candidate name, left out of the totals
    pub skipped_components: Vec<(PathBuf, NamingError)>,
}
