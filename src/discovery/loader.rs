//! Content loading for the usage corpus
//!
//! Every read produces a [`LoadOutcome`]. Files that cannot be read as UTF-8
//! text are skipped with a [`SkipReason`] instead of aborting the scan.

use std::collections::{BTreeMap, BTreeSet};
use indicatif::ProgressBar;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Why a target file was left out of the corpus
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("not valid UTF-8 text")]
    InvalidUtf8,
    #[error("permission denied")]
    PermissionDenied,
    #[error("file not found")]
    NotFound,
    #[error("I/O error: {0}")]
    Io(String),
}

impl SkipReason {
    pub fn from_io(err: &std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidData => SkipReason::InvalidUtf8,
            ErrorKind::PermissionDenied => SkipReason::PermissionDenied,
            ErrorKind::NotFound => SkipReason::NotFound,
            _ => SkipReason::Io(err.to_string()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::InvalidUtf8 => "invalid_utf8",
            SkipReason::PermissionDenied => "permission_denied",
            SkipReason::NotFound => "not_found",
            SkipReason::Io(_) => "io_error",
        }
    }
}

/// Result of reading one target file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(String),
    Skipped(SkipReason),
}

/// Read a single file as text
pub fn load_file(path: &Path) -> LoadOutcome {
    match std::fs::read_to_string(path) {
        Ok(contents) => LoadOutcome::Loaded(contents),
        Err(err) => LoadOutcome::Skipped(SkipReason::from_io(&err)),
    }
}

/// A loaded target file
#[derive(Debug, Clone, Copy)]
pub struct CorpusEntry<'a> {
    pub path: &'a Path,
    pub contents: &'a str,
}

/// Every searchable file's contents, keyed by path
#[derive(Debug, Default)]
pub struct Corpus {
    entries: BTreeMap<PathBuf, String>,
    skipped: Vec<(PathBuf, SkipReason)>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of reading `path`
    pub fn insert(&mut self, path: PathBuf, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded(contents) => {
                self.entries.insert(path, contents);
            }
            LoadOutcome::Skipped(reason) => {
                debug!("Skipping {}: {}", path.display(), reason);
                self.skipped.push((path, reason));
            }
        }
    }

    pub fn get(&self, path: &Path) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Loaded entries in path order
    pub fn iter(&self) -> impl Iterator<Item = CorpusEntry<'_>> {
        self.entries.iter().map(|(path, contents)| CorpusEntry {
            path: path.as_path(),
            contents: contents.as_str(),
        })
    }

    /// Files that could not be loaded
    pub fn skipped(&self) -> &[(PathBuf, SkipReason)] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load every path into a corpus, tolerating unreadable files.
///
/// A path listed twice (for example a component that is also a target) is
/// read once.
pub fn load_contents<I>(paths: I) -> Corpus
where
    I: IntoIterator<Item = PathBuf>,
{
    load_contents_with_progress(paths, &ProgressBar::hidden())
}

/// Same as [`load_contents`], ticking `progress` once per path
pub fn load_contents_with_progress<I>(paths: I, progress: &ProgressBar) -> Corpus
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut corpus = Corpus::new();
    let mut seen = BTreeSet::new();
    for path in paths {
        progress.inc(1);
        if !seen.insert(path.clone()) {
            continue;
        }
        let outcome = load_file(&path);
        corpus.insert(path, outcome);
    }
    corpus
}
