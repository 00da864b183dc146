mod file_finder;
mod loader;

pub use file_finder::{collect_files, FileFinder, DEFAULT_EXTENSIONS};
pub use loader::{load_contents, load_contents_with_progress, load_file, Corpus, CorpusEntry, LoadOutcome, SkipReason};
