//! unused-components - Find unused Vue/Nuxt components
//!
//! This library scans a components directory, derives the names each
//! component can be referenced by under Nuxt auto-import conventions, and
//! searches pages, layouts, components and the app entry for those names.
//!
//! # Architecture
//!
//! The scan pipeline consists of:
//! 1. **Name Derivation** - Map each component file to its candidate names
//! 2. **File Discovery** - Find component and target files by extension
//! 3. **Content Loading** - Read target files, skipping unreadable ones
//! 4. **Usage Search** - Whole-word search for candidate names
//! 5. **Reporting** - Output results as text or JSON

pub mod config;
pub mod discovery;
pub mod naming;
pub mod analysis;
pub mod report;

pub use config::Config;
pub use discovery::{collect_files, load_contents, Corpus, FileFinder, LoadOutcome, SkipReason};
pub use naming::{derive_names, pascalize, ComponentRecord, NamingError};
pub use analysis::{is_used, Classification, ScanReport, Scanner, Usage, UsageMatcher};
pub use report::{Reporter, ReportFormat};
