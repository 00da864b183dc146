use super::{Classification, ScanReport, Usage, UsageMatcher};
use crate::config::Config;
use crate::discovery::{load_contents_with_progress, Corpus, FileFinder};
use crate::naming::{is_index_file, ComponentRecord, NamingError};
use indicatif::{ProgressBar, ProgressStyle};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// End-to-end unused component scan over one project
pub struct Scanner<'a> {
    config: &'a Config,
    show_progress: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            show_progress: false,
        }
    }

    /// Draw a progress bar on stderr while loading the corpus
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the scan: derive names, load the corpus, classify every component
    pub fn scan(&self) -> Result<ScanReport> {
        info!("Discovering components...");
        let (components, skipped_components) = self.collect_components()?;
        info!("Found {} components", components.len());

        info!("Loading target files...");
        let corpus = self.build_corpus();
        info!(
            "Loaded {} target files ({} skipped)",
            corpus.len(),
            corpus.skipped().len()
        );

        let mut used = Vec::new();
        let mut unused = Vec::new();
        for record in components {
            let classification = self.classify(record, &corpus)?;
            if classification.is_used() {
                used.push(classification);
            } else {
                unused.push(classification);
            }
        }

        used.sort_by_key(|c| c.record.display_path());
        unused.sort_by_key(|c| c.record.display_path());

        Ok(ScanReport {
            total: used.len() + unused.len(),
            used,
            unused,
            skipped: corpus.skipped().to_vec(),
            skipped_components,
        })
    }

    /// Component records for every analysable component file, plus the
    /// files whose names yield no usable candidate
    fn collect_components(&self) -> Result<(Vec<ComponentRecord>, Vec<(PathBuf, NamingError)>)> {
        let root = &self.config.components_dir;
        let finder = FileFinder::new(self.config);

        let mut records = Vec::new();
        let mut skipped = Vec::new();
        for path in finder.find_components() {
            let extension = self.component_extension(&path);

            if self.is_root_index(&path, root) {
                debug!("Skipping root entry point: {}", path.display());
                continue;
            }

            let record = match ComponentRecord::new(path.clone(), root, extension) {
                Ok(record) => record,
                Err(err) if err.is_per_file() => {
                    warn!("Skipping component {}: {}", path.display(), err);
                    skipped.push((path, err));
                    continue;
                }
                Err(err) => {
                    return Err(err)
                        .into_diagnostic()
                        .wrap_err("Failed to derive component names")
                }
            };
            trace!("{} -> {:?}", record.display_path(), record.names);
            records.push(record);
        }

        Ok((records, skipped))
    }

    /// `index` + component extension sitting directly in the components root
    fn is_root_index(&self, path: &Path, root: &Path) -> bool {
        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };
        path.parent() == Some(root) && is_index_file(file_name, self.component_extension(path))
    }

    /// The configured component extension this file carries
    fn component_extension(&self, path: &Path) -> &str {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        self.config
            .component_extensions
            .iter()
            .find(|ext| file_name.ends_with(ext.as_str()))
            .map(String::as_str)
            .unwrap_or_else(|| self.config.primary_component_extension())
    }

    fn build_corpus(&self) -> Corpus {
        let targets: Vec<PathBuf> = FileFinder::new(self.config).find_targets();

        let progress = if self.show_progress {
            let pb = ProgressBar::new(targets.len() as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb
        } else {
            ProgressBar::hidden()
        };

        let corpus = load_contents_with_progress(targets, &progress);
        progress.finish_and_clear();
        corpus
    }

    /// Search every corpus file except the component's own for its names
    fn classify(&self, record: ComponentRecord, corpus: &Corpus) -> Result<Classification> {
        let display_path = record.display_path();

        if self.config.should_retain(&display_path, record.names.iter()) {
            debug!("Retained by pattern: {}", display_path);
            return Ok(Classification {
                record,
                usage: Usage::Retained,
            });
        }

        let matcher = UsageMatcher::new(record.names.iter().map(String::as_str))
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to build usage pattern for {}", display_path))?;

        let usage = match matcher.find_usage(corpus, Some(record.path.as_path())) {
            Some(entry) => {
                trace!("{} referenced in {}", display_path, entry.path.display());
                Usage::Used {
                    referenced_by: entry.path.to_path_buf(),
                }
            }
            None => Usage::Unused,
        };

        Ok(Classification { record, usage })
    }
}
