use crate::config::Config;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Default extensions searched for component usages
pub const DEFAULT_EXTENSIONS: &[&str] = &[".vue", ".ts", ".js"];

/// Recursively collect every file under `directory` whose name ends with one
/// of `extensions`.
///
/// A missing directory contributes no files. Results are sorted so that
/// repeated runs see the same order.
pub fn collect_files<S: AsRef<str>>(directory: &Path, extensions: &[S]) -> Vec<PathBuf> {
    if !directory.exists() {
        trace!("Directory does not exist: {}", directory.display());
        return Vec::new();
    }

    // Plain recursive walk: hidden folders and ignore files do not hide components
    let walker = WalkBuilder::new(directory)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let mut files: Vec<PathBuf> = walker
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter(|entry| has_extension(entry.path(), extensions))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let file_name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return false,
    };
    extensions.iter().any(|ext| file_name.ends_with(ext.as_ref()))
}

/// File finder for discovering component and target files in a project
pub struct FileFinder<'a> {
    config: &'a Config,
}

impl<'a> FileFinder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Find component definition files under the components root
    pub fn find_components(&self) -> Vec<PathBuf> {
        let files = self.scan(&self.config.components_dir, &self.config.component_extensions);
        debug!("Found {} component files", files.len());
        files
    }

    /// Find every file searched for usages: pages, components, layouts and
    /// the application entry when it exists
    pub fn find_targets(&self) -> Vec<PathBuf> {
        let extensions = &self.config.target_extensions;

        let mut files = self.scan(&self.config.pages_dir, extensions);
        files.extend(self.scan(&self.config.components_dir, extensions));
        files.extend(self.scan(&self.config.layouts_dir, extensions));

        let app_entry = &self.config.app_entry;
        if app_entry.is_file() && !self.config.should_exclude(app_entry) {
            files.push(app_entry.clone());
        } else {
            trace!("No application entry at {}", app_entry.display());
        }

        debug!("Found {} target files", files.len());
        files
    }

    fn scan(&self, dir: &Path, extensions: &[String]) -> Vec<PathBuf> {
        debug!("Scanning for files in: {}", dir.display());
        collect_files(dir, extensions)
            .into_iter()
            .filter(|path| {
                if self.config.should_exclude(path) {
                    trace!("Excluding: {}", path.display());
                    return false;
                }
                true
            })
            .collect()
    }
}
