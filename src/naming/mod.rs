//! Component name derivation
//!
//! Maps a component file to the identifiers a consumer could use to reference
//! it under Nuxt-style auto-import conventions: the pascalized file name and
//! the fully qualified name built from the enclosing folders.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors raised while deriving names for a component file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error("{} is not inside the components root {}", .path.display(), .root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },
    #[error("{} has no usable file name", .0.display())]
    NoFileName(PathBuf),
    #[error("path segment in {} is not valid UTF-8", .0.display())]
    NonUtf8(PathBuf),
}

impl NamingError {
    /// Problems with one file's name, as opposed to a path outside the root
    pub fn is_per_file(&self) -> bool {
        !matches!(self, NamingError::OutsideRoot { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NamingError::OutsideRoot { .. } => "outside_root",
            NamingError::NoFileName(_) => "no_usable_name",
            NamingError::NonUtf8(_) => "non_utf8_name",
        }
    }
}

/// Base name that marks a folder's own component (`Folder/index.vue` -> `<Folder />`)
pub const INDEX_STEM: &str = "index";

fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c.is_whitespace()
}

/// Upper-case only the first character, leaving the tail untouched
fn capitalize_head(piece: &str) -> String {
    let mut chars = piece.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a file or folder name to PascalCase.
///
/// Tokens without separators keep their existing casing apart from the first
/// character, so `fooBar` and `FooBar` both become `FooBar`. Tokens with
/// separators (`_`, `-`, whitespace) are split, each non-empty piece gets its
/// head upper-cased, and the pieces are joined.
pub fn pascalize(token: &str) -> String {
    if !token.contains(is_separator) {
        return capitalize_head(token);
    }

    token
        .split(is_separator)
        .filter(|piece| !piece.is_empty())
        .map(capitalize_head)
        .collect()
}

/// Split `file_path` into its segments relative to `root_dir`
fn relative_segments(file_path: &Path, root_dir: &Path) -> Result<Vec<String>, NamingError> {
    let relative = file_path
        .strip_prefix(root_dir)
        .map_err(|_| NamingError::OutsideRoot {
            path: file_path.to_path_buf(),
            root: root_dir.to_path_buf(),
        })?;

    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => {
                let segment = segment
                    .to_str()
                    .ok_or_else(|| NamingError::NonUtf8(file_path.to_path_buf()))?;
                segments.push(segment.to_string());
            }
            Component::CurDir => {}
            _ => {
                return Err(NamingError::OutsideRoot {
                    path: file_path.to_path_buf(),
                    root: root_dir.to_path_buf(),
                })
            }
        }
    }

    if segments.is_empty() {
        return Err(NamingError::NoFileName(file_path.to_path_buf()));
    }
    Ok(segments)
}

/// Strip the last extension (`basic-info.vue` -> `basic-info`).
///
/// Leading-dot names such as `.vue` keep their full text, matching how
/// `Path::file_stem` treats them.
fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(0) | None => file_name,
        Some(dot) => &file_name[..dot],
    }
}

/// Build the auto-import name by prefixing each enclosing folder, innermost first,
/// unless the name already starts with that folder's pascalized form.
fn qualify(short_name: &str, folders: &[String]) -> String {
    let mut auto_name = short_name.to_string();
    for folder in folders.iter().rev() {
        let prefix = pascalize(folder);
        if !auto_name.starts_with(&prefix) {
            auto_name.insert_str(0, &prefix);
        }
    }
    auto_name
}

/// Derive every candidate reference name for a component file.
///
/// `component_extension` decides whether the file is a folder index
/// (`index` + extension), in which case the parent folder's name is added.
pub fn derive_names(
    file_path: &Path,
    root_dir: &Path,
    component_extension: &str,
) -> Result<BTreeSet<String>, NamingError> {
    let segments = relative_segments(file_path, root_dir)?;
    let (file_name, folders) = segments
        .split_last()
        .ok_or_else(|| NamingError::NoFileName(file_path.to_path_buf()))?;

    let base_name = strip_extension(file_name);
    let short_name = pascalize(base_name);
    let auto_name = qualify(&short_name, folders);

    let mut names = BTreeSet::new();
    names.insert(short_name);
    names.insert(auto_name);

    if is_index_file(file_name, component_extension) {
        let parent = file_path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let folder_name = pascalize(parent);
        if !folder_name.is_empty() {
            names.insert(folder_name);
        }
    }

    // Every name must be a usable token; a file named only with separators
    // collapses to the empty string.
    names.retain(|name| !name.is_empty());
    if names.is_empty() {
        return Err(NamingError::NoFileName(file_path.to_path_buf()));
    }

    Ok(names)
}

/// Whether `file_name` is exactly `index` followed by the component extension
pub fn is_index_file(file_name: &str, component_extension: &str) -> bool {
    file_name
        .strip_prefix(INDEX_STEM)
        .map(|rest| rest == component_extension)
        .unwrap_or(false)
}

/// A discovered component and the names it may be referenced by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    /// Path on disk, as discovered
    pub path: PathBuf,

    /// Path relative to the components root
    pub relative_path: PathBuf,

    /// Candidate names, sorted and deduplicated
    pub names: BTreeSet<String>,
}

impl ComponentRecord {
    /// Create a record for a component file under `root_dir`
    pub fn new(
        path: PathBuf,
        root_dir: &Path,
        component_extension: &str,
    ) -> Result<Self, NamingError> {
        let names = derive_names(&path, root_dir, component_extension)?;
        let relative_path = path
            .strip_prefix(root_dir)
            .map(Path::to_path_buf)
            .map_err(|_| NamingError::OutsideRoot {
                path: path.clone(),
                root: root_dir.to_path_buf(),
            })?;

        Ok(Self {
            path,
            relative_path,
            names,
        })
    }

    /// Relative path with `/` separators, as printed in reports
    pub fn display_path(&self) -> String {
        self.relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
