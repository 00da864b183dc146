use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for an unused component scan
///
/// Relative paths are resolved against the project root by [`Config::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding component definitions
    pub components_dir: PathBuf,

    /// Directory holding page files
    pub pages_dir: PathBuf,

    /// Directory holding layout files
    pub layouts_dir: PathBuf,

    /// Application entry file, searched when it exists
    pub app_entry: PathBuf,

    /// Extensions that mark a component definition
    pub component_extensions: Vec<String>,

    /// Extensions of files searched for usages
    pub target_extensions: Vec<String>,

    /// Patterns to exclude from the scan entirely
    pub exclude: Vec<String>,

    /// Patterns for components that are never reported as unused
    pub retain: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            components_dir: PathBuf::from("components"),
            pages_dir: PathBuf::from("pages"),
            layouts_dir: PathBuf::from("layouts"),
            app_entry: PathBuf::from("app.vue"),
            component_extensions: vec![".vue".to_string()],
            target_extensions: vec![".vue".to_string(), ".ts".to_string(), ".js".to_string()],
            exclude: vec![],
            retain: vec![],
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            ".unused-components.yml",
            ".unused-components.yaml",
            ".unused-components.toml",
            "unused-components.yml",
            "unused-components.yaml",
            "unused-components.toml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Anchor every relative directory at `project_root`
    pub fn resolve(mut self, project_root: &Path) -> Self {
        self.components_dir = project_root.join(&self.components_dir);
        self.pages_dir = project_root.join(&self.pages_dir);
        self.layouts_dir = project_root.join(&self.layouts_dir);
        self.app_entry = project_root.join(&self.app_entry);
        self
    }

    /// Extension used to recognise folder index components
    pub fn primary_component_extension(&self) -> &str {
        self.component_extensions
            .first()
            .map(String::as_str)
            .unwrap_or(".vue")
    }

    /// Check if a path matches an exclusion pattern
    pub fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy().replace('\\', "/");
        self.exclude.iter().any(|pattern| glob_match(pattern, &path_str))
    }

    /// Check if a component should always count as used
    pub fn should_retain<'a>(
        &self,
        relative_path: &str,
        mut names: impl Iterator<Item = &'a String>,
    ) -> bool {
        if self.retain.is_empty() {
            return false;
        }
        if self.retain.iter().any(|p| glob_match(p, relative_path)) {
            return true;
        }
        names.any(|name| self.retain.iter().any(|p| glob_match(p, name)))
    }
}

/// Wildcard matching where `*` spans any run of characters, `/` included.
///
/// `**/gen/**` therefore matches any path with a `gen` directory, and
/// `*Icon` matches every name ending in `Icon`.
fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && pattern[p] == '*' {
            backtrack = Some((p, t));
            p += 1;
        } else if p < pattern.len() && pattern[p] == text[t] {
            p += 1;
            t += 1;
        } else if let Some((star, matched)) = backtrack {
            p = star + 1;
            t = matched + 1;
            backtrack = Some((star, matched + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}
