use crate::analysis::{Classification, ScanReport};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, report: &ScanReport) -> Result<()> {
        let json = self.render(report)?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }

    pub fn render(&self, report: &ScanReport) -> Result<String> {
        let report = JsonReport::from_scan(report);
        serde_json::to_string_pretty(&report).into_diagnostic()
    }
}

#[derive(Serialize)]
struct JsonReport {
    version: &'static str,
    total: usize,
    used_count: usize,
    unused_count: usize,
    unused: Vec<JsonComponent>,
    used: Vec<JsonComponent>,
    skipped: Vec<JsonSkipped>,
    skipped_components: Vec<JsonSkipped>,
}

#[derive(Serialize)]
struct JsonComponent {
    path: String,
    patterns: Vec<String>,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    referenced_by: Option<String>,
}

#[derive(Serialize)]
struct JsonSkipped {
    file: String,
    reason: &'static str,
    detail: String,
}

impl JsonComponent {
    fn from_classification(item: &Classification) -> Self {
        Self {
            path: item.record.display_path(),
            patterns: item.record.names.iter().cloned().collect(),
            status: item.usage.as_str(),
            referenced_by: item
                .referenced_by()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

impl JsonReport {
    fn from_scan(report: &ScanReport) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            total: report.total,
            used_count: report.used.len(),
            unused_count: report.unused.len(),
            unused: report.unused.iter().map(JsonComponent::from_classification).collect(),
            used: report.used.iter().map(JsonComponent::from_classification).collect(),
            skipped: report
                .skipped
                .iter()
                .map(|(path, reason)| JsonSkipped {
                    file: path.to_string_lossy().to_string(),
                    reason: reason.as_str(),
                    detail: reason.to_string(),
                })
                .collect(),
            skipped_components: report
                .skipped_components
                .iter()
                .map(|(path, err)| JsonSkipped {
                    file: path.to_string_lossy().to_string(),
                    reason: err.as_str(),
                    detail: err.to_string(),
                })
                .collect(),
        }
    }
}
