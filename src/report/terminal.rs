use crate::analysis::{Classification, ScanReport};
use colored::Colorize;
use miette::{IntoDiagnostic, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Plain-text reporter
///
/// Output is the fixed summary + unused listing. Color is only applied when
/// writing to an interactive terminal.
pub struct TerminalReporter {
    output_path: Option<PathBuf>,
    colorize: bool,
}

impl TerminalReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        let colorize = output_path.is_none() && std::io::stdout().is_terminal();
        Self {
            output_path,
            colorize,
        }
    }

    pub fn with_color(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    pub fn report(&self, report: &ScanReport) -> Result<()> {
        let text = self.render(report);

        if let Some(path) = &self.output_path {
            std::fs::write(path, &text).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            print!("{}", text);
        }

        Ok(())
    }

    /// Render the full report text
    pub fn render(&self, report: &ScanReport) -> String {
        let mut out = String::new();
        out.push_str(&format!("Total: {}\n", report.total));
        out.push_str(&format!("Used: {}\n", report.used.len()));
        out.push_str(&format!("Unused: {}\n", report.unused.len()));
        out.push('\n');

        let header = "--- Unused Components ---";
        if self.colorize {
            out.push_str(&format!("{}\n", header.yellow().bold()));
        } else {
            out.push_str(header);
            out.push('\n');
        }

        for item in &report.unused {
            out.push_str(&self.render_item(item));
            out.push('\n');
        }

        out
    }

    fn render_item(&self, item: &Classification) -> String {
        let tag = if self.colorize {
            "[UNUSED]".red().bold().to_string()
        } else {
            "[UNUSED]".to_string()
        };
        let patterns = item
            .record
            .names
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        format!("{} {} (Patterns: [{}])", tag, item.record.display_path(), patterns)
    }
}
