use clap::Parser;
use miette::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

use unused_components::report::{ReportFormat, Reporter};
use unused_components::{Config, Scanner};

/// unused-components - Find Vue/Nuxt components that nothing references
#[derive(Parser, Debug)]
#[command(name = "unused-components")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the project directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Components directory (relative to the project)
    #[arg(long, value_name = "DIR")]
    components: Option<PathBuf>,

    /// Pages directory (relative to the project)
    #[arg(long, value_name = "DIR")]
    pages: Option<PathBuf>,

    /// Layouts directory (relative to the project)
    #[arg(long, value_name = "DIR")]
    layouts: Option<PathBuf>,

    /// Application entry file (relative to the project)
    #[arg(long, value_name = "FILE")]
    app_entry: Option<PathBuf>,

    /// Patterns to exclude (can be specified multiple times)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Patterns to retain - never report as unused (can be specified multiple times)
    #[arg(short, long)]
    retain: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("unused-components v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    run_scan(&config, &cli)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // stdout carries the report only
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::from_default_locations(&cli.path)?
    };

    // Override with CLI arguments
    if let Some(dir) = &cli.components {
        config.components_dir = dir.clone();
    }
    if let Some(dir) = &cli.pages {
        config.pages_dir = dir.clone();
    }
    if let Some(dir) = &cli.layouts {
        config.layouts_dir = dir.clone();
    }
    if let Some(file) = &cli.app_entry {
        config.app_entry = file.clone();
    }
    if !cli.exclude.is_empty() {
        config.exclude.extend(cli.exclude.clone());
    }
    if !cli.retain.is_empty() {
        config.retain.extend(cli.retain.clone());
    }

    Ok(config.resolve(&cli.path))
}

fn run_scan(config: &Config, cli: &Cli) -> Result<()> {
    use std::time::Instant;

    let start_time = Instant::now();

    let show_progress = !cli.quiet && std::io::stderr().is_terminal();
    let report = Scanner::new(config).with_progress(show_progress).scan()?;

    info!(
        "{} components: {} used, {} unused",
        report.total,
        report.used.len(),
        report.unused.len()
    );

    let reporter = Reporter::new(cli.format.clone().into(), cli.output.clone());
    reporter.report(&report)?;

    let elapsed = start_time.elapsed();
    info!("Scan completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}
