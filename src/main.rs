//! Artifactory namespaces
//!
//! Generates Artifactory permission targets from namespace definitions.

use artifactory_namespaces::{
    config::{ConfigOverrides, OverrideKey, load_config},
    generator::Generator,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Artifactory namespaces automation - generate permission targets from namespace patterns
#[derive(Parser, Debug)]
#[command(name = "artifactory-namespaces")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to namespaces yaml file
    #[arg(short, long, env = "NAMESPACES_FILE")]
    namespaces_file: PathBuf,

    /// Path to configuration yaml file
    #[arg(short, long, env = "CONFIG_FILE")]
    config_file: PathBuf,

    /// Target directory for generated files (overrides output_dir)
    #[arg(short, long, env = "OUTPUT_DIR")]
    output_dir: Option<String>,

    /// Output format, json or yaml (overrides output_format)
    #[arg(short = 'f', long, env = "OUTPUT_FORMAT")]
    output_format: Option<String>,

    /// Verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Quiet logging, errors only
    #[arg(short, long)]
    quiet: bool,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable output
    Pretty,
    /// JSON structured output
    Json,
}

impl Args {
    fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides::new()
            .optional(OverrideKey::OutputDir, self.output_dir.as_deref())
            .optional(OverrideKey::OutputFormat, self.output_format.as_deref())
    }
}

fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    let registry = tracing_subscriber::registry().with(filter);
    match args.log_format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments; missing required inputs print usage and exit
    let args = Args::parse();

    init_logging(&args);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting artifactory-namespaces"
    );

    // Load configuration
    let config = load_config(&args.config_file, &args.overrides())
        .inspect_err(|e| error!(error = %e, "Failed to load configuration"))?;

    let generator = Generator::new(config);
    info!(
        output_dir = %generator.config().output_dir,
        format = %generator.config().output_format,
        "Configuration loaded"
    );

    let summary = generator
        .run(&args.namespaces_file)
        .inspect_err(|e| error!(error = %e, "Generation failed"))?;

    info!(
        namespaces = summary.namespace_count,
        targets = summary.target_files.len(),
        report = %summary.report_file.display(),
        "Done"
    );

    Ok(())
}
