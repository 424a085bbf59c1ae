//! Run orchestration: load, build, write.

use crate::config::AppConfig;
use crate::error::Result;
use crate::namespaces::{NamespaceDefinition, load_namespaces};
use crate::output::OutputWriter;
use crate::permission::build_permission_targets;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Files produced by one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub namespace_count: usize,
    pub target_files: Vec<PathBuf>,
    pub report_file: PathBuf,
}

/// Generates permission target files from namespace definitions
pub struct Generator {
    config: AppConfig,
    writer: OutputWriter,
}

impl Generator {
    pub fn new(config: AppConfig) -> Self {
        let writer = OutputWriter::from_config(&config);
        Self { config, writer }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load the namespace file and generate every artifact.
    ///
    /// Nothing is written unless loading and building both succeed.
    pub fn run(&self, namespaces_file: &Path) -> Result<GenerationSummary> {
        let namespaces = load_namespaces(namespaces_file)?;
        self.generate(&namespaces)
    }

    /// Generate every artifact for already-loaded definitions.
    ///
    /// The first write failure aborts the remaining writes; files already
    /// written are left in place.
    pub fn generate(&self, namespaces: &[NamespaceDefinition]) -> Result<GenerationSummary> {
        let output = build_permission_targets(namespaces, &self.config)?;
        debug!(targets = output.targets.len(), "Built permission targets");

        self.writer.ensure_output_dir()?;

        let target_files = output
            .targets
            .iter()
            .map(|target| self.writer.write_target(target))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let report_file = self.writer.write_report(&output.report)?;

        info!(
            namespaces = namespaces.len(),
            files = target_files.len() + 1,
            dir = self.writer.dir(),
            format = %self.writer.format(),
            "Generation complete"
        );

        Ok(GenerationSummary {
            namespace_count: namespaces.len(),
            target_files,
            report_file,
        })
    }
}
