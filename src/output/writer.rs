//! Artifact writer
//!
//! Serializes permission targets and the namespace summary into the output
//! directory. Every file is written to a temporary sibling and renamed into
//! place, so a failed write never leaves a truncated artifact behind.

use crate::config::{AppConfig, OutputFormat};
use crate::error::OutputError;
use crate::output::markdown::{MarkdownReport, REPORT_FILE_NAME};
use crate::permission::PermissionTarget;
use crate::util::with_trailing_separator;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const JSON_INDENT: &[u8] = b"    ";

/// Writes generated artifacts into one directory
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: String,
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(output_dir: &str, format: OutputFormat) -> Self {
        Self {
            dir: with_trailing_separator(output_dir),
            format,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.output_dir, config.output_format)
    }

    /// Output directory, always ending in `/`
    pub fn dir(&self) -> &str {
        &self.dir
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Create the output directory tree if it does not exist yet
    pub fn ensure_output_dir(&self) -> Result<(), OutputError> {
        let path = Path::new(&self.dir);
        if path.is_dir() {
            return Ok(());
        }

        debug!(path = %path.display(), "Creating output directory");
        fs::create_dir_all(path).map_err(|source| OutputError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Destination path for a permission target
    pub fn target_path(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("{}{}.{}", self.dir, name, self.format.extension()))
    }

    /// Destination path for the namespace summary
    pub fn report_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", self.dir, REPORT_FILE_NAME))
    }

    /// Write one permission target, replacing any existing file
    pub fn write_target(&self, target: &PermissionTarget) -> Result<PathBuf, OutputError> {
        let path = self.target_path(&target.name);
        let contents = render_target(target, self.format)?;
        write_atomic(&path, contents.as_bytes())?;

        info!(name = %target.name, path = %path.display(), "Wrote permission target");
        Ok(path)
    }

    /// Write the namespace summary table
    pub fn write_report(&self, report: &MarkdownReport) -> Result<PathBuf, OutputError> {
        let path = self.report_path();
        write_atomic(&path, report.render().as_bytes())?;

        info!(path = %path.display(), rows = report.len(), "Wrote markdown summary");
        Ok(path)
    }
}

/// Serialize a permission target in the given format.
///
/// Keys are sorted in both formats: the record goes through
/// `serde_json::Value`, whose objects are ordered maps.
pub fn render_target(target: &PermissionTarget, format: OutputFormat) -> Result<String, OutputError> {
    let value = serde_json::to_value(target)?;

    match format {
        OutputFormat::Json => {
            let mut buf = Vec::with_capacity(512);
            let mut serializer =
                Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
            value.serialize(&mut serializer)?;
            buf.push(b'\n');
            // serde_json only emits UTF-8
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&value)?),
    }
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), OutputError> {
    let tmp = temp_path(path);
    let write_err = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Err(e) = fs::write(&tmp, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }

    Ok(())
}

/// Hidden sibling of `path` used as the staging file
fn temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{file_name}.tmp"))
}
