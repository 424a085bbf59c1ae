//! Generated artifacts
//!
//! Permission target files (`<name>.json` or `<name>.yaml`) and the
//! `namespaces.md` summary table.

pub mod markdown;
pub mod writer;

pub use markdown::{MarkdownReport, MarkdownRow, REPORT_FILE_NAME, escape_markdown};
pub use writer::{OutputWriter, render_target};
