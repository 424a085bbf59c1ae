//! Markdown summary of namespaces and their patterns

use std::fmt::Write as _;

/// File name of the summary document inside the output directory
pub const REPORT_FILE_NAME: &str = "namespaces.md";

const HEADER: &str = "| Namespace | Patterns |";
const ALIGNMENT: &str = "| :--- | :--- |";

/// One table row: a namespace and its escaped, comma-joined patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownRow {
    pub namespace: String,
    pub patterns: String,
}

impl MarkdownRow {
    pub fn new<'a>(namespace: impl Into<String>, patterns: impl IntoIterator<Item = &'a str>) -> Self {
        let patterns = patterns
            .into_iter()
            .map(escape_markdown)
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            namespace: namespace.into(),
            patterns,
        }
    }
}

/// Rows accumulated in namespace definition order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownReport {
    rows: Vec<MarkdownRow>,
}

impl MarkdownReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: MarkdownRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[MarkdownRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the two-column table, one newline-terminated line per row
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(64 * (self.rows.len() + 2));
        out.push_str(HEADER);
        out.push('\n');
        out.push_str(ALIGNMENT);
        out.push('\n');
        for row in &self.rows {
            // Writing into a String cannot fail
            let _ = writeln!(out, "| {} | {} |", row.namespace, row.patterns);
        }
        out
    }
}

/// Escape `*` so glob patterns are not rendered as emphasis
pub fn escape_markdown(pattern: &str) -> String {
    pattern.replace('*', "\\*")
}
