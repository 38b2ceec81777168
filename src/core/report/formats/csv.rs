//! CSV (spreadsheet) report generator

use crate::core::error::Result;
use crate::core::recommend::COLUMNS;
use crate::core::report::{ReportContext, ReportGenerator};
use std::borrow::Cow;
use std::fmt::Write;

/// CSV report generator: one header row, then one row per recommendation
pub struct CsvReporter;

impl CsvReporter {
    /// Create a new CSV reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Quote a field when it contains a delimiter, quote, or line break
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn write_record<S: AsRef<str>>(out: &mut String, fields: &[S]) {
    let line = fields
        .iter()
        .map(|field| escape_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    let _ = writeln!(out, "{line}");
}

impl ReportGenerator for CsvReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        let mut out = String::new();
        write_record(&mut out, &COLUMNS);
        for row in ctx.rows {
            write_record(&mut out, &row.cells());
        }
        crate::debug!("Rendered {} CSV rows", ctx.rows.len());
        Ok(out)
    }
}
