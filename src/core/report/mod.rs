//! Schedule report generation
//!
//! Renders recommendation rows as a spreadsheet (CSV) or a printable
//! document (HTML, Markdown, or PDF converted from the HTML). Every format
//! carries the same rows in the same column order.

pub mod formats;

use crate::core::error::Result;
use crate::core::models::CompletionSet;
use crate::core::recommend::{RecommendationRow, RecommendationSummary};
use std::fs;
use std::path::{Path, PathBuf};

pub use formats::{CsvReporter, HtmlReporter, MarkdownReporter, PdfReporter, ReportFormat};

/// Default file stem for schedule reports
pub const DEFAULT_REPORT_STEM: &str = "recommended_schedule";

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Student the schedule is for
    pub student_name: &'a str,
    /// Recommendation rows, in catalog order
    pub rows: &'a [RecommendationRow],
    /// Courses already completed
    pub completed: &'a CompletionSet,
    /// Eligible/blocked tallies over `rows`
    pub summary: RecommendationSummary,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub fn new(
        student_name: &'a str,
        rows: &'a [RecommendationRow],
        completed: &'a CompletionSet,
    ) -> Self {
        Self {
            student_name,
            rows,
            completed,
            summary: RecommendationSummary::from_rows(rows),
        }
    }

    /// Report title
    #[must_use]
    pub fn title(&self) -> String {
        format!("Recommended Class Schedule for {}", self.student_name)
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String>;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<()> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }
}

/// Write one report per format into `out_dir` as `<stem>.<ext>`
///
/// Text formats are rendered in memory first and the PDF conversion runs
/// before any text file is written, so a failure leaves no report files
/// behind.
///
/// # Arguments
/// * `ctx` - Report data
/// * `formats` - Formats to produce; duplicates are written once
/// * `out_dir` - Output directory (created if missing)
/// * `stem` - Output file name without extension
/// * `pdf_converter` - Converter command for PDF output; `None` auto-detects
///
/// # Returns
/// The written paths, in `formats` order
///
/// # Errors
/// Returns an error if any format fails to render or write
pub fn write_reports(
    ctx: &ReportContext,
    formats: &[ReportFormat],
    out_dir: &Path,
    stem: &str,
    pdf_converter: Option<&str>,
) -> Result<Vec<PathBuf>> {
    let mut unique: Vec<ReportFormat> = Vec::with_capacity(formats.len());
    for format in formats {
        if !unique.contains(format) {
            unique.push(*format);
        }
    }

    let mut rendered: Vec<(PathBuf, String)> = Vec::new();
    for format in unique.iter().filter(|f| **f != ReportFormat::Pdf) {
        let path = out_dir.join(format!("{stem}.{}", format.extension()));
        let content = format.reporter(pdf_converter).render(ctx)?;
        rendered.push((path, content));
    }

    fs::create_dir_all(out_dir)?;

    let mut written: Vec<PathBuf> = Vec::new();
    if unique.contains(&ReportFormat::Pdf) {
        let path = out_dir.join(format!("{stem}.{}", ReportFormat::Pdf.extension()));
        ReportFormat::Pdf
            .reporter(pdf_converter)
            .generate(ctx, &path)?;
        written.push(path);
    }

    for (path, content) in rendered {
        if let Err(e) = fs::write(&path, content) {
            for done in &written {
                let _ = fs::remove_file(done);
            }
            return Err(e.into());
        }
        written.push(path);
    }

    // Report paths in the order the formats were requested
    written.sort_by_key(|path| {
        unique
            .iter()
            .position(|f| path.extension().is_some_and(|ext| ext == f.extension()))
            .unwrap_or(usize::MAX)
    });

    for path in &written {
        crate::info!("Report exported to: {}", path.display());
    }
    Ok(written)
}
