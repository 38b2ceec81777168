//! Report format implementations
//!
//! Provides exporters for CSV (spreadsheet), HTML, Markdown, and PDF.

pub mod csv;
pub mod html;
pub mod markdown;
pub mod pdf;

pub use csv::CsvReporter;
pub use html::HtmlReporter;
pub use markdown::MarkdownReporter;
pub use pdf::PdfReporter;

use super::ReportGenerator;
use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Comma-separated values; opens in any spreadsheet application
    Csv,
    /// Self-contained HTML document with print styling
    Html,
    /// Markdown table
    Markdown,
    /// PDF (generated from HTML)
    Pdf,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Html => "html",
            Self::Markdown => "md",
            Self::Pdf => "pdf",
        }
    }

    /// Reporter for this format
    ///
    /// `pdf_converter` only matters for [`ReportFormat::Pdf`]; `None` means
    /// auto-detect Chrome/Chromium.
    #[must_use]
    pub fn reporter(&self, pdf_converter: Option<&str>) -> Box<dyn ReportGenerator> {
        match self {
            Self::Csv => Box::new(CsvReporter::new()),
            Self::Html => Box::new(HtmlReporter::new()),
            Self::Markdown => Box::new(MarkdownReporter::new()),
            Self::Pdf => Box::new(
                pdf_converter.map_or_else(PdfReporter::new, PdfReporter::with_converter),
            ),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" | "spreadsheet" => Ok(Self::Csv),
            "html" | "htm" => Ok(Self::Html),
            "md" | "markdown" => Ok(Self::Markdown),
            "pdf" => Ok(Self::Pdf),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
            Self::Pdf => write!(f, "pdf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("CSV".parse::<ReportFormat>(), Ok(ReportFormat::Csv));
        assert_eq!("htm".parse::<ReportFormat>(), Ok(ReportFormat::Html));
        assert_eq!("md".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!(" pdf ".parse::<ReportFormat>(), Ok(ReportFormat::Pdf));
        assert!("xlsx".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ReportFormat::Csv.extension(), "csv");
        assert_eq!(ReportFormat::Markdown.extension(), "md");
        assert_eq!(ReportFormat::Pdf.extension(), "pdf");
    }
}
