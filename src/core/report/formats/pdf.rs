//! PDF report generator via HTML-to-PDF conversion
//!
//! Writes the HTML schedule to a temporary file and prints it to PDF with
//! headless Chrome/Chromium, or a converter configured by the user.

use super::html::HtmlReporter;
use crate::core::error::{Error, Result};
use crate::core::report::{ReportContext, ReportGenerator};
use std::path::Path;
use std::process::{Command, Stdio};

/// Browsers tried, in order, when no converter is configured
const CHROME_CANDIDATES: [&str; 8] = [
    "google-chrome",
    "chrome",
    "chromium",
    "chromium-browser",
    "google-chrome-stable",
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    "C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe",
    "C:\\Program Files (x86)\\Google\\Chrome\\Application\\chrome.exe",
];

const CHROME_NOT_FOUND: &str = "PDF conversion failed: Chrome/Chromium not found.\n\
    \n\
    To generate PDF reports, install Chrome or Chromium:\n\
    \n\
    • Ubuntu/Debian:  sudo apt install chromium-browser\n\
    • Fedora/RHEL:    sudo dnf install chromium\n\
    • macOS:          brew install --cask google-chrome\n\
    • Windows:        Download from https://www.google.com/chrome/\n\
    \n\
    Alternatively, specify a converter:\n\
      --pdf-converter /path/to/chrome\n";

/// PDF report generator using HTML-to-PDF conversion
pub struct PdfReporter {
    converter: Option<String>,
}

impl PdfReporter {
    /// Create a PDF reporter that auto-detects Chrome/Chromium
    #[must_use]
    pub const fn new() -> Self {
        Self { converter: None }
    }

    /// Create a PDF reporter with a custom converter
    #[must_use]
    pub fn with_converter(converter: &str) -> Self {
        Self {
            converter: Some(converter.to_owned()),
        }
    }

    fn detect_chrome() -> Option<&'static str> {
        CHROME_CANDIDATES.into_iter().find(|candidate| {
            Command::new(candidate)
                .arg("--version")
                .output()
                .is_ok_and(|output| output.status.success())
        })
    }

    fn print_to_pdf(chrome_cmd: &str, html_path: &Path, pdf_path: &Path) -> Result<()> {
        crate::debug!("Converting {} with {chrome_cmd}", html_path.display());

        // stderr is silenced; headless Chrome is noisy about DBus
        let status = Command::new(chrome_cmd)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--run-all-compositor-stages-before-draw")
            .arg("--no-pdf-header-footer")
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg(format!("file://{}", html_path.canonicalize()?.display()))
            .stderr(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|e| Error::Report(format!("Failed to run PDF converter '{chrome_cmd}': {e}")))?;

        if !status.success() {
            return Err(Error::Report(format!(
                "PDF conversion with '{chrome_cmd}' failed ({status})"
            )));
        }
        Ok(())
    }

    fn convert(&self, html_path: &Path, pdf_path: &Path) -> Result<()> {
        if let Some(converter) = &self.converter {
            return Self::print_to_pdf(converter, html_path, pdf_path);
        }

        match Self::detect_chrome() {
            Some(chrome) => Self::print_to_pdf(chrome, html_path, pdf_path),
            None => Err(Error::Report(CHROME_NOT_FOUND.to_string())),
        }
    }
}

impl Default for PdfReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for PdfReporter {
    /// The HTML that gets printed; PDF bytes only exist on disk
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        HtmlReporter::new().render(ctx)
    }

    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<()> {
        let html_path =
            std::env::temp_dir().join(format!("coursebuddy_schedule_{}.html", std::process::id()));
        HtmlReporter::new().generate(ctx, &html_path)?;

        let result = self.convert(&html_path, output_path);
        let _ = std::fs::remove_file(&html_path);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CompletionSet;

    #[test]
    fn test_render_is_html_source() {
        let completed = CompletionSet::new();
        let ctx = ReportContext::new("Student", &[], &completed);
        let html = PdfReporter::new().render(&ctx).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_missing_converter_is_report_error() {
        let completed = CompletionSet::new();
        let ctx = ReportContext::new("Student", &[], &completed);
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("schedule.pdf");

        let result = PdfReporter::with_converter("coursebuddy-no-such-converter")
            .generate(&ctx, &out);
        assert!(matches!(result, Err(Error::Report(_))));
        assert!(!out.exists());
    }
}
