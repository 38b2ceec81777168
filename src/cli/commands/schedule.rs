//! Schedule command handler

use super::fail;
use course_buddy::config::Config;
use course_buddy::core::feedback_store::FeedbackRepository;
use course_buddy::core::models::{Catalog, CompletionSet};
use course_buddy::core::recommend::build_recommendations;
use course_buddy::core::report::{write_reports, ReportContext, ReportFormat, DEFAULT_REPORT_STEM};
use course_buddy::{error, info, warn};
use std::path::PathBuf;

/// Formats written when none are requested
pub const DEFAULT_FORMATS: [ReportFormat; 2] = [ReportFormat::Csv, ReportFormat::Html];

/// Options for the schedule command
#[derive(Debug, Default)]
pub struct ScheduleOptions {
    /// Comma-separated completed codes; overrides `taken_classes`
    pub taken: Option<String>,
    /// Student name for the title
    pub student: Option<String>,
    /// Requested formats, unparsed
    pub formats: Vec<String>,
    /// Output directory; config `reports_dir` when `None`
    pub output_dir: Option<PathBuf>,
}

/// Parse requested formats, falling back to [`DEFAULT_FORMATS`]
fn parse_formats(requested: &[String]) -> Result<Vec<ReportFormat>, String> {
    if requested.is_empty() {
        return Ok(DEFAULT_FORMATS.to_vec());
    }
    requested.iter().map(|f| f.parse()).collect()
}

/// Build recommendations and write one report per requested format
pub fn run(opts: &ScheduleOptions, catalog: &Catalog, repo: &FeedbackRepository, config: &Config) {
    let formats = match parse_formats(&opts.formats) {
        Ok(formats) => formats,
        Err(e) => {
            error!("{e}");
            eprintln!("✗ {e}. Use: csv, html, markdown, or pdf");
            std::process::exit(1);
        }
    };

    // Without --taken the feedback file is the only source of completed courses
    let (store, completed) = match &opts.taken {
        Some(list) => {
            let store = repo.load().unwrap_or_else(|e| fail(&e));
            (store, CompletionSet::parse_list(list))
        }
        None => {
            let store = repo.load_required().unwrap_or_else(|e| fail(&e));
            let completed = store.completion_set();
            (store, completed)
        }
    };

    for code in completed.iter().filter(|code| !catalog.contains(code)) {
        warn!("Completed course '{code}' is not in the catalog");
    }

    let student_name = opts
        .student
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| store.student_name_or_default());

    let rows = build_recommendations(catalog, &completed);
    let ctx = ReportContext::new(student_name, &rows, &completed);

    let out_dir = opts
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.paths.reports_dir));
    let pdf_converter =
        Some(config.report.pdf_converter.as_str()).filter(|cmd| !cmd.is_empty());

    match write_reports(&ctx, &formats, &out_dir, DEFAULT_REPORT_STEM, pdf_converter) {
        Ok(paths) => {
            for path in paths {
                println!("✓ Report generated: {}", path.display());
            }
            info!(
                "Schedule for {student_name}: {} eligible, {} blocked",
                ctx.summary.eligible, ctx.summary.blocked
            );
            println!(
                "  {} course(s) eligible now ({} credits), {} blocked by prerequisites",
                ctx.summary.eligible, ctx.summary.eligible_credits, ctx.summary.blocked
            );
        }
        Err(e) => fail(&e),
    }
}
