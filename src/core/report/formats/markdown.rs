//! Markdown report generator
//!
//! Produces a heading, a short summary, and a pipe table that renders in
//! GitHub, GitLab, and most editors.

use crate::core::error::Result;
use crate::core::recommend::COLUMNS;
use crate::core::report::{ReportContext, ReportGenerator};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Pipes would split the cell; line breaks would end the row
fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace(['\r', '\n'], " ")
}

fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
    let inner = cells
        .iter()
        .map(|cell| escape_cell(cell.as_ref()))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("| {inner} |")
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "# {}\n", ctx.title());

        let completed = if ctx.completed.is_empty() {
            "None".to_string()
        } else {
            ctx.completed.iter().collect::<Vec<_>>().join(", ")
        };
        let _ = writeln!(out, "- **Completed:** {completed}");
        let _ = writeln!(
            out,
            "- **Eligible now:** {} ({} credits)",
            ctx.summary.eligible, ctx.summary.eligible_credits
        );
        let _ = writeln!(out, "- **Blocked:** {}\n", ctx.summary.blocked);

        let _ = writeln!(out, "{}", table_row(&COLUMNS));
        let _ = writeln!(out, "{}", table_row(&["---"; 6]));
        for row in ctx.rows {
            let _ = writeln!(out, "{}", table_row(&row.cells()));
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Catalog, CompletionSet, CourseRecord};
    use crate::core::recommend::build_recommendations;

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
        assert_eq!(escape_cell("line\nbreak"), "line break");
    }

    #[test]
    fn test_render_markdown() {
        let catalog = Catalog::from_courses([
            CourseRecord::new("A", "Course A", 3),
            CourseRecord::new("B", "Course B", 3).with_prerequisites(["A"]),
        ])
        .unwrap();
        let completed = CompletionSet::new();
        let rows = build_recommendations(&catalog, &completed);
        let ctx = ReportContext::new("Student", &rows, &completed);

        let md = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(md.starts_with("# Recommended Class Schedule for Student\n"));
        assert!(md.contains("- **Completed:** None"));
        assert!(md.contains("- **Blocked:** 1"));
        assert!(md.contains(
            "| Class Name | Course Number | Credits | Prerequisites | Why Recommended | Alternative Recommendations |"
        ));
        assert!(md.contains("| Course B | B | 3 | A | Missing prerequisites: A | A |"));
    }
}
