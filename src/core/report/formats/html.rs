//! HTML report generator
//!
//! Renders the schedule as a self-contained, print-ready HTML document.
//! The markup lives in `templates/schedule.html` and is compiled in by askama,
//! which also escapes every interpolated value.

use crate::core::error::Result;
use crate::core::recommend::{RecommendationRow, RecommendationSummary, COLUMNS};
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;

#[derive(Template)]
#[template(path = "schedule.html")]
struct ScheduleTemplate<'a> {
    title: String,
    columns: [&'static str; 6],
    rows: &'a [RecommendationRow],
    summary: &'a RecommendationSummary,
    completed: Vec<&'a str>,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        let template = ScheduleTemplate {
            title: ctx.title(),
            columns: COLUMNS,
            rows: ctx.rows,
            summary: &ctx.summary,
            completed: ctx.completed.iter().collect(),
        };
        Ok(template.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Catalog, CompletionSet, CourseRecord};
    use crate::core::recommend::build_recommendations;

    #[test]
    fn test_render_html() {
        let catalog = Catalog::from_courses([
            CourseRecord::new("A", "Course A", 3),
            CourseRecord::new("B", "Course B", 4).with_prerequisites(["A"]),
            CourseRecord::new("C", "Course C", 3).with_prerequisites(["X"]),
        ])
        .unwrap();
        let completed = CompletionSet::parse_list("A");
        let rows = build_recommendations(&catalog, &completed);
        let ctx = ReportContext::new("Ada", &rows, &completed);

        let html = HtmlReporter::new().render(&ctx).unwrap();

        assert!(html.contains("<title>Recommended Class Schedule for Ada</title>"));
        assert!(html.contains("<th>Alternative Recommendations</th>"));
        assert!(html.contains("<td>Course B</td>"));
        assert!(html.contains("Missing prerequisites: X"));
        assert!(html.contains("Completed: A"));
        assert!(!html.contains("<td>Course A</td>"));
    }

    #[test]
    fn test_render_html_escapes_values() {
        let catalog =
            Catalog::from_courses([CourseRecord::new("A", "Tools <& Techniques>", 3)]).unwrap();
        let completed = CompletionSet::new();
        let rows = build_recommendations(&catalog, &completed);
        let ctx = ReportContext::new("Student", &rows, &completed);

        let html = HtmlReporter::new().render(&ctx).unwrap();
        assert!(html.contains("Tools &lt;&amp; Techniques&gt;"));
        assert!(html.contains("Completed: None"));
    }
}
