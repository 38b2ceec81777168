//! Per-course advice: catalog details plus what earlier students reported

use crate::core::error::Result;
use crate::core::models::{Catalog, CourseRecord, FeedbackEntry, FeedbackStore};
use std::fmt;

/// Shown when a course has no feedback yet
pub const NO_FEEDBACK_MESSAGE: &str =
    "No prior student feedback available yet. Proceed with standard preparation.";

/// Advice for one course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice<'a> {
    /// The catalog entry
    pub course: &'a CourseRecord,
    /// Feedback left by other students, oldest first
    pub feedback: &'a [FeedbackEntry],
}

impl Advice<'_> {
    /// Whether any student feedback exists for the course
    #[must_use]
    pub fn has_feedback(&self) -> bool {
        !self.feedback.is_empty()
    }
}

/// Gather advice for `code`
///
/// # Errors
/// Returns [`Error::UnknownCourse`](crate::core::error::Error::UnknownCourse)
/// if the course is not in the catalog
pub fn advise<'a>(catalog: &'a Catalog, store: &'a FeedbackStore, code: &str) -> Result<Advice<'a>> {
    let course = catalog.lookup(code)?;
    Ok(Advice {
        course,
        feedback: store.entries_for(&course.code),
    })
}

impl fmt::Display for Advice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Course Selected: {}", self.course.label())?;
        writeln!(f, "Credits: {}", self.course.credits)?;
        writeln!(f, "Prerequisites: {}", self.course.prerequisites_display())?;

        if !self.has_feedback() {
            writeln!(f, "\n{NO_FEEDBACK_MESSAGE}")?;
            return Ok(());
        }

        writeln!(f, "\n--- Student Feedback Summary ---")?;
        for entry in self.feedback {
            writeln!(f, "• Reported Assignment/Exam Issues: {}", entry.problems.trim())?;
            writeln!(
                f,
                "• Recommended Prerequisite(s): {}\n",
                entry.recommended_prereq.trim()
            )?;
        }
        Ok(())
    }
}
