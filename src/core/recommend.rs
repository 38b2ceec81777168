//! Next-course recommendations
//!
//! Produces one [`RecommendationRow`] per catalog course the student has not
//! completed, in catalog order. The `alternatives` column means different
//! things depending on the outcome:
//!
//! - eligible course: up to [`MAX_ALTERNATIVES`] other open courses, taken
//!   in catalog order (an unranked sample, not a ranking)
//! - blocked course: exactly the prerequisites still missing
//!
//! Reports print both under the same "Alternative Recommendations" header.

use crate::core::eligibility::{evaluate, Eligibility};
use crate::core::models::{Catalog, CompletionSet, CourseRecord};

/// Reason given for a course whose prerequisites are all completed
pub const SATISFIED_REASON: &str = "Prerequisites satisfied — natural next course in your program.";

/// Prefix of the reason given for a blocked course
pub const MISSING_REASON_PREFIX: &str = "Missing prerequisites: ";

/// How many other courses an eligible row suggests
pub const MAX_ALTERNATIVES: usize = 3;

/// Report column headers, in output order
pub const COLUMNS: [&str; 6] = [
    "Class Name",
    "Course Number",
    "Credits",
    "Prerequisites",
    "Why Recommended",
    "Alternative Recommendations",
];

/// One course's recommendation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRow {
    /// Course title
    pub name: String,
    /// Course code
    pub code: String,
    /// Credit hours
    pub credits: u32,
    /// Prerequisite codes, in catalog order
    pub prerequisites: Vec<String>,
    /// Human-readable explanation
    pub why: String,
    /// Other courses for eligible rows; missing prerequisites for blocked rows
    pub alternatives: Vec<String>,
    /// Whether the course can be taken now
    pub eligible: bool,
}

impl RecommendationRow {
    /// Prerequisites joined with ", "
    #[must_use]
    pub fn prerequisites_joined(&self) -> String {
        self.prerequisites.join(", ")
    }

    /// Alternatives joined with "; "
    #[must_use]
    pub fn alternatives_joined(&self) -> String {
        self.alternatives.join("; ")
    }

    /// The row's cells in [`COLUMNS`] order
    #[must_use]
    pub fn cells(&self) -> [String; 6] {
        [
            self.name.clone(),
            self.code.clone(),
            self.credits.to_string(),
            self.prerequisites_joined(),
            self.why.clone(),
            self.alternatives_joined(),
        ]
    }
}

/// Build a recommendation row for every course not yet completed
///
/// # Arguments
/// * `catalog` - Course catalog; its order determines row order and which
///   alternatives are suggested
/// * `completed` - Courses the student has finished
///
/// # Returns
/// Rows in catalog order. Completed courses produce no row.
#[must_use]
pub fn build_recommendations(catalog: &Catalog, completed: &CompletionSet) -> Vec<RecommendationRow> {
    let rows: Vec<RecommendationRow> = catalog
        .courses()
        .iter()
        .filter(|course| !completed.contains(&course.code))
        .map(|course| recommend_course(catalog, course, completed))
        .collect();

    crate::debug!(
        "Built {} recommendation rows ({} eligible) from {} catalog courses, {} completed",
        rows.len(),
        rows.iter().filter(|row| row.eligible).count(),
        catalog.len(),
        completed.len()
    );

    rows
}

fn recommend_course(
    catalog: &Catalog,
    course: &CourseRecord,
    completed: &CompletionSet,
) -> RecommendationRow {
    let (why, alternatives, eligible) = match evaluate(course, completed) {
        Eligibility::Satisfied => (
            SATISFIED_REASON.to_string(),
            open_alternatives(catalog, course, completed),
            true,
        ),
        Eligibility::Blocked { missing } => (
            format!("{MISSING_REASON_PREFIX}{}", missing.join(", ")),
            missing,
            false,
        ),
    };

    RecommendationRow {
        name: course.name.clone(),
        code: course.code.clone(),
        credits: course.credits,
        prerequisites: course.prerequisites.clone(),
        why,
        alternatives,
        eligible,
    }
}

/// First [`MAX_ALTERNATIVES`] other uncompleted courses, in catalog order
fn open_alternatives(
    catalog: &Catalog,
    course: &CourseRecord,
    completed: &CompletionSet,
) -> Vec<String> {
    catalog
        .courses()
        .iter()
        .filter(|other| other.code != course.code && !completed.contains(&other.code))
        .take(MAX_ALTERNATIVES)
        .map(CourseRecord::label)
        .collect()
}

/// Counts shown alongside a set of recommendations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecommendationSummary {
    /// Rows whose prerequisites are satisfied
    pub eligible: usize,
    /// Rows blocked by missing prerequisites
    pub blocked: usize,
    /// Credit hours across the eligible rows
    pub eligible_credits: u32,
}

impl RecommendationSummary {
    /// Tally a set of rows
    #[must_use]
    pub fn from_rows(rows: &[RecommendationRow]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, row| {
            if row.eligible {
                acc.eligible += 1;
                acc.eligible_credits += row.credits;
            } else {
                acc.blocked += 1;
            }
            acc
        })
    }
}
