//! Student feedback records
//!
//! One JSON document holds everything the advisor persists: optional
//! student details used by the schedule report, and per-course feedback
//! lists keyed by course code at the top level:
//!
//! ```json
//! {
//!     "student_name": "Ada",
//!     "taken_classes": [{ "course_number": "CPS210" }],
//!     "CPS352": [{ "problems": "...", "recommended_prereq": "CPS310" }]
//! }
//! ```

use super::completion::CompletionSet;
use super::course::normalize_code;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name shown on reports when the record has none
pub const DEFAULT_STUDENT_NAME: &str = "Student";

/// One piece of feedback about a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// Problems the student had with exams and assignments
    pub problems: String,
    /// Courses the student recommends taking first (free text)
    pub recommended_prereq: String,
}

impl FeedbackEntry {
    /// Create a feedback entry
    #[must_use]
    pub fn new(problems: &str, recommended_prereq: &str) -> Self {
        Self {
            problems: problems.to_string(),
            recommended_prereq: recommended_prereq.to_string(),
        }
    }
}

/// A completed class listed in the feedback record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakenClass {
    /// Course code as entered
    #[serde(default)]
    pub course_number: String,

    /// Any other per-class fields (grade, term, ...), kept as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl TakenClass {
    /// Create a taken-class entry with no extra fields
    #[must_use]
    pub fn new(course_number: &str) -> Self {
        Self {
            course_number: course_number.to_string(),
            extra: BTreeMap::new(),
        }
    }
}

/// The full feedback document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackStore {
    /// Student the record belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,

    /// Classes the student has completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taken_classes: Option<Vec<TakenClass>>,

    /// Feedback entries per course code, oldest first
    #[serde(flatten)]
    pub courses: BTreeMap<String, Vec<FeedbackEntry>>,
}

impl FeedbackStore {
    /// Feedback for a course (case-insensitive), oldest first
    #[must_use]
    pub fn entries_for(&self, code: &str) -> &[FeedbackEntry] {
        self.courses
            .get(&normalize_code(code))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Rekey every course list under its normalized code
    ///
    /// Lists whose keys differ only by case or surrounding whitespace are
    /// merged in key order, so an already-uppercase key keeps its entries
    /// first.
    pub fn normalize_keys(&mut self) {
        for (code, entries) in std::mem::take(&mut self.courses) {
            self.courses
                .entry(normalize_code(&code))
                .or_default()
                .extend(entries);
        }
    }

    /// Append an entry for a course, creating its list when absent
    pub fn push_entry(&mut self, code: &str, entry: FeedbackEntry) {
        self.courses
            .entry(normalize_code(code))
            .or_default()
            .push(entry);
    }

    /// Total number of feedback entries across all courses
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.courses.values().map(Vec::len).sum()
    }

    /// Student name, or [`DEFAULT_STUDENT_NAME`]
    #[must_use]
    pub fn student_name_or_default(&self) -> &str {
        self.student_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_STUDENT_NAME)
    }

    /// Completed courses derived from `taken_classes`
    #[must_use]
    pub fn completion_set(&self) -> CompletionSet {
        self.taken_classes
            .iter()
            .flatten()
            .map(|class| class.course_number.as_str())
            .collect()
    }
}
