//! Course model

use serde::{Deserialize, Serialize};

/// Normalize a user- or file-supplied course code to its canonical form
/// (surrounding whitespace removed, uppercase).
///
/// # Examples
/// ```
/// use course_buddy::core::models::normalize_code;
/// assert_eq!(normalize_code("  cps310 "), "CPS310");
/// ```
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// A single course in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Canonical course code (e.g., "CPS310")
    pub code: String,

    /// Course title (e.g., "Computer Science II: Data Structures")
    pub name: String,

    /// Credit hours; zero for placeholder and elective slots
    #[serde(default)]
    pub credits: u32,

    /// Prerequisite course codes, in the order the catalog lists them
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl CourseRecord {
    /// Create a new course with no prerequisites
    ///
    /// # Arguments
    /// * `code` - Course code; normalized on construction
    /// * `name` - Course title
    /// * `credits` - Credit hours
    #[must_use]
    pub fn new(code: &str, name: &str, credits: u32) -> Self {
        Self {
            code: normalize_code(code),
            name: name.to_string(),
            credits,
            prerequisites: Vec::new(),
        }
    }

    /// Builder-style helper to attach prerequisites
    #[must_use]
    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for prereq in prerequisites {
            self.add_prerequisite(prereq.as_ref());
        }
        self
    }

    /// Append a prerequisite by course code
    ///
    /// The list is kept as written; [`Catalog`](super::Catalog) rejects blank
    /// or repeated entries when the course is added.
    pub fn add_prerequisite(&mut self, code: &str) {
        self.prerequisites.push(normalize_code(code));
    }

    /// Normalize the code and every prerequisite in place
    pub(crate) fn normalize(&mut self) {
        self.code = normalize_code(&self.code);
        for prereq in &mut self.prerequisites {
            *prereq = normalize_code(prereq);
        }
    }

    /// First blank or repeated prerequisite, if any
    pub(crate) fn invalid_prerequisite(&self) -> Option<&str> {
        self.prerequisites.iter().enumerate().find_map(|(i, prereq)| {
            (prereq.is_empty() || self.prerequisites[..i].contains(prereq))
                .then_some(prereq.as_str())
        })
    }

    /// Prerequisites joined with ", " for display, or "None"
    #[must_use]
    pub fn prerequisites_display(&self) -> String {
        if self.prerequisites.is_empty() {
            "None".to_string()
        } else {
            self.prerequisites.join(", ")
        }
    }

    /// "CODE - Name" label used in listings and alternative suggestions
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}
