//! Course catalog model
//!
//! The catalog is loaded once at startup, from the compiled-in default or
//! from a user-supplied TOML file, and is read-only afterwards. Iteration
//! always follows the order in which courses appear in the source file.

use super::course::{normalize_code, CourseRecord};
use crate::core::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Catalog schema version understood by this build
pub const CATALOG_SCHEMA_VERSION: u32 = 1;

/// Compiled-in default catalog
const DEFAULT_CATALOG: &str = include_str!("../../../assets/catalog.toml");

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    version: u32,
    #[serde(default)]
    courses: Vec<CourseRecord>,
}

/// Immutable, insertion-ordered course catalog keyed by course code
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<CourseRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from course records, keeping their order
    ///
    /// Codes and prerequisites are normalized. Prerequisites naming courses
    /// that are not in the catalog are kept; they simply never count as
    /// satisfied.
    ///
    /// # Errors
    /// Returns [`Error::Catalog`] if a course has an empty code, two courses
    /// share a code, or a course lists a blank or repeated prerequisite
    pub fn from_courses<I>(courses: I) -> Result<Self>
    where
        I: IntoIterator<Item = CourseRecord>,
    {
        let mut catalog = Self::default();
        for mut course in courses {
            course.normalize();
            if course.code.is_empty() {
                return Err(Error::Catalog(format!(
                    "course '{}' has an empty code",
                    course.name
                )));
            }
            if let Some(prereq) = course.invalid_prerequisite() {
                return Err(Error::Catalog(format!(
                    "course '{}' has a blank or repeated prerequisite '{prereq}'",
                    course.code
                )));
            }
            if catalog.index.contains_key(&course.code) {
                return Err(Error::Catalog(format!(
                    "duplicate course code '{}'",
                    course.code
                )));
            }
            catalog
                .index
                .insert(course.code.clone(), catalog.courses.len());
            catalog.courses.push(course);
        }
        Ok(catalog)
    }

    /// Parse a catalog from its TOML definition
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed, the schema version is not
    /// supported, or the course list is invalid
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(toml_str)?;
        if file.version != CATALOG_SCHEMA_VERSION {
            return Err(Error::Catalog(format!(
                "unsupported catalog schema version {} (expected {CATALOG_SCHEMA_VERSION})",
                file.version
            )));
        }
        Self::from_courses(file.courses)
    }

    /// Load a catalog definition from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// The compiled-in default catalog
    ///
    /// # Panics
    /// Panics if the compiled-in catalog cannot be parsed
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_toml(DEFAULT_CATALOG).expect("Failed to parse compiled-in course catalog")
    }

    /// Get a course by code (case-insensitive)
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&CourseRecord> {
        self.index
            .get(&normalize_code(code))
            .map(|&idx| &self.courses[idx])
    }

    /// Look up a course by code (case-insensitive)
    ///
    /// # Errors
    /// Returns [`Error::UnknownCourse`] with the normalized code when the
    /// course is not in the catalog
    pub fn lookup(&self, code: &str) -> Result<&CourseRecord> {
        self.get(code)
            .ok_or_else(|| Error::UnknownCourse(normalize_code(code)))
    }

    /// Whether the catalog contains a course code (case-insensitive)
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(&normalize_code(code))
    }

    /// All courses in catalog order
    #[must_use]
    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Prerequisite references that point at courses missing from the catalog
    ///
    /// # Returns
    /// `(course code, missing prerequisite code)` pairs in catalog order
    #[must_use]
    pub fn dangling_prerequisites(&self) -> Vec<(&str, &str)> {
        let index = &self.index;
        self.courses
            .iter()
            .flat_map(move |course| {
                course
                    .prerequisites
                    .iter()
                    .filter(move |prereq| !index.contains_key(*prereq))
                    .map(move |prereq| (course.code.as_str(), prereq.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_catalog() -> Catalog {
        Catalog::from_courses([
            CourseRecord::new("A", "Course A", 3),
            CourseRecord::new("B", "Course B", 3).with_prerequisites(["A"]),
            CourseRecord::new("C", "Course C", 4).with_prerequisites(["A", "B"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_catalog_preserves_insertion_order() {
        let catalog = Catalog::from_courses([
            CourseRecord::new("Z100", "Last Alphabetically", 3),
            CourseRecord::new("A100", "First Alphabetically", 3),
        ])
        .unwrap();

        let codes: Vec<&str> = catalog.courses().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["Z100", "A100"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = abc_catalog();

        assert_eq!(catalog.lookup(" b ").unwrap().name, "Course B");
        assert!(catalog.contains("c"));
    }

    #[test]
    fn test_lookup_unknown_course() {
        let catalog = abc_catalog();

        let err = catalog.lookup("cps999").unwrap_err();
        assert!(matches!(err, Error::UnknownCourse(ref code) if code == "CPS999"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_duplicate_codes_rejected() {
        let result = Catalog::from_courses([
            CourseRecord::new("CPS210", "Computer Science I", 4),
            CourseRecord::new("cps210", "Duplicate", 4),
        ]);

        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[test]
    fn test_repeated_prerequisite_rejected() {
        let toml_str = r#"
version = 1

[[courses]]
code = "B"
name = "Course B"
credits = 3
prerequisites = ["A", "a"]
"#;

        match Catalog::from_toml(toml_str) {
            Err(Error::Catalog(msg)) => assert!(msg.contains("repeated prerequisite 'A'")),
            other => panic!("expected a catalog error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_toml() {
        let toml_str = r#"
version = 1

[[courses]]
code = "cps210"
name = "Computer Science I: Foundations"
credits = 4

[[courses]]
code = "CPS310"
name = "Computer Science II: Data Structures"
credits = 4
prerequisites = ["cps210"]
"#;

        let catalog = Catalog::from_toml(toml_str).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("CPS210").unwrap().prerequisites.is_empty());
        assert_eq!(catalog.get("CPS310").unwrap().prerequisites, vec!["CPS210"]);
    }

    #[test]
    fn test_from_toml_rejects_unknown_version() {
        let toml_str = "version = 2\ncourses = []\n";
        assert!(matches!(
            Catalog::from_toml(toml_str),
            Err(Error::Catalog(_))
        ));
    }

    #[test]
    fn test_from_toml_rejects_malformed() {
        assert!(matches!(
            Catalog::from_toml("version = \"one\""),
            Err(Error::CatalogToml(_))
        ));
    }

    #[test]
    fn test_dangling_prerequisites_reported() {
        let catalog = Catalog::from_courses([
            CourseRecord::new("MAT251", "Calculus I", 4).with_prerequisites(["MAT181"]),
            CourseRecord::new("MAT252", "Calculus II", 4).with_prerequisites(["MAT251"]),
        ])
        .unwrap();

        assert_eq!(catalog.dangling_prerequisites(), vec![("MAT251", "MAT181")]);
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.len(), 36);
        assert_eq!(catalog.courses()[0].code, "CPS100");

        let cps485 = catalog.get("cps485").unwrap();
        assert_eq!(cps485.prerequisites, vec!["CPS493", "CPS470", "CPS440"]);

        // Zero-credit placeholder courses are allowed
        assert_eq!(catalog.get("CPS296").unwrap().credits, 0);

        // The lab is keyed by its real course number
        assert!(catalog.contains("EGC221"));
        assert!(!catalog.contains("EGS221"));

        // MAT181 is referenced but not offered in this catalog
        assert!(catalog
            .dangling_prerequisites()
            .iter()
            .any(|(_, prereq)| *prereq == "MAT181"));
    }
}
