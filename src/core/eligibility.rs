//! Prerequisite satisfaction checks
//!
//! These are pure functions over a prerequisite list and a [`CompletionSet`].
//! A prerequisite that names a course missing from the catalog is just an
//! unsatisfied prerequisite; nothing here can fail.

use crate::core::models::{CompletionSet, CourseRecord};

/// Outcome of checking one course against the completion set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    /// Every prerequisite has been completed
    Satisfied,
    /// Some prerequisites are outstanding, listed in prerequisite order
    Blocked {
        /// Prerequisites not yet completed
        missing: Vec<String>,
    },
}

impl Eligibility {
    /// Whether the course can be taken now
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }
}

/// Returns `true` iff every prerequisite is in `completed`.
/// An empty prerequisite list is always satisfied.
#[must_use]
pub fn is_satisfied<S: AsRef<str>>(prerequisites: &[S], completed: &CompletionSet) -> bool {
    prerequisites.iter().all(|p| completed.contains(p.as_ref()))
}

/// Prerequisites not yet completed, in the order they are listed
#[must_use]
pub fn missing_prerequisites<S: AsRef<str>>(
    prerequisites: &[S],
    completed: &CompletionSet,
) -> Vec<String> {
    prerequisites
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| !completed.contains(p))
        .map(str::to_string)
        .collect()
}

/// Check a course's prerequisites against the completion set
#[must_use]
pub fn evaluate(course: &CourseRecord, completed: &CompletionSet) -> Eligibility {
    let missing = missing_prerequisites(&course.prerequisites, completed);
    if missing.is_empty() {
        Eligibility::Satisfied
    } else {
        Eligibility::Blocked { missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(codes: &[&str]) -> CompletionSet {
        codes.iter().collect()
    }

    #[test]
    fn test_empty_prerequisites_always_satisfied() {
        let none: [&str; 0] = [];
        assert!(is_satisfied(&none, &CompletionSet::new()));
        assert!(is_satisfied(&none, &completed(&["CPS100", "CPS210"])));
    }

    #[test]
    fn test_all_prerequisites_completed() {
        let prereqs = ["CPS310", "CPS330"];
        assert!(is_satisfied(&prereqs, &completed(&["CPS310", "CPS330", "CPS210"])));
    }

    #[test]
    fn test_removing_any_prerequisite_blocks() {
        let prereqs = ["CPS493", "CPS470", "CPS440"];
        let full = ["CPS493", "CPS470", "CPS440"];
        assert!(is_satisfied(&prereqs, &completed(&full)));

        for skip in 0..full.len() {
            let partial: Vec<&str> = full
                .iter()
                .enumerate()
                .filter(|(idx, _)| *idx != skip)
                .map(|(_, code)| *code)
                .collect();
            assert!(
                !is_satisfied(&prereqs, &completed(&partial)),
                "dropping {} should block",
                full[skip]
            );
        }
    }

    #[test]
    fn test_comparison_is_case_insensitive() {
        let prereqs = ["cps310"];
        assert!(is_satisfied(&prereqs, &completed(&["CPS310"])));
    }

    #[test]
    fn test_unknown_prerequisite_is_unsatisfied() {
        let prereqs = ["MAT181"];
        assert!(!is_satisfied(&prereqs, &completed(&["MAT251"])));
    }

    #[test]
    fn test_missing_preserves_order() {
        let prereqs = ["CPS493", "CPS470", "CPS440"];
        let missing = missing_prerequisites(&prereqs, &completed(&["CPS470"]));
        assert_eq!(missing, vec!["CPS493", "CPS440"]);
    }

    #[test]
    fn test_evaluate_course() {
        let course = CourseRecord::new("CPS425", "Language Processing", 4)
            .with_prerequisites(["CPS310", "CPS330"]);

        assert_eq!(
            evaluate(&course, &completed(&["CPS310"])),
            Eligibility::Blocked {
                missing: vec!["CPS330".to_string()]
            }
        );
        assert!(evaluate(&course, &completed(&["CPS310", "CPS330"])).is_satisfied());
    }
}
