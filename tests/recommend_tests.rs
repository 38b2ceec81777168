//! Integration tests for eligibility and recommendations against the
//! built-in catalog

use course_buddy::core::eligibility::{evaluate, is_satisfied, Eligibility};
use course_buddy::core::models::{Catalog, CompletionSet, CourseRecord};
use course_buddy::core::recommend::{
    build_recommendations, RecommendationSummary, MAX_ALTERNATIVES, MISSING_REASON_PREFIX,
};

fn completed(codes: &[&str]) -> CompletionSet {
    codes.iter().collect()
}

#[test]
fn test_empty_prerequisites_are_always_satisfied() {
    let none: [&str; 0] = [];
    assert!(is_satisfied(&none, &CompletionSet::new()));
    assert!(is_satisfied(&none, &completed(&["CPS100"])));
}

#[test]
fn test_eligibility_is_monotonic_over_builtin_catalog() {
    let catalog = Catalog::builtin();
    let smaller = completed(&["CPS100", "CPS210"]);
    let larger = completed(&["CPS100", "CPS210", "CPS310", "CPS315", "MAT251"]);

    for course in catalog.courses() {
        if evaluate(course, &smaller).is_satisfied() {
            assert!(
                evaluate(course, &larger).is_satisfied(),
                "{} became ineligible after completing more courses",
                course.code
            );
        }
    }
}

#[test]
fn test_no_rows_for_completed_courses() {
    let catalog = Catalog::builtin();
    let done = completed(&["CPS100", "CPS210", "CPS310"]);

    let rows = build_recommendations(&catalog, &done);

    assert_eq!(rows.len(), catalog.len() - 3);
    assert!(rows.iter().all(|row| !done.contains(&row.code)));
}

#[test]
fn test_rows_follow_catalog_order() {
    let catalog = Catalog::builtin();
    let rows = build_recommendations(&catalog, &CompletionSet::new());

    let catalog_codes: Vec<&str> = catalog.courses().iter().map(|c| c.code.as_str()).collect();
    let row_codes: Vec<&str> = rows.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(row_codes, catalog_codes);
}

#[test]
fn test_blocked_alternatives_are_missing_prerequisites_in_order() {
    let catalog = Catalog::builtin();
    let done = completed(&["CPS100"]);

    for row in build_recommendations(&catalog, &done) {
        let course = catalog.get(&row.code).expect("row for unknown course");
        match evaluate(course, &done) {
            Eligibility::Blocked { missing } => {
                assert!(!row.eligible);
                assert_eq!(row.alternatives, missing);
                assert_eq!(
                    row.why,
                    format!("{MISSING_REASON_PREFIX}{}", missing.join(", "))
                );
            }
            Eligibility::Satisfied => assert!(row.eligible),
        }
    }
}

#[test]
fn test_eligible_alternatives_exclude_self_and_completed() {
    let catalog = Catalog::builtin();
    let done = completed(&["CPS100", "CPS210"]);

    for row in build_recommendations(&catalog, &done).iter().filter(|r| r.eligible) {
        assert!(row.alternatives.len() <= MAX_ALTERNATIVES);
        for alternative in &row.alternatives {
            let code = alternative.split(" - ").next().unwrap_or_default();
            assert_ne!(code, row.code);
            assert!(!done.contains(code));
        }
    }
}

#[test]
fn test_dangling_prerequisite_blocks_without_error() {
    let catalog = Catalog::from_courses([
        CourseRecord::new("A", "Course A", 3),
        CourseRecord::new("B", "Course B", 3).with_prerequisites(["A", "GHOST"]),
    ])
    .expect("Dangling prerequisites are allowed");

    let rows = build_recommendations(&catalog, &completed(&["A"]));
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].eligible);
    assert_eq!(rows[0].alternatives, vec!["GHOST"]);
}

#[test]
fn test_summary_counts() {
    let catalog = Catalog::from_courses([
        CourseRecord::new("A", "Course A", 3),
        CourseRecord::new("B", "Course B", 4).with_prerequisites(["A"]),
        CourseRecord::new("C", "Course C", 3).with_prerequisites(["B"]),
    ])
    .expect("Failed to build catalog");

    let rows = build_recommendations(&catalog, &completed(&["A"]));
    let summary = RecommendationSummary::from_rows(&rows);

    assert_eq!(summary.eligible, 1);
    assert_eq!(summary.blocked, 1);
    assert_eq!(summary.eligible_credits, 4);
}
