//! Catalog command handler

use super::fail;
use course_buddy::core::eligibility::evaluate;
use course_buddy::core::feedback_store::FeedbackRepository;
use course_buddy::core::models::{Catalog, CompletionSet};

/// List catalog courses, optionally only those the student can take now
pub fn run(eligible_only: bool, taken: Option<&str>, catalog: &Catalog, repo: &FeedbackRepository) {
    let completed = match taken {
        Some(list) => CompletionSet::parse_list(list),
        None if eligible_only => repo
            .load()
            .map(|store| store.completion_set())
            .unwrap_or_else(|e| fail(&e)),
        None => CompletionSet::new(),
    };

    let courses: Vec<_> = catalog
        .courses()
        .iter()
        .filter(|course| {
            !eligible_only
                || (!completed.contains(&course.code)
                    && evaluate(course, &completed).is_satisfied())
        })
        .collect();

    if eligible_only {
        println!("\n=== Eligible Courses ({}) ===\n", courses.len());
    } else {
        println!("\n=== Course Catalog ({}) ===\n", courses.len());
    }

    for course in courses {
        println!(
            "{:<8} {:<45} {:>2} cr  Prerequisites: {}",
            course.code,
            course.name,
            course.credits,
            course.prerequisites_display()
        );
    }
}
