//! Advice command handler

use super::fail;
use course_buddy::core::advice::advise;
use course_buddy::core::feedback_store::FeedbackRepository;
use course_buddy::core::models::Catalog;
use course_buddy::warn;

/// Print catalog details and past feedback for `code`
pub fn run(code: &str, catalog: &Catalog, repo: &FeedbackRepository) {
    let store = repo.load().unwrap_or_else(|e| fail(&e));

    match advise(catalog, &store, code) {
        Ok(advice) => print!("{advice}"),
        Err(e) if e.is_recoverable() => {
            warn!("Advice requested for unknown course '{code}'");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
        Err(e) => fail(&e),
    }
}
