//! Core advising logic shared by every front end

pub mod advice;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod feedback_store;
pub mod models;
pub mod recommend;
pub mod report;

/// Returns the current version of the `CourseBuddy` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
