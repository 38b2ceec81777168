//! Data models for `CourseBuddy`

pub mod catalog;
pub mod completion;
pub mod course;
pub mod feedback;

pub use catalog::Catalog;
pub use completion::CompletionSet;
pub use course::{normalize_code, CourseRecord};
pub use feedback::{FeedbackEntry, FeedbackStore, TakenClass};
