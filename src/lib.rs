//! `CourseBuddy` library
//!
//! Prerequisite checking, next-course recommendations, per-course student
//! feedback, and schedule reports. The `coursebuddy` binary is a thin clap
//! front end over these modules.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::error::{Error, Result};
pub use crate::core::get_version;
