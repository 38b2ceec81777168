//! CLI command handlers for `CourseBuddy`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod advice;
pub mod catalog;
pub mod config;
pub mod feedback;
pub mod schedule;

use course_buddy::config::Config;
use course_buddy::core::models::Catalog;
use course_buddy::{error, verbose, Error};

/// Log a fatal error, print it, and exit with status 1
pub fn fail(e: &Error) -> ! {
    error!("{e}");
    eprintln!("✗ {e}");
    std::process::exit(1);
}

/// Load the configured catalog, or the built-in one when none is set
pub fn load_catalog(config: &Config) -> Catalog {
    let catalog = if config.paths.catalog_file.is_empty() {
        Catalog::builtin()
    } else {
        Catalog::from_file(&config.paths.catalog_file).unwrap_or_else(|e| fail(&e))
    };

    for (course, prereq) in catalog.dangling_prerequisites() {
        verbose!("{course} lists prerequisite {prereq}, which is not in the catalog");
    }
    catalog
}
