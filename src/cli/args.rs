//! CLI argument definitions for `CourseBuddy`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_buddy::config::ConfigOverrides;
use course_buddy::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to
/// `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (e.g., `level`, `feedback_file`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Restore one configuration value to its default.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show catalog details and past student feedback for a course.
    Advice {
        /// Course code, e.g. CPS352 (case-insensitive)
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Leave feedback about a course for future students.
    ///
    /// Missing fields are prompted for on standard input.
    Feedback {
        /// Course code, e.g. CPS352 (case-insensitive)
        #[arg(value_name = "CODE")]
        code: String,

        /// Assignments or exams you found difficult
        #[arg(long, value_name = "TEXT")]
        problems: Option<String>,

        /// Course(s) you would recommend taking first
        #[arg(long = "recommended-prereq", value_name = "TEXT")]
        recommended_prereq: Option<String>,
    },
    /// Build a recommended class schedule and export it.
    ///
    /// Completed courses come from `--taken` or, when omitted, from the
    /// `taken_classes` list in the feedback file.
    Schedule {
        /// Completed course codes, comma-separated (e.g. "CPS100,CPS210")
        #[arg(long, value_name = "CODES")]
        taken: Option<String>,

        /// Student name for the report title
        #[arg(long, value_name = "NAME")]
        student: Option<String>,

        /// Report format: csv, html, markdown (md), or pdf. Repeatable.
        #[arg(short, long = "format", value_name = "FORMAT")]
        formats: Vec<String>,

        /// Output directory (defaults to config `reports_dir`)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },
    /// List catalog courses.
    Catalog {
        /// Only list courses whose prerequisites are satisfied
        #[arg(long)]
        eligible: bool,

        /// Completed course codes, comma-separated
        #[arg(long, value_name = "CODES")]
        taken: Option<String>,
    },
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "coursebuddy",
    about = "CourseBuddy: course advice, prerequisite checks, and schedule reports",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Feedback store JSON file
    #[arg(long = "feedback-file", value_name = "PATH")]
    pub feedback_file: Option<PathBuf>,

    /// Catalog TOML file (built-in catalog when unset)
    #[arg(long = "catalog-file", value_name = "PATH")]
    pub catalog_file: Option<PathBuf>,

    /// Default directory for schedule reports
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Command used to print HTML to PDF (Chrome/Chromium)
    #[arg(long = "pdf-converter", value_name = "CMD")]
    pub pdf_converter: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            feedback_file: path_string(self.feedback_file.as_ref()),
            catalog_file: path_string(self.catalog_file.as_ref()),
            reports_dir: path_string(self.reports_dir.as_ref()),
            pdf_converter: self.pdf_converter.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = Cli::parse_from(["coursebuddy", "advice", "CPS310"]);

        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.feedback_file.is_none());
        assert!(overrides.catalog_file.is_none());
        assert!(overrides.reports_dir.is_none());
        assert!(overrides.pdf_converter.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli::parse_from([
            "coursebuddy",
            "--config-level",
            "debug",
            "--config-log-file",
            "/tmp/test.log",
            "--config-verbose",
            "yes",
            "--feedback-file",
            "/data/feedback.json",
            "--reports-dir",
            "/out",
            "--pdf-converter",
            "chromium",
            "catalog",
        ]);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.feedback_file, Some("/data/feedback.json".to_string()));
        assert!(overrides.catalog_file.is_none());
        assert_eq!(overrides.reports_dir, Some("/out".to_string()));
        assert_eq!(overrides.pdf_converter, Some("chromium".to_string()));
    }

    #[test]
    fn test_schedule_repeatable_format() {
        let cli = Cli::parse_from([
            "coursebuddy",
            "schedule",
            "--taken",
            "CPS100,CPS210",
            "-f",
            "csv",
            "--format",
            "pdf",
            "-o",
            "out",
        ]);

        match cli.command {
            Command::Schedule {
                taken,
                student,
                formats,
                output_dir,
            } => {
                assert_eq!(taken.as_deref(), Some("CPS100,CPS210"));
                assert!(student.is_none());
                assert_eq!(formats, vec!["csv", "pdf"]);
                assert_eq!(output_dir, Some(PathBuf::from("out")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_feedback_flags() {
        let cli = Cli::parse_from([
            "coursebuddy",
            "feedback",
            "cps352",
            "--problems",
            "Design patterns exam",
        ]);

        match cli.command {
            Command::Feedback {
                code,
                problems,
                recommended_prereq,
            } => {
                assert_eq!(code, "cps352");
                assert_eq!(problems.as_deref(), Some("Design patterns exam"));
                assert!(recommended_prereq.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
