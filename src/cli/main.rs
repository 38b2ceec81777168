//! Command-line interface entry point for `CourseBuddy`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use course_buddy::config::Config;
use course_buddy::core::feedback_store::FeedbackRepository;
use course_buddy::info;
use course_buddy::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fall back to warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let repo = FeedbackRepository::new(&config.paths.feedback_file);

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Advice { code } => {
            commands::advice::run(&code, &commands::load_catalog(&config), &repo);
        }
        Command::Feedback {
            code,
            problems,
            recommended_prereq,
        } => commands::feedback::run(
            &code,
            problems,
            recommended_prereq,
            &commands::load_catalog(&config),
            &repo,
        ),
        Command::Schedule {
            taken,
            student,
            formats,
            output_dir,
        } => commands::schedule::run(
            &commands::schedule::ScheduleOptions {
                taken,
                student,
                formats,
                output_dir,
            },
            &commands::load_catalog(&config),
            &repo,
            &config,
        ),
        Command::Catalog { eligible, taken } => commands::catalog::run(
            eligible,
            taken.as_deref(),
            &commands::load_catalog(&config),
            &repo,
        ),
    }
}
