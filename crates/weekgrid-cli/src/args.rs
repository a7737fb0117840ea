//! Command-line argument definitions for the Weekgrid CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, semester filtering and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Weekgrid timetable tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input schedule file
    #[arg(help = "Path to the input schedule file")]
    pub input: String,

    /// Path to the output timetable file
    #[arg(short, long, default_value = "out.txt")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Only keep sessions from this semester, e.g. SM1
    #[arg(short, long)]
    pub semester: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
