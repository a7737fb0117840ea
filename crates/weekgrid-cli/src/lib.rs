//! CLI logic for the Weekgrid timetable tool.
//!
//! This module contains the core CLI logic for the Weekgrid timetable tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use weekgrid::{TimetableBuilder, WeekgridError};

/// Run the Weekgrid CLI application
///
/// This function reads the schedule file, lays out every weekday and writes
/// the resulting timetable listing to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `WeekgridError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), WeekgridError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing schedule"
    );

    // Load configuration, letting the command line override the semester
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(semester) = &args.semester {
        app_config = app_config.with_semester(semester);
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = TimetableBuilder::new(app_config);
    let sessions = builder.parse(&source)?;
    let layout = builder.layout(sessions);
    let text = builder.render_text(&layout)?;

    fs::write(&args.output, text)?;

    info!(output_file = args.output; "Timetable exported successfully");

    Ok(())
}
