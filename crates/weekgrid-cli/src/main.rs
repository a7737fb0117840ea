//! Entry point of the `weekgrid` binary.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use weekgrid_cli::{Args, error_adapter::to_reportables};

/// Falls back to `warn` when `--log-level` names no known level.
fn log_level(name: &str) -> LevelFilter {
    LevelFilter::from_str(name).unwrap_or_else(|_| {
        eprintln!("Unknown log level `{name}`, falling back to `warn`");
        LevelFilter::Warn
    })
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    let level = log_level(&args.log_level);

    // RUST_LOG still refines individual modules on top of --log-level
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();

    info!(log_level:? = level, input = args.input.as_str(); "Laying out timetable");
    debug!(args:?; "Parsed arguments");

    let Err(err) = weekgrid_cli::run(&args) else {
        info!(output = args.output.as_str(); "Timetable written");
        return;
    };

    // Each schedule diagnostic and each rejected session gets its own report
    let reporter = miette::GraphicalReportHandler::new();
    let reportables = to_reportables(&err);
    for reportable in &reportables {
        let mut report = String::new();
        reporter
            .render_report(&mut report, reportable)
            .expect("Writing to String buffer is infallible");

        error!("{report}");
    }

    error!(reports = reportables.len(); "Timetable was not written");
    process::exit(1);
}
