use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use weekgrid::WeekgridError;
use weekgrid_cli::{Args, run};
use weekgrid_parser::error::ErrorCode;

/// Demos live at the workspace root, not in the crate
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .sched files from a directory
fn collect_sched_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("sched")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        semester: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let valid_demos = collect_sched_files(demos_dir());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!("{}.txt", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        match run(&args_for(demo_path, &output_path)) {
            Ok(()) => {
                let text = fs::read_to_string(&output_path).expect("Output was not written");
                assert!(text.starts_with("Week "), "Unexpected output for {}", demo_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

/// Diagnostic codes each error demo must be rejected with, in report order
fn expected_codes(demo_name: &str) -> Option<Vec<ErrorCode>> {
    let codes = match demo_name {
        "hour_out_of_range" => vec![ErrorCode::E201],
        "inverted_interval" => vec![ErrorCode::E202],
        "malformed_row" => vec![ErrorCode::E101, ErrorCode::E100],
        "unknown_weekday" => vec![ErrorCode::E200],
        "zero_length" => vec![ErrorCode::E202],
        _ => return None,
    };
    Some(codes)
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let error_demos = collect_sched_files(demos_dir().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut mismatches = Vec::new();

    for demo_path in &error_demos {
        let demo_name = demo_path.file_stem().unwrap().to_string_lossy().to_string();
        let output_path = temp_dir.path().join(format!("error_{demo_name}.txt"));

        let expected = expected_codes(&demo_name)
            .unwrap_or_else(|| panic!("No expected codes listed for {}", demo_path.display()));

        let actual: Option<Vec<ErrorCode>> = match run(&args_for(demo_path, &output_path)) {
            Err(WeekgridError::Parse { err, .. }) => Some(
                err.diagnostics()
                    .iter()
                    .filter_map(|diag| diag.code())
                    .collect(),
            ),
            _ => None,
        };

        if actual.as_ref() != Some(&expected) {
            mismatches.push((demo_path.clone(), expected, actual));
        }
        assert!(
            !output_path.exists(),
            "Output written for failing demo {}",
            demo_path.display()
        );
    }

    if !mismatches.is_empty() {
        eprintln!("\nError demos rejected differently than expected:");
        for (path, expected, actual) in &mismatches {
            eprintln!("  - {}: expected {expected:?}, got {actual:?}", path.display());
        }
        panic!("{} error demo(s) misreported", mismatches.len());
    }

    println!("✅ All {} error demos failed as expected", error_demos.len());
}

#[test]
fn e2e_semester_flag_filters_sessions() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("both_semesters.sched");
    let output = temp_dir.path().join("sm1.txt");

    let args = Args {
        semester: Some("sm1".to_string()),
        ..args_for(&input, &output)
    };
    run(&args).expect("Failed to run with semester filter");

    let text = fs::read_to_string(&output).expect("Output was not written");
    assert!(text.starts_with("Week 9:00-14:00, 4 sessions"));
    assert!(!text.contains("COMP10002"));
    assert!(text.contains("Wednesday (3 columns)"));
}

#[test]
fn e2e_explicit_config_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[parse]\nsemester = \"SM2\"\n").expect("Failed to write config");

    let input = demos_dir().join("both_semesters.sched");
    let output = temp_dir.path().join("sm2.txt");

    let args = Args {
        config: Some(config_path.to_string_lossy().to_string()),
        ..args_for(&input, &output)
    };
    run(&args).expect("Failed to run with config");

    let text = fs::read_to_string(&output).expect("Output was not written");
    assert!(text.starts_with("Week 9:00-10:30, 2 sessions"));
    assert!(text.contains("Monday (2 columns)"));
}
