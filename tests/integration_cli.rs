//! Runs the binary end to end against the bundled sample config.

mod common;

use std::fs;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_swarm-forecast"))
        .args(args)
        .output()
        .expect("swarm-forecast process should run")
}

/// Data rows of the printed table: the lines between the dashed rule and
/// the first blank line.
fn table_rows(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .skip_while(|l| !l.starts_with("-----"))
        .skip(1)
        .take_while(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn sample_config_prints_forecast_table() {
    let output = run_cli(&["--config", common::SAMPLE_CONFIG]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Predicted"));
    let rows = table_rows(&stdout);
    assert_eq!(rows.len(), 10);
    for row in &rows {
        let cells: Vec<f64> = row
            .split_whitespace()
            .map(|c| c.parse().expect("table cell should be numeric"))
            .collect();
        assert_eq!(cells.len(), 2);
    }
    assert!(stdout.contains("Training MSE:"));
}

#[test]
fn seeded_cli_runs_match() {
    let a = run_cli(&["--config", common::SAMPLE_CONFIG]);
    let b = run_cli(&["--config", common::SAMPLE_CONFIG]);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn flags_override_config_and_export_csv() {
    let dir = std::env::temp_dir().join(format!("swarm-forecast-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir should be creatable");
    let forecast_path = dir.join("forecast.csv");
    let trace_path = dir.join("trace.csv");

    let output = run_cli(&[
        "--config",
        common::SAMPLE_CONFIG,
        "--horizon",
        "25",
        "--iterations",
        "5",
        "--forecast-out",
        forecast_path.to_str().unwrap_or_default(),
        "--trace-out",
        trace_path.to_str().unwrap_or_default(),
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let forecast_csv = fs::read_to_string(&forecast_path).expect("forecast CSV should exist");
    let lines: Vec<&str> = forecast_csv.lines().collect();
    assert_eq!(lines[0], "step,index,forecast,actual,abs_error");
    assert_eq!(lines.len(), 26);
    // Sample file has 80 values: steps 20.. run past the end of the series.
    assert!(lines[25].ends_with(",,"));

    let trace_csv = fs::read_to_string(&trace_path).expect("trace CSV should exist");
    assert_eq!(trace_csv.lines().count(), 1 + 5);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn data_flag_with_preset_runs() {
    let output = run_cli(&[
        "--preset",
        "quick",
        "--data",
        common::SAMPLE_CSV,
        "--train-len",
        "70",
        "--horizon",
        "10",
        "--seed",
        "5",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(table_rows(&stdout).len(), 10);
}

#[test]
fn zero_particles_fails_validation() {
    let output = run_cli(&["--config", common::SAMPLE_CONFIG, "--particles", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("swarm.particles"), "stderr: {stderr}");
}

#[test]
fn missing_data_path_fails_validation() {
    let output = run_cli(&["--preset", "default"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("data.path"), "stderr: {stderr}");
}

#[test]
fn unknown_flag_is_rejected() {
    let output = run_cli(&["--velocity-clamp", "2"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown argument"));
}
