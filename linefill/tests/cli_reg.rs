//! Command line regression test
//!
//! Runs the `linefill` binary on a template written to the temp directory
//! and checks its output files, its stdout and its log lines.

use linefill::io::{read_template, write_template};
use linefill::{PixelBuffer, Rgba};
use linefill_test::RegParams;
use linefill_test::fixtures;
use std::path::PathBuf;
use std::process::{Command, Output};

fn temp_path(name: &str, ext: &str) -> PathBuf {
    std::env::temp_dir().join(format!("linefill_cli_{}_{}.{}", std::process::id(), name, ext))
}

fn linefill(args: &[&str], log_filter: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_linefill"))
        .args(args)
        .env("RUST_LOG", log_filter)
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

fn write_box(name: &str) -> (PixelBuffer, PathBuf) {
    let template = fixtures::outlined_box(20, 12, 4, 2, 15, 9);
    let path = temp_path(name, "png");
    write_template(&template, &path).unwrap();
    (template, path)
}

#[test]
fn cli_reg() {
    let mut rp = RegParams::new("cli");
    let (_, template) = write_box("fill_in");
    let output = temp_path("fill_out", "png");

    let out = linefill(
        &[
            "fill",
            "-t",
            template.to_str().unwrap(),
            "-x",
            "7",
            "-y",
            "5",
            "-c",
            "#ff0000",
            "-o",
            output.to_str().unwrap(),
        ],
        "linefill=info",
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Filled 60 pixels"));
    assert!(stdout.contains("loaded template"));
    assert!(stdout.contains("fill written"));

    let filled = read_template(&output).unwrap();
    rp.compare_values(
        60.0,
        filled.count_color(Rgba::new(255, 0, 0, 255)) as f64,
        0.0,
    );
    rp.compare_values(144.0, filled.count_color(fixtures::PAPER) as f64, 0.0);

    let _ = std::fs::remove_file(&template);
    let _ = std::fs::remove_file(&output);
    assert!(rp.cleanup());
}

#[test]
fn test_default_filter_hides_info_logs() {
    let (_, template) = write_box("quiet_in");
    let output = temp_path("quiet_out", "png");

    let out = linefill(
        &[
            "fill",
            "-t",
            template.to_str().unwrap(),
            "-x",
            "0",
            "-y",
            "0",
            "-c",
            "#00ff00",
            "-o",
            output.to_str().unwrap(),
        ],
        "linefill=warn",
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Filled 144 pixels"));
    assert!(!stdout.contains("fill written"));

    let _ = std::fs::remove_file(&template);
    let _ = std::fs::remove_file(&output);
}

#[test]
fn test_replay_command_logs_and_writes() {
    let (_, template) = write_box("replay_in");
    let record = temp_path("replay_record", "json");
    let output = temp_path("replay_out", "png");
    std::fs::write(
        &record,
        r#"{"image":"box.png","species":"cat","gender":"man","fill":[{"region":"hair","coords-norm":[[0,0]]}]}"#,
    )
    .unwrap();

    let out = linefill(
        &[
            "replay",
            "-t",
            template.to_str().unwrap(),
            "-r",
            record.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ],
        "linefill=info",
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Replayed 1 fills"));
    assert!(stdout.contains("replay written"));

    let replayed = read_template(&output).unwrap();
    assert_eq!(replayed.count_color(Rgba::new(228, 36, 38, 255)), 144);

    let _ = std::fs::remove_file(&template);
    let _ = std::fs::remove_file(&record);
    let _ = std::fs::remove_file(&output);
}

#[test]
fn test_transform_command() {
    let out = linefill(&["transform", "-c", "#ff0000", "-m", "complement"], "linefill=warn");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "#00ffff");
}

#[test]
fn test_bad_color_fails() {
    let out = linefill(&["transform", "-c", "red"], "linefill=warn");
    assert!(!out.status.success());
}
