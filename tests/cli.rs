// End-to-end tests running the dataprobe binary inside a scratch directory.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Create a scratch directory holding `input.txt`.
fn workdir(contents: &str) -> TempDir {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("input.txt"), contents).unwrap();
    temp
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dataprobe"))
        .args(args)
        .current_dir(dir)
        .env_remove("DATAPROBE_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

/// Split a report into its body and the trailing elapsed-time line.
fn split_elapsed(text: &str) -> (&str, &str) {
    let start = text.rfind("Time Elapsed: ").unwrap();
    let (body, elapsed) = text.split_at(start);
    assert!(elapsed.trim_end().ends_with(" seconds"), "bad elapsed line: {:?}", elapsed);
    (body, elapsed)
}

#[test]
fn convert_writes_default_results_file() {
    let temp = workdir("5\nfive\n-5\n");
    let output = run(temp.path(), &["convert", "input.txt"]);
    assert!(output.status.success());

    let expected = "Results:\n\
        1 Decimal: 5, Binary: 00000101, Hexadecimal: 05\n\
        2 Decimal: -5, Binary: 11111011, Hexadecimal: FB\n";
    let written = fs::read_to_string(temp.path().join("ConvertionResults.txt")).unwrap();
    assert_eq!(written, expected);

    let printed = stdout(&output);
    let (body, _) = split_elapsed(&printed);
    assert_eq!(body, expected);

    let warnings = String::from_utf8(output.stderr).unwrap();
    assert!(warnings.contains("five is not a number and will not be taken into account"));
}

#[test]
fn convert_legacy_hex_and_output_override() {
    let temp = workdir("127\n-128\n");
    let output = run(temp.path(), &["convert", "--legacy-hex", "-o", "out.txt", "input.txt"]);
    assert!(output.status.success());
    assert!(!temp.path().join("ConvertionResults.txt").exists());

    let expected = "Results:\n\
        1 Decimal: 127, Binary: 000001111111, Hexadecimal: 07F\n\
        2 Decimal: -128, Binary: 111110000000, Hexadecimal: FFFFFFFF80\n";
    assert_eq!(fs::read_to_string(temp.path().join("out.txt")).unwrap(), expected);
}

#[test]
fn stats_results_file_ends_with_elapsed_time() {
    let temp = workdir("1\n2\n2\n3\nx\n");
    let output = run(temp.path(), &["stats", "input.txt"]);
    assert!(output.status.success());

    let expected = "Count: 4\n\
        Mean: 2.0\n\
        Median: 2.0\n\
        Mode: [2.0]\n\
        Standard Deviation: 0.7071067811865476\n\
        Variance: 0.5\n";
    let written = fs::read_to_string(temp.path().join("StatisticsResults.txt")).unwrap();
    let (body, elapsed) = split_elapsed(&written);
    assert_eq!(body, expected);
    assert!(elapsed.ends_with(" seconds\n"));

    let printed = stdout(&output);
    assert_eq!(split_elapsed(&printed).0, expected);
}

#[test]
fn wordcount_alias_and_output_override() {
    let temp = workdir("the\ncat\nthe\n");
    let output = run(temp.path(), &["wc", "--output", "words.txt", "input.txt"]);
    assert!(output.status.success());

    let expected = "Results:\n1 Word: the, Occurrences: 2\n2 Word: cat, Occurrences: 1\n";
    assert_eq!(fs::read_to_string(temp.path().join("words.txt")).unwrap(), expected);
}

#[test]
fn missing_input_exits_with_error() {
    let temp = tempfile::tempdir().unwrap();
    let output = run(temp.path(), &["stats", "missing.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Error: "));
    assert!(!temp.path().join("StatisticsResults.txt").exists());
}

#[test]
fn stats_without_numbers_exits_with_error() {
    let temp = workdir("a\nb\n");
    let output = run(temp.path(), &["stats", "input.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Error: No numeric data to compute statistics from\n");
}

#[test]
fn no_subcommand_is_not_an_error() {
    let temp = tempfile::tempdir().unwrap();
    let output = run(temp.path(), &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No subcommand was used\n");
}
