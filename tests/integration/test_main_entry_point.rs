// main.rs とエントリーポイントのテスト

use assert_cmd::Command;
use crate::fixtures::*;
use pretty_assertions::assert_eq;

fn compare() -> Command {
    Command::cargo_bin("compare").expect("compare binary is built")
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_cli_help() {
    let output = compare().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("compare"));
    assert!(stdout.contains("--threshold"));
    assert!(stdout.contains("REFERENCE_FILE"));
}

#[test]
fn test_cli_version() {
    let output = compare().arg("--version").output().unwrap();

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("compare"));
}

#[test]
fn test_cli_sort_and_search_report() {
    let files = BenchFiles::sort_and_search();

    let output = compare()
        .arg(&files.reference)
        .arg(&files.result)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "SLOWER\n\
         Name Mean_ref Mean_res Speedup_rel\n\
         \n\
         FASTER\n\
         Name Mean_ref Mean_res Speedup_rel\n\
         sort     10.0      7.0         0.3\n"
    );
    assert!(stderr_of(&output).is_empty());
}

#[test]
fn test_cli_nanosecond_means_are_not_rounded_away() {
    let files = BenchFiles::new(
        "Name,Mean\nrandom/Word64,2.1e-8\nrandom/Int,4.0e-9\n",
        "Name,Mean\nrandom/Word64,1.2e-8\nrandom/Int,6.5e-9\n",
    );

    let output = compare()
        .arg(&files.reference)
        .arg(&files.result)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "SLOWER\n\
         \x20     Name Mean_ref Mean_res Speedup_rel\n\
         random/Int  4.0e-09  6.5e-09      -0.625\n\
         \n\
         FASTER\n\
         \x20        Name Mean_ref Mean_res Speedup_rel\n\
         random/Word64  2.1e-08  1.2e-08    0.428571\n"
    );
}

#[test]
fn test_cli_no_common_benchmarks_succeeds() {
    let files = BenchFiles::new("Name,Mean\na,1.0\n", "Name,Mean\nb,2.0\n");

    let output = compare()
        .arg(&files.reference)
        .arg(&files.result)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "SLOWER\nName Mean_ref Mean_res Speedup_rel\n\nFASTER\nName Mean_ref Mean_res Speedup_rel\n"
    );
}

#[test]
fn test_cli_missing_argument_exits_with_usage_error() {
    let files = BenchFiles::sort_and_search();

    let output = compare().arg(&files.reference).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("RESULTS_FILE"));
}

#[test]
fn test_cli_no_arguments_exits_with_usage_error() {
    let output = compare().output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_unreadable_file_exits_nonzero() {
    let files = BenchFiles::sort_and_search();
    let missing = files.dir().join("does_not_exist.csv");

    let output = compare()
        .arg(&files.reference)
        .arg(&missing)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("parse error"));
    assert!(stderr.contains("does_not_exist.csv"));
}

#[test]
fn test_cli_missing_mean_column_exits_nonzero() {
    let files = BenchFiles::new("Name,Median\nsort,1.0\n", RESULT_CSV);

    let output = compare()
        .arg(&files.reference)
        .arg(&files.result)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("missing required column 'Mean'"));
}

#[test]
fn test_cli_duplicate_name_prints_nothing() {
    let files = BenchFiles::new(REFERENCE_CSV, "Name,Mean\nsort,7.0\nsearch,5.2\nsort,8.0\n");

    let output = compare()
        .arg(&files.reference)
        .arg(&files.result)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("duplicate benchmark name 'sort'"));
    assert!(stderr.contains("result dataset"));
}

#[test]
fn test_cli_invalid_threshold_exits_with_configuration_error() {
    let files = BenchFiles::sort_and_search();

    let output = compare()
        .arg(&files.reference)
        .arg(&files.result)
        .arg("--threshold=-1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("threshold"));
}

#[test]
fn test_cli_json_format() {
    let files = BenchFiles::sort_and_search();

    let output = compare()
        .arg(&files.reference)
        .arg(&files.result)
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["faster"][0]["name"], "sort");
    assert_eq!(value["slower"], serde_json::json!([]));
}

#[test]
fn test_cli_verbose_writes_diagnostics_to_stderr() {
    let files = BenchFiles::sort_and_search();

    let output = compare()
        .arg(&files.reference)
        .arg(&files.result)
        .arg("--verbose")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("loaded 2 reference benchmarks"));
    assert!(stderr.contains("joined 2 benchmarks (2 present in both runs)"));
    assert!(stderr.contains("1 faster"));
    assert!(stdout_of(&output).starts_with("SLOWER\n"));
}

#[test]
fn test_cli_output_is_idempotent() {
    let files = BenchFiles::new(
        &generated_csv(50, 100.0, |i| 1.0 + i as f64 / 50.0),
        &generated_csv(50, 100.0, |i| 1.5 - i as f64 / 100.0),
    );

    let run = || {
        compare()
            .arg(&files.reference)
            .arg(&files.result)
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
