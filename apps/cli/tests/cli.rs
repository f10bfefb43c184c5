use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

const MARKDOWN_FILE: &str = "github_discussion_analysis.md";
const JSON_FILE: &str = "analysis_data.json";
const TOPICS: [&str; 3] = ["Valdi", "React 19", "n8n"];

/// Command running in `dir` with an isolated HOME so no user config leaks in.
fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ghdiscuss").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("GHDISCUSS_REPORT_DATE")
        .env_remove("RUST_LOG");
    cmd
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read json")).expect("valid json")
}

#[test]
fn no_arguments_writes_both_files_in_working_dir() {
    let tmp = TempDir::new().unwrap();

    cmd(tmp.path())
        .assert()
        .success()
        .stdout(contains("# GitHub 토론 분석 리포트"))
        .stdout(contains("Report generated!"));

    assert!(tmp.path().join(MARKDOWN_FILE).is_file());
    assert!(tmp.path().join(JSON_FILE).is_file());
}

#[test]
fn json_is_byte_identical_across_runs() {
    let tmp = TempDir::new().unwrap();
    let json_path = tmp.path().join(JSON_FILE);

    cmd(tmp.path()).args(["--quiet", "--date", "2026-10-19"]).assert().success();
    let first = fs::read(&json_path).unwrap();

    cmd(tmp.path()).args(["--quiet", "--date", "2026-10-19"]).assert().success();
    let second = fs::read(&json_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn every_json_topic_has_four_categories() {
    let tmp = TempDir::new().unwrap();
    cmd(tmp.path()).arg("--quiet").assert().success();

    let data = read_json(&tmp.path().join(JSON_FILE));
    for topic in data["topics"].as_array().unwrap() {
        let categories = topic["categories"].as_object().unwrap();
        let mut keys: Vec<&str> = categories.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["architecture", "data_flow", "documentation", "problem_definition"]);
        assert!(categories.values().all(|c| !c.as_array().unwrap().is_empty()));
    }
}

#[test]
fn outputs_reference_exactly_the_fixed_topics() {
    let tmp = TempDir::new().unwrap();
    cmd(tmp.path()).arg("--quiet").assert().success();

    let data = read_json(&tmp.path().join(JSON_FILE));
    let names: Vec<&str> = data["topics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, TOPICS);

    let markdown = fs::read_to_string(tmp.path().join(MARKDOWN_FILE)).unwrap();
    let headings: Vec<&str> = markdown.lines().filter(|l| l.starts_with("## ")).collect();
    assert_eq!(headings.len(), TOPICS.len());
    for (heading, name) in headings.iter().zip(TOPICS) {
        assert!(heading.ends_with(name), "{heading} should name {name}");
    }
    assert!(markdown.contains("> 분석 대상: Valdi, React 19, n8n\n"));
}

#[test]
fn date_flag_and_env_pin_report_date() {
    let tmp = TempDir::new().unwrap();

    cmd(tmp.path()).args(["--quiet", "--date", "2025-11-03"]).assert().success();
    let data = read_json(&tmp.path().join(JSON_FILE));
    assert_eq!(data["report_date"], "2025년 11월 03일");

    cmd(tmp.path())
        .arg("--quiet")
        .env("GHDISCUSS_REPORT_DATE", "2024-02-29")
        .assert()
        .success();
    let data = read_json(&tmp.path().join(JSON_FILE));
    assert_eq!(data["report_date"], "2024년 02월 29일");
}

#[test]
fn quiet_suppresses_report_echo() {
    let tmp = TempDir::new().unwrap();
    cmd(tmp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(contains("Report generated!"))
        .stdout(contains("### #문제정의").not());
}

#[test]
fn out_dir_flag_redirects_output() {
    let tmp = TempDir::new().unwrap();
    cmd(tmp.path()).args(["--quiet", "--out-dir", "reports"]).assert().success();

    assert!(tmp.path().join("reports").join(MARKDOWN_FILE).is_file());
    assert!(tmp.path().join("reports").join(JSON_FILE).is_file());
    assert!(!tmp.path().join(JSON_FILE).exists());
}

#[test]
fn local_config_file_is_honored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("ghdiscuss.toml"),
        r#"
[output]
json_file = "data.json"

[report]
title = "Weekly Digest"
date_format = "%Y-%m-%d"
echo_markdown = false
"#,
    )
    .unwrap();

    cmd(tmp.path())
        .args(["--date", "2026-01-05"])
        .assert()
        .success()
        .stdout(contains("# Weekly Digest").not());

    let data = read_json(&tmp.path().join("data.json"));
    assert_eq!(data["title"], "Weekly Digest");
    assert_eq!(data["report_date"], "2026-01-05");

    let markdown = fs::read_to_string(tmp.path().join(MARKDOWN_FILE)).unwrap();
    assert!(markdown.starts_with("# Weekly Digest\n"));
}

#[test]
fn invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("ghdiscuss.toml"),
        "[output]\nmarkdown_file = \"same\"\njson_file = \"same\"\n",
    )
    .unwrap();

    cmd(tmp.path())
        .assert()
        .failure()
        .stderr(contains("must differ"));
    assert!(!tmp.path().join("same").exists());
}

#[test]
fn unwritable_output_dir_exits_nonzero() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("blocker"), "not a directory").unwrap();

    cmd(tmp.path())
        .args(["--quiet", "--out-dir", "blocker"])
        .assert()
        .failure()
        .stderr(contains("blocker"));
}

#[test]
fn missing_explicit_config_fails() {
    let tmp = TempDir::new().unwrap();
    cmd(tmp.path())
        .args(["--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(contains("config file not found"));
}

#[test]
fn time_of_day_date_format_is_a_config_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("ghdiscuss.toml"),
        "[report]\ndate_format = \"%Y-%m-%d %H:%M\"\n",
    )
    .unwrap();

    cmd(tmp.path())
        .args(["--quiet", "--date", "2026-03-07"])
        .assert()
        .failure()
        .stderr(contains("date_format"))
        .stderr(contains("panicked").not());

    assert!(!tmp.path().join(JSON_FILE).exists());
    assert!(!tmp.path().join(MARKDOWN_FILE).exists());
}
