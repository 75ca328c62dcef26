//! Integration tests for open, show and list commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;

mod common;
use common::{init_journal, lifereview_cmd, write_daily};

#[test]
fn test_open_creates_daily_template() {
    let temp = init_journal();

    lifereview_cmd()
        .current_dir(temp.path())
        .args(["open", "daily", "--date", "2025-01-17", "--no-edit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("daily/2025-01-17.md"));

    let content = fs::read_to_string(temp.path().join("daily/2025-01-17.md")).unwrap();
    assert!(content.starts_with("# Daily Review"));
    assert!(content.contains("**Date:** 2025-01-17"));
    assert!(content.contains("## One Meaningful Win"));
    assert!(content.contains("- [ ] Needs action"));
}

#[test]
fn test_open_creates_weekly_template() {
    let temp = init_journal();

    lifereview_cmd()
        .current_dir(temp.path())
        .args(["open", "weekly", "--date", "2025-01-16", "--no-edit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weekly/2025-W03.md"));

    let content = fs::read_to_string(temp.path().join("weekly/2025-W03.md")).unwrap();
    assert!(content.contains("**Week of:** 2025-01-13"));
    assert!(content.contains("**Week number:** 3"));
}

#[test]
fn test_open_keeps_existing_review() {
    let temp = init_journal();
    fs::write(temp.path().join("daily/2025-01-17.md"), "# Mine").unwrap();

    lifereview_cmd()
        .current_dir(temp.path())
        .args(["open", "--date", "2025-01-17", "--no-edit"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("daily/2025-01-17.md")).unwrap();
    assert_eq!(content, "# Mine");
}

#[test]
fn test_open_invalid_date_exits_with_code_3() {
    let temp = init_journal();

    lifereview_cmd()
        .current_dir(temp.path())
        .args(["open", "daily", "--date", "2025-02-30", "--no-edit"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_open_unknown_kind_fails() {
    let temp = init_journal();

    lifereview_cmd()
        .current_dir(temp.path())
        .args(["open", "monthly", "--no-edit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid review kind"));
}

#[test]
fn test_show_daily_review() {
    let temp = init_journal();
    write_daily(temp.path(), "2025-01-17", Some(6), &[("Career", 8)]);

    lifereview_cmd()
        .current_dir(temp.path())
        .args(["show", "daily", "2025-01-17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Date: 2025-01-17"))
        .stdout(predicate::str::contains("Energy: 6/10"))
        .stdout(predicate::str::contains("Career"));
}

#[test]
fn test_show_daily_review_as_json() {
    let temp = init_journal();
    write_daily(temp.path(), "2025-01-17", Some(6), &[("Career", 8)]);

    let output = lifereview_cmd()
        .current_dir(temp.path())
        .args(["show", "daily", "2025-01-17", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["date"], "2025-01-17");
    assert_eq!(json["energy_level"], 6);
    assert_eq!(json["domain_ratings"]["career"], 8);
    assert_eq!(json["domain_ratings"]["fun"], 0);
    assert_eq!(json["file_path"], "daily/2025-01-17.md");
    assert!(json.get("notes").is_none());
}

#[test]
fn test_show_missing_review_exits_with_code_4() {
    let temp = init_journal();

    lifereview_cmd()
        .current_dir(temp.path())
        .args(["show", "daily", "2025-01-17"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("lifereview list"));
}

#[test]
fn test_list_newest_first_with_range() {
    let temp = init_journal();
    for date in ["2025-01-15", "2025-01-16", "2025-01-17"] {
        write_daily(temp.path(), date, None, &[]);
    }
    fs::write(temp.path().join("daily/ideas.md"), "not a review").unwrap();

    let output = lifereview_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "2025-01-17  daily/2025-01-17.md",
            "2025-01-16  daily/2025-01-16.md",
            "2025-01-15  daily/2025-01-15.md",
        ]
    );

    lifereview_cmd()
        .current_dir(temp.path())
        .args(["list", "--from", "2025-01-16", "--to", "2025-01-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-16"))
        .stdout(predicate::str::contains("2025-01-17").not())
        .stdout(predicate::str::contains("2025-01-15").not());
}

#[test]
fn test_list_weekly() {
    let temp = init_journal();
    fs::write(temp.path().join("weekly/2025-W03.md"), "").unwrap();

    lifereview_cmd()
        .current_dir(temp.path())
        .args(["list", "--weekly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-13  weekly/2025-W03.md"));
}

#[test]
fn test_list_bad_date_exits_with_code_3() {
    let temp = init_journal();

    lifereview_cmd()
        .current_dir(temp.path())
        .args(["list", "--from", "yesterday"])
        .assert()
        .failure()
        .code(3);
}
