#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn lifereview_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lifereview").unwrap();
    cmd.env_remove("LIFEREVIEW_ROOT");
    cmd.env_remove("LIFEREVIEW_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// A fresh, initialized journal in a temp directory
pub fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    lifereview_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();
    temp
}

/// Minimal daily review with optional energy and domain ratings
pub fn write_daily(root: &Path, date: &str, energy: Option<u8>, ratings: &[(&str, u8)]) {
    let mut text = format!(
        "# Daily Review\n\n**Date:** {}\n\n---\n\n## Energy Check\n\n",
        date
    );
    match energy {
        Some(level) => text.push_str(&format!("**Energy level (1-10):** {}\n\n---\n\n", level)),
        None => text.push_str("**Energy level (1-10):**\n\n---\n\n"),
    }
    if !ratings.is_empty() {
        text.push_str("## Life Map Ratings\n\n");
        for (domain, value) in ratings {
            text.push_str(&format!("{}: {}\n", domain, value));
        }
    }
    fs::write(root.join("daily").join(format!("{}.md", date)), text).unwrap();
}
