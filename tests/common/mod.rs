#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn daystory_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daystory").unwrap();
    cmd.env_remove("DAYSTORY_ROOT");
    cmd.env_remove("DAYSTORY_LOG");
    cmd
}

/// Run `write` in `dir` and return the printed entry id.
pub fn write_entry(dir: &Path, args: &[&str]) -> String {
    let output = daystory_cmd()
        .current_dir(dir)
        .arg("write")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "write failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .split_whitespace()
        .nth(2)
        .expect("entry id in output")
        .to_string()
}
