#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn roster_cmd() -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env_remove("ROSTER_ROOT");
    cmd
}

/// Run `roster <args>` inside `dir` and require success.
pub fn roster_ok(dir: &Path, args: &[&str]) {
    roster_cmd().current_dir(dir).args(args).assert().success();
}

pub fn add_student(dir: &Path, name: &str, age: &str) {
    roster_ok(
        dir,
        &[
            "student",
            "add",
            "--name",
            name,
            "--age",
            age,
            "--contact",
            "555",
            "--email",
            "someone@x.com",
        ],
    );
}
