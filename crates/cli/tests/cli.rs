//! End-to-end tests for the `file` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn file_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_file"))
}

#[test]
fn regular_file_is_data_file() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a");
    fs::write(&a, "").unwrap();

    file_cmd()
        .arg(&a)
        .assert()
        .success()
        .stdout(format!("{}: data file\n", a.display()));
}

#[test]
fn ignore_magic_reports_regular_file() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a");
    fs::write(&a, "hello").unwrap();

    file_cmd()
        .arg("-i")
        .arg(&a)
        .assert()
        .success()
        .stdout(format!("{}: regular file\n", a.display()));
}

#[test]
fn no_arguments_prints_usage() {
    file_cmd()
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("usage:"));
}

#[test]
fn flags_without_paths_print_usage() {
    file_cmd()
        .args(["-h", "-i"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("usage:\tfile [-hi] ..."));
}

#[test]
fn unknown_flag_prints_usage() {
    file_cmd()
        .args(["-z", "Cargo.toml"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("usage:"));
}

#[test]
fn long_help_is_not_a_flag() {
    file_cmd()
        .arg("--help")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("usage:"));
}

#[test]
fn missing_file_cannot_open_but_succeeds() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    file_cmd()
        .arg(&missing)
        .assert()
        .success()
        .stdout(format!("{}: cannot open\n", missing.display()));
}

#[cfg(unix)]
#[test]
fn follow_flag_reports_target_type() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a");
    fs::write(&a, "").unwrap();
    let b = temp.path().join("b");
    std::os::unix::fs::symlink(&a, &b).unwrap();

    file_cmd()
        .arg("-h")
        .arg(&b)
        .assert()
        .success()
        .stdout(format!("{}: data file\n", b.display()));

    file_cmd()
        .arg(&b)
        .assert()
        .success()
        .stdout(format!("{}: symbolic link to {}\n", b.display(), a.display()));
}

#[cfg(unix)]
#[test]
fn dangling_link_with_follow_reports_link() {
    let temp = TempDir::new().unwrap();
    let link = temp.path().join("dangling");
    std::os::unix::fs::symlink("missing-target", &link).unwrap();

    file_cmd()
        .arg("-h")
        .arg(&link)
        .assert()
        .success()
        .stdout(format!("{}: symbolic link to missing-target\n", link.display()));
}

#[test]
fn inert_flags_are_accepted() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a");
    fs::write(&a, "").unwrap();

    file_cmd()
        .args(["-d", "-m", "magic", "-M", "magic"])
        .arg(&a)
        .assert()
        .success()
        .stdout(format!("{}: data file\n", a.display()));
}

#[test]
fn output_follows_argument_order() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a");
    fs::write(&a, "").unwrap();
    let missing = temp.path().join("zzz");

    let expected = format!(
        "{}: cannot open\n{}: regular file\n{}: directory\n",
        missing.display(),
        a.display(),
        temp.path().display()
    );

    file_cmd()
        .arg("-hi")
        .arg(&missing)
        .arg(&a)
        .arg(temp.path())
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn double_dash_ends_options() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("-i"), "").unwrap();

    file_cmd()
        .current_dir(temp.path())
        .args(["--", "-i"])
        .assert()
        .success()
        .stdout("-i: data file\n");
}

#[cfg(unix)]
#[test]
fn dev_null_is_character_special() {
    file_cmd()
        .arg("/dev/null")
        .assert()
        .success()
        .stdout("/dev/null: character special\n");
}

#[test]
fn debug_logging_stays_on_stderr() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");

    file_cmd()
        .env("RUST_LOG", "debug")
        .arg(&missing)
        .assert()
        .success()
        .stdout(format!("{}: cannot open\n", missing.display()))
        .stderr(predicate::str::contains("lookup failed"));
}

#[test]
fn options_after_first_path_are_classified() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a"), "").unwrap();

    file_cmd()
        .current_dir(temp.path())
        .args(["a", "-x"])
        .assert()
        .success()
        .stdout("a: data file\n-x: cannot open\n");
}

#[test]
fn magic_flag_value_may_look_like_an_option() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a"), "").unwrap();

    file_cmd()
        .current_dir(temp.path())
        .args(["-m", "-h", "a"])
        .assert()
        .success()
        .stdout("a: data file\n");
}
