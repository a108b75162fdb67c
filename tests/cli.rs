use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn prints_count_and_elapsed_time() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("queens")?;
    cmd.arg("8");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Solution num = 92\n"))
        .stdout(predicate::str::contains("elapsed time = "));
    Ok(())
}

#[test]
fn zero_board_has_one_solution() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("queens")?;
    cmd.arg("0");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Solution num = 1\n"));
    Ok(())
}

#[test]
fn missing_size_prints_usage() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("queens")?;
    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("Usage: ./queens <queen size>"));
    Ok(())
}

#[test]
fn extra_arguments_print_usage() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("queens")?;
    cmd.args(["4", "5"]);
    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("<queen size>"));
    Ok(())
}

#[test]
fn malformed_size_prints_usage() -> Result<(), Box<dyn std::error::Error>> {
    for bad in ["eight", "-3", "4.5", "99999999999"] {
        let mut cmd = Command::cargo_bin("queens")?;
        cmd.arg(bad);
        cmd.assert()
            .code(2)
            .stdout(predicate::str::contains("Usage: ./queens <queen size>"));
    }
    Ok(())
}

#[test]
fn oversized_board_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("queens")?;
    cmd.arg("33");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("too large"));
    Ok(())
}

#[test]
fn verbose_logs_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("queens")?;
    cmd.env_remove("RUST_LOG");
    cmd.args(["--verbose", "5"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Solution num = 10\n"))
        .stderr(predicate::str::contains("5x5 board has 10 solutions"));
    Ok(())
}
