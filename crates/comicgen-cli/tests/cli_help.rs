use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("comicgen")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("example"))
        .stdout(predicate::str::contains("prompts"))
        .stdout(predicate::str::contains("refs"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_prompts_help_shows_subcommands() {
    cargo_bin_cmd!("comicgen")
        .args(["prompts", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_generate_help_shows_flags() {
    cargo_bin_cmd!("comicgen")
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--record"))
        .stdout(predicate::str::contains("--save"))
        .stdout(predicate::str::contains("--approve"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("comicgen")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0"));
}
