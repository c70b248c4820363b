//! Integration tests for the generate/save/list/show/delete flow.

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Returns the id of the single record saved under `<cwd>/saved_prompts`.
fn saved_record_id(cwd: &Path) -> String {
    let dir = cwd.join("saved_prompts");
    let mut ids: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            path.file_stem().unwrap().to_string_lossy().into_owned()
        })
        .collect();
    assert_eq!(ids.len(), 1, "expected exactly one saved record");
    ids.pop().unwrap()
}

#[test]
fn test_generate_prints_prompt_sections() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    cargo_bin_cmd!("comicgen")
        .env("COMICGEN_HOME", home.path())
        .current_dir(cwd.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("## 核心指令"))
        .stdout(predicate::str::contains("左上格 (Panel 1: Top-Left)"))
        .stdout(predicate::str::contains("\"style_name\""));
}

#[test]
fn test_generate_from_example_record_file() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    let output = cargo_bin_cmd!("comicgen")
        .env("COMICGEN_HOME", home.path())
        .current_dir(cwd.path())
        .arg("example")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let record_path = cwd.path().join("record.json");
    fs::write(&record_path, output).unwrap();

    cargo_bin_cmd!("comicgen")
        .env("COMICGEN_HOME", home.path())
        .current_dir(cwd.path())
        .args(["generate", "--record", "record.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A cat tries to get its owner's attention",
        ));
}

#[test]
fn test_generate_rejects_incomplete_record() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    let record_path = cwd.path().join("record.json");
    fs::write(
        &record_path,
        r#"{
            "id": null,
            "created_at": "2026-01-01T00:00:00Z",
            "core_concept": "only a concept",
            "overall_scene": "",
            "content_characters": "",
            "content_action": "",
            "panels": {},
            "style": {}
        }"#,
    )
    .unwrap();

    cargo_bin_cmd!("comicgen")
        .env("COMICGEN_HOME", home.path())
        .current_dir(cwd.path())
        .args(["generate", "--record", "record.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required fields"));
}

#[test]
fn test_save_list_show_delete_flow() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    cargo_bin_cmd!("comicgen")
        .env("COMICGEN_HOME", home.path())
        .current_dir(cwd.path())
        .args(["generate", "--save", "--approve"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Prompt saved successfully"));

    let id = saved_record_id(cwd.path());

    cargo_bin_cmd!("comicgen")
        .env("COMICGEN_HOME", home.path())
        .current_dir(cwd.path())
        .args(["prompts", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Saved Prompts"))
        .stdout(predicate::str::contains(&id))
        .stdout(predicate::str::contains("approved"))
        .stdout(predicate::str::contains(
            "A cat tries to get its owner's attention",
        ));

    cargo_bin_cmd!("comicgen")
        .env("COMICGEN_HOME", home.path())
        .current_dir(cwd.path())
        .args(["prompts", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 核心指令"));

    cargo_bin_cmd!("comicgen")
        .env("COMICGEN_HOME", home.path())
        .current_dir(cwd.path())
        .args(["prompts", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prompt deleted successfully!"));

    // Deleting again reports the id rather than failing.
    cargo_bin_cmd!("comicgen")
        .env("COMICGEN_HOME", home.path())
        .current_dir(cwd.path())
        .args(["prompts", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(&id));
}

#[test]
fn test_prompts_list_empty() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    cargo_bin_cmd!("comicgen")
        .env("COMICGEN_HOME", home.path())
        .current_dir(cwd.path())
        .args(["prompts", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You haven't saved any prompts yet",
        ));
}

#[test]
fn test_show_missing_prompt_fails() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    cargo_bin_cmd!("comicgen")
        .env("COMICGEN_HOME", home.path())
        .current_dir(cwd.path())
        .args(["prompts", "show", "no-such-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_refs_lists_categories() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!("comicgen")
        .env("COMICGEN_HOME", home.path())
        .arg("refs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Composition Angles"))
        .stdout(predicate::str::contains("Close-up"))
        .stdout(predicate::str::contains("Example Coloring"));

    cargo_bin_cmd!("comicgen")
        .env("COMICGEN_HOME", home.path())
        .args(["refs", "--category", "style"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gag Manga"))
        .stdout(predicate::str::contains("Close-up").not());
}

#[test]
fn test_chinese_language_config() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    fs::write(home.path().join("config.toml"), "language = \"zh\"\n").unwrap();

    cargo_bin_cmd!("comicgen")
        .env("COMICGEN_HOME", home.path())
        .current_dir(cwd.path())
        .args(["prompts", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("您还没有保存任何提示词"));
}
