use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Run `journal` inside `dir` with terminal styling turned off
fn journal(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("journal");
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}

fn add_hobbit(dir: &Path) {
    journal(dir)
        .args([
            "new", "--name", "Hobbit", "--author", "Tolkien", "--genre", "fantasy", "--start",
            "2022-01-01", "--score", "4",
        ])
        .assert()
        .success();
}

#[test]
fn test_new_appends_line() {
    let temp_dir = TempDir::new().unwrap();

    journal(temp_dir.path())
        .args([
            "new",
            "--name",
            "Hobbit",
            "--author",
            "J.R.R. Tolkien",
            "--genre",
            "fantasy",
            "--start",
            "2022-01-01",
            "--score",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("New entry added"))
        .stdout(predicate::str::contains("## Hobbit"));

    let content = fs::read_to_string(temp_dir.path().join("reading_journal.txt")).unwrap();
    assert_eq!(content, "Hobbit|J.R.R. Tolkien|fantasy|2022-01-01||4|\n");
}

#[test]
fn test_new_reports_missing_fields() {
    let temp_dir = TempDir::new().unwrap();

    journal(temp_dir.path())
        .args(["new", "--name", "Hobbit", "--start", "2022-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Author is required, with option --author"))
        .stderr(predicate::str::contains("Genre is required, with option --genre"));

    assert!(!temp_dir.path().join("reading_journal.txt").exists());
}

#[test]
fn test_new_rejects_invalid_date() {
    let temp_dir = TempDir::new().unwrap();

    journal(temp_dir.path())
        .args([
            "new", "--name", "Hobbit", "--author", "Tolkien", "--genre", "fantasy", "--start",
            "2023-02-29",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));

    assert!(!temp_dir.path().join("reading_journal.txt").exists());
}

#[test]
fn test_list_by_genre_and_status() {
    let temp_dir = TempDir::new().unwrap();
    add_hobbit(temp_dir.path());

    journal(temp_dir.path())
        .args(["list", "--genre", "fantasy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Hobbit"))
        .stdout(predicate::str::contains("- **Score:** 4/5"))
        .stdout(predicate::str::contains("currently reading"))
        .stdout(predicate::str::contains("Listed entries 1/1"));

    journal(temp_dir.path())
        .args(["list", "--completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hobbit").not())
        .stdout(predicate::str::contains("Listed entries 0/1"));

    journal(temp_dir.path())
        .args(["list", "--genre", "Fantasy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Listed entries 0/1"));
}

#[test]
fn test_list_skips_malformed_lines() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("reading_journal.txt"),
        "Hobbit|Tolkien|fantasy|2022-01-01||4|\n\
         not an entry\n\
         Dune|Herbert|sci-fi|2023-03-01|2023-04-15|5|Spice\n",
    )
    .unwrap();

    journal(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Hobbit"))
        .stdout(predicate::str::contains("## Dune"))
        .stdout(predicate::str::contains(
            "Listed entries 2/3 (1 malformed line skipped)",
        ));
}

#[test]
fn test_list_skips_line_with_invalid_utf8() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("reading_journal.txt"),
        b"Hobbit|Tolkien|fantasy|2022-01-01||4|\n\
Caf\xe9|Author|genre|2022-01-01|||\n\
Dune|Herbert|sci-fi|2023-03-01|2023-04-15|5|\n",
    )
    .unwrap();

    journal(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Hobbit"))
        .stdout(predicate::str::contains("## Dune"))
        .stdout(predicate::str::contains(
            "Listed entries 2/3 (1 malformed line skipped)",
        ));
}

#[test]
fn test_list_missing_journal_fails_gracefully() {
    let temp_dir = TempDir::new().unwrap();

    journal(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open"))
        .stderr(predicate::str::contains("reading_journal.txt"));
}

#[test]
fn test_list_rejects_bad_score_threshold() {
    let temp_dir = TempDir::new().unwrap();
    add_hobbit(temp_dir.path());

    journal(temp_dir.path())
        .args(["list", "--score", "high"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage error"));
}

#[test]
fn test_list_rejects_two_filters() {
    let temp_dir = TempDir::new().unwrap();

    journal(temp_dir.path())
        .args(["list", "--reading", "--completed"])
        .assert()
        .failure();
}

#[test]
fn test_list_json() {
    let temp_dir = TempDir::new().unwrap();
    add_hobbit(temp_dir.path());

    let output = journal(temp_dir.path())
        .args(["list", "--json", "--score", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["matched"], 1);
    assert_eq!(value["scanned"], 1);
    assert_eq!(value["skipped"], 0);
    assert_eq!(value["entries"][0]["book_name"], "Hobbit");
    assert_eq!(value["entries"][0]["score"], 4);
    assert!(value["entries"][0]["end_date"].is_null());
}

#[test]
fn test_config_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("journal.toml");

    journal(temp_dir.path())
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    assert!(config_path.exists());
}

#[test]
fn test_config_journal_file_is_used() {
    let temp_dir = TempDir::new().unwrap();

    journal(temp_dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    let config_path = temp_dir.path().join("journal.toml");
    let updated = fs::read_to_string(&config_path).unwrap().replace(
        "journal_file = \"reading_journal.txt\"",
        "journal_file = \"books/2024.txt\"",
    );
    fs::write(&config_path, updated).unwrap();

    add_hobbit(temp_dir.path());

    assert!(temp_dir.path().join("books/2024.txt").exists());
    assert!(!temp_dir.path().join("reading_journal.txt").exists());
}

#[test]
fn test_file_flag_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    let journal_file = temp_dir.path().join("other.txt");

    journal(temp_dir.path())
        .args([
            "new",
            "--name",
            "Dune",
            "--author",
            "Herbert",
            "--genre",
            "sci-fi",
            "--start",
            "2023-03-01",
            "--end",
            "2023-04-15",
            "--file",
            journal_file.to_str().unwrap(),
        ])
        .assert()
        .success();

    journal(temp_dir.path())
        .args(["list", "--completed", "--file", journal_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Dune"))
        .stdout(predicate::str::contains("(45 days)"));
}
