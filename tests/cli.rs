//! End-to-end tests driving the storekeep binary.

mod common;

use common::StoreFixture;
use std::process::Command;

fn storekeep_bin() -> &'static str {
    env!("CARGO_BIN_EXE_storekeep")
}

/// Write a config file naming the fixture's roots and return its path.
fn write_config(store: &StoreFixture, names: &[&str]) -> std::path::PathBuf {
    let mut body = String::new();
    for name in names {
        body.push_str(&format!(
            "[[roots]]\nname = \"{}\"\npath = \"{}\"\n\n",
            name,
            store.path(name).display().to_string().replace('\\', "\\\\")
        ));
    }
    let path = store.base().join("storekeep.toml");
    std::fs::write(&path, body).expect("write config");
    path
}

fn last_json_line(stdout: &str) -> serde_json::Value {
    let line = stdout.lines().last().expect("at least one stdout line");
    serde_json::from_str(line).expect("valid JSON result line")
}

#[test]
fn tree_json_reports_forest_and_stats() {
    let store = StoreFixture::new();
    store.write_file("audio/user_1/book_2/track.mp3", 2048);
    store.mkdir("audio/user_1/book_3");
    let config = write_config(&store, &["audio"]);

    let output = Command::new(storekeep_bin())
        .args(["--config"])
        .arg(&config)
        .args(["tree", "--json"])
        .output()
        .expect("run storekeep");
    assert!(output.status.success());

    let result = last_json_line(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(result["event"], "result");
    let forest = &result["result"];
    assert_eq!(forest["stats"]["totalFiles"], 1);
    assert_eq!(forest["stats"]["totalBytes"], 2048);
    assert_eq!(forest["trees"]["audio"]["isDirectory"], true);
    assert_eq!(
        forest["trees"]["audio"]["children"][0]["children"][0]["name"],
        "book_2"
    );
}

#[test]
fn tree_text_mode_renders_and_exits_zero() {
    let store = StoreFixture::new();
    store.write_file("audio/a.mp3", 100);
    let config = write_config(&store, &["audio"]);

    let output = Command::new(storekeep_bin())
        .args(["--config"])
        .arg(&config)
        .args(["tree"])
        .output()
        .expect("run storekeep");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("audio/"));
    assert!(stdout.contains("a.mp3"));
    assert!(stdout.contains("1 files"));
}

#[test]
fn tree_single_root_narrows_the_forest() {
    let store = StoreFixture::new();
    store.write_file("audio/a.mp3", 10);
    store.write_file("covers/x.png", 20);
    let config = write_config(&store, &["audio", "covers"]);

    let output = Command::new(storekeep_bin())
        .args(["--config"])
        .arg(&config)
        .args(["tree", "--root", "covers", "--json"])
        .output()
        .expect("run storekeep");
    assert!(output.status.success());

    let result = last_json_line(&String::from_utf8_lossy(&output.stdout));
    let forest = &result["result"];
    assert!(forest["trees"]["covers"].is_object());
    assert!(forest["trees"].get("audio").is_none());
    assert_eq!(forest["stats"]["totalFiles"], 1);
    assert_eq!(forest["stats"]["totalBytes"], 20);
}

#[test]
fn tree_unknown_root_is_an_error() {
    let store = StoreFixture::new();
    store.write_file("audio/a.mp3", 10);
    let config = write_config(&store, &["audio"]);

    let output = Command::new(storekeep_bin())
        .args(["--config"])
        .arg(&config)
        .args(["tree", "--root", "video"])
        .output()
        .expect("run storekeep");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown root 'video'"));
}

#[test]
fn tree_with_unavailable_root_still_succeeds() {
    let store = StoreFixture::new();
    store.write_file("audio/a.mp3", 1);
    // "covers" configured but never created on disk.
    let config = write_config(&store, &["audio", "covers"]);

    let output = Command::new(storekeep_bin())
        .args(["--config"])
        .arg(&config)
        .args(["tree", "--json"])
        .output()
        .expect("run storekeep");
    assert!(output.status.success());

    let result = last_json_line(&String::from_utf8_lossy(&output.stdout));
    let unavailable = &result["result"]["unavailableRoots"];
    assert_eq!(unavailable[0]["name"], "covers");
}

#[test]
fn delete_bulk_reports_outcomes_and_exit_code() {
    let store = StoreFixture::new();
    store.write_file("audio/a.mp3", 10);
    store.write_file("covers/x.png", 10);
    let config = write_config(&store, &["audio", "covers"]);

    let output = Command::new(storekeep_bin())
        .args(["--config"])
        .arg(&config)
        .args([
            "delete",
            "--yes",
            "--json",
            "audio/a.mp3",
            "audio/missing.mp3",
            "covers/x.png",
        ])
        .output()
        .expect("run storekeep");

    // One item failed, so the command signals partial failure.
    assert!(!output.status.success());

    let result = last_json_line(&String::from_utf8_lossy(&output.stdout));
    let report = &result["result"];
    assert_eq!(report["succeeded"], 2);
    assert_eq!(report["failed"], 1);
    assert_eq!(report["outcomes"][1]["failure"]["kind"], "not-found");
    assert!(!store.exists("audio/a.mp3"));
    assert!(!store.exists("covers/x.png"));
}

#[test]
fn delete_all_successes_exits_zero() {
    let store = StoreFixture::new();
    store.write_file("audio/a.mp3", 10);
    let config = write_config(&store, &["audio"]);

    let output = Command::new(storekeep_bin())
        .args(["--config"])
        .arg(&config)
        .args(["delete", "--yes", "audio/a.mp3"])
        .output()
        .expect("run storekeep");

    assert!(output.status.success());
    assert!(!store.exists("audio/a.mp3"));
}

#[test]
fn delete_traversal_is_refused_via_cli() {
    let store = StoreFixture::new();
    store.mkdir("uploads");
    store.write_file("etc/passwd", 5);
    let config = write_config(&store, &["uploads"]);

    let output = Command::new(storekeep_bin())
        .args(["--config"])
        .arg(&config)
        .args(["delete", "--yes", "--json", "uploads/../etc/passwd"])
        .output()
        .expect("run storekeep");

    assert!(!output.status.success());
    let result = last_json_line(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(result["result"]["outcomes"][0]["failure"]["kind"], "forbidden");
    assert!(store.exists("etc/passwd"));
}

#[test]
fn delete_json_without_yes_is_an_error() {
    let store = StoreFixture::new();
    store.mkdir("audio");
    let config = write_config(&store, &["audio"]);

    let output = Command::new(storekeep_bin())
        .args(["--config"])
        .arg(&config)
        .args(["delete", "--json", "audio/a.mp3"])
        .output()
        .expect("run storekeep");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--yes"));
}

#[test]
fn missing_config_file_is_a_clear_error() {
    let store = StoreFixture::new();

    let output = Command::new(storekeep_bin())
        .args(["--config"])
        .arg(store.base().join("nope.toml"))
        .args(["tree"])
        .output()
        .expect("run storekeep");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read config file"));
}
