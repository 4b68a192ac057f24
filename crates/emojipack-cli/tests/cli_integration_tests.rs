//! CLI integration tests
//!
//! Run the built binary against a local gemoji file in a temp directory, so
//! nothing is downloaded.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const FEED: &str = r#"[
  {"emoji":"👍","description":"thumbs up","category":"People & Body","aliases":["+1","thumbsup"],"tags":["approve","ok"]},
  {"emoji":"🎉","description":"party popper","category":"Activities","aliases":["tada"],"tags":["hooray","party"]},
  {"emoji":"1️⃣","description":"keycap: 1","category":"Symbols","aliases":["one"],"tags":[]}
]"#;

const FEED_WITH_DUPLICATE: &str = r#"[
  {"emoji":"🎉","description":"party popper","aliases":["party"],"tags":[]},
  {"emoji":"🥳","description":"partying face","aliases":["party"],"tags":[]}
]"#;

fn write_feed(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn emojipack(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_emojipack"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn generate(dir: &TempDir, feed: &Path, output: &str) {
    let out = emojipack(
        dir.path(),
        &["generate", "--source-file", feed.to_str().unwrap(), "-o", output],
    );
    assert!(out.status.success(), "generate failed: {:?}", out);
}

#[test]
fn test_generate_writes_default_archive() {
    let temp_dir = TempDir::new().unwrap();
    let feed = write_feed(&temp_dir, "emoji.json", FEED);

    let output = emojipack(
        temp_dir.path(),
        &["generate", "--source-file", feed.to_str().unwrap()],
    );

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        stdout(&output).trim(),
        "Generated Emoji Pack.alfredsnippets with 4 snippets"
    );

    let archive_path = temp_dir.path().join("Emoji Pack.alfredsnippets");
    let archive = zip::ZipArchive::new(fs::File::open(archive_path).unwrap()).unwrap();
    let mut names: Vec<&str> = archive.file_names().collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "+1-1F44D.json",
            "info.plist",
            "one-31-FE0F-20E3.json",
            "tada-1F389.json",
            "thumbsup-1F44D.json",
        ]
    );
}

#[test]
fn test_generate_macos_plist() {
    let temp_dir = TempDir::new().unwrap();
    let feed = write_feed(&temp_dir, "emoji.json", FEED);

    let output = emojipack(
        temp_dir.path(),
        &[
            "generate",
            "--macos",
            "--prefix",
            ";",
            "--suffix",
            "",
            "--source-file",
            feed.to_str().unwrap(),
        ],
    );

    assert!(output.status.success(), "{:?}", output);
    let value = plist::Value::from_file(temp_dir.path().join("Snippet Pack.plist")).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    let first = entries[0].as_dictionary().unwrap();
    assert_eq!(first.get("phrase").and_then(|v| v.as_string()), Some("👍"));
    assert_eq!(first.get("shortcut").and_then(|v| v.as_string()), Some(";+1"));
}

#[test]
fn test_compare_identical_packs() {
    let temp_dir = TempDir::new().unwrap();
    let feed = write_feed(&temp_dir, "emoji.json", FEED);
    generate(&temp_dir, &feed, "a.alfredsnippets");
    generate(&temp_dir, &feed, "b.alfredsnippets");

    let output = emojipack(
        temp_dir.path(),
        &["compare", "a.alfredsnippets", "b.alfredsnippets"],
    );

    assert!(output.status.success(), "{:?}", output);
    let text = stdout(&output);
    assert!(text.starts_with("## Snippet Pack Comparison"));
    assert!(text.contains("| Found | 3 |"));
    assert!(text.contains("_No emoji differences detected._"));
    assert!(text.contains("_No keyword differences detected._"));
}

#[test]
fn test_compare_against_generated_pack_as_json() {
    // Given: A reference pack built from a smaller feed
    let temp_dir = TempDir::new().unwrap();
    let small = write_feed(
        &temp_dir,
        "small.json",
        r#"[{"emoji":"🎉","description":"party popper","aliases":["tada"],"tags":[]}]"#,
    );
    let full = write_feed(&temp_dir, "emoji.json", FEED);
    generate(&temp_dir, &small, "theirs.alfredsnippets");

    // When: It is compared with a pack generated from the full feed
    let output = emojipack(
        temp_dir.path(),
        &[
            "compare",
            "theirs.alfredsnippets",
            "--json",
            "--source-file",
            full.to_str().unwrap(),
        ],
    );

    // Then: The extra emojis are reported as added
    assert!(output.status.success(), "{:?}", output);
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let added = report["emojis"]["added"].as_object().unwrap();
    assert!(added.contains_key("👍"));
    assert!(added.contains_key("1️⃣"));
    assert!(report["emojis"]["found"]
        .as_object()
        .unwrap()
        .contains_key("🎉"));
    assert!(report["keywords"]["matching"]
        .as_object()
        .unwrap()
        .contains_key("tada"));
}

#[test]
fn test_compare_duplicate_keyword_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let feed = write_feed(&temp_dir, "dup.json", FEED_WITH_DUPLICATE);
    generate(&temp_dir, &feed, "dup.alfredsnippets");

    let output = emojipack(
        temp_dir.path(),
        &["compare", "dup.alfredsnippets", "dup.alfredsnippets"],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Duplicate keyword 'party' in theirs pack"));
}

#[test]
fn test_missing_archive_reports_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = emojipack(
        temp_dir.path(),
        &["compare", "missing.alfredsnippets", "also-missing.alfredsnippets"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_IO"));
}
