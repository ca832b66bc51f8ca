//! Phase 4 tests: the `motif` binary end to end.
//!
//! Every run passes `--config` so the user's own config file never leaks in.

#![cfg(feature = "cli")]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use motif_engine::Motif;
use tempfile::TempDir;

// ==================== Helpers ====================

const FOREST_JSON: &str = r#"[
    {
        "title": "I walked a dark forest path.",
        "body": "The dark forest was silent. Portal portal opened."
    },
    {"body": "Another dark forest dream where a portal guardian waited."},
    {"title": "A calm river flows elsewhere."}
]"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let ws = Self {
            dir: tempfile::tempdir().unwrap(),
        };
        ws.write("config.toml", "");
        ws
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn config(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }
}

fn motif(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_motif"))
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .unwrap()
}

fn motif_with_stdin(config: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_motif"))
        .arg("--config")
        .arg(config)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // The binary may exit before reading stdin, e.g. on a bad config.
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

fn json_motifs(output: &Output) -> Vec<(String, usize)> {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let motifs: Vec<Motif> = serde_json::from_slice(&output.stdout).unwrap();
    motifs.into_iter().map(|m| (m.term, m.count)).collect()
}

fn owned(pairs: &[(&str, usize)]) -> Vec<(String, usize)> {
    pairs.iter().map(|&(t, c)| (t.to_string(), c)).collect()
}

// ==================== extract ====================

#[test]
fn test_cli_extract_json() {
    let ws = Workspace::new();
    let corpus = ws.write("entries.json", FOREST_JSON);
    let out = motif(&ws.config(), &["extract", corpus.to_str().unwrap(), "--json"]);
    assert_eq!(
        json_motifs(&out),
        owned(&[("dark", 3), ("dark forest", 3), ("forest", 3), ("portal", 3)])
    );
}

#[test]
fn test_cli_extract_text_output() {
    let ws = Workspace::new();
    let corpus = ws.write("entries.json", FOREST_JSON);
    let out = motif(&ws.config(), &["extract", corpus.to_str().unwrap(), "--top-k", "2"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().map(str::trim).collect();
    assert_eq!(lines, vec!["3  dark", "3  dark forest"]);
}

#[test]
fn test_cli_flags_override_config() {
    let ws = Workspace::new();
    ws.write("config.toml", "[extract]\ntop_k = 1\n");
    let corpus = ws.write("entries.json", FOREST_JSON);
    let path = corpus.to_str().unwrap();

    let from_config = motif(&ws.config(), &["extract", path, "--json"]);
    assert_eq!(json_motifs(&from_config), owned(&[("dark", 3)]));

    let overridden = motif(&ws.config(), &["extract", path, "--json", "--top-k", "3"]);
    assert_eq!(
        json_motifs(&overridden),
        owned(&[("dark", 3), ("dark forest", 3), ("forest", 3)])
    );
}

#[test]
fn test_cli_stopwords_merge_with_config() {
    let ws = Workspace::new();
    ws.write("config.toml", "[extract]\nstopwords = [\"forest\"]\n");
    let corpus = ws.write("entries.json", FOREST_JSON);
    let out = motif(
        &ws.config(),
        &["extract", corpus.to_str().unwrap(), "--stopword", "Portal", "--json"],
    );
    assert_eq!(json_motifs(&out), owned(&[("dark", 3)]));
}

#[test]
fn test_cli_stdin_paragraphs() {
    let ws = Workspace::new();
    let out = motif_with_stdin(
        &ws.config(),
        &["extract", "--json"],
        "owl moon\n\nowl moon\n\n\nowl\n",
    );
    // "moon" reaches 2 only across entries, so it stays out.
    assert_eq!(json_motifs(&out), owned(&[("owl", 3), ("owl moon", 2)]));
}

#[test]
fn test_cli_date_range() {
    let ws = Workspace::new();
    let corpus = ws.write(
        "dated.json",
        r#"[
            {"body": "owl owl", "date": "2024-03-01"},
            {"body": "moon moon", "date": "2024-03-05"},
            {"body": "tide tide", "date": "2024-03-09"},
            {"body": "key key"}
        ]"#,
    );
    let out = motif(
        &ws.config(),
        &[
            "extract",
            corpus.to_str().unwrap(),
            "--since",
            "2024-03-02",
            "--until",
            "2024-03-09",
            "--json",
        ],
    );
    assert_eq!(json_motifs(&out), owned(&[("moon", 2), ("tide", 2)]));
}

// ==================== tokenize / insights ====================

#[test]
fn test_cli_tokenize() {
    let ws = Workspace::new();
    let out = motif(
        &ws.config(),
        &["tokenize", "Dragon's lair and bright lights", "--stopword", "lair"],
    );
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["dragon", "bright", "lights"]);
}

#[test]
fn test_cli_tokenize_counts_from_stdin() {
    let ws = Workspace::new();
    let out = motif_with_stdin(&ws.config(), &["tokenize", "--counts"], "owl moon owl");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().map(str::trim).collect();
    assert_eq!(lines, vec!["2  owl", "1  moon"]);
}

#[test]
fn test_cli_insights_json() {
    let ws = Workspace::new();
    let corpus = ws.write("entries.json", FOREST_JSON);
    let out = motif(
        &ws.config(),
        &["insights", corpus.to_str().unwrap(), "--top", "1", "--json"],
    );
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["stats"]["documents"], 3);
    assert_eq!(value["stats"]["tokens"], 19);
    assert_eq!(value["top_words"][0]["term"], "dark");
    assert_eq!(value["top_phrases"][0]["term"], "dark forest");
    assert_eq!(value["top_words"].as_array().unwrap().len(), 1);
}

// ==================== Errors ====================

#[test]
fn test_cli_invalid_date_exits_one() {
    let ws = Workspace::new();
    let corpus = ws.write("entries.json", FOREST_JSON);
    let out = motif(
        &ws.config(),
        &["extract", corpus.to_str().unwrap(), "--since", "03/02/2024"],
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("invalid date `03/02/2024`"), "{stderr}");
}

#[test]
fn test_cli_missing_file_exits_one() {
    let ws = Workspace::new();
    let missing = ws.dir.path().join("absent.json");
    let out = motif(&ws.config(), &["extract", missing.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("error: cannot read"));
}

#[test]
fn test_cli_negative_config_value_exits_one() {
    let ws = Workspace::new();
    ws.write("config.toml", "[extract]\nmin_global_count = -3\n");
    let out = motif_with_stdin(&ws.config(), &["extract"], "owl");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("min_global_count"));
}
