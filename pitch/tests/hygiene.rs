//! Hygiene: source-level budgets for the pitch crate.
//!
//! Each antipattern below has a budget of zero. Geometry here runs on every
//! pointer move, so a panic would freeze the board mid-drag.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("let _ =", 0),
    (".ok()", 0),
    ("#[allow(dead_code)]", 0),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `pitch/src/`, test siblings excluded.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    assert!(!source_files().is_empty(), "run from the pitch crate root");
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, max) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *max {
            let detail = found.iter().map(|(p, c)| format!("  {p}: {c}")).collect::<Vec<_>>().join("\n");
            failures.push(format!("{pattern} budget exceeded: found {count}, max {max}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

// =============================================================================
// MANIFESTS
// =============================================================================

/// Table header (`[dependencies]`, `[dev-dependencies]`, ...) under which
/// `key` is declared in a Cargo manifest.
fn table_of<'a>(manifest: &'a str, key: &str) -> Option<&'a str> {
    let mut table = "";
    for line in manifest.lines().map(str::trim) {
        if line.starts_with('[') {
            table = line;
        } else if line.split('=').next().is_some_and(|k| k.trim() == key) {
            return Some(table);
        }
    }
    None
}

fn manifest(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("{path}: {e}"))
}

#[test]
fn pitch_builds_as_plain_library() {
    let own = manifest("Cargo.toml");
    assert!(!own.contains("cdylib"), "pitch is only linked into the client");
}

#[test]
fn json_codec_is_test_only_in_shared_crates() {
    for path in ["../roster/Cargo.toml", "../client/Cargo.toml"] {
        let text = manifest(path);
        assert_eq!(table_of(&text, "serde_json"), Some("[dev-dependencies]"), "{path}");
        assert_eq!(table_of(&text, "serde"), Some("[dependencies]"), "{path}");
    }
}
