//! Hygiene: enforces coding standards at test time
//!
//! Scans the canvas crate's production sources for patterns that crash the
//! page or swallow errors. Every budget is zero; lowering is fine, raising is not.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// `(pattern, budget, what it catches)`
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "explicit panic"),
    ("unreachable!(", 0, "explicit panic"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards a value without inspecting it"),
    (".ok()", 0, "drops the error half of a Result"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
    ("console::log", 0, "debug logging left in a hot loop"),
];

/// Modules allowed to name the 2D context type.
const CONTEXT_MODULES: &[&str] = &["engine.rs", "render.rs"];

/// Collect production `.rs` files from `canvas/src/`, excluding test files.
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

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sources_are_found() {
    assert!(source_files().iter().any(|f| f.path.ends_with("lib.rs")));
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            failures.push(format!("`{pattern}` ({why}): found {count}, max {budget}\n{}", format_hits(&found)));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn only_engine_and_render_touch_the_context() {
    let files = source_files();
    let offenders: Vec<_> = hits(&files, "CanvasRenderingContext2d")
        .into_iter()
        .filter(|(path, _)| !CONTEXT_MODULES.iter().any(|m| path.ends_with(m)))
        .collect();
    assert!(offenders.is_empty(), "2D context used outside render:\n{}", format_hits(&offenders));
}
