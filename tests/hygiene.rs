//! Hygiene: source-level standards checked at test time.
//!
//! Event handlers in this crate run inside browser callbacks where a panic
//! takes down every behavior on the page, and a discarded error disappears
//! without a trace. These tests scan `src/` (excluding `*_test.rs`) for the
//! patterns that cause either. Budgets are zero and stay zero.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Pattern, budget, and what to do instead.
const RULES: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "propagate with `?` or log via `dom::report`"),
    (".expect(", 0, "propagate with `?` or log via `dom::report`"),
    ("panic!(", 0, "return a `PageError`"),
    ("unreachable!(", 0, "model the case explicitly"),
    ("todo!(", 0, "finish the stub"),
    ("unimplemented!(", 0, "finish the stub"),
    ("let _ =", 0, "inspect the result and log failures"),
    (".ok()", 0, "match on the error and log it"),
    ("#[allow(dead_code)]", 0, "delete the unused item"),
];

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
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path.extension().is_some_and(|e| e == "rs") && !path_str.ends_with("_test.rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, instead) in RULES {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let listing = found.iter().map(|(path, c)| format!("    {path}: {c}")).collect::<Vec<_>>().join("\n");
            failures.push(format!("`{pattern}`: found {count}, max {budget}; {instead}\n{listing}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn every_module_with_logic_has_tests() {
    let files = source_files();
    for module in ["anchor", "config", "contact", "controller", "counter", "cursor", "header", "lightbox", "menu", "nav", "parallax", "visibility"] {
        let file = files.iter().find(|f| f.path.ends_with(&format!("{module}.rs")) && !f.path.contains("page"));
        let Some(file) = file else {
            panic!("src/{module}.rs not found");
        };
        assert!(
            file.content.contains(&format!("#[path = \"{module}_test.rs\"]")),
            "{} does not include its {module}_test.rs",
            file.path
        );
    }
}
