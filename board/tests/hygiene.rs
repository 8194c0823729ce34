//! Hygiene — enforces coding standards at test time.
//!
//! Scans the crate's production sources for antipatterns. Every budget is
//! zero: the engine has no error-reporting channel other than its `Result`
//! returns, so nothing here may panic or discard an error.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `*_test.rs` modules.
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

fn assert_budget(files: &[SourceFile], pattern: &str, max: usize) {
    let hits: Vec<(&str, usize)> = files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then_some((file.path.as_str(), count))
        })
        .collect();
    let total: usize = hits.iter().map(|(_, count)| count).sum();
    assert!(
        total <= max,
        "`{pattern}` budget exceeded: found {total}, max {max}.\n{}",
        hits.iter()
            .map(|(path, count)| format!("  {path}: {count}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

#[test]
fn panic_budgets() {
    let files = source_files();
    for pattern in [".unwrap()", ".expect(", "panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        assert_budget(&files, pattern, 0);
    }
}

#[test]
fn silent_loss_budgets() {
    let files = source_files();
    for pattern in ["let _ =", ".ok()"] {
        assert_budget(&files, pattern, 0);
    }
}

#[test]
fn dead_code_budget() {
    let files = source_files();
    assert_budget(&files, "#[allow(dead_code)]", 0);
}
