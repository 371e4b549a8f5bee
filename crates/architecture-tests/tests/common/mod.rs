//! Shared source walking for architecture tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// A Rust source file under `crates/`, read once.
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to `crates/`, with `/` separators.
    pub relative: String,
    pub content: String,
}

impl SourceFile {
    pub fn has_tests(&self) -> bool {
        self.content.contains("#[test]") || self.content.contains("#[tokio::test]")
    }

    /// Whether the file belongs to the named crate directory (e.g. `config`).
    pub fn in_crate(&self, crate_dir: &str) -> bool {
        self.relative.starts_with(&format!("{crate_dir}/"))
    }
}

/// The workspace `crates/` directory.
pub fn crates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("architecture-tests lives under crates/")
        .to_path_buf()
}

/// All `.rs` files under `crates/`, excluding build output and this crate.
pub fn rust_sources() -> Vec<SourceFile> {
    let root = crates_dir();
    let sources: Vec<SourceFile> = walkdir::WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.file_name() != "target" && e.file_name() != "architecture-tests")
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .filter_map(|e| {
            let content = fs::read_to_string(e.path()).ok()?;
            let relative = e
                .path()
                .strip_prefix(&root)
                .ok()?
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            Some(SourceFile {
                path: e.into_path(),
                relative,
                content,
            })
        })
        .collect();

    assert!(!sources.is_empty(), "no Rust sources found under {:?}", root);
    sources
}
