use std::{
    collections::BTreeSet,
    path::{Component, Path, PathBuf},
};

use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::GENERATED_FILE_PATTERNS;
use crate::core::parsers::csharp::is_csharp_file;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// C# files found, sorted.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// Ignore rules applied while walking directories.
struct IgnoreSet {
    base_dir: PathBuf,
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &Path, ignore_patterns: &[String], ignore_generated_files: bool) -> Self {
        let mut literal_paths = Vec::new();
        let mut patterns = Vec::new();

        for p in ignore_patterns {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => patterns.push(pattern),
                    Err(e) => tracing::warn!("Invalid ignore pattern '{}': {}", p, e),
                }
            } else {
                literal_paths.push(base_dir.join(p));
            }
        }

        if ignore_generated_files {
            patterns.extend(GENERATED_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self {
            base_dir: base_dir.to_path_buf(),
            literal_paths,
            patterns,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.literal_paths.iter().any(|ignored| path.starts_with(ignored)) {
            return true;
        }
        // globs see the path relative to the scan base
        let relative = path.strip_prefix(&self.base_dir).unwrap_or(path);
        let path_str = relative.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&path_str))
    }
}

/// Find C# files under `base_dir`, restricted to `includes` when given.
pub fn scan_files(
    base_dir: &Path,
    includes: &[String],
    ignore_patterns: &[String],
    ignore_generated_files: bool,
) -> ScanResult {
    let roots = include_roots(base_dir, includes);
    scan_roots(&roots, base_dir, ignore_patterns, ignore_generated_files)
}

/// Find C# files in explicit `roots` (files or directories).
///
/// A root that is itself a file is always taken; ignore rules only filter
/// what directory walking discovers.
pub fn scan_roots(
    roots: &[PathBuf],
    base_dir: &Path,
    ignore_patterns: &[String],
    ignore_generated_files: bool,
) -> ScanResult {
    let ignores = IgnoreSet::new(base_dir, ignore_patterns, ignore_generated_files);
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for root in roots {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !ignores.is_ignored(entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    tracing::warn!("Cannot access path: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if entry.depth() > 0 && ignores.is_ignored(path) {
                continue;
            }
            if entry.file_type().is_file() && is_csharp_file(path) {
                files.insert(display_path(path));
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// Directories (or files) to walk for the configured includes.
fn include_roots(base_dir: &Path, includes: &[String]) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for inc in includes {
        let path = base_dir.join(inc);
        if is_glob_pattern(inc) {
            match glob(&path.to_string_lossy()) {
                Ok(entries) => roots.extend(entries.flatten()),
                Err(e) => tracing::warn!("Invalid glob pattern '{}': {}", inc, e),
            }
        } else if path.exists() {
            roots.push(path);
        } else {
            tracing::warn!("Include path does not exist: {}", path.display());
        }
    }
    roots
}

/// Path as shown to users, without a leading `./`.
fn display_path(path: &Path) -> String {
    let trimmed: PathBuf = path
        .components()
        .skip_while(|c| matches!(c, Component::CurDir))
        .collect();
    trimmed.to_string_lossy().into_owned()
}
