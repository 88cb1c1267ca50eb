//! Discovery of source files to annotate.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths below the root.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of walking the workspace.
#[derive(Debug, Default)]
pub struct FileScanResult {
    /// Matching files, sorted.
    pub files: BTreeSet<PathBuf>,
    pub skipped_count: usize,
}

/// The `ignores` setting split into glob patterns and literal prefixes.
struct IgnoreRules {
    root: PathBuf,
    prefixes: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreRules {
    fn new(root: &Path, ignores: &[String], verbose: bool) -> Self {
        let mut rules = Self {
            root: root.to_path_buf(),
            prefixes: Vec::new(),
            globs: Vec::new(),
        };

        for ignore in ignores {
            if !is_glob_pattern(ignore) {
                rules.prefixes.push(root.join(ignore));
                continue;
            }
            match Pattern::new(ignore) {
                Ok(pattern) => rules.globs.push(pattern),
                Err(e) if verbose => eprintln!(
                    "{} Skipping ignore pattern '{}': {}",
                    "warning:".bold().yellow(),
                    ignore,
                    e
                ),
                Err(_) => {}
            }
        }

        rules
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.prefixes.iter().any(|prefix| path.starts_with(prefix)) {
            return true;
        }
        // Globs may be written relative to the root or as absolute paths.
        let relative = path
            .strip_prefix(&self.root)
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .ok();
        let absolute = path.to_string_lossy();
        self.globs.iter().any(|glob| {
            glob.matches(&absolute) || relative.as_deref().is_some_and(|rel| glob.matches(rel))
        })
    }
}

/// Collect files below `root` whose extension is one of `extensions`.
///
/// `ignores` entries with wildcards are matched as globs against the path
/// relative to `root` and against the full path; the others are literal path
/// prefixes relative to `root`. Ignored directories are not descended into.
pub fn scan_files(
    root: &Path,
    extensions: &[String],
    ignores: &[String],
    verbose: bool,
) -> FileScanResult {
    let rules = IgnoreRules::new(root, ignores, verbose);
    let mut result = FileScanResult::default();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !rules.is_ignored(entry.path()));

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                    result.files.insert(entry.into_path());
                }
            }
            Err(e) => {
                result.skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
            }
        }
    }

    tracing::debug!(
        root = %root.display(),
        files = result.files.len(),
        skipped = result.skipped_count,
        "collected source files"
    );

    result
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
