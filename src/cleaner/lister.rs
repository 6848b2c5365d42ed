//! Default file lister backed by walkdir.

use std::path::Path;

use globset::GlobBuilder;
use walkdir::WalkDir;

use crate::error::{CleanDestError, Result};
use crate::mapping::paths::{has_glob_meta, literal_prefix, normalize_pattern, normalize_separators};

use super::orchestrator::FileLister;

/// Lists files and directories under a source root with walkdir.
///
/// Entries come back in deterministic name-sorted depth-first order, with
/// separators normalized to `/` and directories marked by a trailing `/`.
/// Hidden entries are skipped unless requested, and a source root carrying
/// glob metacharacters filters the listing through its own pattern.
#[derive(Debug, Clone, Default)]
pub struct WalkdirLister {
    /// Include dotfile entries in the listing.
    pub include_hidden: bool,
}

impl WalkdirLister {
    pub fn new(include_hidden: bool) -> Self {
        Self { include_hidden }
    }
}

impl FileLister for WalkdirLister {
    fn list(&self, src_root: &str) -> Result<Vec<String>> {
        let walk_root = literal_prefix(src_root);
        let matcher = if has_glob_meta(src_root) {
            // Candidates below are emitted without a leading `./`, so the
            // pattern must be brought into the same form before it compiles.
            let glob = GlobBuilder::new(&normalize_pattern(src_root))
                .literal_separator(true)
                .build()
                .map_err(|source| CleanDestError::Pattern {
                    pattern: src_root.to_string(),
                    source,
                })?;
            Some(glob.compile_matcher())
        } else {
            None
        };

        let mut listing = Vec::new();
        for entry in WalkDir::new(&walk_root).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| Path::new(&walk_root).to_path_buf());
                CleanDestError::Io {
                    path,
                    source: err.into(),
                }
            })?;

            if !self.include_hidden {
                let name = entry.file_name().to_string_lossy();
                if name.starts_with('.') {
                    continue;
                }
            }

            let candidate = normalize_separators(&entry.path().to_string_lossy());
            let candidate = candidate.strip_prefix("./").unwrap_or(&candidate);
            if let Some(matcher) = &matcher {
                if !matcher.is_match(candidate) {
                    continue;
                }
            }

            if entry.file_type().is_dir() {
                listing.push(format!("{candidate}/"));
            } else {
                listing.push(candidate.to_string());
            }
        }

        Ok(listing)
    }
}
