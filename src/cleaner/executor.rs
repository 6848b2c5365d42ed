//! Default deletion executor: include/exclude glob matching over the
//! destination tree, with a removal strategy chosen at construction.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::{CleanDestError, Result};
use crate::mapping::paths::{literal_prefix, normalize_pattern, normalize_separators};

use super::orchestrator::{DeleteExecutor, DeleteOptions};

/// How matched entries leave the filesystem.
///
/// Chosen once from the permanence flag when the executor is constructed;
/// pattern matching never branches on it again.
pub trait RemoveStrategy: Send + Sync {
    fn remove_file(&self, path: &Path) -> io::Result<()>;
    fn remove_dir(&self, path: &Path) -> io::Result<()>;

    /// Whether this strategy reports the removed set back to the caller.
    fn reports_removed(&self) -> bool;
}

/// Irreversible removal through `std::fs`.
pub struct PermanentRemove;

impl RemoveStrategy for PermanentRemove {
    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }

    fn reports_removed(&self) -> bool {
        true
    }
}

/// Recoverable removal into the XDG home trash.
///
/// Entries are renamed into `Trash/files` under a unique basename and a
/// `.trashinfo` record is written beside them, so desktop trash tooling can
/// restore them. Like the trash backends this mirrors, it declines to report
/// what it removed.
pub struct TrashRemove {
    files_dir: PathBuf,
    info_dir: PathBuf,
}

impl TrashRemove {
    pub fn new() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join("Trash");
        Self::with_dirs(base.join("files"), base.join("info"))
    }

    /// Use explicit trash directories instead of the XDG location.
    pub fn with_dirs(files_dir: PathBuf, info_dir: PathBuf) -> Self {
        Self {
            files_dir,
            info_dir,
        }
    }

    fn unique_basename(&self, name: &str) -> String {
        let mut candidate = name.to_string();
        let mut counter = 1;
        while self.files_dir.join(&candidate).exists()
            || self.info_dir.join(format!("{candidate}.trashinfo")).exists()
        {
            candidate = format!("{name}.{counter}");
            counter += 1;
        }
        candidate
    }

    fn trash(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(&self.files_dir)?;
        fs::create_dir_all(&self.info_dir)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no basename"))?;
        let name = self.unique_basename(&name);

        // Canonicalize before the rename so the restore path survives.
        let original = fs::canonicalize(path)?;
        fs::rename(path, self.files_dir.join(&name))?;

        let deletion_date = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S");
        let info = format!(
            "[Trash Info]\nPath={}\nDeletionDate={}\n",
            original.display(),
            deletion_date
        );
        fs::write(self.info_dir.join(format!("{name}.trashinfo")), info)
    }
}

impl Default for TrashRemove {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoveStrategy for TrashRemove {
    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.trash(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        self.trash(path)
    }

    fn reports_removed(&self) -> bool {
        false
    }
}

/// Deletion executor applying standard include/exclude glob semantics.
///
/// Positive patterns select candidates; `!`-prefixed patterns protect them.
/// Matching happens against `/`-normalized path strings, so the pattern list
/// built by the mapping core applies unchanged on every platform.
pub struct GlobDeleteExecutor {
    strategy: Box<dyn RemoveStrategy>,
}

impl GlobDeleteExecutor {
    /// Select the removal strategy from the permanence flag.
    pub fn new(permanent: bool) -> Self {
        if permanent {
            Self::with_strategy(Box::new(PermanentRemove))
        } else {
            Self::with_strategy(Box::new(TrashRemove::new()))
        }
    }

    pub fn with_strategy(strategy: Box<dyn RemoveStrategy>) -> Self {
        Self { strategy }
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| CleanDestError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| CleanDestError::Pattern {
        pattern: patterns.join(", "),
        source,
    })
}

fn io_error(path: &Path, source: io::Error) -> CleanDestError {
    CleanDestError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl DeleteExecutor for GlobDeleteExecutor {
    fn delete(&self, patterns: &[String], options: &DeleteOptions) -> Result<Option<Vec<String>>> {
        // Patterns and walked candidates must share one form: forward
        // slashes, no leading `./`.
        let mut includes = Vec::new();
        let mut excludes = Vec::new();
        for pattern in patterns {
            match pattern.strip_prefix('!') {
                Some(negated) => excludes.push(normalize_pattern(negated)),
                None => includes.push(normalize_pattern(pattern)),
            }
        }

        let include_set = build_globset(&includes)?;
        let exclude_set = build_globset(&excludes)?;

        let mut roots: Vec<String> = includes.iter().map(|p| literal_prefix(p)).collect();
        roots.sort();
        roots.dedup();

        let mut candidates: Vec<(String, bool)> = Vec::new();
        let mut protected: Vec<String> = Vec::new();
        for root in &roots {
            let root_path = Path::new(root);
            if !root_path.exists() {
                continue;
            }
            for entry in WalkDir::new(root_path).min_depth(1).sort_by_file_name() {
                let entry = entry.map_err(|err| {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root_path.to_path_buf());
                    CleanDestError::Io {
                        path,
                        source: err.into(),
                    }
                })?;

                let candidate = normalize_separators(&entry.path().to_string_lossy());
                let candidate = candidate
                    .strip_prefix("./")
                    .map(str::to_string)
                    .unwrap_or(candidate);
                if exclude_set.is_match(&candidate) {
                    protected.push(candidate);
                    continue;
                }
                if include_set.is_match(&candidate) {
                    candidates.push((candidate, entry.file_type().is_dir()));
                }
            }
        }

        // A directory that still contains a protected entry stays; its stale
        // children are matched individually.
        let matched: Vec<(String, bool)> = candidates
            .into_iter()
            .filter(|(path, is_dir)| {
                !*is_dir
                    || !protected
                        .iter()
                        .any(|kept| kept.starts_with(&format!("{path}/")))
            })
            .collect();

        let report: Vec<String> = matched.iter().map(|(path, _)| path.clone()).collect();
        tracing::debug!(count = report.len(), dry_run = options.dry_run, "matched for removal");

        if options.dry_run {
            return Ok(Some(report));
        }

        let (dirs, files): (Vec<_>, Vec<_>) = matched.into_iter().partition(|(_, is_dir)| *is_dir);

        for (file, _) in &files {
            let path = Path::new(file);
            if path.exists() {
                self.strategy
                    .remove_file(path)
                    .map_err(|e| io_error(path, e))?;
            }
        }

        // Deepest first, so nested stale directories empty out before their
        // parents are removed.
        let mut dirs: Vec<String> = dirs.into_iter().map(|(path, _)| path).collect();
        dirs.sort_by_key(|path| std::cmp::Reverse(path.matches('/').count()));
        for dir in &dirs {
            let path = Path::new(dir);
            if path.exists() {
                self.strategy
                    .remove_dir(path)
                    .map_err(|e| io_error(path, e))?;
            }
        }

        if self.strategy.reports_removed() {
            Ok(Some(report))
        } else {
            Ok(None)
        }
    }
}
