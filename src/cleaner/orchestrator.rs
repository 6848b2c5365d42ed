//! Orchestrates one clean-destination run over injected collaborators.

use crate::config::CleanConfig;
use crate::error::Result;
use crate::mapping::{build_patterns, FileMap};

use super::executor::GlobDeleteExecutor;
use super::lister::WalkdirLister;
use super::loader::TomlFileMapLoader;

/// Options passed to the deletion executor.
#[derive(Debug, Clone, Default)]
pub struct DeleteOptions {
    /// If true, compute the removal set without mutating the filesystem.
    pub dry_run: bool,
}

/// Lists source entries under a root, files and directories both.
///
/// Directory results carry a trailing `/` so the mapper can classify them.
/// Listed paths must share the source root's form (both relative to the
/// working directory, or both absolute): downstream mapping is purely
/// lexical and never resolves either side against the working directory.
pub trait FileLister: Send + Sync {
    fn list(&self, src_root: &str) -> Result<Vec<String>>;
}

/// Applies include/exclude glob semantics and removes what matches.
///
/// A later `!`-negated pattern excludes matches of earlier positive patterns.
/// Implementations must not mutate the filesystem when `dry_run` is set, and
/// may decline to report what they removed (`None`).
pub trait DeleteExecutor: Send + Sync {
    fn delete(&self, patterns: &[String], options: &DeleteOptions) -> Result<Option<Vec<String>>>;
}

/// Resolves a configured path to an extension-dispatch file map.
pub trait FileMapLoader: Send + Sync {
    fn load(&self, file_map_path: &str) -> Result<FileMap>;
}

/// Orchestrator that derives and executes the stale-output removal set.
///
/// Holds an immutable configuration and three collaborators for the duration
/// of one run. The collaborators do all filesystem work; this type only
/// sequences them and assembles the pattern list in between.
pub struct CleanDestination {
    config: CleanConfig,
    lister: Box<dyn FileLister>,
    executor: Box<dyn DeleteExecutor>,
    loader: Box<dyn FileMapLoader>,
}

impl CleanDestination {
    /// Create an orchestrator wired to the default collaborators.
    ///
    /// The removal strategy (permanent vs. trash) is chosen here, once, from
    /// the permanence flag; nothing downstream inspects the flag again.
    pub fn new(config: CleanConfig) -> Self {
        let executor = GlobDeleteExecutor::new(config.permanent);
        Self::with_collaborators(
            config,
            Box::new(WalkdirLister::default()),
            Box::new(executor),
            Box::new(TomlFileMapLoader),
        )
    }

    /// Create an orchestrator with caller-supplied collaborators.
    pub fn with_collaborators(
        config: CleanConfig,
        lister: Box<dyn FileLister>,
        executor: Box<dyn DeleteExecutor>,
        loader: Box<dyn FileMapLoader>,
    ) -> Self {
        Self {
            config,
            lister,
            executor,
            loader,
        }
    }

    /// The configuration this orchestrator runs under.
    pub fn config(&self) -> &CleanConfig {
        &self.config
    }

    /// Execute one clean run.
    ///
    /// Collaborator failures propagate unchanged; there are no retries and no
    /// partial results. Returns whatever the deletion executor returns —
    /// `None` is valid and means "no report".
    pub fn execute(&self) -> Result<Option<Vec<String>>> {
        tracing::debug!(config = ?self.config, "executing clean");

        let file_map = match &self.config.file_map_path {
            Some(path) => {
                let map = self.loader.load(path)?;
                tracing::debug!(?map, path = %path, "loaded file map");
                Some(map)
            }
            None => None,
        };

        let src_paths = self.lister.list(&self.config.src_root)?;
        tracing::debug!(count = src_paths.len(), "matched source entries");

        let patterns = build_patterns(
            &src_paths,
            &self.config.src_root,
            &self.config.dest_root,
            self.config.base_pattern.as_deref(),
            file_map.as_ref(),
        );
        tracing::debug!(?patterns, "assembled deletion patterns");

        let deleted = self.executor.delete(
            &patterns,
            &DeleteOptions {
                dry_run: self.config.dry_run,
            },
        )?;

        if let Some(paths) = &deleted {
            tracing::info!(count = paths.len(), "stale destination entries resolved");
        }
        Ok(deleted)
    }
}
