//! Clean orchestration and default collaborator implementations.
//!
//! This module provides:
//! - The [`CleanDestination`] orchestrator and its collaborator traits
//! - A walkdir-backed source lister
//! - A globset-backed deletion executor with permanent and trash strategies
//! - A TOML file-map loader

mod executor;
mod lister;
mod loader;
mod orchestrator;

pub use executor::{GlobDeleteExecutor, PermanentRemove, RemoveStrategy, TrashRemove};
pub use lister::WalkdirLister;
pub use loader::TomlFileMapLoader;
pub use orchestrator::{CleanDestination, DeleteExecutor, DeleteOptions, FileLister, FileMapLoader};
