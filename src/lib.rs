//! clean-dest - Removes stale build outputs from a destination tree
//!
//! This crate provides functionality for:
//! - Mapping source paths to their expected destination output paths
//! - Building a glob include/exclude pattern list that targets everything in
//!   the destination except those expected outputs
//! - Deleting (or previewing deletion of) the stale set, permanently or into
//!   the trash

pub mod cleaner;
pub mod cli;
pub mod config;
pub mod error;
pub mod mapping;

// Re-export commonly used types
pub use cleaner::CleanDestination;
pub use config::{CleanConfig, Config};
pub use error::{CleanDestError, Result};
pub use mapping::{FileMap, MappedPath};
