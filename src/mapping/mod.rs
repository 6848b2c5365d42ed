//! Path-mapping and exclusion-pattern core.
//!
//! This module is pure: it maps source paths to expected destination output
//! paths and assembles the glob pattern list that targets everything in the
//! destination tree except those expected outputs. It never touches the disk.

mod filemap;
mod mapper;
pub(crate) mod paths;
mod patterns;

pub use filemap::{FileMap, MappedPath, TransformFn};
pub use mapper::{map_dest_file, map_src_to_dest_path};
pub use patterns::{build_patterns, default_base_pattern};
