//! Maps one source path to its expected destination output path(s).

use crate::mapping::filemap::{FileMap, MappedPath};
use crate::mapping::paths::{extension_of, join_path, relative_path};

/// Compute the structural destination path for a source path.
///
/// The source path is taken relative to the source root and joined onto the
/// destination root; separators are normalized to `/` for glob consumption.
pub fn map_src_to_dest_path(src_path: &str, src_root: &str, dest_root: &str) -> String {
    let relative = relative_path(src_root, src_path);
    join_path(dest_root, &relative)
}

/// Map a source path to zero, one, or many expected destination paths.
///
/// Directory entries (trailing separator) and runs without a file map pass
/// through 1:1 as the structural destination path. With a dispatch-table map,
/// the destination path's extension selects the transform; with the legacy
/// literal-suffix map, the destination path is kept only when it ends with
/// the suffix. `None` means the source entry has no expected output and
/// protects nothing in the destination tree.
///
/// Pure and deterministic: no I/O, no side effects.
pub fn map_dest_file(
    src_path: &str,
    src_root: &str,
    dest_root: &str,
    file_map: Option<&FileMap>,
) -> Option<MappedPath> {
    let dest_path = map_src_to_dest_path(src_path, src_root, dest_root);
    let is_directory = src_path.ends_with('/') || src_path.ends_with('\\');

    let Some(file_map) = file_map else {
        return Some(MappedPath::Single(dest_path));
    };
    if is_directory {
        return Some(MappedPath::Single(dest_path));
    }

    match file_map {
        FileMap::Suffix(suffix) => {
            if dest_path.ends_with(suffix.as_str()) {
                Some(MappedPath::Single(dest_path))
            } else {
                None
            }
        }
        FileMap::Table(table) => {
            let extension = extension_of(&dest_path)?;
            let transform = table.get(extension)?;
            Some(transform(&dest_path))
        }
    }
}
