//! Assembles the glob pattern list handed to the deletion executor.

use crate::mapping::filemap::{FileMap, MappedPath};
use crate::mapping::mapper::map_dest_file;
use crate::mapping::paths::join_path;

/// Default base pattern matching everything under the destination root.
pub fn default_base_pattern(dest_root: &str) -> String {
    join_path(dest_root, "**/*")
}

/// Build the ordered deletion pattern list.
///
/// The first entry is the base "everything under destination" pattern (the
/// configured override, or `dest_root/**/*`). Each source path then appends
/// one `!`-negated entry per mapped output, in listing order, so a later
/// negation excludes matches of the earlier positive pattern. Unmapped
/// source paths append nothing. For a fixed listing order the output is
/// fully deterministic.
pub fn build_patterns(
    src_paths: &[String],
    src_root: &str,
    dest_root: &str,
    base_pattern: Option<&str>,
    file_map: Option<&FileMap>,
) -> Vec<String> {
    let base = base_pattern
        .map(str::to_string)
        .unwrap_or_else(|| default_base_pattern(dest_root));

    let mut patterns = vec![base];
    for src_path in src_paths {
        let mapped = map_dest_file(src_path, src_root, dest_root, file_map);
        tracing::trace!(src = %src_path, dest = ?mapped, "mapped source to destination");
        match mapped {
            Some(MappedPath::Single(dest)) => patterns.push(format!("!{dest}")),
            Some(MappedPath::Many(dests)) => {
                patterns.extend(dests.iter().map(|dest| format!("!{dest}")));
            }
            None => {}
        }
    }
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::filemap::TransformFn;

    fn listing(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_listing_yields_base_pattern_only() {
        let patterns = build_patterns(&[], "./src", "dest", None, None);
        assert_eq!(patterns, vec!["dest/**/*".to_string()]);
    }

    #[test]
    fn base_pattern_override_replaces_default() {
        let patterns = build_patterns(&[], "./src", "dest", Some("dist/js/**"), None);
        assert_eq!(patterns, vec!["dist/js/**".to_string()]);
    }

    #[test]
    fn default_base_pattern_normalizes_root() {
        assert_eq!(default_base_pattern("./dest"), "dest/**/*");
        assert_eq!(default_base_pattern("dest/"), "dest/**/*");
    }

    #[test]
    fn typescript_tree_with_dispatch_map() {
        // Mirrors the original tool's test corpus: a glob-bearing source root
        // and a map that rewrites bundle extensions (a no-op on .ts inputs).
        let map = FileMap::table(vec![(
            ".ts".to_string(),
            Box::new(|p: &str| MappedPath::Single(p.replace(".js", ".d.ts"))) as TransformFn,
        )]);
        let src_paths = listing(&[
            "src/file1.ts",
            "src/file2.ts",
            "src/folder1/",
            "src/folder2/",
            "src/folder1/file3.ts",
            "src/folder2/file4.ts",
        ]);

        let patterns = build_patterns(&src_paths, "./src/**/*", "./dest", None, Some(&map));

        assert_eq!(
            patterns,
            vec![
                "dest/**/*",
                "!../file1.ts",
                "!../file2.ts",
                "!../folder1",
                "!../folder2",
                "!../folder1/file3.ts",
                "!../folder2/file4.ts",
            ]
        );
    }

    #[test]
    fn multi_output_entries_expand_in_order() {
        let map = FileMap::table(vec![(
            ".ts".to_string(),
            Box::new(|p: &str| {
                let stem = p.trim_end_matches(".ts");
                MappedPath::Many(vec![
                    format!("{stem}.js"),
                    format!("{stem}.js.map"),
                    format!("{stem}.d.ts"),
                ])
            }) as TransformFn,
        )]);
        let src_paths = listing(&["src/app.ts", "src/readme.md"]);

        let patterns = build_patterns(&src_paths, "src", "dest", None, Some(&map));

        assert_eq!(
            patterns,
            vec![
                "dest/**/*",
                "!dest/app.js",
                "!dest/app.js.map",
                "!dest/app.d.ts",
            ]
        );
    }

    #[test]
    fn length_matches_mapped_output_counts() {
        let map = FileMap::table(vec![
            (
                ".one".to_string(),
                Box::new(|p: &str| MappedPath::Single(p.to_string())) as TransformFn,
            ),
            (
                ".three".to_string(),
                Box::new(|p: &str| {
                    MappedPath::Many(vec![p.to_string(), p.to_string(), p.to_string()])
                }) as TransformFn,
            ),
            (
                ".zero".to_string(),
                Box::new(|_: &str| MappedPath::Many(vec![])) as TransformFn,
            ),
        ]);
        let src_paths = listing(&["src/a.one", "src/b.three", "src/c.zero", "src/d.unmapped"]);

        let patterns = build_patterns(&src_paths, "src", "dest", None, Some(&map));

        // 1 base + 1 single + 3 sequence elements + 0 empty + 0 unmapped
        assert_eq!(patterns.len(), 5);
    }

    #[test]
    fn output_is_byte_identical_across_calls() {
        let src_paths = listing(&["src/a.ts", "src/b/", "src/b/c.ts"]);
        let first = build_patterns(&src_paths, "src", "dest", None, None);
        let second = build_patterns(&src_paths, "src", "dest", None, None);
        assert_eq!(first, second);
    }
}
