//! Pure path-string helpers for the mapping core.
//!
//! Everything here is lexical: no filesystem access, no `std::env`. Paths are
//! treated as `/`-separated strings because the pattern list handed to the
//! deletion executor uses glob syntax, and globs only use `/`.

/// Normalize host separators to the forward-slash form required by globs.
pub(crate) fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Split a normalized path into its meaningful components.
///
/// Empty components and `.` are dropped; `..` is kept as-is.
fn parts(path: &str) -> Vec<&str> {
    path.split('/').filter(|c| !c.is_empty() && *c != ".").collect()
}

/// Compute `path` relative to `base`, component-wise.
///
/// Both inputs are taken as given (both relative or both absolute); the result
/// keeps any leading `..` components, which the subsequent [`join_path`] call
/// collapses against the destination root. A trailing separator on `path` is
/// not preserved.
pub(crate) fn relative_path(base: &str, path: &str) -> String {
    let base = normalize_separators(base);
    let path = normalize_separators(path);
    let b = parts(&base);
    let p = parts(&path);

    let common = b.iter().zip(p.iter()).take_while(|(x, y)| x == y).count();
    let mut out: Vec<&str> = vec![".."; b.len() - common];
    out.extend(&p[common..]);
    out.join("/")
}

/// Join two path fragments and collapse `.` and `..` lexically.
///
/// Leading `..` components that cannot be collapsed are preserved for relative
/// inputs, matching POSIX `path.join` semantics.
pub(crate) fn join_path(a: &str, b: &str) -> String {
    let a = normalize_separators(a);
    let b = normalize_separators(b);
    let absolute = a.starts_with('/');

    let mut stack: Vec<&str> = Vec::new();
    for comp in a.split('/').chain(b.split('/')) {
        match comp {
            "" | "." => {}
            ".." => match stack.last() {
                Some(&last) if last != ".." => {
                    stack.pop();
                }
                _ if absolute => {}
                _ => stack.push(".."),
            },
            other => stack.push(other),
        }
    }

    let joined = stack.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Extract the extension of a path, including the leading dot.
///
/// Follows Node `path.extname` semantics: the extension of `file.d.ts` is
/// `.ts`, and a leading dot alone (`.gitignore`) is not an extension.
pub(crate) fn extension_of(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(i) if i > 0 => Some(&name[i..]),
        _ => None,
    }
}

/// Normalize a glob pattern into the form walked candidates take:
/// forward slashes, no leading `./`.
///
/// Candidates and patterns must agree on this form or globset matching
/// silently misses.
pub(crate) fn normalize_pattern(pattern: &str) -> String {
    let normalized = normalize_separators(pattern);
    normalized
        .strip_prefix("./")
        .map(str::to_string)
        .unwrap_or(normalized)
}

/// Whether a pattern contains glob metacharacters.
pub(crate) fn has_glob_meta(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '{'])
}

/// The literal directory prefix of a glob pattern.
///
/// `dest/js/**/*` yields `dest/js`; a pattern with no metacharacters yields
/// itself (minus any trailing separator); a pattern that is glob from the
/// first component yields `.`.
pub(crate) fn literal_prefix(pattern: &str) -> String {
    let pattern = normalize_separators(pattern);
    match pattern.find(['*', '?', '[', '{']) {
        None => pattern.trim_end_matches('/').to_string(),
        Some(i) => match pattern[..i].rfind('/') {
            Some(slash) if slash > 0 => pattern[..slash].to_string(),
            Some(0) => "/".to_string(),
            _ => ".".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_backslashes() {
        assert_eq!(normalize_separators(r"dest\sub\file.js"), "dest/sub/file.js");
    }

    #[test]
    fn relative_of_child_strips_base() {
        assert_eq!(relative_path("./src", "src/file1.ts"), "file1.ts");
        assert_eq!(relative_path("src", "src/folder1/file3.ts"), "folder1/file3.ts");
    }

    #[test]
    fn relative_walks_up_past_uncommon_components() {
        assert_eq!(
            relative_path("./src/**/*", "src/file1.ts"),
            "../../file1.ts"
        );
        assert_eq!(
            relative_path("./src/**/*", "src/folder1/file3.ts"),
            "../../folder1/file3.ts"
        );
    }

    #[test]
    fn relative_drops_trailing_separator() {
        assert_eq!(relative_path("./src/**/*", "src/folder1/"), "../../folder1");
    }

    #[test]
    fn join_collapses_parent_components() {
        assert_eq!(join_path("dest", "../../file1.ts"), "../file1.ts");
        assert_eq!(join_path("./dest", "sub/file.js"), "dest/sub/file.js");
        assert_eq!(join_path("dest", "../inside.ts"), "inside.ts");
    }

    #[test]
    fn join_keeps_absolute_roots() {
        assert_eq!(join_path("/out", "a/b.js"), "/out/a/b.js");
        assert_eq!(join_path("/out", "../../b.js"), "/b.js");
    }

    #[test]
    fn join_of_empty_is_dot() {
        assert_eq!(join_path("dest", ".."), ".");
    }

    #[test]
    fn extension_includes_leading_dot() {
        assert_eq!(extension_of("dest/file.ts"), Some(".ts"));
        assert_eq!(extension_of("dest/file.d.ts"), Some(".ts"));
        assert_eq!(extension_of("dest/.gitignore"), None);
        assert_eq!(extension_of("dest/README"), None);
        assert_eq!(extension_of("dest/trailing."), Some("."));
    }

    #[test]
    fn normalize_pattern_matches_candidate_form() {
        assert_eq!(normalize_pattern("./src/**/*"), "src/**/*");
        assert_eq!(normalize_pattern("./dest/**/*"), "dest/**/*");
        assert_eq!(normalize_pattern("dest/**/*"), "dest/**/*");
        assert_eq!(normalize_pattern(r".\dest\**\*"), "dest/**/*");
        assert_eq!(normalize_pattern("/abs/dest/**"), "/abs/dest/**");
    }

    #[test]
    fn relative_is_lexical_for_mixed_forms() {
        // Inputs are diffed as given; an absolute path against a relative
        // base is not resolved through the working directory.
        assert_eq!(relative_path("src", "/abs/src/a.ts"), "../abs/src/a.ts");
    }

    #[test]
    fn literal_prefix_of_patterns() {
        assert_eq!(literal_prefix("dest/**/*"), "dest");
        assert_eq!(literal_prefix("dest/js/*.js"), "dest/js");
        assert_eq!(literal_prefix("dest"), "dest");
        assert_eq!(literal_prefix("dest/"), "dest");
        assert_eq!(literal_prefix("**/*"), ".");
    }
}
