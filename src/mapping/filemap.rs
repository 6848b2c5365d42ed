//! File-map types: how a structural destination path maps to the build
//! outputs a source file is actually expected to produce.

use std::collections::BTreeMap;
use std::fmt;

/// Mapped destination output(s) for one source file.
///
/// One source file may correspond to several build outputs (a bundle plus a
/// source map plus a declaration file), so the two shapes are explicit and
/// every call site handles both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappedPath {
    /// A single expected output path.
    Single(String),
    /// An ordered list of expected output paths.
    Many(Vec<String>),
}

impl MappedPath {
    /// Number of output paths carried by this result.
    pub fn len(&self) -> usize {
        match self {
            MappedPath::Single(_) => 1,
            MappedPath::Many(paths) => paths.len(),
        }
    }

    /// Whether this result carries no output path at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Transform from a structural destination path to the expected output(s).
pub type TransformFn = Box<dyn Fn(&str) -> MappedPath + Send + Sync>;

/// Extension-dispatch table describing expected build outputs.
///
/// The table form maps extensions (with leading dot, e.g. `".ts"`) to
/// transforms over the structural destination path. The suffix form is a
/// legacy degenerate map: a destination path is kept as-is when it ends with
/// the literal suffix and produces no expected output otherwise.
pub enum FileMap {
    /// Legacy literal-suffix form.
    Suffix(String),
    /// Extension-dispatch form. An empty table is a valid "match nothing" map.
    Table(BTreeMap<String, TransformFn>),
}

impl FileMap {
    /// Build a dispatch table from `(extension, transform)` pairs.
    pub fn table<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, TransformFn)>,
    {
        FileMap::Table(entries.into_iter().collect())
    }

    /// An empty dispatch table that protects nothing.
    pub fn empty() -> Self {
        FileMap::Table(BTreeMap::new())
    }
}

impl fmt::Debug for FileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileMap::Suffix(suffix) => f.debug_tuple("Suffix").field(suffix).finish(),
            FileMap::Table(table) => f
                .debug_struct("Table")
                .field("extensions", &table.keys().collect::<Vec<_>>())
                .finish(),
        }
    }
}
