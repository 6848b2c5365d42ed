//! Default file-map loader: reads a TOML extension-dispatch description.
//!
//! Two forms are accepted. The dispatch form maps extensions to output
//! templates over the structural destination path:
//!
//! ```toml
//! [map]
//! ".ts" = ["{stem}.js", "{stem}.js.map", "{stem}.d.ts"]
//! ".scss" = "{stem}.css"
//! ```
//!
//! The legacy literal-suffix form keeps only destination paths ending in the
//! suffix:
//!
//! ```toml
//! suffix = ".d.ts"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FileMapError, Result};
use crate::mapping::paths::extension_of;
use crate::mapping::{FileMap, MappedPath, TransformFn};

use super::orchestrator::FileMapLoader;

#[derive(Debug, Deserialize)]
struct FileMapSpec {
    suffix: Option<String>,
    #[serde(default)]
    map: BTreeMap<String, OutputSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum OutputSpec {
    One(String),
    Many(Vec<String>),
}

/// Expand an output template against a structural destination path.
///
/// `{path}` is the destination path itself, `{stem}` the path minus its
/// extension.
fn expand_template(template: &str, dest_path: &str) -> String {
    let stem = match extension_of(dest_path) {
        Some(ext) => &dest_path[..dest_path.len() - ext.len()],
        None => dest_path,
    };
    template.replace("{path}", dest_path).replace("{stem}", stem)
}

fn transform_for(spec: OutputSpec) -> TransformFn {
    match spec {
        OutputSpec::One(template) => {
            Box::new(move |dest| MappedPath::Single(expand_template(&template, dest)))
        }
        OutputSpec::Many(templates) => Box::new(move |dest| {
            MappedPath::Many(
                templates
                    .iter()
                    .map(|template| expand_template(template, dest))
                    .collect(),
            )
        }),
    }
}

/// Loads file maps from TOML files on disk.
pub struct TomlFileMapLoader;

impl FileMapLoader for TomlFileMapLoader {
    fn load(&self, file_map_path: &str) -> Result<FileMap> {
        let path = Path::new(file_map_path);
        let raw = fs::read_to_string(path).map_err(|source| FileMapError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let spec: FileMapSpec =
            toml::from_str(&raw).map_err(|source| FileMapError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;

        match spec.suffix {
            Some(_) if !spec.map.is_empty() => Err(FileMapError::Invalid(
                "`suffix` and `[map]` entries cannot be combined".into(),
            )
            .into()),
            Some(suffix) => Ok(FileMap::Suffix(suffix)),
            None => Ok(FileMap::table(
                spec.map
                    .into_iter()
                    .map(|(extension, output)| (extension, transform_for(output))),
            )),
        }
    }
}
