//! package.json loading.
//!
//! Only the fields ny acts on are modelled: the `scripts` table of the
//! project, and the type-declaration fields of installed packages. Values
//! are kept loose so that unusual third-party manifests still parse.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::detection::find_in_parents;
use crate::error::{NyError, Result};

/// File name of the manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// The parts of a package.json ny reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageJson {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub scripts: BTreeMap<String, serde_json::Value>,

    #[serde(default)]
    pub types: Option<serde_json::Value>,

    #[serde(default)]
    pub typings: Option<serde_json::Value>,

    #[serde(default)]
    pub exports: Option<serde_json::Value>,
}

impl PackageJson {
    /// Parse manifest contents.
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| NyError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| NyError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(path, &contents)
    }

    /// Command text of a declared script.
    pub fn script(&self, name: &str) -> Option<&str> {
        self.scripts.get(name).and_then(|value| value.as_str())
    }

    /// Whether the package ships its own type declarations.
    ///
    /// True for a `types`/`typings` field or a `types` condition anywhere in
    /// `exports`.
    pub fn declares_types(&self) -> bool {
        self.types.is_some()
            || self.typings.is_some()
            || self.exports.as_ref().is_some_and(has_types_condition)
    }
}

fn has_types_condition(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Object(map) => map
            .iter()
            .any(|(key, nested)| key == "types" || has_types_condition(nested)),
        serde_json::Value::Array(items) => items.iter().any(has_types_condition),
        _ => false,
    }
}

/// A project manifest together with its location.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub path: PathBuf,
    pub package: PackageJson,
}

impl Manifest {
    /// Find and load the nearest package.json at or above `dir`.
    ///
    /// Returns `Ok(None)` when there is none.
    pub fn find(dir: &Path) -> Result<Option<Self>> {
        let Some(path) = find_in_parents(dir, MANIFEST_FILE) else {
            return Ok(None);
        };
        let package = PackageJson::load(&path)?;
        tracing::debug!("Loaded manifest {}", path.display());

        Ok(Some(Self { path, package }))
    }

    /// Directory containing the manifest.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }
}
