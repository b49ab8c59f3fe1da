//! YAML fixture manifests.
//!
//! A manifest is a YAML file holding a list of fixture entries. Loading is a
//! plain serialization front end: the entries carry the raw argument list as
//! data, and conversion into a declaration goes through the ordinary
//! setters, so skip metadata and descriptions behave exactly as they would
//! from any other declaration site.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use walkdir::WalkDir;

use crate::fixture::{FixtureArg, FixtureDeclaration};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse manifest {}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("failed to walk manifest directory")]
    Walk(#[from] walkdir::Error),
}

/// One fixture entry in a manifest file.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    #[serde(default)]
    pub args: Vec<FixtureArg>,
    pub description: Option<String>,
    #[serde(default)]
    pub skip: bool,
    pub skip_reason: Option<String>,
}

impl ManifestEntry {
    /// Builds the declaration this entry describes.
    ///
    /// A `skip_reason` takes precedence over the bare `skip` flag, since
    /// recording a reason already implies the skip.
    pub fn declaration(&self) -> FixtureDeclaration {
        let mut declaration = FixtureDeclaration::new(self.args.clone());
        if let Some(text) = &self.description {
            declaration.set_description(text.clone());
        }
        if self.skip_reason.is_some() {
            declaration.set_ignore_reason(self.skip_reason.clone());
        } else if self.skip {
            declaration.set_ignored(true);
        }
        declaration
    }
}

/// Recursively scans a directory for `.yaml`/`.yml` manifest files.
///
/// The returned list is sorted to ensure deterministic declaration order.
pub fn discover_manifest_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>, ManifestError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !is_manifest_file(path) {
            continue;
        }
        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

/// Loads and parses the fixture entries of a single manifest file.
pub fn load_manifest(path: &Path) -> Result<Vec<ManifestEntry>, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads every manifest under `root`, in discovery order.
pub fn load_all<P: AsRef<Path>>(root: P) -> Result<Vec<ManifestEntry>, ManifestError> {
    let mut entries = Vec::new();
    for path in discover_manifest_files(root)? {
        entries.extend(load_manifest(&path)?);
    }
    Ok(entries)
}

/// Returns true if the given path has a manifest extension.
fn is_manifest_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml")
}
