use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::artifact_kind::ArtifactKind;

/// Default directory scanned for `*.sql` files.
pub fn default_ddl_dir() -> PathBuf {
    PathBuf::from("ddl")
}

/// Default project root generated artifacts are routed into.
pub fn default_project_root() -> PathBuf {
    PathBuf::from(".")
}

/// Default artifact selection: everything.
pub fn default_artifacts() -> Vec<ArtifactKind> {
    ArtifactKind::ALL.to_vec()
}

/// Top-level ddlgen configuration, stored as `ddlgen.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DdlgenConfig {
    /// Base Java package for generated classes. `None` or blank falls back to
    /// the generator's placeholder package.
    #[serde(default)]
    pub base_package: Option<String>,
    /// Directory holding one `CREATE TABLE` statement per `.sql` file.
    #[serde(default = "default_ddl_dir")]
    pub ddl_dir: PathBuf,
    /// Root of the target project.
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,
    /// Artifacts to generate, in generation order.
    #[serde(default = "default_artifacts")]
    pub artifacts: Vec<ArtifactKind>,
}

impl Default for DdlgenConfig {
    fn default() -> Self {
        Self {
            base_package: None,
            ddl_dir: default_ddl_dir(),
            project_root: default_project_root(),
            artifacts: default_artifacts(),
        }
    }
}

impl DdlgenConfig {
    /// Configured base package, ignoring blank values.
    pub fn base_package(&self) -> Option<&str> {
        self.base_package
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Directory holding DDL files.
    pub fn ddl_dir(&self) -> &Path {
        &self.ddl_dir
    }

    /// Root of the target project.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Selected artifacts, de-duplicated and in canonical order.
    pub fn artifacts(&self) -> Vec<ArtifactKind> {
        ArtifactKind::ALL
            .into_iter()
            .filter(|k| self.artifacts.contains(k))
            .collect()
    }
}
