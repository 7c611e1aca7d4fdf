//! Selection manifest loading from YAML files.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{AppError, AssetRef, RepoAddress};

/// A saved asset selection together with the repository it belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectionManifest {
    pub repository: RepoAddress,
    #[serde(default)]
    pub display_job_name: bool,
    #[serde(default)]
    pub assets: Vec<AssetRef>,
}

/// Parse a selection manifest from YAML content.
pub fn parse_selection(content: &str) -> Result<SelectionManifest, AppError> {
    serde_yaml::from_str(content).map_err(|e| AppError::ParseError {
        what: "selection manifest".to_string(),
        details: e.to_string(),
    })
}

/// Read and parse a selection manifest from disk.
pub fn load_selection(path: &Path) -> Result<SelectionManifest, AppError> {
    let content = fs::read_to_string(path)?;
    let manifest = parse_selection(&content).map_err(|err| match err {
        AppError::ParseError { what, details } => {
            AppError::ParseError { what: format!("{} {}", what, path.display()), details }
        }
        other => other,
    })?;
    tracing::debug!(path = %path.display(), assets = manifest.assets.len(), "loaded selection");
    Ok(manifest)
}
