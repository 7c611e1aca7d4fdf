//! Launcher configuration loading from the filesystem and environment.

use std::fs;
use std::path::Path;

use crate::domain::config::{CONFIG_FILE_NAME, GRAPHQL_URL_ENV, parse_config_content};
use crate::domain::{AppError, LauncherConfig};

/// Resolve configuration for a command run in `work_dir`.
///
/// An explicit path must exist. Otherwise `asset-launch.toml` in `work_dir` is used when
/// present, falling back to defaults. `ASSET_LAUNCH_GRAPHQL_URL` overrides the endpoint.
pub fn load_config(explicit: Option<&Path>, work_dir: &Path) -> Result<LauncherConfig, AppError> {
    let config = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            read_config(path)?
        }
        None => {
            let default_path = work_dir.join(CONFIG_FILE_NAME);
            if default_path.is_file() {
                read_config(&default_path)?
            } else {
                LauncherConfig::default()
            }
        }
    };

    match std::env::var(GRAPHQL_URL_ENV) {
        Ok(raw) if !raw.trim().is_empty() => {
            let config = config.with_graphql_url(raw.trim())?;
            config.validate()?;
            Ok(config)
        }
        _ => Ok(config),
    }
}

fn read_config(path: &Path) -> Result<LauncherConfig, AppError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config_content(&content)?;
    tracing::debug!(path = %path.display(), url = %config.graphql.url, "loaded launcher config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_path_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("nope.toml")), dir.path()).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn explicit_path_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[graphql]\ntimeout_secs = 7\n").unwrap();

        let config = load_config(Some(&path), dir.path()).unwrap();
        assert_eq!(config.graphql.timeout_secs, 7);
    }

    #[test]
    fn invalid_file_content_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[graphql]\ntimeout_secs = 0\n").unwrap();

        assert!(load_config(None, dir.path()).is_err());
    }
}
