//! Launcher configuration loaded from `asset-launch.toml`.

use serde::Deserialize;
use url::Url;

use super::AppError;

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "asset-launch.toml";

/// Environment variable overriding `graphql.url`.
pub const GRAPHQL_URL_ENV: &str = "ASSET_LAUNCH_GRAPHQL_URL";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LauncherConfig {
    /// GraphQL launch endpoint settings.
    #[serde(default)]
    pub graphql: GraphqlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlConfig {
    /// GraphQL endpoint URL.
    #[serde(default = "default_graphql_url")]
    pub url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self { url: default_graphql_url(), timeout_secs: default_timeout() }
    }
}

fn default_graphql_url() -> Url {
    Url::parse("http://127.0.0.1:3000/graphql").expect("default GraphQL URL is valid")
}

fn default_timeout() -> u64 {
    30
}

impl LauncherConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.graphql.timeout_secs == 0 {
            return Err(AppError::config_error("graphql.timeout_secs must be greater than zero"));
        }
        match self.graphql.url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(AppError::config_error(format!(
                "graphql.url must use http or https, got '{}'",
                other
            ))),
        }
    }

    /// Replace the endpoint URL with an override value.
    pub fn with_graphql_url(mut self, raw: &str) -> Result<Self, AppError> {
        self.graphql.url = Url::parse(raw).map_err(|e| {
            AppError::config_error(format!("Invalid {} value '{}': {}", GRAPHQL_URL_ENV, raw, e))
        })?;
        Ok(self)
    }
}

/// Parse and validate launcher configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<LauncherConfig, AppError> {
    let config: LauncherConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
