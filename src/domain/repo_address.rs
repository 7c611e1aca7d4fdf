use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::AppError;

/// Address of a repository inside a code location.
///
/// Rendered and parsed as `<repository>@<location>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoAddress {
    pub name: String,
    pub location: String,
}

impl RepoAddress {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self { name: name.into(), location: location.into() }
    }

    /// Parse `<repository>@<location>`. Both halves must be non-empty.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let (name, location) = value
            .trim()
            .split_once('@')
            .ok_or_else(|| AppError::InvalidRepoAddress(value.to_string()))?;

        if name.is_empty() || location.is_empty() || location.contains('@') {
            return Err(AppError::InvalidRepoAddress(value.to_string()));
        }

        Ok(Self::new(name, location))
    }
}

impl fmt::Display for RepoAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.location)
    }
}

impl FromStr for RepoAddress {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for RepoAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RepoAddress::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Repository part of a GraphQL selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySelector {
    pub repository_name: String,
    pub repository_location_name: String,
}

/// Translate a repository address into the selector fields the launch endpoint expects.
pub fn repo_address_to_selector(repo_address: &RepoAddress) -> RepositorySelector {
    RepositorySelector {
        repository_name: repo_address.name.clone(),
        repository_location_name: repo_address.location.clone(),
    }
}
