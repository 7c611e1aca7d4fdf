//! Variables for the launch mutation, assembled from a launchable selection.

use serde::Serialize;
use serde_json::{Map, Value};

use super::asset::{AssetRef, launchable_job_name};
use super::repo_address::{RepoAddress, RepositorySelector, repo_address_to_selector};

/// Execution mode used for every refresh run.
pub const DEFAULT_MODE: &str = "default";

/// Top-level GraphQL variables for a launch request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRequestVariables {
    pub execution_params: ExecutionParams,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionParams {
    pub mode: String,
    pub execution_metadata: ExecutionMetadata,
    pub run_config_data: Map<String, Value>,
    pub selector: PipelineSelector,
}

/// Run metadata. Refresh launches send none, which serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExecutionMetadata {}

/// Repository selector narrowed to one job and a subset of its ops.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSelector {
    #[serde(flatten)]
    pub repository: RepositorySelector,
    pub pipeline_name: String,
    pub solid_selection: Vec<String>,
}

/// Build launch variables for a selection that passed [`can_launch`](super::can_launch).
///
/// Op order follows the selection order. The result depends only on the inputs.
pub fn build_variables(
    repo_address: &RepoAddress,
    assets: &[AssetRef],
) -> ExecutionRequestVariables {
    debug_assert!(
        launchable_job_name(assets).is_some(),
        "build_variables called with a selection that cannot be launched"
    );

    let pipeline_name = launchable_job_name(assets).unwrap_or_default().to_string();
    let solid_selection: Vec<String> =
        assets.iter().filter_map(AssetRef::op_name).map(str::to_owned).collect();

    tracing::debug!(
        repository = %repo_address,
        pipeline = %pipeline_name,
        ops = solid_selection.len(),
        "assembled execution variables"
    );

    ExecutionRequestVariables {
        execution_params: ExecutionParams {
            mode: DEFAULT_MODE.to_string(),
            execution_metadata: ExecutionMetadata::default(),
            run_config_data: Map::new(),
            selector: PipelineSelector {
                repository: repo_address_to_selector(repo_address),
                pipeline_name,
                solid_selection,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn selection() -> Vec<AssetRef> {
        vec![AssetRef::new(Some("a"), Some("J")), AssetRef::new(Some("b"), Some("J"))]
    }

    #[test]
    fn selector_carries_job_and_ops_in_order() {
        let variables = build_variables(&RepoAddress::new("repo", "loc"), &selection());
        let selector = &variables.execution_params.selector;
        assert_eq!(selector.pipeline_name, "J");
        assert_eq!(selector.solid_selection, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn defaults_are_minimal() {
        let variables = build_variables(&RepoAddress::new("repo", "loc"), &selection());
        let params = &variables.execution_params;
        assert_eq!(params.mode, DEFAULT_MODE);
        assert_eq!(params.execution_metadata, ExecutionMetadata::default());
        assert!(params.run_config_data.is_empty());
    }

    #[test]
    fn repeated_builds_are_equal() {
        let address = RepoAddress::new("repo", "loc");
        let assets = selection();
        assert_eq!(build_variables(&address, &assets), build_variables(&address, &assets));
    }

    #[test]
    fn serializes_to_graphql_shape() {
        let variables = build_variables(&RepoAddress::new("repo", "loc"), &selection());
        assert_eq!(
            serde_json::to_value(&variables).unwrap(),
            json!({
                "executionParams": {
                    "mode": "default",
                    "executionMetadata": {},
                    "runConfigData": {},
                    "selector": {
                        "repositoryName": "repo",
                        "repositoryLocationName": "loc",
                        "pipelineName": "J",
                        "solidSelection": ["a", "b"]
                    }
                }
            })
        );
    }

    #[test]
    fn metadata_serializes_as_empty_object() {
        assert_eq!(serde_json::to_value(ExecutionMetadata::default()).unwrap(), json!({}));
    }
}
