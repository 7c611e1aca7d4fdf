//! Run launcher implementation posting the launch mutation over HTTP using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, ExecutionRequestVariables, GraphqlConfig};
use crate::ports::{LaunchedRun, RunLauncher};

const DEFAULT_STATUS_MESSAGE: &str = "GraphQL request failed";
const LAUNCH_RUN_SUCCESS: &str = "LaunchRunSuccess";

pub const LAUNCH_PIPELINE_EXECUTION_MUTATION: &str = r#"
mutation LaunchPipelineExecution($executionParams: ExecutionParams!) {
  launchPipelineExecution(executionParams: $executionParams) {
    __typename
    ... on LaunchRunSuccess {
      run {
        runId
        pipelineName
      }
    }
    ... on RunConfigValidationInvalid {
      errors {
        message
      }
    }
    ... on Error {
      message
    }
  }
}
"#;

/// HTTP transport for the launch mutation.
///
/// One request per call; failures are reported, never retried.
#[derive(Debug, Clone)]
pub struct GraphqlRunLauncher {
    api_url: Url,
    client: Client,
}

impl GraphqlRunLauncher {
    pub fn new(config: &GraphqlConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::LaunchTransport {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_url: config.url.clone(), client })
    }

    fn send_request(&self, request: &GraphqlRequest<'_>) -> Result<GraphqlResponse, AppError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::LaunchTransport {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if !status.is_success() {
            let message = extract_error_message(&body_text).unwrap_or_else(|| {
                if !body_text.trim().is_empty() {
                    body_text.clone()
                } else if status.is_server_error() {
                    "Server error".to_string()
                } else {
                    DEFAULT_STATUS_MESSAGE.to_string()
                }
            });
            return Err(AppError::LaunchTransport { message, status: Some(status.as_u16()) });
        }

        serde_json::from_str(&body_text).map_err(|e| AppError::LaunchTransport {
            message: format!("Failed to parse response: {}", e),
            status: Some(status.as_u16()),
        })
    }
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'static str,
    variables: &'a ExecutionRequestVariables,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<LaunchData>,
    #[serde(default)]
    errors: Vec<MessageNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LaunchData {
    launch_pipeline_execution: LaunchResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LaunchResult {
    #[serde(rename = "__typename")]
    typename: String,
    #[serde(default)]
    run: Option<RunNode>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<MessageNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RunNode {
    run_id: String,
    #[serde(default)]
    pipeline_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MessageNode {
    message: String,
}

fn join_messages(nodes: &[MessageNode]) -> String {
    nodes.iter().map(|node| node.message.as_str()).collect::<Vec<_>>().join("; ")
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("errors")
        .and_then(|errors| errors.get(0))
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn into_launched_run(
    response: GraphqlResponse,
    pipeline_name: &str,
) -> Result<LaunchedRun, AppError> {
    if !response.errors.is_empty() {
        return Err(AppError::LaunchTransport {
            message: join_messages(&response.errors),
            status: None,
        });
    }

    let result = response
        .data
        .map(|data| data.launch_pipeline_execution)
        .ok_or_else(|| AppError::LaunchTransport {
            message: "No launch result in response".into(),
            status: None,
        })?;

    if result.typename != LAUNCH_RUN_SUCCESS {
        let mut message = result
            .message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| join_messages(&result.errors));
        if message.is_empty() {
            message = format!("{} returned no message", result.typename);
        }
        return Err(AppError::LaunchRejected { kind: result.typename, message });
    }

    let run = result.run.ok_or_else(|| AppError::LaunchTransport {
        message: "Launch succeeded without a run".into(),
        status: None,
    })?;

    Ok(LaunchedRun {
        run_id: run.run_id,
        pipeline_name: run.pipeline_name.unwrap_or_else(|| pipeline_name.to_string()),
    })
}

impl RunLauncher for GraphqlRunLauncher {
    fn launch(
        &self,
        pipeline_name: &str,
        variables: &ExecutionRequestVariables,
    ) -> Result<LaunchedRun, AppError> {
        tracing::info!(pipeline = pipeline_name, endpoint = %self.api_url, "launching run");
        let request = GraphqlRequest { query: LAUNCH_PIPELINE_EXECUTION_MUTATION, variables };
        let response = self.send_request(&request)?;
        let run = into_launched_run(response, pipeline_name)?;
        tracing::info!(run_id = %run.run_id, pipeline = %run.pipeline_name, "run launched");
        Ok(run)
    }
}
