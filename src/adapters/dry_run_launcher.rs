use crate::domain::{AppError, ExecutionRequestVariables};
use crate::ports::{LaunchedRun, RunLauncher};

/// Launcher that prints the request instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct DryRunLauncher;

impl RunLauncher for DryRunLauncher {
    fn launch(
        &self,
        pipeline_name: &str,
        variables: &ExecutionRequestVariables,
    ) -> Result<LaunchedRun, AppError> {
        let body = serde_json::to_string_pretty(variables)?;
        println!("=== DRY RUN ===");
        println!("Would launch job: {}", pipeline_name);
        println!("{}", body);

        Ok(LaunchedRun {
            run_id: format!("dry-run-{}", chrono::Utc::now().timestamp()),
            pipeline_name: pipeline_name.to_string(),
        })
    }
}
