use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ExecutionRequestVariables};
use crate::ports::{LaunchedRun, RunLauncher};

#[derive(Clone)]
pub struct FakeRunLauncher {
    pub launches: Arc<Mutex<Vec<(String, ExecutionRequestVariables)>>>,
    pub response_run_id: String,
}

impl FakeRunLauncher {
    pub fn new(response_run_id: impl Into<String>) -> Self {
        Self { launches: Arc::new(Mutex::new(vec![])), response_run_id: response_run_id.into() }
    }

    pub fn launched(&self) -> Vec<(String, ExecutionRequestVariables)> {
        self.launches.lock().unwrap().clone()
    }
}

impl RunLauncher for FakeRunLauncher {
    fn launch(
        &self,
        pipeline_name: &str,
        variables: &ExecutionRequestVariables,
    ) -> Result<LaunchedRun, AppError> {
        self.launches.lock().unwrap().push((pipeline_name.to_string(), variables.clone()));
        Ok(LaunchedRun {
            run_id: self.response_run_id.clone(),
            pipeline_name: pipeline_name.to_string(),
        })
    }
}
