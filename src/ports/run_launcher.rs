//! Run launcher port definition.

use crate::domain::{AppError, ExecutionRequestVariables, LaunchButtonProps};

/// Run accepted by the launch endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchedRun {
    /// Run ID assigned by the endpoint.
    pub run_id: String,
    /// Job the run executes.
    pub pipeline_name: String,
}

/// Port for launching a run of a job.
pub trait RunLauncher {
    /// Submit one launch request.
    fn launch(
        &self,
        pipeline_name: &str,
        variables: &ExecutionRequestVariables,
    ) -> Result<LaunchedRun, AppError>;

    /// Launch from rendered control properties.
    ///
    /// Variables are produced here, at launch time.
    fn launch_button(&self, props: &LaunchButtonProps<'_>) -> Result<LaunchedRun, AppError> {
        if props.disabled {
            return Err(AppError::LaunchDisabled(props.pipeline_name.clone()));
        }
        let variables = props.variables();
        self.launch(&props.pipeline_name, &variables)
    }
}

impl<T: RunLauncher + ?Sized> RunLauncher for Box<T> {
    fn launch(
        &self,
        pipeline_name: &str,
        variables: &ExecutionRequestVariables,
    ) -> Result<LaunchedRun, AppError> {
        (**self).launch(pipeline_name, variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssetRef, RepoAddress, build_variables, render};
    use crate::testing::FakeRunLauncher;

    #[test]
    fn launch_button_sends_current_variables() {
        let address = RepoAddress::new("repo", "loc");
        let assets = vec![AssetRef::new(Some("a"), Some("J")), AssetRef::new(Some("b"), Some("J"))];
        let control = render(&address, &assets, false);
        let launcher = FakeRunLauncher::new("run-1");

        let run = launcher.launch_button(control.props().unwrap()).unwrap();

        assert_eq!(run.run_id, "run-1");
        assert_eq!(run.pipeline_name, "J");
        let launched = launcher.launched();
        assert_eq!(launched.len(), 1);
        assert_eq!(launched[0].1, build_variables(&address, &assets));
    }

    #[test]
    fn disabled_props_are_refused() {
        let address = RepoAddress::new("repo", "loc");
        let assets = vec![AssetRef::new(Some("a"), Some("J"))];
        let props =
            LaunchButtonProps::new("J", true, "Refresh", || build_variables(&address, &assets));
        let launcher = FakeRunLauncher::new("run-1");

        let err = launcher.launch_button(&props).unwrap_err();

        assert!(matches!(err, AppError::LaunchDisabled(job) if job == "J"));
        assert!(launcher.launched().is_empty());
    }
}
