//! Render outcome for a refresh control over the current asset selection.

use std::fmt;

use super::asset::{AssetRef, launchable_job_name};
use super::execution_params::{ExecutionRequestVariables, build_variables};
use super::repo_address::RepoAddress;

/// Title shown when the job name is not displayed.
pub const REFRESH_TITLE: &str = "Refresh";

/// Either nothing to launch, or a control wired to one job.
#[derive(Debug)]
pub enum LaunchControl<'a> {
    Empty,
    Launchable(LaunchButtonProps<'a>),
}

impl<'a> LaunchControl<'a> {
    pub fn is_launchable(&self) -> bool {
        matches!(self, LaunchControl::Launchable(_))
    }

    pub fn props(&self) -> Option<&LaunchButtonProps<'a>> {
        match self {
            LaunchControl::Empty => None,
            LaunchControl::Launchable(props) => Some(props),
        }
    }
}

/// Properties handed to a [`RunLauncher`](crate::ports::RunLauncher).
///
/// Variables are produced on demand from the borrowed selection, so they reflect the
/// selection at launch time rather than at render time.
pub struct LaunchButtonProps<'a> {
    pub pipeline_name: String,
    pub disabled: bool,
    pub title: String,
    get_variables: Box<dyn Fn() -> ExecutionRequestVariables + 'a>,
}

impl<'a> LaunchButtonProps<'a> {
    pub fn new(
        pipeline_name: impl Into<String>,
        disabled: bool,
        title: impl Into<String>,
        get_variables: impl Fn() -> ExecutionRequestVariables + 'a,
    ) -> Self {
        Self {
            pipeline_name: pipeline_name.into(),
            disabled,
            title: title.into(),
            get_variables: Box::new(get_variables),
        }
    }

    /// Evaluate the variables producer.
    pub fn variables(&self) -> ExecutionRequestVariables {
        (self.get_variables)()
    }
}

impl fmt::Debug for LaunchButtonProps<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaunchButtonProps")
            .field("pipeline_name", &self.pipeline_name)
            .field("disabled", &self.disabled)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

pub fn launch_title(job_name: &str, display_job_name: bool) -> String {
    if display_job_name { format!("Refresh using {}", job_name) } else { REFRESH_TITLE.to_string() }
}

/// Decide what to show for the selection.
pub fn render<'a>(
    repo_address: &'a RepoAddress,
    assets: &'a [AssetRef],
    display_job_name: bool,
) -> LaunchControl<'a> {
    let Some(job_name) = launchable_job_name(assets) else {
        tracing::debug!(assets = assets.len(), "selection has nothing launchable");
        return LaunchControl::Empty;
    };

    LaunchControl::Launchable(LaunchButtonProps::new(
        job_name,
        false,
        launch_title(job_name, display_job_name),
        move || build_variables(repo_address, assets),
    ))
}
