//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together selection loading,
//! rendering, and launching.

use std::path::{Path, PathBuf};

use crate::adapters::config_file::load_config;
use crate::adapters::dry_run_launcher::DryRunLauncher;
use crate::adapters::graphql_run_launcher::GraphqlRunLauncher;
use crate::adapters::selection_file::{SelectionManifest, load_selection};
use crate::domain::{AppError, ExecutionRequestVariables, LaunchControl, render};
use crate::ports::{LaunchedRun, RunLauncher};

/// What the refresh control shows for a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// No single run covers the selection.
    NothingLaunchable,
    /// The selection launches as one run of `job_name`.
    Launchable { job_name: String, title: String },
}

/// Result of a launch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    NothingLaunchable,
    Launched(LaunchedRun),
}

/// Options for [`launch`].
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Print the request instead of sending it.
    pub dry_run: bool,
    /// Explicit configuration file.
    pub config_path: Option<PathBuf>,
    /// Show the job name in the control title regardless of the manifest.
    pub display_job_name: bool,
}

/// Evaluate a selection manifest without launching anything.
pub fn check(selection_path: &Path, display_job_name: bool) -> Result<CheckOutcome, AppError> {
    let manifest = load_selection(selection_path)?;
    Ok(check_manifest(&manifest, display_job_name))
}

/// Evaluate an already-loaded selection.
pub fn check_manifest(manifest: &SelectionManifest, display_job_name: bool) -> CheckOutcome {
    let display = manifest.display_job_name || display_job_name;
    match render(&manifest.repository, &manifest.assets, display) {
        LaunchControl::Empty => CheckOutcome::NothingLaunchable,
        LaunchControl::Launchable(props) => {
            CheckOutcome::Launchable { job_name: props.pipeline_name, title: props.title }
        }
    }
}

/// Build the launch variables for a selection manifest, if it is launchable.
pub fn variables(selection_path: &Path) -> Result<Option<ExecutionRequestVariables>, AppError> {
    let manifest = load_selection(selection_path)?;
    let control = render(&manifest.repository, &manifest.assets, manifest.display_job_name);
    Ok(control.props().map(|props| props.variables()))
}

/// Launch the selection in `selection_path`, resolving configuration from the current directory.
pub fn launch(selection_path: &Path, options: &LaunchOptions) -> Result<LaunchOutcome, AppError> {
    launch_at(std::env::current_dir()?, selection_path, options)
}

/// Launch the selection in `selection_path`, resolving configuration from `work_dir`.
pub fn launch_at(
    work_dir: impl AsRef<Path>,
    selection_path: &Path,
    options: &LaunchOptions,
) -> Result<LaunchOutcome, AppError> {
    let manifest = load_selection(selection_path)?;

    if options.dry_run {
        return launch_manifest(&manifest, options.display_job_name, &DryRunLauncher);
    }

    let config = load_config(options.config_path.as_deref(), work_dir.as_ref())?;
    let launcher = GraphqlRunLauncher::new(&config.graphql)?;
    launch_manifest(&manifest, options.display_job_name, &launcher)
}

/// Render the selection and hand it to `launcher` when there is something to launch.
pub fn launch_manifest<L: RunLauncher + ?Sized>(
    manifest: &SelectionManifest,
    display_job_name: bool,
    launcher: &L,
) -> Result<LaunchOutcome, AppError> {
    let display = manifest.display_job_name || display_job_name;
    match render(&manifest.repository, &manifest.assets, display) {
        LaunchControl::Empty => Ok(LaunchOutcome::NothingLaunchable),
        LaunchControl::Launchable(props) => {
            launcher.launch_button(&props).map(LaunchOutcome::Launched)
        }
    }
}
