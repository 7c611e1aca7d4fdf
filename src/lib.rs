//! asset-launch: decide whether a selection of assets can be refreshed as one run of the
//! job that owns them, and build the launch request for it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::dry_run_launcher::DryRunLauncher;
pub use adapters::graphql_run_launcher::GraphqlRunLauncher;
pub use adapters::selection_file::{SelectionManifest, load_selection, parse_selection};
pub use app::api::{CheckOutcome, LaunchOptions, LaunchOutcome, check, launch, launch_at, variables};
pub use domain::{
    AppError, AssetRef, ExecutionRequestVariables, LaunchButtonProps, LaunchControl,
    LauncherConfig, RepoAddress, build_variables, can_launch, render,
};
pub use ports::{LaunchedRun, RunLauncher};
