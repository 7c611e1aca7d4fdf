pub mod asset;
pub mod config;
pub mod error;
pub mod execution_params;
pub mod launch_control;
pub mod repo_address;

pub use asset::{AssetRef, can_launch, launchable_job_name};
pub use config::{GraphqlConfig, LauncherConfig};
pub use error::AppError;
pub use execution_params::{
    DEFAULT_MODE, ExecutionMetadata, ExecutionParams, ExecutionRequestVariables, PipelineSelector,
    build_variables,
};
pub use launch_control::{LaunchButtonProps, LaunchControl, launch_title, render};
pub use repo_address::{RepoAddress, RepositorySelector, repo_address_to_selector};
