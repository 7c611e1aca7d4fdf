pub mod config_file;
pub mod dry_run_launcher;
pub mod graphql_run_launcher;
pub mod selection_file;
