mod run_launcher;

pub use run_launcher::{LaunchedRun, RunLauncher};
