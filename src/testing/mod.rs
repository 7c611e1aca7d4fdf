mod fake_run_launcher;

pub use fake_run_launcher::FakeRunLauncher;
