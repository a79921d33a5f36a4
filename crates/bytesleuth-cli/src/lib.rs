/// ByteSleuth CLI — argument parsing, interactive selection, and batch runs.
///
/// This crate contains the command-line frontend. Business logic lives in
/// `bytesleuth-core`.
pub mod app;
pub mod args;
pub mod picker;

pub use app::{run, run_cli, BatchOutcome, OutputMode, RunOptions};
pub use args::Cli;
pub use picker::{DialogPicker, Picker};
