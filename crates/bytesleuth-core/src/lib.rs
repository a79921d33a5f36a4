/// ByteSleuth Core — byte statistics engine, data model, and I/O adapters.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends.
///
/// # Modules
///
/// - [`model`] — Frequency table and the per-file `StatsRecord`.
/// - [`analysis`] — The engine: moments, entropy, rankings, rate-of-change,
///   runs, and pattern detection over one byte slice.
/// - [`input`] — File/directory resolution and binary reads.
/// - [`report`] — Console, CSV, and JSON renderings of finished records.
/// - [`error`] — Input and output error types.
pub mod analysis;
pub mod error;
pub mod input;
pub mod model;
pub mod report;

pub use analysis::{analyze, analyze_with, AnalysisConfig};
pub use error::{InputError, OutputError};
pub use model::{FileIdentity, StatsRecord};
