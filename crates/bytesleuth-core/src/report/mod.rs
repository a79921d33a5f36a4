/// Report sink — renders analysed records for people and for tools.
///
/// - [`console`] — fixed-precision text report for the terminal.
/// - [`csv_export`] — one-row-per-file CSV (`byte_stats.csv`).
/// - [`json`] — JSON Lines for piping into other tools.
pub mod console;
pub mod csv_export;
pub mod json;

pub use console::{render_batch, render_record};
pub use csv_export::{read_csv, write_csv, CsvRow, CSV_FILE_NAME};
pub use json::render_json_lines;
