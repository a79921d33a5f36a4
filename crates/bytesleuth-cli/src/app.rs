/// Batch orchestration — selection, analysis, reporting, exit status.
///
/// Files are processed one at a time: each is read, analysed, and its bytes
/// dropped before the next is opened. A failure on one path is recorded and
/// reported but never stops the rest of the batch.
use crate::args::Cli;
use crate::picker::Picker;
use anyhow::Context;
use bytesleuth_core::input::{read_input, Selection};
use bytesleuth_core::report::{self, CSV_FILE_NAME};
use bytesleuth_core::{analyze_with, AnalysisConfig, InputError, OutputError, StatsRecord};
use chrono::Local;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;

/// How finished records are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Everything a run needs, decoupled from clap so tests can build it directly.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// `None`: flag absent. `Some(empty)`: flag given without paths.
    pub files: Option<Vec<PathBuf>>,
    pub dirs: Option<Vec<PathBuf>>,
    /// Where to write the CSV export, or `None` to skip it.
    pub csv_path: Option<PathBuf>,
    pub output: OutputMode,
    pub config: AnalysisConfig,
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            files: cli.files.clone(),
            dirs: cli.dirs.clone(),
            csv_path: cli.generate_csv.then(|| PathBuf::from(CSV_FILE_NAME)),
            output: if cli.json {
                OutputMode::Json
            } else {
                OutputMode::Text
            },
            config: AnalysisConfig {
                top_patterns: cli.top_patterns,
                ..AnalysisConfig::default()
            },
        }
    }
}

/// Result of one batch.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<StatsRecord>,
    pub input_errors: Vec<InputError>,
    pub output_error: Option<OutputError>,
}

impl BatchOutcome {
    /// `true` when every requested path was analysed and any requested
    /// export was written.
    pub fn is_success(&self) -> bool {
        !self.records.is_empty() && self.input_errors.is_empty() && self.output_error.is_none()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Work out which files to analyse from the flags, falling back to the
/// picker where a flag was given without paths or no flag was given.
pub fn select_inputs(opts: &RunOptions, picker: &dyn Picker) -> Selection {
    let mut selection = Selection::new();

    match &opts.files {
        Some(files) if !files.is_empty() => selection.add_files(files),
        Some(_) => {
            info!("File flag set with no arguments; launching file picker...");
            selection.add_files(&picker.pick_files());
        }
        None => {}
    }

    match &opts.dirs {
        Some(dirs) if !dirs.is_empty() => selection.add_dirs(dirs),
        Some(_) => {
            info!("Directory flag set with no arguments; launching directory picker...");
            if let Some(dir) = picker.pick_directory() {
                selection.add_dirs(&[dir]);
            }
        }
        None => {}
    }

    if opts.files.is_none() && opts.dirs.is_none() {
        info!("No paths given; launching file picker...");
        selection.add_files(&picker.pick_files());
    }

    if selection.is_empty() && selection.errors.is_empty() {
        selection.errors.push(InputError::NoneSelected);
    }
    selection
}

/// Run a full batch, writing the report to `out` and problems to `err`.
///
/// Only failures to write to `out`/`err` themselves are returned as `Err`;
/// input and export problems are collected in the [`BatchOutcome`].
pub fn run(
    opts: &RunOptions,
    picker: &dyn Picker,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<BatchOutcome> {
    let start = Instant::now();
    let selection = select_inputs(opts, picker);

    let mut outcome = BatchOutcome::default();
    for e in selection.errors {
        writeln!(err, "Error: {e}").context("writing to stderr")?;
        outcome.input_errors.push(e);
    }

    if selection.files.is_empty() {
        writeln!(err, "No valid files provided. Exiting...").context("writing to stderr")?;
        return Ok(outcome);
    }

    info!("analysing {} file(s)", selection.files.len());
    for path in &selection.files {
        match read_input(path) {
            Ok(input) => {
                if input.bytes.is_empty() {
                    writeln!(
                        err,
                        "Warning: '{}' is empty; statistics are degenerate.",
                        path.display()
                    )
                    .context("writing to stderr")?;
                }
                outcome
                    .records
                    .push(analyze_with(input.identity, &input.bytes, &opts.config));
            }
            Err(e) => {
                writeln!(err, "Error: {e}").context("writing to stderr")?;
                outcome.input_errors.push(e);
            }
        }
    }

    if outcome.records.is_empty() {
        writeln!(err, "No data to analyze. Exiting...").context("writing to stderr")?;
        return Ok(outcome);
    }

    match opts.output {
        OutputMode::Text => {
            let text = report::render_batch(&outcome.records, &Local::now());
            out.write_all(text.as_bytes()).context("writing report")?;
        }
        OutputMode::Json => match report::render_json_lines(&outcome.records) {
            Ok(lines) => out.write_all(lines.as_bytes()).context("writing report")?,
            Err(e) => {
                writeln!(err, "Error: {e}").context("writing to stderr")?;
                outcome.output_error = Some(e);
            }
        },
    }

    if let Some(csv_path) = &opts.csv_path {
        match report::write_csv(csv_path, &outcome.records) {
            Ok(()) => {
                // stdout stays pure JSON Lines in JSON mode.
                let sink: &mut dyn Write = match opts.output {
                    OutputMode::Text => &mut *out,
                    OutputMode::Json => &mut *err,
                };
                writeln!(sink, "Statistics saved to '{}'.", csv_path.display())
                    .context("writing report")?;
            }
            Err(e) => {
                writeln!(err, "Error: {e}").context("writing to stderr")?;
                outcome.output_error = Some(e);
            }
        }
    }

    info!(
        records = outcome.records.len(),
        errors = outcome.input_errors.len(),
        elapsed = ?start.elapsed(),
        "batch finished"
    );
    Ok(outcome)
}

/// Entry point used by the binary: stdout/stderr and the native picker.
pub fn run_cli(cli: &Cli) -> anyhow::Result<ExitCode> {
    let opts = RunOptions::from(cli);
    let picker = crate::picker::DialogPicker;
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let outcome = run(&opts, &picker, &mut stdout.lock(), &mut stderr.lock())?;
    Ok(outcome.exit_code())
}
