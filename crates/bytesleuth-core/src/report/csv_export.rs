/// CSV export — one flat row per analysed file.
///
/// List-valued fields (common bytes, patterns) are flattened into a single
/// `"; "`-separated cell. Scalars are written with full precision so that
/// reading the file back reproduces the exact values.
use crate::error::OutputError;
use crate::model::StatsRecord;
use crate::report::console::{join_bytes, join_patterns};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Name of the export file, created in the working directory.
pub const CSV_FILE_NAME: &str = "byte_stats.csv";

/// Separator between entries inside a list-valued cell.
pub const LIST_SEPARATOR: &str = "; ";

/// One CSV row. Column order follows field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRow {
    pub file_path: String,
    pub file_name: String,
    pub file_type: String,
    pub size_kb: f64,
    pub total_bytes: u64,
    pub nonzero_bytes: u64,
    pub unique_bytes: u64,
    pub top3_common: String,
    pub bottom3_uncommon: String,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    pub entropy: f64,
    pub rate_of_change: f64,
    pub rate_of_change_median: f64,
    pub rate_of_change_std_dev: f64,
    pub max_run: u64,
    pub average_run: f64,
    pub patterns_2byte: String,
    pub patterns_4byte: String,
}

impl From<&StatsRecord> for CsvRow {
    fn from(r: &StatsRecord) -> Self {
        Self {
            file_path: r.identity.path.to_string_lossy().into_owned(),
            file_name: r.identity.file_name.to_string(),
            file_type: r.identity.file_type.to_string(),
            size_kb: r.identity.size_kb(),
            total_bytes: r.total_bytes,
            nonzero_bytes: r.nonzero_bytes,
            unique_bytes: r.unique_bytes,
            top3_common: join_bytes(&r.top3_common, LIST_SEPARATOR),
            bottom3_uncommon: join_bytes(&r.bottom3_uncommon, LIST_SEPARATOR),
            mean: r.mean,
            median: r.median,
            std_dev: r.std_dev,
            skewness: r.skewness,
            kurtosis: r.kurtosis,
            entropy: r.entropy,
            rate_of_change: r.rate_of_change.mean,
            rate_of_change_median: r.rate_of_change.median,
            rate_of_change_std_dev: r.rate_of_change.std_dev,
            max_run: r.run_stats.max_run,
            average_run: r.run_stats.average_run,
            patterns_2byte: join_patterns(&r.patterns_2byte, LIST_SEPARATOR),
            patterns_4byte: join_patterns(&r.patterns_4byte, LIST_SEPARATOR),
        }
    }
}

/// Write `records` to `path`, replacing any existing file.
pub fn write_csv(path: &Path, records: &[StatsRecord]) -> Result<(), OutputError> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer
            .serialize(CsvRow::from(record))
            .map_err(|source| OutputError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
    }
    writer.flush()?;
    info!("wrote {} row(s) to {}", records.len(), path.display());
    Ok(())
}

/// Read rows previously written by [`write_csv`].
pub fn read_csv(path: &Path) -> Result<Vec<CsvRow>, OutputError> {
    let csv_err = |source: csv::Error| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    reader
        .deserialize()
        .collect::<Result<Vec<CsvRow>, csv::Error>>()
        .map_err(csv_err)
}
