/// Analysis modules — the byte statistics engine.
///
/// Each submodule is a set of pure functions over the same byte slice (or
/// its frequency table). [`analyze`] runs all of them and assembles a
/// [`StatsRecord`].
pub mod distribution;
pub mod patterns;
pub mod ranking;
pub mod rate;
pub mod runs;

pub use distribution::{median, moments, shannon_entropy, Moments};
pub use patterns::top_patterns;
pub use ranking::{bottom_uncommon, top_common};
pub use rate::rate_of_change;
pub use runs::run_stats;

use crate::model::{FileIdentity, FrequencyTable, StatsRecord};
use std::time::Instant;
use tracing::debug;

/// Tunables for a single analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Entries in the most-common and least-common byte lists.
    pub top_bytes: usize,
    /// Entries in each of the 2-byte and 4-byte pattern lists.
    pub top_patterns: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_bytes: 3,
            top_patterns: 3,
        }
    }
}

/// Analyse `data` with the default configuration.
pub fn analyze(identity: FileIdentity, data: &[u8]) -> StatsRecord {
    analyze_with(identity, data, &AnalysisConfig::default())
}

/// Analyse `data` and build its [`StatsRecord`].
///
/// Total over all inputs: empty and single-byte slices produce a record
/// with zero statistics and empty lists rather than an error.
pub fn analyze_with(identity: FileIdentity, data: &[u8], config: &AnalysisConfig) -> StatsRecord {
    let start = Instant::now();

    if data.is_empty() {
        debug!(path = %identity.path.display(), "zero-length input");
    }

    let table = FrequencyTable::from_bytes(data);
    let shape = moments(&table);

    let record = StatsRecord {
        total_bytes: table.total(),
        nonzero_bytes: table.total() - table.count(0),
        unique_bytes: table.distinct() as u64,
        top3_common: top_common(&table, config.top_bytes),
        bottom3_uncommon: bottom_uncommon(&table, config.top_bytes),
        mean: shape.mean,
        median: median(&table),
        std_dev: shape.std_dev,
        skewness: shape.skewness,
        kurtosis: shape.kurtosis,
        entropy: shannon_entropy(&table),
        rate_of_change: rate_of_change(data),
        run_stats: run_stats(data),
        patterns_2byte: top_patterns::<2>(data, config.top_patterns),
        patterns_4byte: top_patterns::<4>(data, config.top_patterns),
        identity,
    };

    debug!(
        path = %record.identity.path.display(),
        bytes = record.total_bytes,
        elapsed = ?start.elapsed(),
        "analysis complete"
    );

    record
}
