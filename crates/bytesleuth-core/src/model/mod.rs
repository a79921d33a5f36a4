/// Data model for byte statistics.
///
/// Re-exports the frequency table and the per-file record.
pub mod frequency;
pub mod record;

pub use frequency::FrequencyTable;
pub use record::{ByteCount, FileIdentity, PatternCount, RateOfChange, RunStats, StatsRecord};
