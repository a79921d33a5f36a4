/// The per-file analysis result and the small value types it is built from.
///
/// A `StatsRecord` is produced once per file by [`crate::analysis::analyze`]
/// and is never mutated afterwards. It owns no reference to the analysed
/// bytes, so the byte buffer can be dropped as soon as analysis returns.
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Identity of an analysed file, carried through from input resolution.
///
/// Nothing here is computed from the file's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileIdentity {
    /// Path as it was requested (or returned by the picker).
    pub path: PathBuf,
    /// Base name only.
    pub file_name: CompactString,
    /// Extension including the leading dot, or empty when there is none.
    pub file_type: CompactString,
    /// On-disk size in bytes.
    pub size_bytes: u64,
}

impl FileIdentity {
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| CompactString::new(n.to_string_lossy()))
            .unwrap_or_default();
        let file_type = extension_with_dot(&path);
        Self {
            path,
            file_name,
            file_type,
            size_bytes,
        }
    }

    /// Display-only size in kilobytes (1 KB = 1024 bytes).
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

fn extension_with_dot(path: &Path) -> CompactString {
    match path.extension() {
        Some(ext) => {
            let mut s = CompactString::new(".");
            s.push_str(&ext.to_string_lossy());
            s
        }
        None => CompactString::default(),
    }
}

/// A byte value together with how often it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteCount {
    pub byte: u8,
    pub count: u64,
}

impl fmt::Display for ByteCount {
    /// Renders as `0x0a (count: 12)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x} (count: {})", self.byte, self.count)
    }
}

/// A recurring fixed-width byte subsequence and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCount {
    pub bytes: Vec<u8>,
    pub count: u64,
}

impl PatternCount {
    /// Lowercase hex of the pattern bytes, e.g. `"0d0a"`.
    pub fn hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Display for PatternCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (count: {})", self.hex(), self.count)
    }
}

/// Run-length summary over maximal runs of identical consecutive bytes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunStats {
    pub max_run: u64,
    pub average_run: f64,
}

/// Summary of the absolute differences between consecutive bytes.
///
/// `mean` is the headline rate-of-change figure; `median` and `std_dev`
/// (population) describe how that change is spread.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RateOfChange {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// Complete byte statistics for one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub identity: FileIdentity,

    // ── Occurrence ─────────────────────────────────────
    pub total_bytes: u64,
    /// Bytes whose value is not `0x00`.
    pub nonzero_bytes: u64,
    /// Distinct byte values present.
    pub unique_bytes: u64,
    pub top3_common: Vec<ByteCount>,
    pub bottom3_uncommon: Vec<ByteCount>,

    // ── Distribution (population semantics) ────────────
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub skewness: f64,
    /// Excess kurtosis: fourth standardized moment minus 3.
    pub kurtosis: f64,
    /// Shannon entropy in bits per byte, in `[0, 8]`.
    pub entropy: f64,

    // ── Structure ──────────────────────────────────────
    pub rate_of_change: RateOfChange,
    pub run_stats: RunStats,
    pub patterns_2byte: Vec<PatternCount>,
    pub patterns_4byte: Vec<PatternCount>,
}

impl StatsRecord {
    /// `true` for a zero-length file. Such records are valid but every
    /// statistic is zero and every list is empty.
    pub fn is_degenerate(&self) -> bool {
        self.total_bytes == 0
    }
}
