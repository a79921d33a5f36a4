/// Distribution statistics over byte values — moments, median, entropy.
///
/// Everything here works on a [`FrequencyTable`] rather than the raw bytes:
/// at most 256 buckets are visited no matter how large the file is, and the
/// sorted order needed for the median falls out of the bucket order for free.
///
/// All moments use population semantics (divide by N, not N - 1).
use crate::model::FrequencyTable;

/// Central-tendency and shape statistics for one distribution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Moments {
    pub mean: f64,
    pub std_dev: f64,
    pub skewness: f64,
    /// Excess kurtosis (fourth standardized moment minus 3).
    pub kurtosis: f64,
}

/// Compute mean, standard deviation, skewness, and excess kurtosis.
///
/// An empty table yields all zeros. When every value is identical the
/// variance is zero and the standardized moments are undefined; they are
/// reported as 0.
pub fn moments(table: &FrequencyTable) -> Moments {
    let n = table.total();
    if n == 0 {
        return Moments::default();
    }

    // Integer sum keeps the mean exact for constant inputs, so their
    // deviations come out as exactly zero below.
    let sum: u128 = table
        .counts()
        .iter()
        .enumerate()
        .map(|(value, &count)| value as u128 * count as u128)
        .sum();
    let n_f = n as f64;
    let mean = sum as f64 / n_f;

    let mut m2 = 0.0f64;
    let mut m3 = 0.0f64;
    let mut m4 = 0.0f64;
    for (value, &count) in table.counts().iter().enumerate() {
        if count == 0 {
            continue;
        }
        let d = value as f64 - mean;
        let d2 = d * d;
        let c = count as f64;
        m2 += c * d2;
        m3 += c * d2 * d;
        m4 += c * d2 * d2;
    }
    m2 /= n_f;
    m3 /= n_f;
    m4 /= n_f;

    if m2 <= 0.0 {
        return Moments {
            mean,
            ..Moments::default()
        };
    }

    Moments {
        mean,
        std_dev: m2.sqrt(),
        skewness: m3 / m2.powf(1.5),
        kurtosis: m4 / (m2 * m2) - 3.0,
    }
}

/// Median of the values counted in `table`.
///
/// For an even count this is the mean of the two middle values. Returns 0
/// for an empty table.
pub fn median(table: &FrequencyTable) -> f64 {
    let n = table.total();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        nth_value(table, n / 2) as f64
    } else {
        let lo = nth_value(table, n / 2 - 1) as f64;
        let hi = nth_value(table, n / 2) as f64;
        (lo + hi) / 2.0
    }
}

/// The value at zero-based position `k` of the sorted multiset.
/// `k` must be below `table.total()`.
fn nth_value(table: &FrequencyTable, k: u64) -> u8 {
    let mut seen = 0u64;
    for (value, count) in table.nonzero_entries() {
        seen += count;
        if k < seen {
            return value;
        }
    }
    u8::MAX
}

/// Shannon entropy in bits, `-Σ p·log2(p)` over the non-zero buckets.
///
/// Ranges from 0 (empty or constant input) to 8 (uniform over all 256 values).
pub fn shannon_entropy(table: &FrequencyTable) -> f64 {
    let n = table.total();
    if n == 0 {
        return 0.0;
    }
    let n_f = n as f64;
    let mut entropy = 0.0f64;
    for (_, count) in table.nonzero_entries() {
        let p = count as f64 / n_f;
        entropy -= p * p.log2();
    }
    entropy
}
