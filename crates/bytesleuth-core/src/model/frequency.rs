/// Byte frequency table — one counter per possible byte value.
///
/// Every statistic over the byte-value distribution (moments, median,
/// entropy, common/uncommon rankings) is derived from this table, so the
/// input slice is walked exactly once for all of them.

/// Occurrence count for each of the 256 byte values.
///
/// All 256 slots are always present; absent values hold zero.
/// Invariant: the sum of all counts equals the length of the counted slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
    total: u64,
}

impl FrequencyTable {
    /// Count every byte of `data` in a single pass.
    pub fn from_bytes(data: &[u8]) -> Self {
        data.iter().copied().collect()
    }

    /// Occurrences of `byte`.
    #[inline]
    pub fn count(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// All 256 counters, indexed by byte value.
    #[inline]
    pub fn counts(&self) -> &[u64; 256] {
        &self.counts
    }

    /// Number of bytes counted.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct byte values with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// `(byte, count)` pairs with a non-zero count, in ascending byte order.
    pub fn nonzero_entries(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(b, &c)| (b as u8, c))
    }
}

impl FromIterator<u8> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut counts = [0u64; 256];
        let mut total = 0u64;
        for byte in iter {
            counts[byte as usize] += 1;
            total += 1;
        }
        Self { counts, total }
    }
}
