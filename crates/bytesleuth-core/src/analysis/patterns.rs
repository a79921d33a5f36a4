/// Recurring fixed-width byte patterns.
///
/// A window of `K` bytes slides across the input with stride 1. Each window
/// is looked up in a map keyed by the `[u8; K]` array itself, so counting is
/// a single linear pass with no re-scanning of earlier windows.
use crate::model::PatternCount;
use std::collections::HashMap;

/// Occurrence count plus the offset where the pattern was first seen.
struct Tally {
    count: u64,
    first_seen: usize,
}

/// The `top_n` most frequent `K`-byte subsequences of `data`.
///
/// Ordered by count descending; equal counts are ordered by the position of
/// their first occurrence. Inputs shorter than `K` yield an empty list.
pub fn top_patterns<const K: usize>(data: &[u8], top_n: usize) -> Vec<PatternCount> {
    if K == 0 || data.len() < K || top_n == 0 {
        return Vec::new();
    }

    let windows = data.len() - K + 1;
    let mut tallies: HashMap<[u8; K], Tally> = HashMap::with_capacity(windows.min(1 << 16));

    for (pos, window) in data.windows(K).enumerate() {
        let mut key = [0u8; K];
        key.copy_from_slice(window);
        tallies
            .entry(key)
            .or_insert(Tally {
                count: 0,
                first_seen: pos,
            })
            .count += 1;
    }

    let mut ranked: Vec<([u8; K], Tally)> = tallies.into_iter().collect();
    let order = |a: &([u8; K], Tally), b: &([u8; K], Tally)| {
        b.1.count
            .cmp(&a.1.count)
            .then(a.1.first_seen.cmp(&b.1.first_seen))
    };

    // First-seen offsets are unique, so the ordering is total and an
    // unstable partial sort is still deterministic.
    if ranked.len() > top_n {
        ranked.select_nth_unstable_by(top_n - 1, order);
        ranked.truncate(top_n);
    }
    ranked.sort_unstable_by(order);

    ranked
        .into_iter()
        .map(|(bytes, tally)| PatternCount {
            bytes: bytes.to_vec(),
            count: tally.count,
        })
        .collect()
}
