/// Most- and least-common byte values.
///
/// Both rankings break count ties by ascending byte value, so the output is
/// fully determined by the frequency table.
use crate::model::{ByteCount, FrequencyTable};

/// The `n` most frequent byte values, highest count first.
///
/// Only values that actually occur are returned, so fewer than `n` entries
/// come back when the input has fewer distinct values.
pub fn top_common(table: &FrequencyTable, n: usize) -> Vec<ByteCount> {
    let mut entries = present(table);
    entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.byte.cmp(&b.byte)));
    entries.truncate(n);
    entries
}

/// The `n` least frequent byte values that occur at least once, lowest
/// count first.
pub fn bottom_uncommon(table: &FrequencyTable, n: usize) -> Vec<ByteCount> {
    let mut entries = present(table);
    entries.sort_by(|a, b| a.count.cmp(&b.count).then(a.byte.cmp(&b.byte)));
    entries.truncate(n);
    entries
}

fn present(table: &FrequencyTable) -> Vec<ByteCount> {
    table
        .nonzero_entries()
        .map(|(byte, count)| ByteCount { byte, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(v: &[ByteCount]) -> Vec<(u8, u64)> {
        v.iter().map(|bc| (bc.byte, bc.count)).collect()
    }

    #[test]
    fn top_common_orders_by_count() {
        let table = FrequencyTable::from_bytes(&[0, 0, 0, 1, 1, 2]);
        assert_eq!(pairs(&top_common(&table, 3)), vec![(0, 3), (1, 2), (2, 1)]);
    }

    #[test]
    fn ties_break_by_ascending_byte() {
        let table = FrequencyTable::from_bytes(&[0x30, 0x10, 0x20, 0x30, 0x10, 0x20]);
        assert_eq!(
            pairs(&top_common(&table, 3)),
            vec![(0x10, 2), (0x20, 2), (0x30, 2)]
        );
        assert_eq!(
            pairs(&bottom_uncommon(&table, 2)),
            vec![(0x10, 2), (0x20, 2)]
        );
    }

    #[test]
    fn fewer_distinct_values_than_requested() {
        let table = FrequencyTable::from_bytes(&[5, 5]);
        assert_eq!(pairs(&top_common(&table, 3)), vec![(5, 2)]);
        assert_eq!(pairs(&bottom_uncommon(&table, 3)), vec![(5, 2)]);
    }

    #[test]
    fn bottom_uncommon_skips_absent_values() {
        let table = FrequencyTable::from_bytes(&[9, 9, 9, 200, 200, 1]);
        assert_eq!(
            pairs(&bottom_uncommon(&table, 3)),
            vec![(1, 1), (200, 2), (9, 3)]
        );
    }

    #[test]
    fn empty_table_yields_empty_rankings() {
        let table = FrequencyTable::from_bytes(&[]);
        assert!(top_common(&table, 3).is_empty());
        assert!(bottom_uncommon(&table, 3).is_empty());
    }

    #[test]
    fn rankings_disjoint_with_six_distinct_counts() {
        let mut data = Vec::new();
        for (value, reps) in [(1u8, 1usize), (2, 2), (3, 3), (4, 4), (5, 5), (6, 6)] {
            data.extend(std::iter::repeat(value).take(reps));
        }
        let table = FrequencyTable::from_bytes(&data);
        let top = top_common(&table, 3);
        let bottom = bottom_uncommon(&table, 3);
        assert!(top.iter().all(|t| !bottom.contains(t)));
    }
}
