/// Run-length analysis — maximal runs of identical consecutive bytes.
use crate::model::RunStats;

/// Longest run and mean run length in one scan.
///
/// Run lengths always sum to the input length, so the mean is simply
/// `len / number_of_runs`. Empty input yields `(0, 0)`.
pub fn run_stats(data: &[u8]) -> RunStats {
    let Some((&first, rest)) = data.split_first() else {
        return RunStats::default();
    };

    let mut runs: u64 = 1;
    let mut current: u64 = 1;
    let mut max_run: u64 = 1;
    let mut prev = first;

    for &byte in rest {
        if byte == prev {
            current += 1;
        } else {
            max_run = max_run.max(current);
            runs += 1;
            current = 1;
            prev = byte;
        }
    }
    max_run = max_run.max(current);

    RunStats {
        max_run,
        average_run: data.len() as f64 / runs as f64,
    }
}
