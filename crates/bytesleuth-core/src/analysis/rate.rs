/// Rate-of-change between adjacent bytes.
///
/// The absolute difference of each consecutive pair always fits in a byte,
/// so the differences are tallied into a [`FrequencyTable`] and summarised
/// with the same distribution code used for the byte values themselves.
use crate::analysis::distribution;
use crate::model::{FrequencyTable, RateOfChange};

/// Mean, median, and population std-dev of `|b[i+1] - b[i]|`.
///
/// Inputs shorter than two bytes have no differences and report all zeros.
pub fn rate_of_change(data: &[u8]) -> RateOfChange {
    if data.len() < 2 {
        return RateOfChange::default();
    }

    let diffs: FrequencyTable = data.windows(2).map(|w| w[0].abs_diff(w[1])).collect();
    let moments = distribution::moments(&diffs);

    RateOfChange {
        mean: moments.mean,
        median: distribution::median(&diffs),
        std_dev: moments.std_dev,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_absolute_difference() {
        // Diffs: 0,0,1,0,1 -> mean 0.4, median 0.
        let roc = rate_of_change(&[0, 0, 0, 1, 1, 2]);
        assert!((roc.mean - 0.4).abs() < 1e-12, "mean was {}", roc.mean);
        assert_eq!(roc.median, 0.0);
    }

    #[test]
    fn direction_does_not_matter() {
        let up = rate_of_change(&[0, 10, 20, 30]);
        let down = rate_of_change(&[30, 20, 10, 0]);
        assert_eq!(up, down);
        assert_eq!(up.mean, 10.0);
        assert_eq!(up.std_dev, 0.0);
    }

    #[test]
    fn full_swing_is_not_wrapped() {
        let roc = rate_of_change(&[0, 255, 0]);
        assert_eq!(roc.mean, 255.0);
    }

    #[test]
    fn short_inputs_report_zero() {
        assert_eq!(rate_of_change(&[]), RateOfChange::default());
        assert_eq!(rate_of_change(&[42]), RateOfChange::default());
    }

    #[test]
    fn constant_input_has_no_change() {
        let roc = rate_of_change(&[0xaa; 64]);
        assert_eq!(roc, RateOfChange::default());
    }
}
