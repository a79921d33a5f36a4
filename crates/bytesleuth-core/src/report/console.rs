/// Plain-text console report.
///
/// One block per file, field per line. Byte values are shown in hex and
/// floating-point statistics at a fixed four-decimal precision.
use crate::model::{ByteCount, PatternCount, StatsRecord};
use chrono::{DateTime, Local};

/// Decimal places used for every floating-point statistic.
pub const FLOAT_PRECISION: usize = 4;

/// Render the whole batch, headed by the time of analysis.
pub fn render_batch(records: &[StatsRecord], generated_at: &DateTime<Local>) -> String {
    let mut out = format!(
        "Byte statistics report -- {} file(s), generated {}\n\n",
        records.len(),
        generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    for (i, record) in records.iter().enumerate() {
        out.push_str(&render_record(i + 1, record));
        out.push('\n');
    }
    out
}

/// Render one file's block. `number` is the 1-based position in the batch.
pub fn render_record(number: usize, r: &StatsRecord) -> String {
    let p = FLOAT_PRECISION;
    let id = &r.identity;
    let roc = &r.rate_of_change;

    let mut lines = vec![
        format!("FILE #{number}: {}", id.file_name),
        format!("path: {}", id.path.display()),
        format!(
            "size: {:.2} KB ({} bytes)",
            id.size_kb(),
            grouped(id.size_bytes)
        ),
        format!(
            "file_type: {}",
            if id.file_type.is_empty() {
                "(none)"
            } else {
                id.file_type.as_str()
            }
        ),
    ];
    if r.is_degenerate() {
        lines.push("note: zero-length file, statistics are degenerate".to_owned());
    }
    lines.extend([
        format!("total_bytes: {}", grouped(r.total_bytes)),
        format!("nonzero_bytes: {}", grouped(r.nonzero_bytes)),
        format!("unique_bytes: {}", r.unique_bytes),
        format!("top3_common: {}", join_bytes(&r.top3_common, ", ")),
        format!("bottom3_uncommon: {}", join_bytes(&r.bottom3_uncommon, ", ")),
        format!("mean: {:.p$}", r.mean),
        format!("median: {:.p$}", r.median),
        format!("std_dev: {:.p$}", r.std_dev),
        format!("skewness: {:.p$}", r.skewness),
        format!("kurtosis (excess): {:.p$}", r.kurtosis),
        format!("entropy: {:.p$} bits", r.entropy),
        format!("rate_of_change: {:.p$}", roc.mean),
        format!("rate_of_change_median: {:.p$}", roc.median),
        format!("rate_of_change_std_dev: {:.p$}", roc.std_dev),
        format!("max_run: {}", r.run_stats.max_run),
        format!("average_run: {:.p$}", r.run_stats.average_run),
        format!("patterns_2byte: {}", join_patterns(&r.patterns_2byte, ", ")),
        format!("patterns_4byte: {}", join_patterns(&r.patterns_4byte, ", ")),
    ]);

    // Title line flush left, fields indented beneath it.
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push_str("    ");
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Decimal digits grouped in threes: `1234567` -> `1,234,567`.
fn grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Join byte counts as `0x00 (count: 3)` entries.
pub fn join_bytes(items: &[ByteCount], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Join patterns as `0d0a (count: 2)` entries.
pub fn join_patterns(items: &[PatternCount], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::model::FileIdentity;
    use chrono::TimeZone;

    fn sample() -> StatsRecord {
        analyze(
            FileIdentity::new("/evidence/disk.img", 6),
            &[0, 0, 0, 1, 1, 2],
        )
    }

    #[test]
    fn record_block_contains_hex_and_fixed_precision() {
        let text = render_record(1, &sample());
        assert!(text.starts_with("FILE #1: disk.img\n"));
        assert!(text.contains("top3_common: 0x00 (count: 3), 0x01 (count: 2), 0x02 (count: 1)"));
        assert!(text.contains("mean: 0.6667"));
        assert!(text.contains("median: 0.5000"));
        assert!(text.contains("rate_of_change: 0.4000"));
        assert!(text.contains("max_run: 3"));
        assert!(text.contains("patterns_2byte: 0000 (count: 2)"));
        assert!(!text.contains("degenerate"));
        assert!(text.contains("\n    size: 0.01 KB (6 bytes)\n"));
        assert!(text.contains("\n    file_type: .img\n"));
    }

    #[test]
    fn every_field_line_is_indented() {
        let text = render_record(1, &sample());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("FILE #1: disk.img"));
        for line in lines {
            assert!(line.starts_with("    "), "unindented line: {line:?}");
        }
    }

    #[test]
    fn counts_are_grouped_in_thousands() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(1_000), "1,000");
        assert_eq!(grouped(65_536), "65,536");
        assert_eq!(grouped(1_234_567), "1,234,567");
    }

    #[test]
    fn empty_file_block_is_marked() {
        let r = analyze(FileIdentity::new("empty", 0), &[]);
        let text = render_record(2, &r);
        assert!(text.contains("FILE #2: empty"));
        assert!(text.contains("file_type: (none)\n"));
        assert!(text.contains("zero-length file"));
        assert!(text.contains("top3_common: \n"));
    }

    #[test]
    fn batch_has_header_and_numbered_blocks() {
        let at = Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let text = render_batch(&[sample(), sample()], &at);
        assert!(text.starts_with("Byte statistics report -- 2 file(s), generated 2024-03-01 09:30:00"));
        assert!(text.contains("FILE #1:"));
        assert!(text.contains("FILE #2:"));
    }
}
