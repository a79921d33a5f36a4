/// JSON Lines output — one serialized `StatsRecord` per line.
use crate::error::OutputError;
use crate::model::StatsRecord;

/// Serialize each record as a compact JSON object on its own line.
pub fn render_json_lines(records: &[StatsRecord]) -> Result<String, OutputError> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::model::FileIdentity;

    #[test]
    fn each_record_is_one_parseable_line() {
        let records = vec![
            analyze(FileIdentity::new("a", 3), &[1, 2, 3]),
            analyze(FileIdentity::new("b", 0), &[]),
        ];
        let text = render_json_lines(&records).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let back: StatsRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(back.identity, records[0].identity);
        assert_eq!(back.patterns_2byte, records[0].patterns_2byte);
        assert!((back.std_dev - records[0].std_dev).abs() < 1e-12);

        let value: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(value["total_bytes"], 0);
        assert_eq!(value["identity"]["file_name"], "b");
    }
}
