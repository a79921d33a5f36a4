/// End-to-end tests for the resolve → read → analyse → export pipeline.
///
/// These exercise the real filesystem through `tempfile`, so directory
/// listing, binary reads, and CSV writing are covered without mocking.
use bytesleuth_core::input::{list_directory, read_input, resolve};
use bytesleuth_core::report::{read_csv, write_csv, CSV_FILE_NAME};
use bytesleuth_core::{analyze, InputError, StatsRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Build a directory for resolver tests:
///
/// ```text
/// root/
///   a.bin     [0,0,0,1,1,2]
///   b.txt     "abab"
///   empty.dat (0 bytes)
///   nested/
///     deep.bin  (must not be picked up)
/// ```
fn build_tree(root: &Path) {
    fs::write(root.join("a.bin"), [0u8, 0, 0, 1, 1, 2]).unwrap();
    fs::write(root.join("b.txt"), b"abab").unwrap();
    fs::write(root.join("empty.dat"), b"").unwrap();
    let nested = root.join("nested");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("deep.bin"), [9u8; 10]).unwrap();
}

fn analyse_all(paths: &[PathBuf]) -> Vec<StatsRecord> {
    paths
        .iter()
        .map(|p| {
            let input = read_input(p).expect("readable fixture");
            analyze(input.identity, &input.bytes)
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Directory listing is non-recursive and sorted by name.
#[test]
fn directory_listing_is_top_level_only() {
    let tmp = TempDir::new().unwrap();
    build_tree(tmp.path());

    let listing = list_directory(tmp.path()).unwrap();
    let names: Vec<String> = listing
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.bin", "b.txt", "empty.dat"]);
    assert!(listing.errors.is_empty());
}

/// Bad paths are reported, good ones are still selected.
#[test]
fn resolve_collects_errors_without_dropping_good_paths() {
    let tmp = TempDir::new().unwrap();
    build_tree(tmp.path());
    let empty_dir = tmp.path().join("void");
    fs::create_dir_all(&empty_dir).unwrap();

    let files = vec![tmp.path().join("a.bin"), tmp.path().join("missing.bin")];
    let dirs = vec![empty_dir, tmp.path().join("nested")];
    let selection = resolve(&files, &dirs);

    assert_eq!(selection.files.len(), 2, "a.bin plus nested/deep.bin");
    assert_eq!(selection.errors.len(), 2);
    assert!(matches!(selection.errors[0], InputError::NotFound(_)));
    assert!(matches!(selection.errors[1], InputError::EmptyDirectory(_)));
}

/// The empty file still produces a record; the others carry real values.
#[test]
fn analyse_directory_contents() {
    let tmp = TempDir::new().unwrap();
    build_tree(tmp.path());

    let listing = list_directory(tmp.path()).unwrap();
    let records = analyse_all(&listing.files);
    assert_eq!(records.len(), 3);

    let a = &records[0];
    assert_eq!(a.identity.file_name, "a.bin");
    assert_eq!(a.median, 0.5);
    assert_eq!(a.run_stats.max_run, 3);

    let b = &records[1];
    assert_eq!(b.patterns_2byte[0].bytes, b"ab".to_vec());
    assert_eq!(b.patterns_2byte[0].count, 2);
    assert!((b.entropy - 1.0).abs() < 1e-12);

    let empty = &records[2];
    assert!(empty.is_degenerate());
    assert!(empty.top3_common.is_empty());
}

/// Two analysed files export as header + two rows and read back unchanged.
#[test]
fn csv_export_round_trips_scalars() {
    let tmp = TempDir::new().unwrap();
    build_tree(tmp.path());
    let records = analyse_all(&[tmp.path().join("a.bin"), tmp.path().join("b.txt")]);

    let out = tmp.path().join(CSV_FILE_NAME);
    write_csv(&out, &records).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), 3);

    let rows = read_csv(&out).unwrap();
    assert_eq!(rows.len(), 2);
    for (row, record) in rows.iter().zip(&records) {
        assert_eq!(row.total_bytes, record.total_bytes);
        assert_eq!(row.mean, record.mean);
        assert_eq!(row.median, record.median);
        assert_eq!(row.std_dev, record.std_dev);
        assert_eq!(row.skewness, record.skewness);
        assert_eq!(row.kurtosis, record.kurtosis);
        assert_eq!(row.entropy, record.entropy);
        assert_eq!(row.rate_of_change, record.rate_of_change.mean);
        assert_eq!(row.max_run, record.run_stats.max_run);
        assert_eq!(row.average_run, record.run_stats.average_run);
    }
}
