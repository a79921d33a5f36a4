/// Command-line argument surface.
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "bytesleuth")]
#[command(version)]
#[command(about = "Analyze files for byte statistics", long_about = None)]
pub struct Cli {
    /// File(s) to analyze. With no paths, opens the file picker
    #[arg(short = 'f', long = "files", num_args = 0.., value_name = "PATH")]
    pub files: Option<Vec<PathBuf>>,

    /// Directory(ies) to analyze, top level only. With no paths, opens the directory picker
    #[arg(short = 'd', long = "dirs", num_args = 0.., value_name = "DIR")]
    pub dirs: Option<Vec<PathBuf>>,

    /// Write the results to byte_stats.csv in the working directory
    #[arg(long = "generate-csv")]
    pub generate_csv: bool,

    /// Print one JSON object per file instead of the text report
    #[arg(long = "json")]
    pub json: bool,

    /// Number of 2-byte and 4-byte patterns to report
    #[arg(long = "top-patterns", value_name = "N", default_value_t = 3)]
    pub top_patterns: usize,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
