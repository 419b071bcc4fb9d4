use clap::Parser;

/// Command-line interface definition for worklog.
/// Everything else happens through interactive prompts.
#[derive(Parser, Debug)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work log CLI: record, browse and search task entries kept in a CSV file",
    long_about = None
)]
pub struct Cli {
    /// Override the log file path for this run (default: `log_file` from the config, or work_log.csv)
    #[arg(long = "file", short = 'f', value_name = "FILE")]
    pub file: Option<String>,
}
