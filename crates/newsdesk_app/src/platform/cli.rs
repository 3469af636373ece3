use std::path::PathBuf;

use clap::Parser;

use super::logging::LogDestination;

/// Newsdesk - keyword news search in the terminal
///
/// Type keywords to search; toggle keywords in the sidebar to refine.
#[derive(Parser, Debug)]
#[command(name = "newsdesk")]
#[command(version)]
#[command(about = "Keyword news search in the terminal", long_about = None)]
pub struct Cli {
    /// RON config file (default: ./newsdesk.ron when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the API base url from the config file
    #[arg(long)]
    pub base_url: Option<String>,

    /// Where log output goes; the terminal is shared with the UI
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log_destination: LogDestination,

    /// Log file path used by the file destination
    #[arg(long, default_value = "newsdesk.log")]
    pub log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Search for these keywords right away
    #[arg(short, long)]
    pub query: Option<String>,
}
