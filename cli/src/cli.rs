use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "Wristnote",
    version = wristnote_core::version(),
    about = "Wristnote - overlay notifications for small wearable displays",
)]
pub struct Args {
    /// Specify custom configuration file path
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Specify custom configuration file path"
    )]
    pub config_path: Option<PathBuf>,

    /// Validate configuration and exit without starting
    #[arg(
        long = "dry-run",
        help = "Validate configuration and exit without starting"
    )]
    pub dry_run: bool,

    /// Use default configuration and ignore config files
    #[arg(
        long = "defaults",
        help = "Use default configuration and ignore config files"
    )]
    pub use_defaults: bool,

    #[arg(short = 'q', long = "quiet", help = "Only log info, warnings and errors")]
    pub quiet: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        conflicts_with = "quiet",
        help = "Log everything, including trace output"
    )]
    pub verbose: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}
