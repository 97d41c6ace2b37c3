use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tvrecode")]
#[command(author, version, about = "Recode video files for playback on TVs")]
pub struct Cli {
    /// Path to config file (default: ~/.tvrecode.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (-v warn, -vv info, -vvv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recode a media file
    Run {
        /// Media file to recode
        #[arg(required = true)]
        input: PathBuf,

        /// Recoded media file (default: <input>-<suffix>.<extension>)
        output: Option<PathBuf>,

        /// Only display the command, don't recode
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Rewrite output file if it already exists
        #[arg(short, long)]
        force: bool,
    },

    /// Show which streams would be kept and how
    Plan {
        /// Media file to inspect
        #[arg(required = true)]
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Probe a media file and display its streams
    Probe {
        /// File to probe
        #[arg(required = true)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that ffmpeg and ffprobe are available
    CheckTools,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Write the default configuration to a file
    InitConfig {
        /// Destination (default: ~/.tvrecode.toml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Display version information
    Version,
}
