use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// storekeep - content-store enumeration and guarded deletion
#[derive(Parser, Debug)]
#[command(name = "storekeep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events and a final JSON result
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the config file listing allowed roots
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enumerate the allowed roots as a file tree with stats
    Tree {
        /// Enumerate a single root by logical name
        #[arg(long)]
        root: Option<String>,
    },

    /// Delete one or more files from the content store
    Delete {
        /// Root-prefixed relative paths, e.g. audio/user_1/track.mp3
        #[arg(required = true)]
        paths: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
