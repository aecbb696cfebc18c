//! storekeep CLI - content-store enumeration and guarded deletion
//!
//! Usage: storekeep <COMMAND>
//!
//! Commands:
//!   tree    Enumerate the allowed roots as a file tree with stats
//!   delete  Delete one or more files from the content store

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Tree { root } => {
            commands::cmd_tree(cli.config.as_deref(), root.as_deref(), cli.json, cli.verbose)
                .map(|_| true)
        }
        Commands::Delete { paths, yes } => {
            commands::cmd_delete(cli.config.as_deref(), paths, *yes, cli.json, cli.verbose)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        // The command ran but at least one requested item failed.
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
