//! Herocrawl CLI - play the game in a terminal or check map files.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Herocrawl - a turn-based text adventure
#[derive(Parser, Debug)]
#[command(name = "herocrawl")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play the game in the terminal
    Play {
        /// Map file
        #[arg(required = true)]
        map: PathBuf,

        /// Quest text file
        #[arg(required = true)]
        quest: PathBuf,

        /// About text file
        #[arg(long, default_value = herocrawl::controller::DEFAULT_ABOUT_PATH)]
        about: PathBuf,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Reseed the combat RNG at the start of every fight
        #[arg(long)]
        reseed_per_combat: bool,

        /// Directory for herocrawl.log (default: temp dir)
        #[arg(long)]
        log_dir: Option<PathBuf>,
    },

    /// Parse a map file and print a summary
    Check {
        /// Map file
        #[arg(required = true)]
        map: PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::CheckFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play {
            map,
            quest,
            about,
            seed,
            reseed_per_combat,
            log_dir,
        } => cli::play::execute(cli::play::PlayOptions {
            map,
            quest,
            about,
            seed,
            reseed_per_combat,
            log_dir,
        }),

        Commands::Check { map, format } => cli::check::execute(&map, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
