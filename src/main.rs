//! Cellmind CLI - inspect snapshots and run the decision core from the shell.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Cellmind - decision core for an organism-growth grid game
#[derive(Parser, Debug)]
#[command(name = "cellmind")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Pick one command per own root
    Decide(cli::decide::DecideArgs),

    /// List legal actions
    Actions {
        #[command(flatten)]
        source: cli::SnapshotArgs,

        /// Restrict to the organism with this root id
        #[arg(short, long)]
        root: Option<u32>,

        /// Acting side
        #[arg(long, default_value = "me")]
        side: cli::SideArg,
    },

    /// Show the evaluator's score breakdown
    Eval {
        #[command(flatten)]
        source: cli::SnapshotArgs,

        /// Perspective to score from
        #[arg(long, default_value = "me")]
        side: cli::SideArg,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Apply one command and show the resulting board
    Simulate {
        #[command(flatten)]
        source: cli::SnapshotArgs,

        /// Command text, e.g. "GROW 1 3 2 BASIC X"
        #[arg(required = true)]
        command: String,

        /// Acting side
        #[arg(long, default_value = "me")]
        side: cli::SideArg,

        /// Root id grown organs join (default: the parent's organism)
        #[arg(short, long)]
        root: Option<u32>,
    },

    /// Check a snapshot for consistency
    Validate {
        #[command(flatten)]
        source: cli::SnapshotArgs,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries command output only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let result = match args.command {
        Commands::Decide(decide) => cli::decide::execute(&decide),

        Commands::Actions { source, root, side } => cli::actions::execute(&source, root, side),

        Commands::Eval {
            source,
            side,
            format,
        } => cli::eval::execute(&source, side, format),

        Commands::Simulate {
            source,
            command,
            side,
            root,
        } => cli::simulate::execute(&source, &command, side, root),

        Commands::Validate { source } => cli::validate::execute(&source),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
