//! CLI command implementations for cellmind.

pub(crate) mod actions;
pub(crate) mod decide;
pub(crate) mod eval;
pub(crate) mod simulate;
pub(crate) mod validate;

mod output;

use cellmind::error::{InputError, ParseActionError};
use cellmind::game::{Board, HarvestTiming, Side, SporerPlacement, TurnInput};
use cellmind::search::EngineConfig;
use clap::{Args, ValueEnum};
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Output format for commands with structured results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Side selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SideArg {
    /// The side the snapshot was recorded for.
    Me,
    /// The other player.
    Opponent,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Me => Side::Me,
            SideArg::Opponent => Side::Opponent,
        }
    }
}

/// Harvester capture policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum HarvestArg {
    /// No capture at placement.
    Deferred,
    /// Capture the faced protein immediately.
    OnPlacement,
}

impl From<HarvestArg> for HarvestTiming {
    fn from(arg: HarvestArg) -> Self {
        match arg {
            HarvestArg::Deferred => HarvestTiming::Deferred,
            HarvestArg::OnPlacement => HarvestTiming::OnPlacement,
        }
    }
}

/// Sporer placement filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SporerArg {
    /// Only facings that see a protein.
    ProteinLine,
    /// Every facing.
    Unfiltered,
}

impl From<SporerArg> for SporerPlacement {
    fn from(arg: SporerArg) -> Self {
        match arg {
            SporerArg::ProteinLine => SporerPlacement::ProteinLine,
            SporerArg::Unfiltered => SporerPlacement::Unfiltered,
        }
    }
}

/// Snapshot and configuration shared by every command.
#[derive(Args, Debug)]
pub(crate) struct SnapshotArgs {
    /// Turn snapshot (JSON)
    #[arg(required = true)]
    pub(crate) snapshot: PathBuf,

    /// Engine configuration file (JSON)
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,
}

/// A loaded snapshot ready to work on.
#[derive(Debug)]
pub(crate) struct Loaded {
    /// The raw turn input.
    pub(crate) input: TurnInput,
    /// The board built from it.
    pub(crate) board: Board,
    /// Configuration from file, or defaults.
    pub(crate) config: EngineConfig,
}

impl SnapshotArgs {
    /// Read the snapshot and configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read or parsed, or the
    /// snapshot describes an impossible board.
    pub(crate) fn load(&self) -> Result<Loaded, CliError> {
        let input = TurnInput::load(&self.snapshot).map_err(|e| {
            CliError::new(format!("Failed to load {}: {e}", self.snapshot.display()))
        })?;
        let board = input.to_board()?;
        let config = match &self.config {
            Some(path) => EngineConfig::load(path)
                .map_err(|e| CliError::new(format!("Failed to load {}: {e}", path.display())))?,
            None => EngineConfig::default(),
        };
        Ok(Loaded {
            input,
            board,
            config,
        })
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<InputError> for CliError {
    fn from(e: InputError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<ParseActionError> for CliError {
    fn from(e: ParseActionError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}
