//! Decide command implementation.

use super::output::{JsonDecision, JsonTurn};
use super::{CliError, HarvestArg, OutputFormat, SnapshotArgs, SporerArg};
use cellmind::search::Searcher;
use clap::Args;

/// Arguments for the `decide` command.
#[derive(Args, Debug)]
pub(crate) struct DecideArgs {
    #[command(flatten)]
    pub(crate) source: SnapshotArgs,

    /// Search depth in plies (overrides config)
    #[arg(short, long)]
    pub(crate) depth: Option<u32>,

    /// Children kept per node (overrides config)
    #[arg(short, long)]
    pub(crate) beam: Option<usize>,

    /// Tie-break seed (overrides config)
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,

    /// Soft time budget in milliseconds (overrides config)
    #[arg(long)]
    pub(crate) time_budget: Option<u64>,

    /// Harvester capture policy (overrides config)
    #[arg(long)]
    pub(crate) harvest: Option<HarvestArg>,

    /// Sporer placement filter (overrides config)
    #[arg(long)]
    pub(crate) sporer_placement: Option<SporerArg>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub(crate) format: OutputFormat,
}

/// Execute the decide command.
///
/// # Errors
///
/// Returns an error if the snapshot or config cannot be loaded.
pub(crate) fn execute(args: &DecideArgs) -> Result<(), CliError> {
    let loaded = args.source.load()?;
    let mut config = loaded.config;
    if let Some(depth) = args.depth {
        config.search.depth = depth;
    }
    if let Some(beam) = args.beam {
        config.search.beam_width = beam;
    }
    if let Some(seed) = args.seed {
        config.search.seed = Some(seed);
    }
    if let Some(ms) = args.time_budget {
        config.search.time_budget_ms = Some(ms);
    }
    if let Some(harvest) = args.harvest {
        config.rules.harvest = harvest.into();
    }
    if let Some(placement) = args.sporer_placement {
        config.rules.sporer_placement = placement.into();
    }

    let mut searcher = Searcher::from_config(&config);
    let decisions = cellmind::decide_turn(&loaded.input, &mut searcher)?;

    match args.format {
        OutputFormat::Text => {
            for decision in &decisions {
                println!("{}", decision.action);
            }
        }
        OutputFormat::Json => {
            let turn = JsonTurn {
                decisions: decisions.iter().map(JsonDecision::from).collect(),
                stats: searcher.stats(),
            };
            println!("{}", serde_json::to_string_pretty(&turn)?);
        }
    }

    Ok(())
}
