//! Eval command implementation.

use super::output::{format_breakdown, JsonEval};
use super::{CliError, OutputFormat, SideArg, SnapshotArgs};
use cellmind::game::Side;
use cellmind::search::breakdown;

/// Execute the eval command.
///
/// # Errors
///
/// Returns an error if the snapshot or config cannot be loaded.
pub(crate) fn execute(source: &SnapshotArgs, side: SideArg, format: OutputFormat) -> Result<(), CliError> {
    let loaded = source.load()?;
    let terms = breakdown(&loaded.board, Side::from(side), &loaded.config.weights);

    match format {
        OutputFormat::Text => print!("{}", format_breakdown(&terms)),
        OutputFormat::Json => {
            let eval = JsonEval {
                terms,
                total: terms.total(),
            };
            println!("{}", serde_json::to_string_pretty(&eval)?);
        }
    }

    Ok(())
}
