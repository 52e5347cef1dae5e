//! Simulate command implementation.

use super::output::{format_breakdown, format_sides, render_board};
use super::{CliError, SideArg, SnapshotArgs};
use cellmind::game::{apply, legal_actions, Action, Actors, Entity, Side};
use cellmind::search::breakdown;

/// Execute the simulate command.
///
/// The command must be one the catalog would produce; the simulator itself
/// trusts its input.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded, the command does not
/// parse, or it is not legal for the side.
pub(crate) fn execute(
    source: &SnapshotArgs,
    command: &str,
    side: SideArg,
    root: Option<u32>,
) -> Result<(), CliError> {
    let loaded = source.load()?;
    let side = Side::from(side);
    let action: Action = command.parse()?;

    let legal = legal_actions(&loaded.board, side, Actors::All, &loaded.config.rules);
    if !legal.contains(&action) {
        return Err(CliError::new(format!("Not a legal action for {side:?}: {action}")));
    }

    let root = root.unwrap_or_else(|| {
        action
            .source()
            .and_then(|id| loaded.board.organ(id))
            .map_or(0, Entity::organism)
    });
    let next = apply(&loaded.board, &action, side, root, &loaded.config.rules);

    println!("Applied: {action}");
    println!();
    print!("{}", render_board(&next));
    println!();
    print!("{}", format_sides(&next));
    println!();
    println!("Score ({side:?}):");
    print!("{}", format_breakdown(&breakdown(&next, side, &loaded.config.weights)));

    Ok(())
}
