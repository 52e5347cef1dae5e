//! Actions command implementation.

use super::{CliError, SideArg, SnapshotArgs};
use cellmind::game::{legal_actions, Actors, Side};

/// Execute the actions command.
///
/// Lists every legal action for one organism, or for all organs of the side
/// when no root is given.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or the root is unknown.
pub(crate) fn execute(source: &SnapshotArgs, root: Option<u32>, side: SideArg) -> Result<(), CliError> {
    let loaded = source.load()?;
    let side = Side::from(side);

    let actors = match root {
        Some(id) => {
            let known = loaded.board.roots(side).any(|r| r.organ_id == id);
            if !known {
                return Err(CliError::new(format!("No {side:?} root with id {id}")));
            }
            Actors::Organism(id)
        }
        None => Actors::All,
    };

    let mut lines: Vec<String> = legal_actions(&loaded.board, side, actors, &loaded.config.rules)
        .iter()
        .map(ToString::to_string)
        .collect();
    lines.sort();
    for line in &lines {
        println!("{line}");
    }

    Ok(())
}
