// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Cellmind: decision core for a two-player organism-growth grid game.
//!
//! Each turn the engine reports every entity on the grid. This crate builds a
//! [`Board`] from those rows, enumerates legal growths and spores, simulates
//! them one ply at a time with simultaneous tentacle combat, and runs a
//! depth-bounded minimax to pick one command per owned root.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Search (per root)            │
//! ├─────────────────────────────────────┤
//! │        Evaluator                    │
//! ├─────────────────────────────────────┤
//! │   ActionCatalog │ Simulator         │
//! ├─────────────────────────────────────┤
//! │        Board                        │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod game;
pub mod search;

pub use error::{BoardError, InputError, ParseActionError};

// Re-export key types at crate root for convenience
pub use game::{Action, Board, Coord, Direction, Entity, OrganKind, Resources, Rules, Side, TurnInput};
pub use search::{Decision, EngineConfig, Searcher};

/// Build the board for one turn and return one command per own root.
///
/// This is the whole per-turn boundary in one call: rows in, commands out.
/// A mismatch with the engine's reported command count is logged, not fatal.
///
/// # Errors
///
/// Returns an error if the turn input describes an impossible board.
pub fn decide_turn(input: &TurnInput, searcher: &mut Searcher) -> Result<Vec<Decision>, InputError> {
    let board = input.to_board()?;
    let decisions = searcher.decide(&board);
    let produced = decisions.len();
    if let Some(expected) = input.required_actions.filter(|n| *n != produced) {
        tracing::warn!(expected, produced, "decision count differs from required actions");
    }
    Ok(decisions)
}
