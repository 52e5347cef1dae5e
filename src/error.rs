//! Error types for board construction and snapshot loading.

use thiserror::Error;

use crate::game::{Coord, OrganId};

/// Structural errors raised while building a [`Board`](crate::game::Board).
///
/// Game-rule legality is never reported through this type; the action
/// catalog only constructs legal actions in the first place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Width or height was zero.
    #[error("board dimensions must be non-zero (got {width}x{height})")]
    EmptyBoard {
        /// Requested width.
        width: u16,
        /// Requested height.
        height: u16,
    },
    /// An entity was placed outside the grid.
    #[error("cell ({x}, {y}) is outside the board")]
    OutOfBounds {
        /// Column of the rejected placement.
        x: i64,
        /// Row of the rejected placement.
        y: i64,
    },
    /// An entity was placed on a cell that already holds one.
    #[error("cell {0} is already occupied")]
    Occupied(Coord),
    /// Two organs carried the same organ id.
    #[error("organ id {0} is already in use")]
    DuplicateOrgan(OrganId),
    /// An organ row carried organ id 0.
    #[error("organ at {0} has no organ id")]
    MissingOrganId(Coord),
    /// An organ row carried neither the own nor the opponent owner flag.
    #[error("organ at {0} has no owner")]
    UnownedOrgan(Coord),
}

/// Errors raised while turning external input into a board or configuration.
#[derive(Debug, Error)]
pub enum InputError {
    /// The entity rows describe an impossible board.
    #[error(transparent)]
    Board(#[from] BoardError),
    /// A resource quadruple did not have exactly four entries.
    #[error("expected 4 resource counts, got {0}")]
    ResourceCount(usize),
    /// Reading a snapshot or config file failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    /// A snapshot or config file was not valid JSON for its schema.
    #[error("malformed input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned when command text cannot be parsed into an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse command {input:?}: {reason}")]
pub struct ParseActionError {
    /// The offending command text.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl ParseActionError {
    pub(crate) fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_owned(),
            reason,
        }
    }
}
