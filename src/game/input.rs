//! Turn-state construction from parsed entity rows.
//!
//! The line protocol itself belongs to the caller; this module only takes the
//! already-split fields of each row and builds a [`Board`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, InputError};
use crate::game::{
    Board, Coord, Direction, Entity, EntityKind, OrganId, OrganKind, Resources, Side,
};

/// One entity row as reported by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRow {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
    /// Type tag (`WALL`, `ROOT`, ..., `A`..`D`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Owner flag: 1 = us, 0 = opponent, -1 = nobody.
    pub owner: i32,
    /// Organ id (0 for non-organs).
    #[serde(default)]
    pub organ_id: OrganId,
    /// Direction symbol (`N`, `E`, `S`, `W` or `X`).
    #[serde(default = "no_direction")]
    pub direction: char,
    /// Parent organ id.
    #[serde(default)]
    pub parent_id: OrganId,
    /// Root organ id.
    #[serde(default)]
    pub root_id: OrganId,
}

fn no_direction() -> char {
    'X'
}

impl EntityRow {
    /// Convert to an entity, validating the coordinates against the board size.
    ///
    /// Unknown type tags become walls.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates outside the board
    /// and [`BoardError::UnownedOrgan`] for an organ row whose owner flag is
    /// neither 0 nor 1.
    pub fn to_entity(&self, width: u16, height: u16) -> Result<Entity, BoardError> {
        let out_of_bounds = BoardError::OutOfBounds {
            x: self.x,
            y: self.y,
        };
        let x = u16::try_from(self.x).map_err(|_| out_of_bounds)?;
        let y = u16::try_from(self.y).map_err(|_| out_of_bounds)?;
        if x >= width || y >= height {
            return Err(out_of_bounds);
        }
        let coord = Coord::new(x, y);

        let kind = EntityKind::from_tag(&self.kind).unwrap_or_else(|| {
            tracing::warn!(tag = %self.kind, %coord, "unknown entity type, treating as wall");
            EntityKind::Wall
        });

        let entity = match kind {
            EntityKind::Wall => Entity::wall(coord),
            EntityKind::Protein(protein) => Entity::protein(coord, protein),
            EntityKind::Organ(organ) => Entity {
                coord,
                kind,
                owner: Some(Side::from_owner_flag(self.owner).ok_or(BoardError::UnownedOrgan(coord))?),
                organ_id: self.organ_id,
                facing: Direction::from_symbol(self.direction),
                parent_id: if organ == OrganKind::Root { 0 } else { self.parent_id },
                root_id: self.root_id,
            },
        };
        Ok(entity)
    }
}

impl Board {
    /// Build a board from one turn's entity rows and both resource stocks.
    ///
    /// # Errors
    ///
    /// Fails on zero dimensions, out-of-bounds rows, two entities on one cell
    /// and duplicate or missing organ ids.
    pub fn from_rows(
        width: u16,
        height: u16,
        rows: &[EntityRow],
        mine: Resources,
        theirs: Resources,
    ) -> Result<Self, BoardError> {
        let mut board = Board::new(width, height)?;
        for row in rows {
            board.add_entity(row.to_entity(width, height)?)?;
        }
        board.set_resources(Side::Me, mine);
        board.set_resources(Side::Opponent, theirs);
        Ok(board)
    }
}

/// Everything the engine reports for one turn.
///
/// This is also the JSON snapshot format used by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnInput {
    /// Board width.
    pub width: u16,
    /// Board height.
    pub height: u16,
    /// Entity rows.
    pub entities: Vec<EntityRow>,
    /// Our protein stock as `[a, b, c, d]`.
    pub my_resources: Vec<i32>,
    /// Opponent protein stock as `[a, b, c, d]`.
    pub opp_resources: Vec<i32>,
    /// Number of commands the engine expects, if reported.
    #[serde(default)]
    pub required_actions: Option<usize>,
}

impl TurnInput {
    /// Load a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Build the board for this turn.
    ///
    /// # Errors
    ///
    /// Fails if either resource list does not hold exactly four counts or
    /// the rows describe an impossible board.
    pub fn to_board(&self) -> Result<Board, InputError> {
        let mine = quadruple(&self.my_resources)?;
        let theirs = quadruple(&self.opp_resources)?;
        Ok(Board::from_rows(self.width, self.height, &self.entities, mine, theirs)?)
    }
}

fn quadruple(counts: &[i32]) -> Result<Resources, InputError> {
    let array: [i32; 4] = counts
        .try_into()
        .map_err(|_| InputError::ResourceCount(counts.len()))?;
    Ok(Resources::from_array(array))
}
