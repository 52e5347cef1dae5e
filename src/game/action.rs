//! Actions and their command text.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseActionError;
use crate::game::{facing_symbol, Coord, Direction, OrganId, OrganKind, Resources};

/// A command for one organism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Do nothing this turn.
    Wait,
    /// Grow a new organ next to `parent_id`.
    Grow {
        /// Organ the new organ grows from.
        parent_id: OrganId,
        /// Cell the new organ occupies.
        target: Coord,
        /// Kind of organ to grow (never ROOT).
        kind: OrganKind,
        /// Facing of the new organ; `None` for BASIC.
        facing: Option<Direction>,
    },
    /// Launch a spore that founds a new organism at `target`.
    Spore {
        /// The launching SPORER organ.
        sporer_id: OrganId,
        /// Cell where the new ROOT appears.
        target: Coord,
    },
}

impl Action {
    /// Protein cost of this action.
    #[must_use]
    pub const fn cost(&self) -> Resources {
        match self {
            Action::Wait => Resources::new(0, 0, 0, 0),
            Action::Grow { kind, .. } => Resources::cost_of(*kind),
            Action::Spore { .. } => Resources::spore_cost(),
        }
    }

    /// Organ issuing the action, if any.
    #[must_use]
    pub const fn source(&self) -> Option<OrganId> {
        match self {
            Action::Wait => None,
            Action::Grow { parent_id, .. } => Some(*parent_id),
            Action::Spore { sporer_id, .. } => Some(*sporer_id),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Wait => write!(f, "WAIT"),
            Action::Grow {
                parent_id,
                target,
                kind,
                facing,
            } => write!(
                f,
                "GROW {parent_id} {} {} {kind} {}",
                target.x,
                target.y,
                facing_symbol(*facing)
            ),
            Action::Spore { sporer_id, target } => {
                write!(f, "SPORE {sporer_id} {} {}", target.x, target.y)
            }
        }
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let number = |idx: usize| -> Result<u32, ParseActionError> {
            fields
                .get(idx)
                .and_then(|field| field.parse().ok())
                .ok_or_else(|| ParseActionError::new(s, "expected a non-negative integer"))
        };
        let coord = |idx: usize| -> Result<Coord, ParseActionError> {
            let x = u16::try_from(number(idx)?)
                .map_err(|_| ParseActionError::new(s, "x coordinate too large"))?;
            let y = u16::try_from(number(idx + 1)?)
                .map_err(|_| ParseActionError::new(s, "y coordinate too large"))?;
            Ok(Coord::new(x, y))
        };

        match fields.first().copied() {
            Some("WAIT") if fields.len() == 1 => Ok(Action::Wait),
            Some("GROW") if matches!(fields.len(), 5 | 6) => {
                let kind: OrganKind = fields[4]
                    .parse()
                    .map_err(|()| ParseActionError::new(s, "unknown organ kind"))?;
                if kind == OrganKind::Root {
                    return Err(ParseActionError::new(s, "ROOT cannot be grown"));
                }
                let facing = fields
                    .get(5)
                    .and_then(|symbol| symbol.chars().next())
                    .and_then(Direction::from_symbol);
                Ok(Action::Grow {
                    parent_id: number(1)?,
                    target: coord(2)?,
                    kind,
                    facing,
                })
            }
            Some("SPORE") if fields.len() == 4 => Ok(Action::Spore {
                sporer_id: number(1)?,
                target: coord(2)?,
            }),
            _ => Err(ParseActionError::new(s, "unrecognised command shape")),
        }
    }
}
