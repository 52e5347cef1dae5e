//! Game layer: the board model and the rules that act on it.
//!
//! - Grid geometry and directions
//! - Entities, organs and protein tiles
//! - Board store with classified buckets
//! - Legal action enumeration
//! - One-ply simulation with simultaneous tentacle combat
//! - Turn-state construction from engine rows

mod action;
mod board;
mod catalog;
mod combat;
mod entity;
mod input;
mod invariants;
mod map;
mod resources;
mod rules;
mod simulator;

pub use action::Action;
pub use board::Board;
pub use catalog::{legal_actions, ray_reaches_protein, spore_targets, Actors};
pub use combat::{doomed_organs, resolve_combat};
pub use entity::{Entity, EntityKind, OrganId, OrganKind, ProteinKind, Side};
pub use input::{EntityRow, TurnInput};
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use map::{facing_symbol, Coord, Direction};
pub use resources::Resources;
pub use rules::{HarvestTiming, Rules, SporerPlacement};
pub use simulator::{apply, apply_owned};
