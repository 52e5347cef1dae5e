//! Legal action enumeration.
//!
//! The catalog is the only gate for legality. Every action it returns is
//! affordable for the acting side and targets an in-bounds, non-wall,
//! organ-free cell; the simulator relies on that and checks nothing.

use crate::game::{
    Action, Board, Coord, Direction, Entity, OrganId, OrganKind, Resources, Rules, Side,
    SporerPlacement,
};

/// Which organs of a side may act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actors {
    /// Only the organism rooted at this organ id.
    Organism(OrganId),
    /// Every organ of the side.
    All,
}

impl Actors {
    fn admits(self, organ: &Entity) -> bool {
        match self {
            Actors::Organism(root) => organ.belongs_to(root),
            Actors::All => true,
        }
    }
}

/// Enumerate the legal actions of `side` for the given actors.
///
/// WAIT is always included. Order is unspecified.
#[must_use]
pub fn legal_actions(board: &Board, side: Side, actors: Actors, rules: &Rules) -> Vec<Action> {
    let stock = board.resources(side);
    let affordable: Vec<OrganKind> = OrganKind::GROWABLE
        .into_iter()
        .filter(|kind| stock.covers(&Resources::cost_of(*kind)))
        .collect();
    let can_spore = stock.covers(&Resources::spore_cost());

    let mut actions = Vec::new();
    for organ in board.organs(side).filter(|organ| actors.admits(organ)) {
        if !affordable.is_empty() {
            push_growths(board, organ, &affordable, rules, &mut actions);
        }
        if can_spore && organ.organ_kind() == Some(OrganKind::Sporer) {
            for target in spore_targets(board, organ.coord) {
                actions.push(Action::Spore {
                    sporer_id: organ.organ_id,
                    target,
                });
            }
        }
    }

    actions.push(Action::Wait);
    actions
}

fn push_growths(
    board: &Board,
    parent: &Entity,
    affordable: &[OrganKind],
    rules: &Rules,
    actions: &mut Vec<Action>,
) {
    for dir in Direction::ALL {
        let Some(target) = board.neighbor(parent.coord, dir) else {
            continue;
        };
        if !board.is_open(target) {
            continue;
        }

        for &kind in affordable {
            if kind == OrganKind::Sporer
                && rules.sporer_placement == SporerPlacement::ProteinLine
                && !ray_reaches_protein(board, target, dir)
            {
                continue;
            }
            actions.push(Action::Grow {
                parent_id: parent.organ_id,
                target,
                kind,
                facing: kind.is_directional().then_some(dir),
            });
        }
    }
}

/// Cells visited by a straight scan from `origin` (exclusive) in `dir`,
/// stopping before the first wall, organ or edge.
fn open_ray(board: &Board, origin: Coord, dir: Direction) -> impl Iterator<Item = Coord> + '_ {
    std::iter::successors(board.neighbor(origin, dir), move |cell| board.neighbor(*cell, dir))
        .take_while(move |cell| board.is_open(*cell))
}

/// Whether a straight scan from `origin` in `dir` meets a protein tile before
/// anything that blocks it.
#[must_use]
pub fn ray_reaches_protein(board: &Board, origin: Coord, dir: Direction) -> bool {
    open_ray(board, origin, dir).any(|cell| board.is_protein(cell))
}

/// Protein tiles a sporer at `origin` can hit: those in its row or column
/// with no wall or organ in between.
#[must_use]
pub fn spore_targets(board: &Board, origin: Coord) -> Vec<Coord> {
    Direction::ALL
        .into_iter()
        .flat_map(|dir| open_ray(board, origin, dir))
        .filter(|cell| board.is_protein(*cell))
        .collect()
}
