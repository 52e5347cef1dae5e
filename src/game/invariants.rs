//! Board invariants - sanity checks that detect bugs.
//!
//! A board built through [`Board::add_entity`] and advanced only with
//! catalog-produced actions should never trip any of these. Resource
//! overdraft in particular means an action bypassed the catalog.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::game::{Board, EntityKind, OrganId, OrganKind, Side};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(board: &Board) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    if !board.buckets_consistent() {
        violations.push(InvariantViolation::new(
            "classification buckets disagree with the grid",
        ));
    }

    let mut seen: BTreeMap<OrganId, usize> = BTreeMap::new();
    for entity in board.entities() {
        let EntityKind::Organ(kind) = entity.kind else {
            continue;
        };
        *seen.entry(entity.organ_id).or_default() += 1;

        if entity.owner.is_none() {
            violations.push(InvariantViolation::new(format!(
                "organ {} at {} has no owner",
                entity.organ_id, entity.coord
            )));
        }
        if kind == OrganKind::Root && entity.parent_id != 0 {
            violations.push(InvariantViolation::new(format!(
                "root {} has parent id {}",
                entity.organ_id, entity.parent_id
            )));
        }
        if entity.parent_id != 0 {
            let parent_ok = entity
                .owner
                .zip(board.organ(entity.parent_id))
                .is_some_and(|(side, parent)| parent.owner == Some(side));
            if !parent_ok {
                violations.push(InvariantViolation::new(format!(
                    "organ {} references missing parent {}",
                    entity.organ_id, entity.parent_id
                )));
            }
        }
    }

    for (id, count) in seen {
        if count > 1 {
            violations.push(InvariantViolation::new(format!(
                "organ id {id} appears {count} times"
            )));
        }
    }

    for side in [Side::Me, Side::Opponent] {
        let stock = board.resources(side);
        if stock.is_overdrawn() {
            violations.push(InvariantViolation::new(format!(
                "{side:?} resources are negative: {stock:?}"
            )));
        }
    }

    violations
}

/// Assert all board invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(board: &Board) {
    let violations = check_invariants(board);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Board invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_board: &Board) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::game::{Coord, Direction, Entity, ProteinKind, Resources};

    fn create_valid_board() -> Board {
        let mut board = Board::new(5, 5).unwrap();
        board
            .add_entity(Entity::organ(Coord::new(1, 1), OrganKind::Root, Side::Me, 1, None, 0, 1))
            .unwrap();
        board
            .add_entity(Entity::organ(
                Coord::new(2, 1),
                OrganKind::Harvester,
                Side::Me,
                2,
                Some(Direction::East),
                1,
                1,
            ))
            .unwrap();
        board
            .add_entity(Entity::protein(Coord::new(3, 1), ProteinKind::C))
            .unwrap();
        board
            .add_entity(Entity::organ(Coord::new(4, 4), OrganKind::Root, Side::Opponent, 3, None, 0, 3))
            .unwrap();
        board.set_resources(Side::Me, Resources::new(2, 0, 1, 1));
        board
    }

    #[test]
    fn test_valid_board_passes() {
        let board = create_valid_board();
        assert!(check_invariants(&board).is_empty());
        assert_invariants(&board);
    }

    #[test]
    fn test_negative_resources_detected() {
        let mut board = create_valid_board();
        board.set_resources(Side::Opponent, Resources::new(0, -1, 0, 0));

        let violations = check_invariants(&board);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("negative"));
    }

    #[test]
    fn test_orphan_organ_detected() {
        let mut board = create_valid_board();
        board.remove_organ(1);

        let violations = check_invariants(&board);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("missing parent 1"));
    }

    #[test]
    fn test_cross_side_duplicate_id_detected() {
        let mut board = create_valid_board();
        // Same id on the other side slips past add_entity only through place().
        board.place(Entity::organ(
            Coord::new(0, 4),
            OrganKind::Root,
            Side::Opponent,
            1,
            None,
            0,
            1,
        ));

        let violations = check_invariants(&board);
        assert!(violations.iter().any(|v| v.message.contains("appears 2 times")));
    }

    #[test]
    fn test_unowned_organ_detected() {
        let mut board = create_valid_board();
        let mut stray = Entity::organ(Coord::new(0, 0), OrganKind::Basic, Side::Me, 9, None, 0, 9);
        stray.owner = None;
        assert_eq!(board.add_entity(stray), Err(BoardError::UnownedOrgan(Coord::new(0, 0))));
        board.place(stray);

        let violations = check_invariants(&board);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("no owner"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Board invariant violations")]
    fn test_assert_invariants_panics() {
        let mut board = create_valid_board();
        board.set_resources(Side::Me, Resources::new(-1, 0, 0, 0));
        assert_invariants(&board);
    }
}
