//! Tentacle combat resolution.
//!
//! Every tentacle on the board attacks the cell it faces. Kills are computed
//! against the board as it stands before any removal, then applied in one
//! pass, so a tentacle that dies this round still lands its own hit.

use std::collections::{BTreeMap, BTreeSet};

use crate::game::{Board, Entity, OrganId, OrganKind, Side};

/// Resolve all tentacle attacks simultaneously.
///
/// A struck organ dies together with its whole descendant subtree (organs of
/// the same owner linked to it by parent id). Returns the removed organs in
/// ascending id order.
pub fn resolve_combat(board: &mut Board) -> Vec<Entity> {
    let doomed = doomed_organs(board);
    if doomed.is_empty() {
        return Vec::new();
    }

    let removed: Vec<Entity> = doomed
        .into_iter()
        .filter_map(|id| board.remove_organ(id))
        .collect();
    tracing::trace!(count = removed.len(), "tentacle kills resolved");
    removed
}

/// Ids of every organ that dies this round, without touching the board.
#[must_use]
pub fn doomed_organs(board: &Board) -> BTreeSet<OrganId> {
    let mut doomed = BTreeSet::new();
    for side in [Side::Me, Side::Opponent] {
        let enemy = side.opponent();
        let children = children_by_parent(board, enemy);

        for tentacle in board.organs_of_kind(side, OrganKind::Tentacle) {
            let Some(dir) = tentacle.facing else {
                continue;
            };
            let Some(victim) = board
                .neighbor(tentacle.coord, dir)
                .and_then(|cell| board.get(cell))
                .filter(|e| e.organ_kind().is_some() && e.owner == Some(enemy))
            else {
                continue;
            };
            mark_subtree(victim.organ_id, &children, &mut doomed);
        }
    }
    doomed
}

fn children_by_parent(board: &Board, side: Side) -> BTreeMap<OrganId, Vec<OrganId>> {
    let mut children: BTreeMap<OrganId, Vec<OrganId>> = BTreeMap::new();
    for organ in board.organs(side).filter(|organ| organ.parent_id != 0) {
        children.entry(organ.parent_id).or_default().push(organ.organ_id);
    }
    children
}

fn mark_subtree(
    start: OrganId,
    children: &BTreeMap<OrganId, Vec<OrganId>>,
    doomed: &mut BTreeSet<OrganId>,
) {
    let mut stack = vec![start];
    while let Some(id) = stack.pop() {
        // Already-marked organs had their subtree queued when first marked.
        if !doomed.insert(id) {
            continue;
        }
        if let Some(kids) = children.get(&id) {
            stack.extend(kids.iter().copied());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Coord, Direction};

    fn organ(
        x: u16,
        y: u16,
        kind: OrganKind,
        side: Side,
        id: OrganId,
        facing: Option<Direction>,
        parent: OrganId,
    ) -> Entity {
        let root = if parent == 0 { id } else { 0 };
        Entity::organ(Coord::new(x, y), kind, side, id, facing, parent, root)
    }

    #[test]
    fn test_no_tentacles_no_kills() {
        let mut board = Board::new(4, 4).unwrap();
        board
            .add_entity(organ(0, 0, OrganKind::Root, Side::Me, 1, None, 0))
            .unwrap();
        board
            .add_entity(organ(1, 0, OrganKind::Root, Side::Opponent, 2, None, 0))
            .unwrap();
        let before = board.clone();
        assert!(resolve_combat(&mut board).is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_kill_takes_descendants() {
        let mut board = Board::new(6, 3).unwrap();
        board
            .add_entity(organ(0, 1, OrganKind::Root, Side::Me, 1, None, 0))
            .unwrap();
        board
            .add_entity(organ(1, 1, OrganKind::Tentacle, Side::Me, 2, Some(Direction::East), 1))
            .unwrap();
        // Enemy chain: root 10 <- basic 11 (struck) <- basic 12 <- harvester 13
        board
            .add_entity(organ(5, 1, OrganKind::Root, Side::Opponent, 10, None, 0))
            .unwrap();
        board
            .add_entity(organ(2, 1, OrganKind::Basic, Side::Opponent, 11, None, 10))
            .unwrap();
        board
            .add_entity(organ(3, 1, OrganKind::Basic, Side::Opponent, 12, None, 11))
            .unwrap();
        board
            .add_entity(organ(3, 2, OrganKind::Harvester, Side::Opponent, 13, Some(Direction::South), 12))
            .unwrap();

        let removed: Vec<OrganId> = resolve_combat(&mut board).iter().map(|e| e.organ_id).collect();
        assert_eq!(removed, vec![11, 12, 13]);
        assert!(board.organ(10).is_some());
        assert!(board.organ(2).is_some());
        assert!(board.buckets_consistent());
    }

    #[test]
    fn test_tentacle_ignores_friendly_organs() {
        let mut board = Board::new(4, 1).unwrap();
        board
            .add_entity(organ(0, 0, OrganKind::Root, Side::Me, 1, None, 0))
            .unwrap();
        board
            .add_entity(organ(1, 0, OrganKind::Tentacle, Side::Me, 2, Some(Direction::West), 1))
            .unwrap();
        assert!(resolve_combat(&mut board).is_empty());
    }

    #[test]
    fn test_mutual_tentacles_both_die() {
        let mut board = Board::new(4, 1).unwrap();
        board
            .add_entity(organ(0, 0, OrganKind::Root, Side::Me, 1, None, 0))
            .unwrap();
        board
            .add_entity(organ(1, 0, OrganKind::Tentacle, Side::Me, 2, Some(Direction::East), 1))
            .unwrap();
        board
            .add_entity(organ(2, 0, OrganKind::Tentacle, Side::Opponent, 3, Some(Direction::West), 4))
            .unwrap();
        board
            .add_entity(organ(3, 0, OrganKind::Root, Side::Opponent, 4, None, 0))
            .unwrap();

        let removed: Vec<OrganId> = resolve_combat(&mut board).iter().map(|e| e.organ_id).collect();
        assert_eq!(removed, vec![2, 3]);
        assert_eq!(board.organ_count(Side::Me), 1);
        assert_eq!(board.organ_count(Side::Opponent), 1);
    }
}
