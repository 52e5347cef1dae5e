//! One-ply state transition.
//!
//! The simulator trusts its input: it performs no legality checks and deducts
//! costs unconditionally. Only feed it actions produced by the catalog.

use crate::game::{
    resolve_combat, Action, Board, Entity, HarvestTiming, OrganId, OrganKind, Resources, Rules,
    Side,
};

/// Apply `action` for `side` to a copy of `board`.
///
/// `root` is the organism the action is issued for; grown organs inherit it
/// as their root id. The source board is never modified.
#[must_use]
pub fn apply(board: &Board, action: &Action, side: Side, root: OrganId, rules: &Rules) -> Board {
    apply_owned(board.clone(), action, side, root, rules)
}

/// Apply `action` to a board the caller already owns.
///
/// WAIT returns the board untouched. Every other action is followed by
/// simultaneous tentacle combat over the resulting board.
#[must_use]
pub fn apply_owned(
    mut board: Board,
    action: &Action,
    side: Side,
    root: OrganId,
    rules: &Rules,
) -> Board {
    match *action {
        Action::Wait => return board,
        Action::Grow {
            parent_id,
            target,
            kind,
            facing,
        } => {
            *board.resources_mut(side) -= Resources::cost_of(kind);
            let organ = Entity::organ(
                target,
                kind,
                side,
                board.next_organ_id(),
                facing,
                parent_id,
                root,
            );
            let evicted = board.place(organ);

            let absorbed = evicted
                .as_ref()
                .and_then(Entity::protein_kind)
                .filter(|_| kind == OrganKind::Basic);
            if let Some(protein) = absorbed {
                board.resources_mut(side).credit(protein, rules.absorb_gain);
            }
            if kind == OrganKind::Harvester && rules.harvest == HarvestTiming::OnPlacement {
                harvest_on_placement(&mut board, &organ, side, rules);
            }
        }
        Action::Spore { target, .. } => {
            *board.resources_mut(side) -= Resources::spore_cost();
            let root_organ = Entity::organ(
                target,
                OrganKind::Root,
                side,
                board.next_organ_id(),
                None,
                0,
                0,
            );
            board.place(root_organ);
        }
    }

    resolve_combat(&mut board);
    board
}

fn harvest_on_placement(board: &mut Board, harvester: &Entity, side: Side, rules: &Rules) {
    let faced = harvester
        .facing
        .and_then(|dir| board.neighbor(harvester.coord, dir))
        .and_then(|cell| board.protein_at(cell));
    if let Some(protein) = faced {
        board.resources_mut(side).credit(protein, rules.harvest_gain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Coord, Direction, ProteinKind};

    fn scenario_board() -> Board {
        let mut board = Board::new(6, 6).unwrap();
        board
            .add_entity(Entity::organ(Coord::new(2, 2), OrganKind::Root, Side::Me, 1, None, 0, 1))
            .unwrap();
        board
            .add_entity(Entity::protein(Coord::new(3, 2), ProteinKind::A))
            .unwrap();
        board.set_resources(Side::Me, Resources::new(1, 0, 0, 0));
        board
    }

    #[test]
    fn test_wait_is_identity() {
        let board = scenario_board();
        let next = apply(&board, &Action::Wait, Side::Me, 1, &Rules::default());
        assert_eq!(next, board);
    }

    #[test]
    fn test_basic_absorbs_protein() {
        let board = scenario_board();
        let action = Action::Grow {
            parent_id: 1,
            target: Coord::new(3, 2),
            kind: OrganKind::Basic,
            facing: None,
        };
        let next = apply(&board, &action, Side::Me, 1, &Rules::default());

        let grown = next.get(Coord::new(3, 2)).unwrap();
        assert_eq!(grown.organ_kind(), Some(OrganKind::Basic));
        assert_eq!(grown.organ_id, 2);
        assert_eq!(grown.parent_id, 1);
        assert_eq!(grown.root_id, 1);
        assert_eq!(next.resources(Side::Me).a, 3);
        assert_eq!(next.proteins().count(), 0);
        // Source untouched.
        assert_eq!(board.resources(Side::Me).a, 1);
        assert!(board.is_protein(Coord::new(3, 2)));
    }

    #[test]
    fn test_harvester_deferred_and_on_placement() {
        let mut board = scenario_board();
        board.set_resources(Side::Me, Resources::new(0, 0, 1, 1));
        let action = Action::Grow {
            parent_id: 1,
            target: Coord::new(2, 2).step(Direction::South).unwrap(),
            kind: OrganKind::Harvester,
            facing: Some(Direction::East),
        };
        board
            .add_entity(Entity::protein(Coord::new(3, 3), ProteinKind::C))
            .unwrap();

        let deferred = apply(&board, &action, Side::Me, 1, &Rules::default());
        assert_eq!(deferred.resources(Side::Me), Resources::new(0, 0, 0, 0));
        assert!(deferred.is_protein(Coord::new(3, 3)));

        let rules = Rules {
            harvest: HarvestTiming::OnPlacement,
            ..Rules::default()
        };
        let eager = apply(&board, &action, Side::Me, 1, &rules);
        assert_eq!(eager.resources(Side::Me), Resources::new(0, 0, 1, 0));
        assert!(eager.is_protein(Coord::new(3, 3)));
    }

    #[test]
    fn test_spore_founds_new_root() {
        let mut board = Board::new(5, 5).unwrap();
        board
            .add_entity(Entity::organ(
                Coord::new(0, 0),
                OrganKind::Sporer,
                Side::Me,
                5,
                Some(Direction::South),
                1,
                1,
            ))
            .unwrap();
        board
            .add_entity(Entity::protein(Coord::new(0, 4), ProteinKind::B))
            .unwrap();
        board.set_resources(Side::Me, Resources::new(1, 1, 1, 1));

        let action = Action::Spore {
            sporer_id: 5,
            target: Coord::new(0, 4),
        };
        let next = apply(&board, &action, Side::Me, 1, &Rules::default());
        let new_root = next.get(Coord::new(0, 4)).unwrap();
        assert_eq!(new_root.organ_kind(), Some(OrganKind::Root));
        assert_eq!(new_root.parent_id, 0);
        assert_eq!(new_root.root_id, 0);
        assert_eq!(new_root.organ_id, 6);
        assert_eq!(next.resources(Side::Me), Resources::new(0, 0, 0, 0));
    }

    #[test]
    fn test_growing_a_tentacle_triggers_combat() {
        let mut board = Board::new(5, 1).unwrap();
        board
            .add_entity(Entity::organ(Coord::new(0, 0), OrganKind::Root, Side::Me, 1, None, 0, 1))
            .unwrap();
        board
            .add_entity(Entity::organ(Coord::new(2, 0), OrganKind::Basic, Side::Opponent, 3, None, 4, 4))
            .unwrap();
        board
            .add_entity(Entity::organ(Coord::new(3, 0), OrganKind::Root, Side::Opponent, 4, None, 0, 4))
            .unwrap();
        board.set_resources(Side::Me, Resources::new(0, 1, 1, 0));

        let action = Action::Grow {
            parent_id: 1,
            target: Coord::new(1, 0),
            kind: OrganKind::Tentacle,
            facing: Some(Direction::East),
        };
        let next = apply(&board, &action, Side::Me, 1, &Rules::default());
        assert!(next.organ(3).is_none());
        assert!(next.organ(4).is_some());
        assert_eq!(next.resources(Side::Me), Resources::new(0, 0, 0, 0));
    }
}
