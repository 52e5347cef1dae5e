#![no_main]

//! Turn simulation fuzzer.
//!
//! Builds a board from arbitrary entity rows, then plays catalog actions for
//! both sides:
//! 1. Rows that describe an impossible board must be rejected, not panic
//! 2. Every catalog action must be affordable
//! 3. Applying it must keep every board invariant
//! 4. A shallow search must return one decision per own root

use arbitrary::Arbitrary;
use cellmind::game::{
    apply_owned, check_invariants, legal_actions, Action, Actors, Board, Entity, EntityRow,
    Resources, Rules, Side,
};
use cellmind::search::{EvalWeights, SearchConfig, Searcher};
use libfuzzer_sys::fuzz_target;

const TAGS: [&str; 11] = [
    "WALL", "ROOT", "BASIC", "HARVESTER", "TENTACLE", "SPORER", "A", "B", "C", "D", "JUNK",
];
const DIRECTIONS: [char; 5] = ['N', 'E', 'S', 'W', 'X'];

/// A fuzzer-generated entity row.
#[derive(Arbitrary, Debug)]
struct FuzzRow {
    x: i8,
    y: i8,
    tag: u8,
    owner: i8,
    organ_id: u8,
    direction: u8,
    parent_id: u8,
}

/// Structured input for turn fuzzing.
#[derive(Arbitrary, Debug)]
struct TurnFuzzInput {
    width: u8,
    height: u8,
    rows: Vec<FuzzRow>,
    mine: [u8; 4],
    theirs: [u8; 4],
    /// Action picks, alternating sides.
    picks: Vec<u16>,
    on_placement: bool,
    unfiltered: bool,
}

fuzz_target!(|input: TurnFuzzInput| {
    let width = u16::from(input.width % 12);
    let height = u16::from(input.height % 12);
    let rows: Vec<EntityRow> = input
        .rows
        .iter()
        .take(40)
        .map(|row| EntityRow {
            x: i64::from(row.x),
            y: i64::from(row.y),
            kind: TAGS[usize::from(row.tag) % TAGS.len()].to_string(),
            owner: i32::from(row.owner % 3),
            organ_id: u32::from(row.organ_id),
            direction: DIRECTIONS[usize::from(row.direction) % DIRECTIONS.len()],
            parent_id: u32::from(row.parent_id),
            root_id: u32::from(row.parent_id),
        })
        .collect();
    let resources = |counts: [u8; 4]| Resources::from_array(counts.map(|n| i32::from(n % 6)));

    let Ok(mut board) = Board::from_rows(width, height, &rows, resources(input.mine), resources(input.theirs))
    else {
        return;
    };

    // Only boards that start consistent must stay consistent.
    let clean = check_invariants(&board).is_empty();

    let mut rules = Rules::default();
    if input.on_placement {
        rules.harvest = cellmind::game::HarvestTiming::OnPlacement;
    }
    if input.unfiltered {
        rules.sporer_placement = cellmind::game::SporerPlacement::Unfiltered;
    }

    for (turn, pick) in input.picks.iter().take(12).enumerate() {
        let side = if turn % 2 == 0 { Side::Me } else { Side::Opponent };
        let actions = legal_actions(&board, side, Actors::All, &rules);
        assert_eq!(actions.last(), Some(&Action::Wait));

        let action = actions[usize::from(*pick) % actions.len()];
        let stock = board.resources(side);
        assert!(stock.covers(&action.cost()), "{action} not affordable from {stock:?}");

        let root = action
            .source()
            .and_then(|id| board.organ(id))
            .map_or(0, Entity::organism);
        board = apply_owned(board, &action, side, root, &rules);

        if clean {
            let violations = check_invariants(&board);
            assert!(violations.is_empty(), "after {action}: {violations:?}");
        }
    }

    let config = SearchConfig {
        depth: 1,
        seed: Some(0),
        ..SearchConfig::default()
    };
    let decisions = Searcher::new(config, rules, EvalWeights::default()).decide(&board);
    assert_eq!(decisions.len(), board.roots(Side::Me).count());
});
