//! Output formatting utilities for CLI.

use cellmind::game::{Board, Coord, EntityKind, OrganKind, ProteinKind, Side};
use cellmind::search::{Decision, ScoreBreakdown, SearchStats};
use serde::Serialize;

/// JSON-serializable decision.
#[derive(Debug, Serialize)]
pub(super) struct JsonDecision {
    /// Root organ id.
    pub(super) root_id: u32,
    /// Command text.
    pub(super) command: String,
    /// Backed-up value.
    pub(super) score: i32,
}

impl From<&Decision> for JsonDecision {
    fn from(decision: &Decision) -> Self {
        Self {
            root_id: decision.root_id,
            command: decision.action.to_string(),
            score: decision.score,
        }
    }
}

/// JSON-serializable result of the `decide` command.
#[derive(Debug, Serialize)]
pub(super) struct JsonTurn {
    /// One entry per own root.
    pub(super) decisions: Vec<JsonDecision>,
    /// Search counters.
    pub(super) stats: SearchStats,
}

/// JSON-serializable result of the `eval` command.
#[derive(Debug, Serialize)]
pub(super) struct JsonEval {
    /// Weighted terms.
    pub(super) terms: ScoreBreakdown,
    /// Sum of the terms.
    pub(super) total: i32,
}

/// Format a score breakdown as human-readable text.
pub(super) fn format_breakdown(terms: &ScoreBreakdown) -> String {
    let rows = [
        ("organs", terms.organs),
        ("resources", terms.resources),
        ("extra roots", terms.extra_roots),
        ("sporers", terms.sporers),
        ("sporers ready", terms.sporers_ready),
        ("tentacle threats", terms.tentacle_threats),
        ("harvesters", terms.harvesters),
        ("sporer proximity", terms.sporer_proximity),
    ];

    let mut output = String::new();
    for (name, value) in rows {
        output.push_str(&format!("  {name:<18}{value:>6}\n"));
    }
    output.push_str(&format!("  {:<18}{:>6}\n", "total", terms.total()));
    output
}

/// Render the grid as text.
///
/// Walls are `#`, protein tiles `1`-`4` (A-D), our organs upper-case
/// initials, opponent organs lower-case initials, empty cells `.`.
pub(super) fn render_board(board: &Board) -> String {
    let mut output = String::new();
    for y in 0..board.height() {
        for x in 0..board.width() {
            output.push(cell_symbol(board, Coord::new(x, y)));
        }
        output.push('\n');
    }
    output
}

fn cell_symbol(board: &Board, coord: Coord) -> char {
    let Some(entity) = board.get(coord) else {
        return '.';
    };
    match entity.kind {
        EntityKind::Wall => '#',
        EntityKind::Protein(protein) => match protein {
            ProteinKind::A => '1',
            ProteinKind::B => '2',
            ProteinKind::C => '3',
            ProteinKind::D => '4',
        },
        EntityKind::Organ(kind) => {
            let symbol = match kind {
                OrganKind::Root => 'R',
                OrganKind::Basic => 'B',
                OrganKind::Harvester => 'H',
                OrganKind::Tentacle => 'T',
                OrganKind::Sporer => 'S',
            };
            if entity.owner == Some(Side::Me) {
                symbol
            } else {
                symbol.to_ascii_lowercase()
            }
        }
    }
}

/// Per-side organ count and stock.
pub(super) fn format_sides(board: &Board) -> String {
    let mut output = String::new();
    for (label, side) in [("me", Side::Me), ("opponent", Side::Opponent)] {
        let stock = board.resources(side);
        output.push_str(&format!(
            "  {label:<9}organs {:>3}  A {:>3}  B {:>3}  C {:>3}  D {:>3}\n",
            board.organ_count(side),
            stock.a,
            stock.b,
            stock.c,
            stock.d
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellmind::game::{Direction, Entity};

    #[test]
    fn test_render_board() {
        let mut board = Board::new(4, 2).unwrap();
        board.add_entity(Entity::wall(Coord::new(0, 0))).unwrap();
        board
            .add_entity(Entity::protein(Coord::new(1, 0), ProteinKind::C))
            .unwrap();
        board
            .add_entity(Entity::organ(Coord::new(2, 1), OrganKind::Root, Side::Me, 1, None, 0, 1))
            .unwrap();
        board
            .add_entity(Entity::organ(
                Coord::new(3, 1),
                OrganKind::Tentacle,
                Side::Opponent,
                2,
                Some(Direction::West),
                0,
                2,
            ))
            .unwrap();
        assert_eq!(render_board(&board), "#3..\n..Rt\n");
    }

    #[test]
    fn test_breakdown_total_row() {
        let terms = ScoreBreakdown {
            organs: 10,
            resources: -4,
            ..ScoreBreakdown::default()
        };
        let text = format_breakdown(&terms);
        assert!(text.lines().last().unwrap().ends_with('6'));
    }
}
