//! Static board evaluation.
//!
//! The score is a weighted sum of material, stock and positional terms, taken
//! from one side's perspective. It is pure: the same board always scores the
//! same.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::game::{spore_targets, Board, Coord, Direction, OrganKind, Resources, Side};

/// Evaluator weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Per organ of organ-count lead.
    pub organ: i32,
    /// Per unit of total protein lead.
    pub resource: i32,
    /// Per own root beyond the first.
    pub extra_root: i32,
    /// Per own sporer.
    pub sporer: i32,
    /// Per own sporer able to launch this turn.
    pub sporer_ready: i32,
    /// Per own tentacle facing an enemy organ.
    pub tentacle_threat: i32,
    /// Per own harvester facing a protein tile.
    pub harvester_on_protein: i32,
    /// Proximity bonus cap per sporer; one point lost per step to the
    /// nearest protein.
    pub sporer_proximity: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            organ: 10,
            resource: 2,
            extra_root: 80,
            sporer: 40,
            sporer_ready: 60,
            tentacle_threat: 30,
            harvester_on_protein: 10,
            sporer_proximity: 20,
        }
    }
}

/// Each weighted term of a score, already multiplied by its weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// Organ-count lead.
    pub organs: i32,
    /// Total protein lead.
    pub resources: i32,
    /// Roots beyond the first.
    pub extra_roots: i32,
    /// Sporers owned.
    pub sporers: i32,
    /// Sporers with a launch available.
    pub sporers_ready: i32,
    /// Tentacles facing an enemy organ.
    pub tentacle_threats: i32,
    /// Harvesters facing a protein tile.
    pub harvesters: i32,
    /// Sporer distance to protein.
    pub sporer_proximity: i32,
}

impl ScoreBreakdown {
    /// Sum of all terms, saturating.
    ///
    /// Never `i32::MIN`, so negating a score cannot overflow and the search
    /// can keep `i32::MIN` as its "nothing found" sentinel.
    #[must_use]
    pub const fn total(&self) -> i32 {
        let sum = self
            .organs
            .saturating_add(self.resources)
            .saturating_add(self.extra_roots)
            .saturating_add(self.sporers)
            .saturating_add(self.sporers_ready)
            .saturating_add(self.tentacle_threats)
            .saturating_add(self.harvesters)
            .saturating_add(self.sporer_proximity);
        if sum == i32::MIN { -i32::MAX } else { sum }
    }
}

/// Score `board` from `side`'s perspective.
#[must_use]
pub fn score(board: &Board, side: Side, weights: &EvalWeights) -> i32 {
    breakdown(board, side, weights).total()
}

/// Score `board` from `side`'s perspective, term by term.
#[must_use]
pub fn breakdown(board: &Board, side: Side, weights: &EvalWeights) -> ScoreBreakdown {
    let enemy = side.opponent();
    let stock = board.resources(side);
    let can_spore = stock.covers(&Resources::spore_cost());

    let organ_lead = count(board.organ_count(side)).saturating_sub(count(board.organ_count(enemy)));
    let resource_lead = stock.total().saturating_sub(board.resources(enemy).total());
    let extra_roots = count(board.roots(side).count()).saturating_sub(1).max(0);

    let mut out = ScoreBreakdown {
        organs: weights.organ.saturating_mul(organ_lead),
        resources: weights.resource.saturating_mul(resource_lead),
        extra_roots: weights.extra_root.saturating_mul(extra_roots),
        ..ScoreBreakdown::default()
    };

    for sporer in board.organs_of_kind(side, OrganKind::Sporer) {
        out.sporers = out.sporers.saturating_add(weights.sporer);
        if can_spore && !spore_targets(board, sporer.coord).is_empty() {
            out.sporers_ready = out.sporers_ready.saturating_add(weights.sporer_ready);
        }
        if let Some(dist) = distance_to_protein(board, sporer.coord) {
            let bonus = weights.sporer_proximity.saturating_sub(count(dist)).max(0);
            out.sporer_proximity = out.sporer_proximity.saturating_add(bonus);
        }
    }

    for tentacle in board.organs_of_kind(side, OrganKind::Tentacle) {
        if faced(board, tentacle.coord, tentacle.facing).is_some_and(|c| board.is_organ_of(c, enemy)) {
            out.tentacle_threats = out.tentacle_threats.saturating_add(weights.tentacle_threat);
        }
    }

    for harvester in board.organs_of_kind(side, OrganKind::Harvester) {
        if faced(board, harvester.coord, harvester.facing).is_some_and(|c| board.is_protein(c)) {
            out.harvesters = out.harvesters.saturating_add(weights.harvester_on_protein);
        }
    }

    out
}

fn faced(board: &Board, coord: Coord, facing: Option<Direction>) -> Option<Coord> {
    facing.and_then(|dir| board.neighbor(coord, dir))
}

fn count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Breadth-first step count from `start` to the nearest protein tile, moving
/// through any non-wall cell. `None` if no protein is reachable.
fn distance_to_protein(board: &Board, start: Coord) -> Option<usize> {
    let width = usize::from(board.width());
    let index = |c: Coord| usize::from(c.y) * width + usize::from(c.x);

    let mut visited = vec![false; width * usize::from(board.height())];
    let mut queue = VecDeque::from([(start, 0)]);
    visited[index(start)] = true;

    while let Some((cell, dist)) = queue.pop_front() {
        if board.is_protein(cell) {
            return Some(dist);
        }
        for dir in Direction::ALL {
            let Some(next) = board.neighbor(cell, dir) else {
                continue;
            };
            if board.is_wall(next) || visited[index(next)] {
                continue;
            }
            visited[index(next)] = true;
            queue.push_back((next, dist + 1));
        }
    }
    None
}
