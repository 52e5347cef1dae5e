//! Depth-bounded minimax with alpha-beta pruning and a beam cap.
//!
//! Every node expands by simulating each legal action on a fresh clone,
//! scoring the child, and keeping only the best `beam_width` children for
//! recursion. The root layer searches one organism; deeper own layers model a
//! single representative root. The opponent layer uses every opponent organ.

use std::cmp::Reverse;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

use crate::game::{apply, legal_actions, Action, Actors, Board, Entity, OrganId, Rules, Side};
use crate::search::{score, EngineConfig, EvalWeights, SearchConfig};

/// The chosen command for one organism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Organ id of the organism's root.
    pub root_id: OrganId,
    /// Action to submit.
    pub action: Action,
    /// Backed-up minimax value of the action.
    pub score: i32,
}

/// Counters from the last call to [`Searcher::decide`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Child boards simulated.
    pub nodes: u64,
    /// Sibling lists abandoned on an alpha-beta cutoff.
    pub cutoffs: u64,
    /// Sibling lists abandoned because the time budget ran out.
    pub deadline_skips: u64,
    /// Roots that fell back to their best quick-evaluated candidate.
    pub fallbacks: u64,
}

/// A simulated child: the action, the board after it, and its static score.
struct Child {
    action: Action,
    board: Board,
    quick: i32,
}

/// Per-turn decision maker.
///
/// Holds the tie-break generator, so a seeded searcher replays identically.
#[derive(Debug)]
pub struct Searcher {
    config: SearchConfig,
    rules: Rules,
    weights: EvalWeights,
    rng: StdRng,
    stats: SearchStats,
    deadline: Option<Instant>,
}

impl Searcher {
    /// Create a searcher.
    #[must_use]
    pub fn new(config: SearchConfig, rules: Rules, weights: EvalWeights) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rules,
            weights,
            rng,
            stats: SearchStats::default(),
            deadline: None,
        }
    }

    /// Create a searcher from a full engine configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.search, config.rules, config.weights)
    }

    /// Search limits in use.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the last [`Searcher::decide`].
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// One decision per own root (parent id 0), in ascending root id order.
    pub fn decide(&mut self, board: &Board) -> Vec<Decision> {
        self.stats = SearchStats::default();
        self.deadline = self
            .config
            .time_budget_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));

        let roots: Vec<OrganId> = board.roots(Side::Me).map(|root| root.organ_id).collect();
        roots
            .into_iter()
            .map(|root| self.search_root(board, root))
            .collect()
    }

    /// Pick the action for the organism rooted at `root`.
    pub fn search_root(&mut self, board: &Board, root: OrganId) -> Decision {
        let nodes_before = self.stats.nodes;
        let mut children = self.expand(board, Side::Me, Actors::Organism(root));
        if children.is_empty() {
            return Decision {
                root_id: root,
                action: Action::Wait,
                score: score(board, Side::Me, &self.weights),
            };
        }
        let candidates = children.len();
        children.sort_by_key(|child| Reverse(child.quick));
        children.truncate(self.beam());

        let (action, value) = if self.config.depth == 0 {
            self.best_quick(&children)
        } else {
            let mut alpha = i32::MIN;
            let mut best = None;
            for child in &children {
                // A spent budget here skips even the first child; the
                // quick-score fallback below picks the move instead.
                if self.expired() {
                    self.stats.deadline_skips += 1;
                    break;
                }
                let value = self.min_layer(&child.board, self.config.depth - 1, alpha, i32::MAX);
                if value > alpha {
                    alpha = value;
                    best = Some((child.action, value));
                }
            }
            best.unwrap_or_else(|| {
                self.stats.fallbacks += 1;
                self.best_quick(&children)
            })
        };

        tracing::debug!(
            root,
            candidates,
            nodes = self.stats.nodes - nodes_before,
            cutoffs = self.stats.cutoffs,
            %action,
            value,
            "root searched"
        );
        Decision {
            root_id: root,
            action,
            score: value,
        }
    }

    /// Own layer: one representative organism moves, maximising.
    fn max_layer(&mut self, board: &Board, depth: u32, mut alpha: i32, beta: i32) -> i32 {
        if depth == 0 {
            return score(board, Side::Me, &self.weights);
        }
        let Some(root) = board.roots(Side::Me).next().map(|root| root.organ_id) else {
            return score(board, Side::Me, &self.weights);
        };
        let mut children = self.expand(board, Side::Me, Actors::Organism(root));
        if children.is_empty() {
            return score(board, Side::Me, &self.weights);
        }
        children.sort_by_key(|child| Reverse(child.quick));
        children.truncate(self.beam());

        let mut best = i32::MIN;
        for (i, child) in children.iter().enumerate() {
            if i > 0 && self.expired() {
                self.stats.deadline_skips += 1;
                break;
            }
            best = best.max(self.min_layer(&child.board, depth - 1, alpha, beta));
            alpha = alpha.max(best);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }

    /// Opponent layer: every opponent organ may act, minimising our score.
    fn min_layer(&mut self, board: &Board, depth: u32, alpha: i32, mut beta: i32) -> i32 {
        if depth == 0 {
            return score(board, Side::Me, &self.weights);
        }
        let mut children = self.expand(board, Side::Opponent, Actors::All);
        if children.is_empty() {
            return score(board, Side::Me, &self.weights);
        }
        children.sort_by_key(|child| child.quick);
        children.truncate(self.beam());

        let mut worst = i32::MAX;
        for (i, child) in children.iter().enumerate() {
            if i > 0 && self.expired() {
                self.stats.deadline_skips += 1;
                break;
            }
            worst = worst.min(self.max_layer(&child.board, depth - 1, alpha, beta));
            beta = beta.min(worst);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        worst
    }

    /// Simulate every legal action of `side` and score each child from our
    /// side's perspective.
    fn expand(&mut self, board: &Board, side: Side, actors: Actors) -> Vec<Child> {
        let actions = legal_actions(board, side, actors, &self.rules);
        self.stats.nodes += actions.len() as u64;
        actions
            .into_iter()
            .map(|action| {
                let child = apply(board, &action, side, acting_root(board, &action), &self.rules);
                let quick = score(&child, Side::Me, &self.weights);
                Child {
                    action,
                    board: child,
                    quick,
                }
            })
            .collect()
    }

    /// Highest quick score, ties broken by the generator.
    fn best_quick(&mut self, children: &[Child]) -> (Action, i32) {
        let Some(top) = children.iter().map(|child| child.quick).max() else {
            return (Action::Wait, i32::MIN);
        };
        let tied: Vec<&Child> = children.iter().filter(|child| child.quick == top).collect();
        tied.choose(&mut self.rng)
            .map_or((Action::Wait, top), |child| (child.action, child.quick))
    }

    fn beam(&self) -> usize {
        self.config.beam_width.max(1)
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// Organism a grown organ joins: the parent's organism.
fn acting_root(board: &Board, action: &Action) -> OrganId {
    match action {
        Action::Grow { parent_id, .. } => board.organ(*parent_id).map_or(0, Entity::organism),
        Action::Spore { .. } | Action::Wait => 0,
    }
}
