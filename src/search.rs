//! Decision layer: board evaluation and adversarial search.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Searcher (minimax, alpha-beta)    │
//! ├─────────────────────────────────────┤
//! │   Evaluator (weighted terms)        │
//! ├─────────────────────────────────────┤
//! │   Catalog + Simulator (game layer)  │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use cellmind::game::{Board, Coord, Entity, OrganKind, Resources, Side};
//! use cellmind::search::{EngineConfig, Searcher};
//!
//! let mut board = Board::new(5, 5)?;
//! board.add_entity(Entity::organ(Coord::new(2, 2), OrganKind::Root, Side::Me, 1, None, 0, 1))?;
//! board.set_resources(Side::Me, Resources::new(1, 0, 0, 0));
//!
//! let mut searcher = Searcher::from_config(&EngineConfig::default());
//! let decisions = searcher.decide(&board);
//! assert_eq!(decisions.len(), 1);
//! # Ok::<(), cellmind::error::BoardError>(())
//! ```

mod config;
mod evaluator;
mod minimax;

pub use config::{EngineConfig, SearchConfig};
pub use evaluator::{breakdown, score, EvalWeights, ScoreBreakdown};
pub use minimax::{Decision, SearchStats, Searcher};
