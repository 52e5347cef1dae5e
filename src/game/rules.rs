//! Rule policies shared by the action catalog and the simulator.
//!
//! Observed game variants disagree on two details, so each is a named choice
//! rather than something inferred from context.

use serde::{Deserialize, Serialize};

/// When a HARVESTER yields protein.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarvestTiming {
    /// Harvesting is accrued later by the game engine; placement yields nothing.
    #[default]
    Deferred,
    /// A harvester placed facing a protein tile credits one unit of that type
    /// immediately. The tile stays on the board.
    OnPlacement,
}

/// Which SPORER placements the catalog offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SporerPlacement {
    /// Only facings whose straight-line scan first reaches a protein tile.
    #[default]
    ProteinLine,
    /// Every facing of every open neighbour.
    Unfiltered,
}

/// Rule configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Harvester capture policy.
    pub harvest: HarvestTiming,
    /// Sporer placement filter.
    pub sporer_placement: SporerPlacement,
    /// Protein credited when a BASIC organ grows onto a protein tile.
    pub absorb_gain: i32,
    /// Protein credited by an on-placement harvest.
    pub harvest_gain: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            harvest: HarvestTiming::Deferred,
            sporer_placement: SporerPlacement::ProteinLine,
            absorb_gain: 3,
            harvest_gain: 1,
        }
    }
}
