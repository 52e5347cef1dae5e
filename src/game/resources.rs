//! Protein stock and organ costs.

use std::ops::{AddAssign, SubAssign};

use serde::{Deserialize, Serialize};

use crate::game::{OrganKind, ProteinKind};

/// A quadruple of protein counts.
///
/// Counts are signed: the simulator deducts without checking, so feeding it
/// an action the catalog would not have produced can drive a count negative.
/// All arithmetic saturates at the `i32` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resources {
    /// Protein A.
    pub a: i32,
    /// Protein B.
    pub b: i32,
    /// Protein C.
    pub c: i32,
    /// Protein D.
    pub d: i32,
}

impl Resources {
    /// Create a quadruple.
    #[must_use]
    pub const fn new(a: i32, b: i32, c: i32, d: i32) -> Self {
        Self { a, b, c, d }
    }

    /// Build from an `[a, b, c, d]` array.
    #[must_use]
    pub const fn from_array([a, b, c, d]: [i32; 4]) -> Self {
        Self { a, b, c, d }
    }

    /// Cost of growing an organ of `kind`.
    ///
    /// ROOT cannot be grown; its cost is that of a spore launch.
    #[must_use]
    pub const fn cost_of(kind: OrganKind) -> Self {
        match kind {
            OrganKind::Basic => Self::new(1, 0, 0, 0),
            OrganKind::Harvester => Self::new(0, 0, 1, 1),
            OrganKind::Tentacle => Self::new(0, 1, 1, 0),
            OrganKind::Sporer => Self::new(0, 1, 0, 1),
            OrganKind::Root => Self::spore_cost(),
        }
    }

    /// Cost of a SPORE launch.
    #[must_use]
    pub const fn spore_cost() -> Self {
        Self::new(1, 1, 1, 1)
    }

    /// Count of one protein type.
    #[must_use]
    pub const fn get(&self, kind: ProteinKind) -> i32 {
        match kind {
            ProteinKind::A => self.a,
            ProteinKind::B => self.b,
            ProteinKind::C => self.c,
            ProteinKind::D => self.d,
        }
    }

    /// Add `amount` of one protein type.
    pub fn credit(&mut self, kind: ProteinKind, amount: i32) {
        match kind {
            ProteinKind::A => self.a = self.a.saturating_add(amount),
            ProteinKind::B => self.b = self.b.saturating_add(amount),
            ProteinKind::C => self.c = self.c.saturating_add(amount),
            ProteinKind::D => self.d = self.d.saturating_add(amount),
        }
    }

    /// Whether every count is at least the matching count of `cost`.
    #[must_use]
    pub const fn covers(&self, cost: &Self) -> bool {
        self.a >= cost.a && self.b >= cost.b && self.c >= cost.c && self.d >= cost.d
    }

    /// Sum of all four counts.
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.a.saturating_add(self.b).saturating_add(self.c).saturating_add(self.d)
    }

    /// Whether any count has gone negative.
    #[must_use]
    pub const fn is_overdrawn(&self) -> bool {
        self.a < 0 || self.b < 0 || self.c < 0 || self.d < 0
    }
}

impl AddAssign for Resources {
    fn add_assign(&mut self, rhs: Self) {
        self.a = self.a.saturating_add(rhs.a);
        self.b = self.b.saturating_add(rhs.b);
        self.c = self.c.saturating_add(rhs.c);
        self.d = self.d.saturating_add(rhs.d);
    }
}

impl SubAssign for Resources {
    fn sub_assign(&mut self, rhs: Self) {
        self.a = self.a.saturating_sub(rhs.a);
        self.b = self.b.saturating_sub(rhs.b);
        self.c = self.c.saturating_sub(rhs.c);
        self.d = self.d.saturating_sub(rhs.d);
    }
}
