//! Entity types: walls, protein tiles and organs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::game::{Coord, Direction};

/// Organ identifier as assigned by the game engine. `0` means "no organ".
pub type OrganId = u32;

/// One of the two competing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The side this core decides for.
    Me,
    /// The other player.
    Opponent,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Me => Side::Opponent,
            Side::Opponent => Side::Me,
        }
    }

    /// Index into per-side arrays.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Side::Me => 0,
            Side::Opponent => 1,
        }
    }

    /// Decode the engine's owner flag: `1` is us, `0` the opponent,
    /// anything else unowned.
    #[must_use]
    pub const fn from_owner_flag(flag: i32) -> Option<Self> {
        match flag {
            1 => Some(Side::Me),
            0 => Some(Side::Opponent),
            _ => None,
        }
    }
}

/// Organ kinds a side can own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrganKind {
    /// Origin of an organism.
    Root,
    /// Plain filler organ.
    Basic,
    /// Collects the protein tile it faces.
    Harvester,
    /// Destroys the enemy organ it faces.
    Tentacle,
    /// Launches spores that found new organisms.
    Sporer,
}

impl OrganKind {
    /// Kinds that can be produced by a GROW command.
    pub const GROWABLE: [OrganKind; 4] = [
        OrganKind::Basic,
        OrganKind::Harvester,
        OrganKind::Tentacle,
        OrganKind::Sporer,
    ];

    /// Wire name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            OrganKind::Root => "ROOT",
            OrganKind::Basic => "BASIC",
            OrganKind::Harvester => "HARVESTER",
            OrganKind::Tentacle => "TENTACLE",
            OrganKind::Sporer => "SPORER",
        }
    }

    /// Whether organs of this kind carry a facing direction.
    #[must_use]
    pub const fn is_directional(self) -> bool {
        matches!(
            self,
            OrganKind::Harvester | OrganKind::Tentacle | OrganKind::Sporer
        )
    }
}

impl fmt::Display for OrganKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four protein types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProteinKind {
    /// Protein A.
    A,
    /// Protein B.
    B,
    /// Protein C.
    C,
    /// Protein D.
    D,
}

impl ProteinKind {
    /// All protein kinds in A, B, C, D order.
    pub const ALL: [ProteinKind; 4] = [ProteinKind::A, ProteinKind::B, ProteinKind::C, ProteinKind::D];
}

/// What occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Impassable terrain.
    Wall,
    /// A harvestable protein source.
    Protein(ProteinKind),
    /// An organ owned by one side.
    Organ(OrganKind),
}

impl EntityKind {
    /// Decode an engine type tag.
    ///
    /// Returns `None` for tags this core does not know; callers map those to
    /// [`EntityKind::Wall`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "WALL" => EntityKind::Wall,
            "ROOT" => EntityKind::Organ(OrganKind::Root),
            "BASIC" => EntityKind::Organ(OrganKind::Basic),
            "HARVESTER" => EntityKind::Organ(OrganKind::Harvester),
            "TENTACLE" => EntityKind::Organ(OrganKind::Tentacle),
            "SPORER" => EntityKind::Organ(OrganKind::Sporer),
            "A" => EntityKind::Protein(ProteinKind::A),
            "B" => EntityKind::Protein(ProteinKind::B),
            "C" => EntityKind::Protein(ProteinKind::C),
            "D" => EntityKind::Protein(ProteinKind::D),
            _ => return None,
        };
        Some(kind)
    }
}

impl FromStr for OrganKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match EntityKind::from_tag(s) {
            Some(EntityKind::Organ(kind)) => Ok(kind),
            _ => Err(()),
        }
    }
}

/// A single entity on the board.
///
/// Organs link to their parent and organism root by id, never by reference;
/// the board resolves ids through its organ index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// Cell the entity occupies.
    pub coord: Coord,
    /// What the entity is.
    pub kind: EntityKind,
    /// Owning side (`None` for walls and proteins).
    pub owner: Option<Side>,
    /// Organ id (`0` for non-organs).
    pub organ_id: OrganId,
    /// Facing direction (`None` when not applicable).
    pub facing: Option<Direction>,
    /// Parent organ id (`0` for roots and non-organs).
    pub parent_id: OrganId,
    /// Id of the organism's root (`0` for non-organs and spore-born roots).
    pub root_id: OrganId,
}

impl Entity {
    /// Create a wall.
    #[must_use]
    pub const fn wall(coord: Coord) -> Self {
        Self::inert(coord, EntityKind::Wall)
    }

    /// Create a protein tile.
    #[must_use]
    pub const fn protein(coord: Coord, protein: ProteinKind) -> Self {
        Self::inert(coord, EntityKind::Protein(protein))
    }

    const fn inert(coord: Coord, kind: EntityKind) -> Self {
        Self {
            coord,
            kind,
            owner: None,
            organ_id: 0,
            facing: None,
            parent_id: 0,
            root_id: 0,
        }
    }

    /// Create an organ.
    #[must_use]
    pub const fn organ(
        coord: Coord,
        kind: OrganKind,
        owner: Side,
        organ_id: OrganId,
        facing: Option<Direction>,
        parent_id: OrganId,
        root_id: OrganId,
    ) -> Self {
        Self {
            coord,
            kind: EntityKind::Organ(kind),
            owner: Some(owner),
            organ_id,
            facing,
            parent_id,
            root_id,
        }
    }

    /// The organ kind, if this entity is an organ.
    #[must_use]
    pub const fn organ_kind(&self) -> Option<OrganKind> {
        match self.kind {
            EntityKind::Organ(kind) => Some(kind),
            _ => None,
        }
    }

    /// The protein kind, if this entity is a protein tile.
    #[must_use]
    pub const fn protein_kind(&self) -> Option<ProteinKind> {
        match self.kind {
            EntityKind::Protein(kind) => Some(kind),
            _ => None,
        }
    }

    /// Id of the organism this organ belongs to.
    ///
    /// A root that arrived with root id `0` (spore-born) is its own organism.
    #[must_use]
    pub const fn organism(&self) -> OrganId {
        if self.root_id == 0 {
            self.organ_id
        } else {
            self.root_id
        }
    }

    /// Whether this organ is part of the organism rooted at `root`.
    #[must_use]
    pub const fn belongs_to(&self, root: OrganId) -> bool {
        self.organ_id == root || self.root_id == root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_kind() {
        assert_eq!(EntityKind::from_tag("WALL"), Some(EntityKind::Wall));
        assert_eq!(
            EntityKind::from_tag("SPORER"),
            Some(EntityKind::Organ(OrganKind::Sporer))
        );
        assert_eq!(
            EntityKind::from_tag("C"),
            Some(EntityKind::Protein(ProteinKind::C))
        );
        assert_eq!(EntityKind::from_tag("NUCLEUS"), None);
    }

    #[test]
    fn test_organ_kind_from_str_rejects_proteins() {
        assert_eq!("TENTACLE".parse::<OrganKind>(), Ok(OrganKind::Tentacle));
        assert!("A".parse::<OrganKind>().is_err());
        assert!("WALL".parse::<OrganKind>().is_err());
    }

    #[test]
    fn test_owner_flag() {
        assert_eq!(Side::from_owner_flag(1), Some(Side::Me));
        assert_eq!(Side::from_owner_flag(0), Some(Side::Opponent));
        assert_eq!(Side::from_owner_flag(-1), None);
        assert_eq!(Side::Me.opponent(), Side::Opponent);
    }

    #[test]
    fn test_organism_membership() {
        let root = Entity::organ(Coord::new(1, 1), OrganKind::Root, Side::Me, 4, None, 0, 4);
        let child = Entity::organ(Coord::new(2, 1), OrganKind::Basic, Side::Me, 7, None, 4, 4);
        let spore_root = Entity::organ(Coord::new(8, 1), OrganKind::Root, Side::Me, 9, None, 0, 0);

        assert!(root.belongs_to(4));
        assert!(child.belongs_to(4));
        assert!(!spore_root.belongs_to(4));
        assert_eq!(spore_root.organism(), 9);
        assert_eq!(child.organism(), 4);
    }
}
