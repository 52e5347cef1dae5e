//! The board: a grid-indexed entity store with per-type buckets.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::BoardError;
use crate::game::{
    Coord, Direction, Entity, EntityKind, OrganId, OrganKind, ProteinKind, Resources, Side,
};

/// Complete per-turn game state as seen by the decision core.
///
/// The grid is the source of truth; the buckets (organs per side, walls,
/// proteins) are kept in lockstep by [`Board::add_entity`] and
/// [`Board::remove_entity`]. Organs are indexed by id so parent and root links
/// resolve without references between entities.
///
/// Cloning yields a fully independent snapshot. The search clones once per
/// node and never shares a board between sibling branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Width of the board in cells.
    width: u16,
    /// Height of the board in cells.
    height: u16,
    /// Protein stock indexed by [`Side::index`].
    resources: [Resources; 2],
    /// Cells in row-major order.
    cells: Vec<Option<Entity>>,
    /// Organ id -> position, one map per side.
    organs: [BTreeMap<OrganId, Coord>; 2],
    /// Wall positions.
    walls: BTreeSet<Coord>,
    /// Protein tile positions.
    proteins: BTreeSet<Coord>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyBoard`] if width or height is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyBoard { width, height });
        }

        let size = usize::from(width) * usize::from(height);
        Ok(Self {
            width,
            height,
            resources: [Resources::default(); 2],
            cells: vec![None; size],
            organs: [BTreeMap::new(), BTreeMap::new()],
            walls: BTreeSet::new(),
            proteins: BTreeSet::new(),
        })
    }

    /// Get the width of the board.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height of the board.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Protein stock of a side.
    #[must_use]
    pub const fn resources(&self, side: Side) -> Resources {
        self.resources[side.index()]
    }

    /// Mutable protein stock of a side.
    pub fn resources_mut(&mut self, side: Side) -> &mut Resources {
        &mut self.resources[side.index()]
    }

    /// Replace the protein stock of a side.
    pub fn set_resources(&mut self, side: Side, resources: Resources) {
        self.resources[side.index()] = resources;
    }

    /// Check if a coordinate is within the board bounds.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Check if signed coordinates fall outside the board.
    #[must_use]
    pub fn is_out_of_bounds(&self, x: i64, y: i64) -> bool {
        x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height)
    }

    /// The in-bounds neighbour of `coord` in `dir`, if any.
    #[must_use]
    #[inline]
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        coord.step(dir).filter(|next| self.in_bounds(*next))
    }

    /// Convert a coordinate to an index into the cells array.
    #[inline]
    fn index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(usize::from(coord.y) * usize::from(self.width) + usize::from(coord.x))
        } else {
            None
        }
    }

    /// The entity at a coordinate, if any.
    #[must_use]
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<&Entity> {
        self.index(coord).and_then(|idx| self.cells[idx].as_ref())
    }

    /// Whether the cell holds a wall.
    #[must_use]
    pub fn is_wall(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(e) if e.kind == EntityKind::Wall)
    }

    /// Whether the cell holds an organ of either side.
    #[must_use]
    pub fn is_organ(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(e) if e.organ_kind().is_some())
    }

    /// Whether the cell holds an organ owned by `side`.
    #[must_use]
    pub fn is_organ_of(&self, coord: Coord, side: Side) -> bool {
        matches!(self.get(coord), Some(e) if e.organ_kind().is_some() && e.owner == Some(side))
    }

    /// Whether the cell holds one of our organs.
    #[must_use]
    pub fn is_own_organ(&self, coord: Coord) -> bool {
        self.is_organ_of(coord, Side::Me)
    }

    /// Whether the cell holds an opponent organ.
    #[must_use]
    pub fn is_opponent_organ(&self, coord: Coord) -> bool {
        self.is_organ_of(coord, Side::Opponent)
    }

    /// Whether the cell holds a protein tile.
    #[must_use]
    pub fn is_protein(&self, coord: Coord) -> bool {
        self.protein_at(coord).is_some()
    }

    /// Protein type of the tile at a coordinate.
    #[must_use]
    pub fn protein_at(&self, coord: Coord) -> Option<ProteinKind> {
        self.get(coord).and_then(Entity::protein_kind)
    }

    /// Whether a growth or spore path may pass through the cell.
    ///
    /// Empty cells and protein tiles are open; walls and organs block.
    #[must_use]
    pub fn is_open(&self, coord: Coord) -> bool {
        match self.get(coord) {
            None => self.in_bounds(coord),
            Some(e) => matches!(e.kind, EntityKind::Protein(_)),
        }
    }

    /// Place an entity on an empty cell.
    ///
    /// # Errors
    ///
    /// Fails if the cell is out of bounds or occupied, if an organ has id 0
    /// or no owner, or if the organ id is already present on the board.
    pub fn add_entity(&mut self, entity: Entity) -> Result<(), BoardError> {
        let Some(idx) = self.index(entity.coord) else {
            return Err(BoardError::OutOfBounds {
                x: i64::from(entity.coord.x),
                y: i64::from(entity.coord.y),
            });
        };
        if self.cells[idx].is_some() {
            return Err(BoardError::Occupied(entity.coord));
        }
        if let EntityKind::Organ(_) = entity.kind {
            if entity.organ_id == 0 {
                return Err(BoardError::MissingOrganId(entity.coord));
            }
            if entity.owner.is_none() {
                return Err(BoardError::UnownedOrgan(entity.coord));
            }
            if self.organ(entity.organ_id).is_some() {
                return Err(BoardError::DuplicateOrgan(entity.organ_id));
            }
        }

        self.cells[idx] = Some(entity);
        self.classify(&entity);
        Ok(())
    }

    /// Place an entity, evicting whatever occupied its cell.
    ///
    /// Returns the evicted entity. Used by the simulator, which trusts the
    /// catalog and performs no validation of its own.
    pub(crate) fn place(&mut self, entity: Entity) -> Option<Entity> {
        let idx = self.index(entity.coord)?;
        let evicted = self.cells[idx].take();
        if let Some(old) = &evicted {
            self.unclassify(old);
        }
        self.cells[idx] = Some(entity);
        self.classify(&entity);
        evicted
    }

    /// Remove an entity from the board.
    ///
    /// The grid cell is cleared only if it still holds exactly this entity.
    /// Returns `true` if the entity was found and removed.
    pub fn remove_entity(&mut self, entity: &Entity) -> bool {
        let Some(idx) = self.index(entity.coord) else {
            return false;
        };
        if self.cells[idx].as_ref() != Some(entity) {
            return false;
        }
        self.cells[idx] = None;
        self.unclassify(entity);
        true
    }

    /// Remove an organ by id, returning it.
    pub fn remove_organ(&mut self, id: OrganId) -> Option<Entity> {
        let organ = *self.organ(id)?;
        self.remove_entity(&organ).then_some(organ)
    }

    fn classify(&mut self, entity: &Entity) {
        match (entity.kind, entity.owner) {
            (EntityKind::Wall, _) => {
                self.walls.insert(entity.coord);
            }
            (EntityKind::Protein(_), _) => {
                self.proteins.insert(entity.coord);
            }
            (EntityKind::Organ(_), Some(side)) => {
                self.organs[side.index()].insert(entity.organ_id, entity.coord);
            }
            // Only reachable through `place`; `add_entity` rejects these.
            (EntityKind::Organ(_), None) => {}
        }
    }

    fn unclassify(&mut self, entity: &Entity) {
        match (entity.kind, entity.owner) {
            (EntityKind::Wall, _) => {
                self.walls.remove(&entity.coord);
            }
            (EntityKind::Protein(_), _) => {
                self.proteins.remove(&entity.coord);
            }
            (EntityKind::Organ(_), Some(side)) => {
                self.organs[side.index()].remove(&entity.organ_id);
            }
            (EntityKind::Organ(_), None) => {}
        }
    }

    /// Look up an organ of either side by id.
    #[must_use]
    pub fn organ(&self, id: OrganId) -> Option<&Entity> {
        self.organs
            .iter()
            .find_map(|bucket| bucket.get(&id))
            .and_then(|coord| self.get(*coord))
    }

    /// All organs of a side, in ascending id order.
    pub fn organs(&self, side: Side) -> impl Iterator<Item = &Entity> + '_ {
        self.organs[side.index()]
            .values()
            .filter_map(|coord| self.get(*coord))
    }

    /// Organs of a side that belong to the organism rooted at `root`.
    pub fn organism(&self, side: Side, root: OrganId) -> impl Iterator<Item = &Entity> + '_ {
        self.organs(side).filter(move |e| e.belongs_to(root))
    }

    /// Organs of a side of one kind.
    pub fn organs_of_kind(&self, side: Side, kind: OrganKind) -> impl Iterator<Item = &Entity> + '_ {
        self.organs(side).filter(move |e| e.organ_kind() == Some(kind))
    }

    /// Roots of a side that head an organism (parent id 0), ascending id.
    pub fn roots(&self, side: Side) -> impl Iterator<Item = &Entity> + '_ {
        self.organs_of_kind(side, OrganKind::Root)
            .filter(|e| e.parent_id == 0)
    }

    /// Number of organs owned by a side.
    #[must_use]
    pub fn organ_count(&self, side: Side) -> usize {
        self.organs[side.index()].len()
    }

    /// Wall positions.
    pub fn walls(&self) -> impl Iterator<Item = Coord> + '_ {
        self.walls.iter().copied()
    }

    /// Protein tiles.
    pub fn proteins(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.proteins.iter().filter_map(|coord| self.get(*coord))
    }

    /// Every entity on the board in row-major order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.cells.iter().flatten()
    }

    /// Id for the next organ: one past the largest id on the board.
    #[must_use]
    pub fn next_organ_id(&self) -> OrganId {
        self.organs
            .iter()
            .filter_map(|bucket| bucket.last_key_value().map(|(id, _)| *id))
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Whether the bucket indexes agree with the grid.
    ///
    /// Used by the invariant checker; O(cells).
    pub(crate) fn buckets_consistent(&self) -> bool {
        let mut walls = 0;
        let mut proteins = 0;
        let mut organs = [0usize; 2];
        for entity in self.entities() {
            match (entity.kind, entity.owner) {
                (EntityKind::Wall, _) => {
                    walls += 1;
                    if !self.walls.contains(&entity.coord) {
                        return false;
                    }
                }
                (EntityKind::Protein(_), _) => {
                    proteins += 1;
                    if !self.proteins.contains(&entity.coord) {
                        return false;
                    }
                }
                (EntityKind::Organ(_), Some(side)) => {
                    organs[side.index()] += 1;
                    if self.organs[side.index()].get(&entity.organ_id) != Some(&entity.coord) {
                        return false;
                    }
                }
                (EntityKind::Organ(_), None) => {}
            }
        }
        walls == self.walls.len()
            && proteins == self.proteins.len()
            && organs[0] == self.organs[0].len()
            && organs[1] == self.organs[1].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(x: u16, y: u16, side: Side, id: OrganId) -> Entity {
        Entity::organ(Coord::new(x, y), OrganKind::Root, side, id, None, 0, id)
    }

    #[test]
    fn test_board_zero_size() {
        assert!(Board::new(0, 5).is_err());
        assert!(Board::new(5, 0).is_err());
        assert!(Board::new(1, 1).is_ok());
    }

    #[test]
    fn test_add_entity_classifies() {
        let mut board = Board::new(6, 4).unwrap();
        board.add_entity(Entity::wall(Coord::new(0, 0))).unwrap();
        board
            .add_entity(Entity::protein(Coord::new(1, 0), ProteinKind::B))
            .unwrap();
        board.add_entity(root(2, 2, Side::Me, 1)).unwrap();
        board.add_entity(root(5, 3, Side::Opponent, 2)).unwrap();

        assert!(board.is_wall(Coord::new(0, 0)));
        assert_eq!(board.protein_at(Coord::new(1, 0)), Some(ProteinKind::B));
        assert!(board.is_own_organ(Coord::new(2, 2)));
        assert!(!board.is_opponent_organ(Coord::new(2, 2)));
        assert!(board.is_opponent_organ(Coord::new(5, 3)));
        assert_eq!(board.organ_count(Side::Me), 1);
        assert_eq!(board.walls().count(), 1);
        assert_eq!(board.proteins().count(), 1);
        assert!(board.buckets_consistent());
    }

    #[test]
    fn test_add_entity_rejects_bad_placements() {
        let mut board = Board::new(3, 3).unwrap();
        board.add_entity(root(1, 1, Side::Me, 1)).unwrap();

        assert_eq!(
            board.add_entity(Entity::wall(Coord::new(1, 1))),
            Err(BoardError::Occupied(Coord::new(1, 1)))
        );
        assert_eq!(
            board.add_entity(root(2, 2, Side::Opponent, 1)),
            Err(BoardError::DuplicateOrgan(1))
        );
        assert!(matches!(
            board.add_entity(Entity::wall(Coord::new(3, 0))),
            Err(BoardError::OutOfBounds { x: 3, y: 0 })
        ));
        assert_eq!(
            board.add_entity(root(0, 0, Side::Me, 0)),
            Err(BoardError::MissingOrganId(Coord::new(0, 0)))
        );
    }

    #[test]
    fn test_remove_entity_only_clears_matching_cell() {
        let mut board = Board::new(3, 3).unwrap();
        let organ = root(1, 1, Side::Me, 1);
        board.add_entity(organ).unwrap();

        let impostor = root(1, 1, Side::Me, 2);
        assert!(!board.remove_entity(&impostor));
        assert!(board.is_own_organ(Coord::new(1, 1)));

        assert!(board.remove_entity(&organ));
        assert!(board.get(Coord::new(1, 1)).is_none());
        assert_eq!(board.organ_count(Side::Me), 0);
        assert!(board.buckets_consistent());
    }

    #[test]
    fn test_place_evicts_protein() {
        let mut board = Board::new(3, 3).unwrap();
        board
            .add_entity(Entity::protein(Coord::new(1, 1), ProteinKind::A))
            .unwrap();
        let evicted = board.place(root(1, 1, Side::Me, 3));
        assert_eq!(evicted.and_then(|e| e.protein_kind()), Some(ProteinKind::A));
        assert_eq!(board.proteins().count(), 0);
        assert!(board.buckets_consistent());
    }

    #[test]
    fn test_next_organ_id_is_max_plus_one() {
        let mut board = Board::new(5, 5).unwrap();
        assert_eq!(board.next_organ_id(), 1);
        board.add_entity(root(0, 0, Side::Me, 4)).unwrap();
        board.add_entity(root(4, 4, Side::Opponent, 11)).unwrap();
        assert_eq!(board.next_organ_id(), 12);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::new(4, 4).unwrap();
        board.add_entity(root(1, 1, Side::Me, 1)).unwrap();
        board.set_resources(Side::Me, Resources::new(2, 2, 2, 2));
        let snapshot = board.clone();

        let mut copy = board.clone();
        copy.remove_organ(1);
        copy.add_entity(Entity::wall(Coord::new(3, 3))).unwrap();
        copy.resources_mut(Side::Me).a = 0;

        assert_eq!(board, snapshot);
        assert!(board.is_own_organ(Coord::new(1, 1)));
        assert!(!board.is_wall(Coord::new(3, 3)));
    }

    #[test]
    fn test_out_of_bounds_predicate() {
        let board = Board::new(4, 3).unwrap();
        assert!(board.is_out_of_bounds(-1, 0));
        assert!(board.is_out_of_bounds(4, 0));
        assert!(board.is_out_of_bounds(0, 3));
        assert!(!board.is_out_of_bounds(3, 2));
        assert_eq!(board.neighbor(Coord::new(3, 0), Direction::East), None);
    }
}
