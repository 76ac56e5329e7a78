//! # Grid Model
//!
//! The authoritative level map: tiles, a parallel visibility layer, one
//! optional item per cell, and the monsters living on the level.
//!
//! Monsters live in a generational arena. A [`MonsterId`] stays valid while
//! other monsters are removed, and a separate insertion-order list decides
//! who acts first in a monster pass.

use crate::game::item::Item;
use crate::game::monster::{Monster, MonsterId};
use crate::game::tile::Tile;
use crate::game::Position;
use slotmap::SlotMap;

/// A single dungeon level.
///
/// Any access outside `0..width` × `0..height` is a logic error and panics.
///
/// # Examples
///
/// ```
/// use delve::{Grid, Position, Tile};
///
/// let mut grid = Grid::new(10, 5);
/// grid.set_tile(Position::new(3, 2), Tile::wall());
///
/// assert!(grid.tile(Position::new(3, 2)).blocks_vision);
/// assert!(grid.is_visible(Position::new(9, 4)));
/// assert!(!grid.contains(Position::new(10, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    visible: Vec<bool>,
    items: Vec<Option<Item>>,
    monsters: SlotMap<MonsterId, Monster>,
    order: Vec<MonsterId>,
}

impl Grid {
    /// Creates an all-floor grid with everything visible and no monsters.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Tile::floor())
    }

    /// Creates a grid with every cell set to `tile`.
    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        let cells = width * height;
        Self {
            width,
            height,
            tiles: vec![tile; cells],
            visible: vec![true; cells],
            items: vec![None; cells],
            monsters: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Upper bound on the number of monsters: one per cell.
    pub fn monster_capacity(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "grid access at ({}, {}) outside {}x{} map",
            pos.x,
            pos.y,
            self.width,
            self.height
        );
        pos.y as usize * self.width + pos.x as usize
    }

    pub fn tile(&self, pos: Position) -> &Tile {
        &self.tiles[self.index(pos)]
    }

    pub fn tile_mut(&mut self, pos: Position) -> &mut Tile {
        let index = self.index(pos);
        &mut self.tiles[index]
    }

    pub fn set_tile(&mut self, pos: Position, tile: Tile) {
        *self.tile_mut(pos) = tile;
    }

    /// Whether the tile at `pos` blocks vision. Off-map cells count as
    /// opaque so visibility backends can probe freely.
    pub fn blocks_vision(&self, pos: Position) -> bool {
        !self.contains(pos) || self.tile(pos).blocks_vision
    }

    pub fn is_visible(&self, pos: Position) -> bool {
        self.visible[self.index(pos)]
    }

    pub fn set_visible(&mut self, pos: Position, visible: bool) {
        let index = self.index(pos);
        self.visible[index] = visible;
    }

    /// Sets every cell's visibility at once.
    pub fn fill_visibility(&mut self, visible: bool) {
        self.visible.fill(visible);
    }

    /// Number of visible cells.
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    pub fn item_at(&self, pos: Position) -> Option<&Item> {
        self.items[self.index(pos)].as_ref()
    }

    /// Places `item` at `pos`, returning whatever was there before.
    pub fn place_item(&mut self, pos: Position, item: Item) -> Option<Item> {
        let index = self.index(pos);
        self.items[index].replace(item)
    }

    /// Removes and returns the item at `pos`.
    pub fn take_item(&mut self, pos: Position) -> Option<Item> {
        let index = self.index(pos);
        self.items[index].take()
    }

    /// Adds a monster to the end of the acting order.
    ///
    /// Returns `None` and drops the monster when the grid is already at
    /// capacity. Panics if the monster stands off the map.
    pub fn add_monster(&mut self, monster: Monster) -> Option<MonsterId> {
        assert!(
            self.contains(monster.position),
            "monster {} spawned off the map at {:?}",
            monster.name,
            monster.position
        );
        if self.order.len() >= self.monster_capacity() {
            log::debug!("Grid full, dropping {} at {:?}", monster.name, monster.position);
            return None;
        }
        let id = self.monsters.insert(monster);
        self.order.push(id);
        Some(id)
    }

    pub fn remove_monster(&mut self, id: MonsterId) -> Option<Monster> {
        let monster = self.monsters.remove(id)?;
        self.order.retain(|other| *other != id);
        Some(monster)
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.get(id)
    }

    pub fn monster_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.get_mut(id)
    }

    /// Any monster standing on `pos`, living or not yet cleared away.
    pub fn monster_at(&self, pos: Position) -> Option<MonsterId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.monsters[*id].position == pos)
    }

    /// A living monster standing on `pos`.
    pub fn live_monster_at(&self, pos: Position) -> Option<MonsterId> {
        self.order.iter().copied().find(|id| {
            let monster = &self.monsters[*id];
            monster.position == pos && monster.is_alive()
        })
    }

    /// Snapshot of the acting order.
    pub fn monster_ids(&self) -> Vec<MonsterId> {
        self.order.clone()
    }

    /// Monsters in acting order.
    pub fn monsters(&self) -> impl Iterator<Item = (MonsterId, &Monster)> {
        self.order.iter().map(move |id| (*id, &self.monsters[*id]))
    }

    pub fn monster_count(&self) -> usize {
        self.order.len()
    }

    /// Removes every monster with no hit points left, keeping the order of
    /// the survivors. Returns the removed monsters.
    pub fn compact_dead(&mut self) -> Vec<Monster> {
        let (dead, alive): (Vec<MonsterId>, Vec<MonsterId>) = self
            .order
            .iter()
            .copied()
            .partition(|id| !self.monsters[*id].is_alive());
        self.order = alive;
        dead.into_iter()
            .filter_map(|id| self.monsters.remove(id))
            .collect()
    }
}
