//! # Generation Module
//!
//! Level generators produce a populated [`Grid`]: tiles, the items lying on
//! the floor and the monsters that start the level.
//!
//! Procedural layouts are out of scope for now; the only generator is the
//! hand-authored [`ReferenceRoom`], which doubles as a fixture for tests.

pub mod species;

use crate::config::{DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH};
use crate::game::{Dice, EquipArea, Grid, Item, ItemKind, Position, Symbol, Tile};
use crate::{DelveError, DelveResult};

/// Common interface for level generators.
pub trait LevelGenerator {
    /// Builds a level, rolling any randomness on `dice`.
    fn generate(&self, dice: &mut Dice) -> DelveResult<Grid>;

    /// Where the player enters the level.
    fn player_start(&self) -> Position;

    /// Checks that a generated level is playable.
    fn validate(&self, grid: &Grid) -> DelveResult<()> {
        validate_level(grid, self.player_start())
    }

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Rejects levels with no floor or with the player start inside terrain.
pub fn validate_level(grid: &Grid, start: Position) -> DelveResult<()> {
    let has_floor = (0..grid.height() as i32)
        .flat_map(|y| (0..grid.width() as i32).map(move |x| Position::new(x, y)))
        .any(|pos| !grid.tile(pos).is_fully_blocked());
    if !has_floor {
        return Err(DelveError::GenerationFailed(
            "Level has no floor tiles".to_string(),
        ));
    }

    if !grid.contains(start) || grid.tile(start).is_fully_blocked() {
        return Err(DelveError::GenerationFailed(format!(
            "Player start {:?} is not on open ground",
            start
        )));
    }
    Ok(())
}

/// The reference level: one walled 80×22 room with two pillars, a pool,
/// a goobling and a row of equipment to try on.
///
/// # Examples
///
/// ```
/// use delve::{Dice, LevelGenerator, Position, ReferenceRoom};
///
/// let grid = ReferenceRoom.generate(&mut Dice::seeded(1)).unwrap();
/// assert_eq!(grid.width(), 80);
/// assert_eq!(grid.monster_count(), 1);
/// assert!(grid.tile(Position::new(31, 10)).is_water());
/// assert_eq!(grid.item_at(Position::new(5, 10)).unwrap().name, "old sword");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceRoom;

impl ReferenceRoom {
    fn pillar_or_pool(x: usize, y: usize) -> Option<Tile> {
        if !(10..=12).contains(&y) {
            return None;
        }
        if (20..=23).contains(&x) || (57..=60).contains(&x) {
            Some(Tile::wall())
        } else if (31..=49).contains(&x) {
            Some(Tile::water())
        } else {
            None
        }
    }

    fn items() -> Vec<(Position, Item)> {
        let armor = |name: &str, area: EquipArea, add_modifier: i8| {
            Item::new(Symbol::plain(']'), name, ItemKind::ARMOR, area, 0, add_modifier)
        };
        let ring = Item::new(
            Symbol::plain('='),
            "tungsten ring",
            ItemKind::JEWELRY,
            EquipArea::RING,
            0,
            0,
        );

        vec![
            (
                Position::new(5, 10),
                Item::new(Symbol::plain('('), "old sword", ItemKind::WEAPON, EquipArea::empty(), 0, 2),
            ),
            (Position::new(2, 10), ring.clone()),
            (Position::new(1, 10), ring),
            (Position::new(3, 10), armor("hat", EquipArea::HELMET, 0)),
            (Position::new(3, 11), armor("fluffy scarf", EquipArea::NECK, 0)),
            (Position::new(3, 12), armor("tunic", EquipArea::CUIRASS, 0)),
            (Position::new(3, 13), armor("pair of leather gloves", EquipArea::BRACERS, 1)),
            (Position::new(3, 14), armor("pair of trousers", EquipArea::GREAVES, 0)),
            (Position::new(3, 15), armor("plaid kilt", EquipArea::KILT, 0)),
            (Position::new(3, 16), armor("pair of shoes", EquipArea::FEET, 0)),
            (Position::new(3, 17), armor("leather tailsheath", EquipArea::TAIL, 1)),
        ]
    }
}

impl LevelGenerator for ReferenceRoom {
    fn generate(&self, dice: &mut Dice) -> DelveResult<Grid> {
        let (width, height) = (DEFAULT_MAP_WIDTH, DEFAULT_MAP_HEIGHT);
        let mut grid = Grid::new(width, height);

        for y in 0..height {
            for x in 0..width {
                let border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                let tile = if border {
                    Tile::wall()
                } else {
                    Self::pillar_or_pool(x, y).unwrap_or_else(Tile::floor)
                };
                grid.set_tile(Position::new(x as i32, y as i32), tile);
            }
        }

        let goobling = species::goobling().spawn_at(dice, Position::new(60, 20));
        if grid.add_monster(goobling).is_none() {
            return Err(DelveError::GenerationFailed(
                "No room for the goobling".to_string(),
            ));
        }

        for (pos, item) in Self::items() {
            grid.place_item(pos, item);
        }

        log::info!(
            "Generated {} level: {}x{}, {} monsters",
            self.generator_type(),
            width,
            height,
            grid.monster_count()
        );
        Ok(grid)
    }

    fn player_start(&self) -> Position {
        Position::new(1, 1)
    }

    fn generator_type(&self) -> &'static str {
        "reference room"
    }
}
