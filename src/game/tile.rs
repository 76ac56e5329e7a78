//! # Tiles
//!
//! Map cells and the glyphs used to draw things on them.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Display attribute of a glyph. The simulation never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Attr {
    #[default]
    Normal,
    Reverse,
    Dim,
    Bold,
}

/// A character plus its display attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub ch: char,
    pub attr: Attr,
}

impl Symbol {
    pub const fn new(ch: char, attr: Attr) -> Self {
        Self { ch, attr }
    }

    pub const fn plain(ch: char) -> Self {
        Self::new(ch, Attr::Normal)
    }
}

pub const SYM_FLOOR: Symbol = Symbol::plain('.');
pub const SYM_WALL: Symbol = Symbol::new('#', Attr::Reverse);
pub const SYM_WATER: Symbol = Symbol::plain('}');
pub const SYM_DOOR: Symbol = Symbol::plain('+');
/// Drawn over any cell outside the field of vision.
pub const SYM_SHADOW: Symbol = Symbol::plain(' ');

bitflags! {
    /// Consequence-bearing terrain features. Flags may be combined.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Hazard: u16 {
        const WATER = 0x0010;
    }
}

/// One grid cell.
///
/// Cardinal and diagonal movement blocking are independent: a wall blocks
/// both, a doorway blocks only diagonal steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub symbol: Symbol,
    pub blocks_cardinal_movement: bool,
    pub blocks_diagonal_movement: bool,
    pub blocks_vision: bool,
    /// Reserved for map memory.
    pub seen: bool,
    pub lit: bool,
    pub hazard: Hazard,
}

impl Tile {
    pub fn new(
        symbol: Symbol,
        blocks_cardinal_movement: bool,
        blocks_diagonal_movement: bool,
        blocks_vision: bool,
        lit: bool,
        hazard: Hazard,
    ) -> Self {
        Self {
            symbol,
            blocks_cardinal_movement,
            blocks_diagonal_movement,
            blocks_vision,
            seen: false,
            lit,
            hazard,
        }
    }

    pub fn floor() -> Self {
        Self::new(SYM_FLOOR, false, false, false, true, Hazard::empty())
    }

    pub fn wall() -> Self {
        Self::new(SYM_WALL, true, true, true, true, Hazard::empty())
    }

    pub fn water() -> Self {
        Self::new(SYM_WATER, false, false, false, true, Hazard::WATER)
    }

    /// An open doorway: passable straight on, never diagonally.
    pub fn doorway() -> Self {
        Self::new(SYM_DOOR, false, true, false, true, Hazard::empty())
    }

    /// Whether a step of the given kind may enter this tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::Tile;
    ///
    /// let door = Tile::doorway();
    /// assert!(!door.blocks_step(true));
    /// assert!(door.blocks_step(false));
    /// ```
    pub fn blocks_step(&self, cardinal: bool) -> bool {
        if cardinal {
            self.blocks_cardinal_movement
        } else {
            self.blocks_diagonal_movement
        }
    }

    /// Blocked for every kind of step.
    pub fn is_fully_blocked(&self) -> bool {
        self.blocks_cardinal_movement && self.blocks_diagonal_movement
    }

    pub fn is_water(&self) -> bool {
        self.hazard.contains(Hazard::WATER)
    }
}
