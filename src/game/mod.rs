//! # Game Module
//!
//! The simulation core: grid model, dice, visibility, movement and combat.
//!
//! This module contains the fundamental building blocks of a turn:
//! - The grid of tiles, items and monsters
//! - The dice engine every random outcome flows through
//! - Field of vision over vision-blocking tiles
//! - Movement, collision and melee resolution for the player and monsters
//! - The game state that sequences a full turn

pub mod combat;
pub mod dice;
pub mod fov;
pub mod grid;
pub mod item;
pub mod messages;
pub mod monster;
pub mod movement;
pub mod player;
pub mod state;
pub mod tile;

pub use combat::*;
pub use dice::*;
pub use fov::*;
pub use grid::*;
pub use item::*;
pub use messages::*;
pub use monster::*;
pub use movement::*;
pub use player::*;
pub use state::*;
pub use tile::*;

use serde::{Deserialize, Serialize};

/// A cell coordinate. `x` grows east, `y` grows south.
///
/// Coordinates are signed so that a step off the map edge can be
/// represented and rejected.
///
/// # Examples
///
/// ```
/// use delve::{Direction, Position};
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.step(Direction::Northwest), Position::new(9, 4));
/// assert_eq!(pos.chebyshev_distance(Position::new(12, 9)), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        self + direction.to_delta()
    }

    pub fn euclidean_distance(self, other: Position) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    /// King-move distance; 1 means the two cells touch.
    pub fn chebyshev_distance(self, other: Position) -> u32 {
        (self.x - other.x).unsigned_abs().max((self.y - other.y).unsigned_abs())
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// The eight compass steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Direction {
    /// Clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::Northeast,
        Direction::East,
        Direction::Southeast,
        Direction::South,
        Direction::Southwest,
        Direction::West,
        Direction::Northwest,
    ];

    /// Unit offset of one step.
    ///
    /// ```
    /// use delve::{Direction, Position};
    ///
    /// assert_eq!(Direction::Southwest.to_delta(), Position::new(-1, 1));
    /// ```
    pub fn to_delta(self) -> Position {
        let (x, y) = match self {
            Direction::North => (0, -1),
            Direction::Northeast => (1, -1),
            Direction::East => (1, 0),
            Direction::Southeast => (1, 1),
            Direction::South => (0, 1),
            Direction::Southwest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::Northwest => (-1, -1),
        };
        Position::new(x, y)
    }

    /// Straight steps are checked against cardinal blockers, the rest
    /// against diagonal ones.
    pub fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::South | Direction::East | Direction::West
        )
    }
}
