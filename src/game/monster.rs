//! # Monsters
//!
//! A [`Species`] is the template a live [`Monster`] is spawned from.

use crate::game::dice::{Dice, DiceBag};
use crate::game::tile::Symbol;
use crate::game::Position;
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to a monster on a grid. Survives other monsters' removal.
    pub struct MonsterId;
}

/// Flight state. `CanFly` escalates to `Flying` the first time the monster
/// meets water and never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Flight {
    #[default]
    Grounded,
    CanFly,
    Flying,
}

/// Swimming capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Swim {
    #[default]
    CannotSwim,
    CanSwim,
    /// Aquatic: confined to water tiles.
    OnlySwim,
}

/// Monster template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub symbol: Symbol,
    pub name: String,
    pub flight: Flight,
    pub swim: Swim,
    pub hit_dice: DiceBag,
    pub attack_dice: DiceBag,
}

impl Species {
    pub fn new(
        symbol: Symbol,
        name: impl Into<String>,
        flight: Flight,
        swim: Swim,
        hit_dice: DiceBag,
        attack_dice: DiceBag,
    ) -> Self {
        Self {
            symbol,
            name: name.into(),
            flight,
            swim,
            hit_dice,
            attack_dice,
        }
    }

    /// Instantiates a monster at `position`, rolling its hit points once
    /// from the hit dice.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{species, Dice, Position};
    ///
    /// let mut dice = Dice::seeded(3);
    /// let goobling = species::goobling().spawn_at(&mut dice, Position::new(5, 5));
    /// assert_eq!(goobling.position, Position::new(5, 5));
    /// assert!((2..=12).contains(&goobling.hp));
    /// ```
    pub fn spawn_at(&self, dice: &mut Dice, position: Position) -> Monster {
        Monster {
            symbol: self.symbol,
            name: self.name.clone(),
            hp: dice.roll_bag(&self.hit_dice),
            flight: self.flight,
            swim: self.swim,
            attack_dice: self.attack_dice,
            position,
        }
    }
}

/// A live monster on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    pub symbol: Symbol,
    pub name: String,
    /// May drop below zero before the corpse is cleared away.
    pub hp: i32,
    pub flight: Flight,
    pub swim: Swim,
    pub attack_dice: DiceBag,
    pub position: Position,
}

impl Monster {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}
