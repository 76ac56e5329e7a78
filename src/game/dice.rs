//! # Dice Engine
//!
//! Every random outcome in the game is a roll of six-sided dice, optionally
//! clamped. The rules here are load-bearing for monster and item balance:
//! zero dice is a fixed result, an inverted floor/ceiling disables the
//! per-roll clamp, and dice with fewer than two sides are deterministic.

use crate::config::RollLimits;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Clamps `n` into `[floor, ceiling]`.
///
/// `floor == ceiling` always yields `floor`; `floor > ceiling` disables the
/// clamp and returns `n` untouched.
///
/// # Examples
///
/// ```
/// use delve::minmax;
///
/// assert_eq!(minmax(7, 0, 5), 5);
/// assert_eq!(minmax(-3, 0, 5), 0);
/// assert_eq!(minmax(42, 3, 3), 3);
/// assert_eq!(minmax(42, 10, 1), 42);
/// ```
pub fn minmax(n: i32, floor: i32, ceiling: i32) -> i32 {
    if floor == ceiling {
        return floor;
    }
    if floor > ceiling {
        return n;
    }
    n.clamp(floor, ceiling)
}

/// True when `floor <= n <= ceiling` and the range itself is well formed.
pub fn within_minmax(n: i32, floor: i32, ceiling: i32) -> bool {
    floor <= ceiling && floor <= n && n <= ceiling
}

/// A declarative clamped roll: `dice` d6 plus `modifier`.
///
/// When `floor > ceiling` the bag is "unset" and only the process-wide
/// [`RollLimits`] apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceBag {
    pub dice: u8,
    pub modifier: i16,
    pub floor: i32,
    pub ceiling: i32,
}

impl DiceBag {
    /// Creates a dice bag.
    pub const fn new(dice: u8, modifier: i16, floor: i32, ceiling: i32) -> Self {
        Self {
            dice,
            modifier,
            floor,
            ceiling,
        }
    }

    /// True when the bag carries no floor/ceiling of its own.
    pub fn is_unset(&self) -> bool {
        self.floor > self.ceiling
    }
}

/// Seeded dice roller.
///
/// # Examples
///
/// ```
/// use delve::Dice;
///
/// let mut dice = Dice::seeded(7);
/// let total = dice.roll(3, 2);
/// assert!((5..=20).contains(&total));
/// assert_eq!(dice.roll(0, -4), -4);
/// ```
#[derive(Debug, Clone)]
pub struct Dice {
    rng: StdRng,
    limits: RollLimits,
}

impl Dice {
    /// Creates a roller with a fixed seed and the default limits.
    pub fn seeded(seed: u64) -> Self {
        Self::with_limits(seed, RollLimits::default())
    }

    /// Creates a roller with a fixed seed and explicit absolute limits.
    pub fn with_limits(seed: u64, limits: RollLimits) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            limits,
        }
    }

    /// Roll a d6.
    pub fn d6(&mut self) -> i32 {
        self.rng.gen_range(1..=6)
    }

    /// A fair coin.
    pub fn flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// A two-sided die, 1 or 2.
    pub fn d2(&mut self) -> i32 {
        self.roll_die(2)
    }

    /// The traditional ten-sider, numbered 0 to 9.
    pub fn td10(&mut self) -> i32 {
        self.rng.gen_range(0..=9)
    }

    /// A ten-sider numbered 1 to 10 (a rolled 0 reads as 10).
    pub fn d10(&mut self) -> i32 {
        match self.td10() {
            0 => 10,
            n => n,
        }
    }

    /// Percentile roll from a tens die and a units die; "00" reads as 100.
    pub fn d100(&mut self) -> i32 {
        let tens = self.td10();
        let units = self.td10();
        if tens == 0 && units == 0 {
            return 100;
        }
        tens * 10 + units
    }

    /// Roll one die with `sides` sides.
    ///
    /// Fewer than two sides never touches the RNG: 0 and 1 return
    /// themselves and a negative count forces its absolute value.
    pub fn roll_die(&mut self, sides: i32) -> i32 {
        if sides < 2 {
            return sides.abs();
        }
        self.rng.gen_range(1..=sides)
    }

    /// Sum `dice` d6 and add `modifier`. Zero dice returns the modifier.
    pub fn roll(&mut self, dice: u8, modifier: i32) -> i32 {
        if dice == 0 {
            return modifier;
        }
        self.sum_d6(dice).saturating_add(modifier)
    }

    /// Sum `dice` d6, clamp to the absolute limits and then to
    /// `[floor, ceiling]`, and add `modifier` last.
    ///
    /// Zero dice returns the modifier untouched.
    pub fn roll_clamped(&mut self, dice: u8, modifier: i32, floor: i32, ceiling: i32) -> i32 {
        if dice == 0 {
            return modifier;
        }
        let total = self.sum_d6(dice).clamp(self.limits.min, self.limits.max);
        minmax(total, floor, ceiling).saturating_add(modifier)
    }

    /// Roll a [`DiceBag`].
    pub fn roll_bag(&mut self, bag: &DiceBag) -> i32 {
        self.roll_clamped(bag.dice, bag.modifier.into(), bag.floor, bag.ceiling)
    }

    /// True when `roll(dice, modifier)` comes in at or under `difficulty`.
    pub fn quickcheck(&mut self, dice: u8, modifier: i32, difficulty: i32) -> bool {
        self.roll(dice, modifier) <= difficulty
    }

    /// [`Dice::quickcheck`] over a clamped roll.
    pub fn quickcheck_clamped(
        &mut self,
        dice: u8,
        modifier: i32,
        difficulty: i32,
        floor: i32,
        ceiling: i32,
    ) -> bool {
        self.roll_clamped(dice, modifier, floor, ceiling) <= difficulty
    }

    fn sum_d6(&mut self, dice: u8) -> i32 {
        (0..dice).map(|_| self.d6()).sum()
    }
}
