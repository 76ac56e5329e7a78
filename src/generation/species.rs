//! # Species Catalogue
//!
//! Monster templates available to level generators.

use crate::game::{DiceBag, Flight, Species, Swim, Symbol};

/// A small, slow-witted grounded creature.
///
/// Hit points are 2d6 clamped to `[0, 10]` plus 2; its bite is 2d6 with a
/// floor of 2.
pub fn goobling() -> Species {
    Species::new(
        Symbol::plain('g'),
        "goobling",
        Flight::Grounded,
        Swim::CannotSwim,
        DiceBag::new(2, 2, 0, 10),
        DiceBag::new(2, 0, 2, 1000),
    )
}
