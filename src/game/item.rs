//! # Items
//!
//! Items lie on the grid (at most one per cell) or sit in inventory slots.
//! An empty cell or slot is `None`.

use crate::game::tile::Symbol;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// What an item is. Weapon sub-kinds include the plain weapon bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ItemKind: u16 {
        const WEAPON          = 0x0001;
        const WEAPON_LARGE    = 0x0003;
        const WEAPON_LAUNCHER = 0x0007;
        const WEAPON_MISSILE  = 0x0009;
        const TOOL            = 0x0010;
        const FOOD            = 0x0020;
        const DRINK           = 0x0040;
        const SCROLL          = 0x0080;
        const BOOK            = 0x0100;
        const ARMOR           = 0x0200;
        const JEWELRY         = 0x0400;
        const COIN            = 0x0800;
        const REAGENT         = 0x1000;
    }
}

bitflags! {
    /// Body areas an item can be worn on. Empty means "not armor".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct EquipArea: u16 {
        const SHIELD    = 0x001;
        const HELMET    = 0x002;
        const CUIRASS   = 0x004;
        const PAULDRONS = 0x008;
        const GLOVES    = 0x010;
        const BRACERS   = 0x020;
        const GREAVES   = 0x040;
        const KILT      = 0x080;
        const FEET      = 0x100;
        const TAIL      = 0x200;
        const RING      = 0x400;
        const NECK      = 0x800;
    }
}

/// A carried or dropped object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub symbol: Symbol,
    pub name: String,
    pub kind: ItemKind,
    pub equip: EquipArea,
    /// Dice added to the wielder's attack roll.
    pub add_dice: i8,
    /// Modifier added to the wielder's attack roll.
    pub add_modifier: i8,
}

impl Item {
    pub fn new(
        symbol: Symbol,
        name: impl Into<String>,
        kind: ItemKind,
        equip: EquipArea,
        add_dice: i8,
        add_modifier: i8,
    ) -> Self {
        Self {
            symbol,
            name: name.into(),
            kind,
            equip,
            add_dice,
            add_modifier,
        }
    }

    /// Any weapon, including launchers and missiles.
    pub fn is_weapon(&self) -> bool {
        self.kind.contains(ItemKind::WEAPON)
    }

    pub fn is_missile(&self) -> bool {
        self.kind.contains(ItemKind::WEAPON_MISSILE)
    }

    pub fn is_coin(&self) -> bool {
        self.kind.contains(ItemKind::COIN)
    }
}
