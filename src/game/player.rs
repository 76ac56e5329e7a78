//! # Player
//!
//! The player character and the body-slot inventory.

use crate::game::dice::{Dice, DiceBag};
use crate::game::item::{EquipArea, Item, ItemKind};
use crate::game::messages::MessageLog;
use crate::game::tile::{Attr, Symbol};
use crate::game::Position;
use serde::{Deserialize, Serialize};

/// Player glyph.
pub const SYM_PLAYER: Symbol = Symbol::new('@', Attr::Bold);

/// Base attack roll of a fresh character.
pub const PLAYER_ATTACK: DiceBag = DiceBag::new(2, 0, 0, 1000);

/// Inventory slots, in display order.
///
/// The two hands double as carrying space for anything picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvSlot {
    Weapon,
    OffHand,
    Quiver,
    Helmet,
    Cuirass,
    Pauldrons,
    Bracers,
    RingLeft,
    RingRight,
    Necklace,
    Greaves,
    Kilt,
    Feet,
    Tail,
}

impl InvSlot {
    pub const ALL: [InvSlot; 14] = [
        InvSlot::Weapon,
        InvSlot::OffHand,
        InvSlot::Quiver,
        InvSlot::Helmet,
        InvSlot::Cuirass,
        InvSlot::Pauldrons,
        InvSlot::Bracers,
        InvSlot::RingLeft,
        InvSlot::RingRight,
        InvSlot::Necklace,
        InvSlot::Greaves,
        InvSlot::Kilt,
        InvSlot::Feet,
        InvSlot::Tail,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Name shown on the inventory screen.
    pub fn label(self) -> &'static str {
        match self {
            InvSlot::Weapon => "weapon hand",
            InvSlot::OffHand => "off hand",
            InvSlot::Quiver => "quiver",
            InvSlot::Helmet => "helmet",
            InvSlot::Cuirass => "cuirass",
            InvSlot::Pauldrons => "pauldrons",
            InvSlot::Bracers => "bracers",
            InvSlot::RingLeft => "left ring",
            InvSlot::RingRight => "right ring",
            InvSlot::Necklace => "necklace",
            InvSlot::Greaves => "greaves",
            InvSlot::Kilt => "kilt",
            InvSlot::Feet => "feet",
            InvSlot::Tail => "tail",
        }
    }

    /// True for the two grasping slots.
    pub fn is_hand(self) -> bool {
        matches!(self, InvSlot::Weapon | InvSlot::OffHand)
    }

    /// Equip areas accepted by a worn slot; hands accept anything.
    fn accepts(self) -> EquipArea {
        match self {
            InvSlot::Weapon | InvSlot::OffHand | InvSlot::Quiver => EquipArea::empty(),
            InvSlot::Helmet => EquipArea::HELMET,
            InvSlot::Cuirass => EquipArea::CUIRASS,
            InvSlot::Pauldrons => EquipArea::PAULDRONS,
            InvSlot::Bracers => EquipArea::BRACERS | EquipArea::GLOVES,
            InvSlot::RingLeft | InvSlot::RingRight => EquipArea::RING,
            InvSlot::Necklace => EquipArea::NECK,
            InvSlot::Greaves => EquipArea::GREAVES,
            InvSlot::Kilt => EquipArea::KILT,
            InvSlot::Feet => EquipArea::FEET,
            InvSlot::Tail => EquipArea::TAIL,
        }
    }
}

/// Body-slot inventory plus counted stacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    slots: [Option<Item>; 14],
    pub quiver_count: u8,
    pub coins: u32,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: InvSlot) -> Option<&Item> {
        self.slots[slot.index()].as_ref()
    }

    pub fn take(&mut self, slot: InvSlot) -> Option<Item> {
        if slot == InvSlot::Quiver {
            self.quiver_count = 0;
        }
        self.slots[slot.index()].take()
    }

    pub fn is_empty(&self, slot: InvSlot) -> bool {
        self.slots[slot.index()].is_none()
    }

    /// First free hand, weapon hand before off hand.
    pub fn check_grasp(&self) -> Option<InvSlot> {
        [InvSlot::Weapon, InvSlot::OffHand]
            .into_iter()
            .find(|slot| self.is_empty(*slot))
    }

    /// Picks up `item` if there is room for it.
    ///
    /// Coins always go to the purse. Missiles stack in the quiver when it is
    /// empty or already holds the same missile. Anything else needs a free
    /// hand; weapons prefer the weapon hand and everything else the off hand.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{EquipArea, InvSlot, Inventory, Item, ItemKind, Symbol};
    ///
    /// let mut inventory = Inventory::new();
    /// let hat = Item::new(Symbol::plain(']'), "hat", ItemKind::ARMOR, EquipArea::HELMET, 0, 0);
    /// assert!(inventory.pick_up(hat));
    /// assert_eq!(inventory.get(InvSlot::OffHand).map(|i| i.name.as_str()), Some("hat"));
    /// ```
    pub fn pick_up(&mut self, item: Item) -> bool {
        if item.is_coin() {
            self.coins = self.coins.saturating_add(1);
            return true;
        }

        if item.is_missile() {
            let stacks = match self.get(InvSlot::Quiver) {
                None => true,
                Some(held) => held.name == item.name && self.quiver_count < u8::MAX,
            };
            if stacks {
                self.slots[InvSlot::Quiver.index()] = Some(item);
                self.quiver_count += 1;
                return true;
            }
        }

        let preferred = if item.is_weapon() {
            [InvSlot::Weapon, InvSlot::OffHand]
        } else {
            [InvSlot::OffHand, InvSlot::Weapon]
        };
        match preferred.into_iter().find(|slot| self.is_empty(*slot)) {
            Some(slot) => {
                self.slots[slot.index()] = Some(item);
                true
            }
            None => false,
        }
    }

    /// Whether `item` may go in `slot`.
    pub fn check_equip(item: &Item, slot: InvSlot) -> bool {
        match slot {
            InvSlot::Weapon | InvSlot::OffHand => true,
            InvSlot::Quiver => item.is_missile(),
            worn => {
                let wearable = item
                    .kind
                    .intersects(ItemKind::ARMOR | ItemKind::JEWELRY);
                wearable && item.equip.intersects(worn.accepts())
            }
        }
    }

    /// Puts `item` in an empty, compatible `slot`. On refusal the item is
    /// handed back.
    pub fn equip(&mut self, item: Item, slot: InvSlot) -> Result<(), Item> {
        if !self.is_empty(slot) || !Self::check_equip(&item, slot) {
            return Err(item);
        }
        if slot == InvSlot::Quiver {
            self.quiver_count = 1;
        }
        self.slots[slot.index()] = Some(item);
        Ok(())
    }

    /// `(add_dice, add_modifier)` of whatever is in the weapon hand.
    pub fn weapon_bonus(&self) -> (i8, i8) {
        self.get(InvSlot::Weapon)
            .map(|item| (item.add_dice, item.add_modifier))
            .unwrap_or((0, 0))
    }

    /// Occupied slots in display order.
    pub fn iter(&self) -> impl Iterator<Item = (InvSlot, &Item)> {
        InvSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|item| (slot, item)))
    }
}

/// The player character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub symbol: Symbol,
    pub hp: i32,
    pub position: Position,
    pub attack_dice: DiceBag,
    pub inventory: Inventory,
}

impl Player {
    /// Creates a fresh character at `position` on a `width` × `height` map.
    /// Coordinates off the map fall back to 1.
    pub fn new(position: Position, width: usize, height: usize, dice: &mut Dice) -> Self {
        let x = if (0..width as i32).contains(&position.x) { position.x } else { 1 };
        let y = if (0..height as i32).contains(&position.y) { position.y } else { 1 };
        Self {
            symbol: SYM_PLAYER,
            hp: dice.roll(3, 2),
            position: Position::new(x, y),
            attack_dice: PLAYER_ATTACK,
            inventory: Inventory::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Attack dice count and modifier including the wielded weapon.
    pub fn effective_attack(&self) -> (i32, i32) {
        let (add_dice, add_modifier) = self.inventory.weapon_bonus();
        (
            i32::from(self.attack_dice.dice) + i32::from(add_dice),
            i32::from(self.attack_dice.modifier) + i32::from(add_modifier),
        )
    }

    /// The status line: hit points and the effective attack roll.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Dice, Player, Position};
    ///
    /// let mut player = Player::new(Position::new(1, 1), 80, 22, &mut Dice::seeded(1));
    /// player.hp = 9;
    /// assert_eq!(player.status_line(), "HP: 9    Attack: 2d + 0");
    /// ```
    pub fn status_line(&self) -> String {
        let (dice, modifier) = self.effective_attack();
        let sign = if modifier >= 0 { '+' } else { '-' };
        format!("HP: {}    Attack: {}d {} {}", self.hp, dice, sign, modifier.abs())
    }
}

/// The inventory screen, run when the player opens their inventory.
pub trait InventoryScreen {
    /// Shows the inventory and returns how many turns the visit consumed.
    fn open(&mut self, player: &mut Player, log: &mut MessageLog) -> u32;
}

/// Inventory screen that lists what is carried and moves every hand item
/// into the first compatible empty body slot, one turn per item moved.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoEquip;

impl InventoryScreen for AutoEquip {
    fn open(&mut self, player: &mut Player, log: &mut MessageLog) -> u32 {
        let inventory = &mut player.inventory;
        let mut moved = 0;

        for hand in [InvSlot::Weapon, InvSlot::OffHand] {
            let Some(item) = inventory.get(hand) else {
                continue;
            };
            if item.is_weapon() && hand == InvSlot::Weapon {
                continue;
            }
            let target = InvSlot::ALL.into_iter().find(|slot| {
                !slot.is_hand() && inventory.is_empty(*slot) && Inventory::check_equip(item, *slot)
            });
            if let Some(target) = target {
                if let Some(item) = inventory.take(hand) {
                    log.push(format!("You put on the {} ({}).", item.name, target.label()));
                    if inventory.equip(item, target).is_err() {
                        log::warn!("equip refused after compatibility check for {:?}", target);
                    }
                    moved += 1;
                }
            }
        }

        if moved == 0 {
            let carried: Vec<String> = inventory
                .iter()
                .map(|(slot, item)| format!("{}: {}", slot.label(), item.name))
                .collect();
            if carried.is_empty() {
                log.push("You are not carrying anything.");
            } else {
                log.push(carried.join(", "));
            }
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tile::Symbol;

    fn sword() -> Item {
        Item::new(Symbol::plain('('), "old sword", ItemKind::WEAPON, EquipArea::empty(), 0, 2)
    }

    fn hat() -> Item {
        Item::new(Symbol::plain(']'), "hat", ItemKind::ARMOR, EquipArea::HELMET, 0, 0)
    }

    fn ring() -> Item {
        Item::new(Symbol::plain('='), "tungsten ring", ItemKind::JEWELRY, EquipArea::RING, 0, 0)
    }

    fn arrow() -> Item {
        Item::new(Symbol::plain(')'), "arrow", ItemKind::WEAPON_MISSILE, EquipArea::empty(), 0, 0)
    }

    fn fresh_player() -> Player {
        Player::new(Position::new(1, 1), 80, 22, &mut Dice::seeded(5))
    }

    #[test]
    fn test_new_player() {
        let player = fresh_player();
        assert_eq!(player.position, Position::new(1, 1));
        assert!((5..=20).contains(&player.hp));
        assert_eq!(player.attack_dice, PLAYER_ATTACK);
        assert_eq!(player.inventory.coins, 0);
        assert_eq!(player.inventory.iter().count(), 0);
    }

    #[test]
    fn test_off_map_start_falls_back() {
        let player = Player::new(Position::new(90, 30), 80, 22, &mut Dice::seeded(5));
        assert_eq!(player.position, Position::new(1, 1));
    }

    #[test]
    fn test_weapon_prefers_weapon_hand() {
        let mut inventory = Inventory::new();
        assert!(inventory.pick_up(sword()));
        assert_eq!(inventory.get(InvSlot::Weapon), Some(&sword()));
        assert_eq!(inventory.weapon_bonus(), (0, 2));
    }

    #[test]
    fn test_hands_fill_up() {
        let mut inventory = Inventory::new();
        assert!(inventory.pick_up(hat()));
        assert!(inventory.pick_up(ring()));
        assert_eq!(inventory.check_grasp(), None);
        assert!(!inventory.pick_up(sword()));
        // The ring went into the weapon hand once the off hand was taken.
        assert_eq!(inventory.get(InvSlot::Weapon), Some(&ring()));
    }

    #[test]
    fn test_coins_and_missiles_stack() {
        let mut inventory = Inventory::new();
        let coin = Item::new(Symbol::plain('$'), "coin", ItemKind::COIN, EquipArea::empty(), 0, 0);
        assert!(inventory.pick_up(coin.clone()));
        assert!(inventory.pick_up(coin));
        assert_eq!(inventory.coins, 2);

        assert!(inventory.pick_up(arrow()));
        assert!(inventory.pick_up(arrow()));
        assert_eq!(inventory.quiver_count, 2);
        assert_eq!(inventory.check_grasp(), Some(InvSlot::Weapon));
    }

    #[test]
    fn test_check_equip() {
        assert!(Inventory::check_equip(&hat(), InvSlot::Helmet));
        assert!(!Inventory::check_equip(&hat(), InvSlot::Feet));
        assert!(Inventory::check_equip(&ring(), InvSlot::RingLeft));
        assert!(Inventory::check_equip(&ring(), InvSlot::RingRight));
        assert!(!Inventory::check_equip(&sword(), InvSlot::Helmet));
        assert!(Inventory::check_equip(&sword(), InvSlot::OffHand));
        assert!(Inventory::check_equip(&arrow(), InvSlot::Quiver));
        assert!(!Inventory::check_equip(&sword(), InvSlot::Quiver));
    }

    #[test]
    fn test_equip_refuses_occupied_slot() {
        let mut inventory = Inventory::new();
        assert!(inventory.equip(hat(), InvSlot::Helmet).is_ok());
        let refused = inventory.equip(hat(), InvSlot::Helmet);
        assert_eq!(refused, Err(hat()));
    }

    #[test]
    fn test_effective_attack_and_status() {
        let mut player = fresh_player();
        player.hp = 12;
        player.inventory.pick_up(sword());
        assert_eq!(player.effective_attack(), (2, 2));
        assert_eq!(player.status_line(), "HP: 12    Attack: 2d + 2");

        player.attack_dice.modifier = -5;
        assert_eq!(player.status_line(), "HP: 12    Attack: 2d - 3");
    }

    #[test]
    fn test_auto_equip_moves_worn_items() {
        let mut player = fresh_player();
        player.inventory.pick_up(hat());
        player.inventory.pick_up(ring());
        let mut log = MessageLog::new();

        let turns = AutoEquip.open(&mut player, &mut log);
        assert_eq!(turns, 2);
        assert!(player.inventory.get(InvSlot::Helmet).is_some());
        assert!(player.inventory.get(InvSlot::RingLeft).is_some());
        assert_eq!(player.inventory.check_grasp(), Some(InvSlot::Weapon));
        assert_eq!(log.unread_count(), 2);
    }

    #[test]
    fn test_auto_equip_keeps_wielded_weapon() {
        let mut player = fresh_player();
        player.inventory.pick_up(sword());
        let mut log = MessageLog::new();

        assert_eq!(AutoEquip.open(&mut player, &mut log), 0);
        assert_eq!(player.inventory.get(InvSlot::Weapon), Some(&sword()));
        assert_eq!(log.pop().as_deref(), Some("weapon hand: old sword"));
    }
}
