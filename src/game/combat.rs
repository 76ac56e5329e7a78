//! # Melee
//!
//! One swing in either direction. Damage is whatever the attack roll comes
//! to; a roll of zero or less is a miss.

use crate::game::dice::Dice;
use crate::game::messages::MessageLog;
use crate::game::monster::Monster;
use crate::game::player::Player;

/// How a single swing turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    Hit(i32),
    Miss,
}

impl AttackOutcome {
    pub fn damage(self) -> i32 {
        match self {
            AttackOutcome::Hit(damage) => damage,
            AttackOutcome::Miss => 0,
        }
    }
}

/// The player strikes `monster` with their base attack plus the wielded
/// weapon's bonus, clamped by the player's own attack floor and ceiling.
///
/// A slain monster stays on the grid until the next monster pass clears it.
pub fn player_attack(
    player: &Player,
    monster: &mut Monster,
    dice: &mut Dice,
    log: &mut MessageLog,
) -> AttackOutcome {
    let (dice_count, modifier) = player.effective_attack();
    let dice_count = u8::try_from(dice_count.max(0)).unwrap_or(u8::MAX);
    let roll = dice.roll_clamped(
        dice_count,
        modifier,
        player.attack_dice.floor,
        player.attack_dice.ceiling,
    );

    let outcome = if roll > 0 {
        monster.hp -= roll;
        log.push(format!("You attack the {}!", monster.name));
        AttackOutcome::Hit(roll)
    } else {
        log.push(format!("You barely miss the {}!", monster.name));
        AttackOutcome::Miss
    };

    if !monster.is_alive() {
        log.push(format!("The {} is slain!", monster.name));
        log::debug!("{} slain at {:?}", monster.name, monster.position);
    }
    outcome
}

/// `monster` strikes the player with its attack dice bag.
pub fn monster_attack(
    monster: &Monster,
    player: &mut Player,
    dice: &mut Dice,
    log: &mut MessageLog,
) -> AttackOutcome {
    let roll = dice.roll_bag(&monster.attack_dice);
    if roll > 0 {
        player.hp -= roll;
        log.push(format!("The {} attacks you!", monster.name));
        AttackOutcome::Hit(roll)
    } else {
        log.push(format!("The {} barely misses you!", monster.name));
        AttackOutcome::Miss
    }
}
