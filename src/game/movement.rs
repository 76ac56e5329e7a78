//! # Movement
//!
//! Resolves a single step for the player or a monster: terrain legality,
//! hazards, collisions and the melee they turn into. Every resolver
//! reports the number of turns it consumed so bumping into a wall is free.

use crate::game::combat::{monster_attack, player_attack};
use crate::game::dice::Dice;
use crate::game::grid::Grid;
use crate::game::messages::MessageLog;
use crate::game::monster::{Flight, Monster, MonsterId, Swim};
use crate::game::player::{InventoryScreen, Player};
use crate::game::{Direction, Position};

/// Something the player does that goes through the movement resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Move(Direction),
    /// Pick up whatever lies under the player.
    Get,
    Inventory,
}

/// Resolves a player action and returns the turns it consumed.
pub fn player_act(
    grid: &mut Grid,
    player: &mut Player,
    action: PlayerAction,
    dice: &mut Dice,
    log: &mut MessageLog,
    screen: &mut dyn InventoryScreen,
) -> u32 {
    match action {
        PlayerAction::Get => player_pick_up(grid, player, log),
        PlayerAction::Inventory => screen.open(player, log),
        PlayerAction::Move(direction) => player_move(grid, player, direction, dice, log),
    }
}

/// Steps the player one cell in `direction`.
///
/// A living monster in the way is attacked instead. Walls cost nothing.
/// Water kills the player outright.
///
/// # Examples
///
/// ```
/// use delve::{player_move, Dice, Direction, Grid, MessageLog, Player, Position, Tile};
///
/// let mut grid = Grid::new(5, 5);
/// grid.set_tile(Position::new(2, 1), Tile::wall());
/// let mut dice = Dice::seeded(1);
/// let mut player = Player::new(Position::new(1, 1), 5, 5, &mut dice);
/// let mut log = MessageLog::new();
///
/// let turns = player_move(&mut grid, &mut player, Direction::East, &mut dice, &mut log);
/// assert_eq!(turns, 0);
/// assert_eq!(player.position, Position::new(1, 1));
/// assert_eq!(log.pop().as_deref(), Some("Ouch!  You walk straight into a wall!"));
/// ```
pub fn player_move(
    grid: &mut Grid,
    player: &mut Player,
    direction: Direction,
    dice: &mut Dice,
    log: &mut MessageLog,
) -> u32 {
    let target = player.position.step(direction);

    if let Some(id) = grid.live_monster_at(target) {
        if let Some(monster) = grid.monster_mut(id) {
            player_attack(player, monster, dice, log);
        }
        return 1;
    }

    if !grid.contains(target) || grid.tile(target).blocks_step(direction.is_cardinal()) {
        log.push("Ouch!  You walk straight into a wall!");
        return 0;
    }

    if grid.tile(target).is_water() {
        player.hp = 0;
        log.push("You step into the water and are pulled down by your equipment...");
        log::debug!("Player drowned at {:?}", target);
    }

    if let Some(item) = grid.item_at(target) {
        log.push(format!("You see here a {}", item.name));
    }

    player.position = target;
    1
}

/// Picks up the item under the player. Costs a turn only on success.
pub fn player_pick_up(grid: &mut Grid, player: &mut Player, log: &mut MessageLog) -> u32 {
    let here = player.position;
    let Some(item) = grid.item_at(here).cloned() else {
        log.push("There is nothing here to pick up.");
        return 0;
    };

    let name = item.name.clone();
    if player.inventory.pick_up(item) {
        grid.take_item(here);
        log.push(format!("You pick up the {name}."));
        1
    } else {
        log.push(format!("You have no free hand to pick up the {name}."));
        0
    }
}

/// Why a monster cannot simply step onto its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Obstacle {
    Wall,
    Water,
    /// Dry land under a creature confined to water.
    Impassable,
}

fn obstacle_at(grid: &Grid, monster: &Monster, target: Position, cardinal: bool) -> Option<Obstacle> {
    if !grid.contains(target) {
        return Some(Obstacle::Wall);
    }
    let tile = grid.tile(target);
    if tile.blocks_step(cardinal) {
        Some(Obstacle::Wall)
    } else if tile.is_water() && monster.swim == Swim::CannotSwim {
        Some(Obstacle::Water)
    } else if !tile.is_water() && monster.swim == Swim::OnlySwim {
        Some(Obstacle::Impassable)
    } else {
        None
    }
}

/// Moves monster `id` by `delta`, attacking the player if that is where
/// the step lands.
///
/// A monster that can fly takes wing at the first water it meets. Any other
/// blocked monster tries to slide along one axis, horizontal first; if
/// neither slide is open it stays put. Monsters never share a cell.
pub fn monster_move(
    grid: &mut Grid,
    id: MonsterId,
    delta: Position,
    player: &mut Player,
    dice: &mut Dice,
    log: &mut MessageLog,
) {
    let Some(monster) = grid.monster(id) else {
        return;
    };
    let origin = monster.position;
    let target = origin + delta;
    let cardinal = delta.x == 0 || delta.y == 0;

    let mut take_wing = false;
    let destination = match obstacle_at(grid, monster, target, cardinal) {
        None => Some(target),
        Some(Obstacle::Water) if monster.flight == Flight::CanFly => {
            take_wing = true;
            Some(target)
        }
        Some(obstacle) if obstacle == Obstacle::Wall || monster.flight == Flight::Grounded => {
            slide(grid, origin, target)
        }
        Some(_) => Some(target),
    };

    if take_wing {
        if let Some(monster) = grid.monster_mut(id) {
            monster.flight = Flight::Flying;
        }
    }

    let Some(destination) = destination else {
        return;
    };

    if destination == player.position {
        if let Some(monster) = grid.monster(id) {
            monster_attack(monster, player, dice, log);
        }
        return;
    }

    let occupied = grid.monster_at(destination).is_some_and(|other| other != id);
    if !occupied {
        if let Some(monster) = grid.monster_mut(id) {
            monster.position = destination;
        }
    }
}

/// First open single-axis step toward `target`, horizontal before vertical.
/// A straight step has no other axis to slide along.
fn slide(grid: &Grid, origin: Position, target: Position) -> Option<Position> {
    [
        Position::new(target.x, origin.y),
        Position::new(origin.x, target.y),
    ]
    .into_iter()
    .filter(|candidate| *candidate != origin && *candidate != target)
    .find(|candidate| grid.contains(*candidate) && !grid.tile(*candidate).blocks_cardinal_movement)
}

/// Greedy chase: one step closer to the player on each axis.
pub fn monster_ai(
    grid: &mut Grid,
    id: MonsterId,
    player: &mut Player,
    dice: &mut Dice,
    log: &mut MessageLog,
) {
    let Some(monster) = grid.monster(id) else {
        return;
    };
    let delta = Position::new(
        (player.position.x - monster.position.x).signum(),
        (player.position.y - monster.position.y).signum(),
    );
    monster_move(grid, id, delta, player, dice, log);
}

/// What one monster pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonsterPass {
    /// Monsters that took a turn.
    pub acted: usize,
    /// Corpses cleared off the grid after the pass.
    pub cleared: Vec<Monster>,
}

/// Gives every living monster one turn in acting order.
///
/// The order is snapshotted up front, so monsters spawned mid-pass wait for
/// the next one. Corpses are skipped and cleared away once every monster
/// has acted; a monster behind a corpse in the order still gets its turn.
pub fn move_all_monsters(
    grid: &mut Grid,
    player: &mut Player,
    dice: &mut Dice,
    log: &mut MessageLog,
) -> MonsterPass {
    let mut pass = MonsterPass::default();
    if grid.monster_count() == 0 {
        return pass;
    }

    for id in grid.monster_ids() {
        let alive = grid.monster(id).is_some_and(Monster::is_alive);
        if alive {
            monster_ai(grid, id, player, dice, log);
            pass.acted += 1;
        }
    }

    pass.cleared = grid.compact_dead();
    for corpse in &pass.cleared {
        log::debug!("Cleared {} corpse at {:?}", corpse.name, corpse.position);
    }
    pass
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dice::DiceBag;
    use crate::game::item::{EquipArea, Item, ItemKind};
    use crate::game::monster::Species;
    use crate::game::player::AutoEquip;
    use crate::game::tile::{Symbol, Tile};

    fn species(flight: Flight, swim: Swim, attack: DiceBag) -> Species {
        Species::new(
            Symbol::plain('m'),
            "mite",
            flight,
            swim,
            DiceBag::new(0, 3, 10, 0),
            attack,
        )
    }

    fn harmless() -> DiceBag {
        DiceBag::new(0, 0, 10, 0)
    }

    fn spawn(grid: &mut Grid, species: &Species, x: i32, y: i32) -> MonsterId {
        grid.add_monster(species.spawn_at(&mut Dice::seeded(0), Position::new(x, y)))
            .unwrap()
    }

    fn setup(width: usize, height: usize, player_at: Position) -> (Grid, Player, Dice, MessageLog) {
        let mut dice = Dice::seeded(42);
        let player = Player::new(player_at, width, height, &mut dice);
        (Grid::new(width, height), player, dice, MessageLog::new())
    }

    #[test]
    fn test_player_moves_onto_floor() {
        let (mut grid, mut player, mut dice, mut log) = setup(5, 5, Position::new(1, 1));
        let turns = player_move(&mut grid, &mut player, Direction::Southeast, &mut dice, &mut log);
        assert_eq!(turns, 1);
        assert_eq!(player.position, Position::new(2, 2));
        assert_eq!(log.unread_count(), 0);
    }

    #[test]
    fn test_player_bumps_map_edge() {
        let (mut grid, mut player, mut dice, mut log) = setup(5, 5, Position::new(0, 0));
        let turns = player_move(&mut grid, &mut player, Direction::North, &mut dice, &mut log);
        assert_eq!(turns, 0);
        assert_eq!(player.position, Position::new(0, 0));
    }

    #[test]
    fn test_doorway_blocks_diagonal_only() {
        let (mut grid, mut player, mut dice, mut log) = setup(5, 5, Position::new(1, 1));
        grid.set_tile(Position::new(2, 2), Tile::doorway());
        grid.set_tile(Position::new(2, 1), Tile::doorway());

        assert_eq!(player_move(&mut grid, &mut player, Direction::Southeast, &mut dice, &mut log), 0);
        assert_eq!(player.position, Position::new(1, 1));
        assert_eq!(player_move(&mut grid, &mut player, Direction::East, &mut dice, &mut log), 1);
        assert_eq!(player.position, Position::new(2, 1));
    }

    #[test]
    fn test_water_drowns_player() {
        let (mut grid, mut player, mut dice, mut log) = setup(5, 5, Position::new(1, 1));
        grid.set_tile(Position::new(1, 2), Tile::water());

        assert_eq!(player_move(&mut grid, &mut player, Direction::South, &mut dice, &mut log), 1);
        assert_eq!(player.hp, 0);
        assert_eq!(player.position, Position::new(1, 2));
        assert_eq!(
            log.pop().as_deref(),
            Some("You step into the water and are pulled down by your equipment...")
        );
    }

    #[test]
    fn test_item_seen_not_taken() {
        let (mut grid, mut player, mut dice, mut log) = setup(5, 5, Position::new(1, 1));
        let hat = Item::new(Symbol::plain(']'), "hat", ItemKind::ARMOR, EquipArea::HELMET, 0, 0);
        grid.place_item(Position::new(2, 1), hat);

        player_move(&mut grid, &mut player, Direction::East, &mut dice, &mut log);
        assert_eq!(log.pop().as_deref(), Some("You see here a hat"));
        assert!(grid.item_at(Position::new(2, 1)).is_some());

        let mut screen = AutoEquip;
        let turns = player_act(&mut grid, &mut player, PlayerAction::Get, &mut dice, &mut log, &mut screen);
        assert_eq!(turns, 1);
        assert!(grid.item_at(Position::new(2, 1)).is_none());
        assert_eq!(log.pop().as_deref(), Some("You pick up the hat."));
    }

    #[test]
    fn test_get_with_nothing_here_is_free() {
        let (mut grid, mut player, mut dice, mut log) = setup(5, 5, Position::new(1, 1));
        let turns = player_act(&mut grid, &mut player, PlayerAction::Get, &mut dice, &mut log, &mut AutoEquip);
        assert_eq!(turns, 0);
    }

    #[test]
    fn test_player_attacks_instead_of_moving() {
        let (mut grid, mut player, mut dice, mut log) = setup(5, 5, Position::new(1, 1));
        let id = spawn(&mut grid, &species(Flight::Grounded, Swim::CannotSwim, harmless()), 2, 1);

        assert_eq!(player_move(&mut grid, &mut player, Direction::East, &mut dice, &mut log), 1);
        assert_eq!(player.position, Position::new(1, 1));
        assert!(grid.monster(id).unwrap().hp < 3);
    }

    #[test]
    fn test_corpse_does_not_stop_player() {
        let (mut grid, mut player, mut dice, mut log) = setup(5, 5, Position::new(1, 1));
        let id = spawn(&mut grid, &species(Flight::Grounded, Swim::CannotSwim, harmless()), 2, 1);
        grid.monster_mut(id).unwrap().hp = 0;

        assert_eq!(player_move(&mut grid, &mut player, Direction::East, &mut dice, &mut log), 1);
        assert_eq!(player.position, Position::new(2, 1));
    }

    #[test]
    fn test_monster_chases_player() {
        let (mut grid, mut player, mut dice, mut log) = setup(10, 10, Position::new(1, 1));
        let id = spawn(&mut grid, &species(Flight::Grounded, Swim::CannotSwim, harmless()), 5, 4);

        monster_ai(&mut grid, id, &mut player, &mut dice, &mut log);
        assert_eq!(grid.monster(id).unwrap().position, Position::new(4, 3));
    }

    #[test]
    fn test_monster_attacks_adjacent_player() {
        let (mut grid, mut player, mut dice, mut log) = setup(10, 10, Position::new(1, 1));
        player.hp = 20;
        let biter = species(Flight::Grounded, Swim::CannotSwim, DiceBag::new(0, 2, 10, 0));
        let id = spawn(&mut grid, &biter, 2, 2);

        monster_ai(&mut grid, id, &mut player, &mut dice, &mut log);
        assert_eq!(grid.monster(id).unwrap().position, Position::new(2, 2));
        assert_eq!(player.hp, 18);
        assert_eq!(log.pop().as_deref(), Some("The mite attacks you!"));
    }

    #[test]
    fn test_monster_slides_along_wall() {
        let (mut grid, mut player, mut dice, mut log) = setup(10, 10, Position::new(1, 1));
        let id = spawn(&mut grid, &species(Flight::Grounded, Swim::CannotSwim, harmless()), 5, 5);
        grid.set_tile(Position::new(4, 4), Tile::wall());

        monster_ai(&mut grid, id, &mut player, &mut dice, &mut log);
        assert_eq!(grid.monster(id).unwrap().position, Position::new(4, 5));
    }

    #[test]
    fn test_monster_slides_vertically_when_horizontal_blocked() {
        let (mut grid, mut player, mut dice, mut log) = setup(10, 10, Position::new(1, 1));
        let id = spawn(&mut grid, &species(Flight::Grounded, Swim::CannotSwim, harmless()), 5, 5);
        grid.set_tile(Position::new(4, 4), Tile::wall());
        grid.set_tile(Position::new(4, 5), Tile::wall());

        monster_ai(&mut grid, id, &mut player, &mut dice, &mut log);
        assert_eq!(grid.monster(id).unwrap().position, Position::new(5, 4));
    }

    #[test]
    fn test_boxed_in_monster_stays_put() {
        let (mut grid, mut player, mut dice, mut log) = setup(10, 10, Position::new(1, 1));
        let id = spawn(&mut grid, &species(Flight::Grounded, Swim::CannotSwim, harmless()), 5, 5);
        for pos in [(4, 4), (4, 5), (5, 4)] {
            grid.set_tile(Position::new(pos.0, pos.1), Tile::wall());
        }

        monster_ai(&mut grid, id, &mut player, &mut dice, &mut log);
        assert_eq!(grid.monster(id).unwrap().position, Position::new(5, 5));
    }

    #[test]
    fn test_flyer_takes_wing_over_water() {
        let (mut grid, mut player, mut dice, mut log) = setup(10, 10, Position::new(1, 5));
        let id = spawn(&mut grid, &species(Flight::CanFly, Swim::CannotSwim, harmless()), 5, 5);
        grid.set_tile(Position::new(4, 5), Tile::water());

        monster_ai(&mut grid, id, &mut player, &mut dice, &mut log);
        let monster = grid.monster(id).unwrap();
        assert_eq!(monster.flight, Flight::Flying);
        assert_eq!(monster.position, Position::new(4, 5));
    }

    #[test]
    fn test_swimmer_confined_to_water() {
        let (mut grid, mut player, mut dice, mut log) = setup(10, 10, Position::new(1, 5));
        for x in 3..=6 {
            grid.set_tile(Position::new(x, 5), Tile::water());
        }
        let fish = species(Flight::Grounded, Swim::OnlySwim, harmless());
        let id = spawn(&mut grid, &fish, 3, 5);

        // West of (3, 5) is dry land; the cardinal slide has nowhere new to go.
        monster_ai(&mut grid, id, &mut player, &mut dice, &mut log);
        assert_eq!(grid.monster(id).unwrap().position, Position::new(3, 5));
    }

    #[test]
    fn test_monsters_never_stack() {
        let (mut grid, mut player, mut dice, mut log) = setup(10, 10, Position::new(1, 1));
        let mite = species(Flight::Grounded, Swim::CannotSwim, harmless());
        let blocker = spawn(&mut grid, &mite, 4, 4);
        let chaser = spawn(&mut grid, &mite, 5, 5);

        monster_move(&mut grid, chaser, Position::new(-1, -1), &mut player, &mut dice, &mut log);
        assert_eq!(grid.monster(chaser).unwrap().position, Position::new(5, 5));
        assert_eq!(grid.monster(blocker).unwrap().position, Position::new(4, 4));
    }

    #[test]
    fn test_pass_clears_corpses_after_acting() {
        let (mut grid, mut player, mut dice, mut log) = setup(10, 10, Position::new(1, 1));
        let mite = species(Flight::Grounded, Swim::CannotSwim, harmless());
        let dead = spawn(&mut grid, &mite, 8, 8);
        let behind = spawn(&mut grid, &mite, 8, 7);
        grid.monster_mut(dead).unwrap().hp = 0;

        let pass = move_all_monsters(&mut grid, &mut player, &mut dice, &mut log);
        assert_eq!(pass.acted, 1);
        assert_eq!(pass.cleared.len(), 1);
        assert_eq!(grid.monster_count(), 1);
        // The monster queued right behind the corpse still moved this turn.
        assert_eq!(grid.monster(behind).unwrap().position, Position::new(7, 6));
    }
}
