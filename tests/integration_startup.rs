//! Integration tests for starting a game from a generator.

use delve::{
    Dice, DelveError, DelveResult, ExitStatus, GameCompletionState, GameConfig, GameState, Grid,
    LevelGenerator, Position, ReferenceRoom, Tile,
};

#[test]
fn test_basic_startup() -> DelveResult<()> {
    let state = GameState::from_generator(&ReferenceRoom, GameConfig::seeded(12345))?;

    assert_eq!(state.turn_number, 0);
    assert_eq!(state.rng_seed, 12345);
    assert_eq!(state.completion_state, GameCompletionState::Playing);
    assert_eq!(state.player.position, Position::new(1, 1));
    assert!(state.player.is_alive());
    assert!((5..=20).contains(&state.player.hp));
    assert_eq!(state.grid.monster_count(), 1);
    assert!(state.grid.is_visible(state.player.position));
    Ok(())
}

#[test]
fn test_same_seed_same_game() -> DelveResult<()> {
    let a = GameState::from_generator(&ReferenceRoom, GameConfig::seeded(5))?;
    let b = GameState::from_generator(&ReferenceRoom, GameConfig::seeded(5))?;
    assert_eq!(a.player.hp, b.player.hp);
    assert_eq!(a.status_line(), b.status_line());
    Ok(())
}

/// A generator that only ever produces solid rock.
struct SolidRock;

impl LevelGenerator for SolidRock {
    fn generate(&self, _dice: &mut Dice) -> DelveResult<Grid> {
        Ok(Grid::filled(8, 8, Tile::wall()))
    }

    fn player_start(&self) -> Position {
        Position::new(3, 3)
    }

    fn generator_type(&self) -> &'static str {
        "solid rock"
    }
}

#[test]
fn test_unplayable_level_rejected() {
    let result = GameState::from_generator(&SolidRock, GameConfig::seeded(1));
    let err = result.err().unwrap();
    assert!(matches!(err, DelveError::GenerationFailed(_)));
    assert_eq!(err.exit_status(), ExitStatus::UnknownError);
}

#[test]
fn test_invalid_config_rejected() {
    let mut config = GameConfig::seeded(1);
    config.message_capacity = 0;
    let err = GameState::from_generator(&ReferenceRoom, config).err().unwrap();
    assert!(matches!(err, DelveError::InvalidConfig(_)));
    assert_eq!(err.exit_status(), ExitStatus::UserError);
}
