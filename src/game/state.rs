//! # Game State Module
//!
//! Owns everything a running game needs and sequences a turn: the player
//! acts, every monster gets one pass per turn the action consumed, and the
//! field of vision is recomputed.
//!
//! There is no hidden global state. The grid, the player, the message log
//! and the dice all live here and are lent to the subsystems as needed.

use crate::config::GameConfig;
use crate::game::fov::compute_visibility_with;
use crate::game::movement::{move_all_monsters, player_act, PlayerAction};
use crate::game::{Dice, Grid, InventoryScreen, MessageLog, Player};
use crate::generation::LevelGenerator;
use crate::input::{Intent, KeyMode};
use crate::{DelveResult, VERSION};
use serde::{Deserialize, Serialize};

/// Game completion state for handling endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCompletionState {
    /// Game is still in progress
    Playing,
    /// Player drowned or was killed
    PlayerDied,
    /// Player asked to leave
    Quit,
}

/// What handling one intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Turns consumed; zero for free actions and wall bumps
    pub turns: u32,
    /// Completion state after the intent resolved
    pub state: GameCompletionState,
}

/// Central game state.
pub struct GameState {
    /// The current level
    pub grid: Grid,
    /// The player character
    pub player: Player,
    /// Player-facing notifications
    pub messages: MessageLog,
    /// Every random roll goes through here
    pub dice: Dice,
    /// Turns elapsed, counted per monster pass
    pub turn_number: u64,
    /// Active key layout
    pub key_mode: KeyMode,
    /// Runtime configuration
    pub config: GameConfig,
    /// Seed the dice were created with
    pub rng_seed: u64,
    /// Current game completion state
    pub completion_state: GameCompletionState,
}

impl GameState {
    /// Creates a game on an existing grid and player.
    ///
    /// The dice are seeded from `config.seed` when present and from a random
    /// seed otherwise. Visibility is computed before the first turn.
    pub fn new(grid: Grid, player: Player, config: GameConfig) -> Self {
        let rng_seed = config.seed.unwrap_or_else(rand::random);
        let dice = Dice::with_limits(rng_seed, config.roll_limits);
        Self::with_dice(grid, player, dice, rng_seed, config)
    }

    fn with_dice(grid: Grid, player: Player, dice: Dice, rng_seed: u64, config: GameConfig) -> Self {
        let mut state = Self {
            grid,
            player,
            messages: MessageLog::with_capacity(config.message_capacity),
            dice,
            turn_number: 0,
            key_mode: KeyMode::from_alt_keys(config.alt_keys),
            config,
            rng_seed,
            completion_state: GameCompletionState::Playing,
        };
        state.refresh_visibility();
        state
    }

    /// Generates a level and places a fresh player on it.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{GameConfig, GameState, Position, ReferenceRoom};
    ///
    /// let state = GameState::from_generator(&ReferenceRoom, GameConfig::seeded(7)).unwrap();
    /// assert_eq!(state.player.position, Position::new(1, 1));
    /// assert_eq!(state.turn_number, 0);
    /// assert!(state.grid.is_visible(Position::new(2, 2)));
    /// ```
    pub fn from_generator(generator: &dyn LevelGenerator, config: GameConfig) -> DelveResult<Self> {
        config.validate()?;
        let rng_seed = config.seed.unwrap_or_else(rand::random);
        let mut dice = Dice::with_limits(rng_seed, config.roll_limits);

        let grid = generator.generate(&mut dice)?;
        generator.validate(&grid)?;
        let player = Player::new(generator.player_start(), grid.width(), grid.height(), &mut dice);
        log::info!(
            "New game on {} with seed {}, player has {} hp",
            generator.generator_type(),
            rng_seed,
            player.hp
        );

        Ok(Self::with_dice(grid, player, dice, rng_seed, config))
    }

    /// Handles one player intent from the front end.
    /// Nothing happens once the game has ended.
    pub fn handle_intent(&mut self, intent: Intent, screen: &mut dyn InventoryScreen) -> TurnReport {
        if self.is_game_ended() {
            return self.report(0);
        }
        if let Some(action) = intent.as_action() {
            return self.take_action(action, screen);
        }

        match intent {
            Intent::Wait => {
                self.messages.push("You bide your time.");
                self.advance_turns(1)
            }
            Intent::Help => {
                self.messages.push(self.key_mode.help_text());
                self.report(0)
            }
            Intent::ShowVersion => {
                self.messages.push(format!("Delve, version {VERSION}"));
                self.report(0)
            }
            Intent::ToggleAltKeys => {
                self.key_mode = self.key_mode.toggled();
                self.config.alt_keys = self.key_mode == KeyMode::Alternate;
                let state = if self.config.alt_keys { "en" } else { "dis" };
                self.messages.push(format!("Alternate movement keys {state}abled"));
                self.report(0)
            }
            Intent::ClearMessage => {
                self.messages.clear();
                self.report(0)
            }
            Intent::Quit => {
                self.completion_state = GameCompletionState::Quit;
                self.messages.push("See you later...");
                self.report(0)
            }
            // Message history is drawn by the front end; the core has nothing to do.
            Intent::MessageHistory | Intent::Move(_) | Intent::Get | Intent::Inventory => self.report(0),
        }
    }

    /// Resolves a movement-resolver action and runs a monster pass for every
    /// turn it consumed.
    pub fn take_action(&mut self, action: PlayerAction, screen: &mut dyn InventoryScreen) -> TurnReport {
        if self.is_game_ended() {
            return self.report(0);
        }

        let turns = player_act(
            &mut self.grid,
            &mut self.player,
            action,
            &mut self.dice,
            &mut self.messages,
            screen,
        );

        if !self.player.is_alive() {
            self.refresh_visibility();
            self.player_died();
            return self.report(turns);
        }
        self.advance_turns(turns)
    }

    /// Runs `turns` monster passes, stopping early if the player dies, then
    /// recomputes visibility.
    pub fn advance_turns(&mut self, turns: u32) -> TurnReport {
        if turns == 0 {
            return self.report(0);
        }

        for _ in 0..turns {
            if !self.player.is_alive() {
                break;
            }
            move_all_monsters(&mut self.grid, &mut self.player, &mut self.dice, &mut self.messages);
            self.turn_number += 1;
        }
        self.refresh_visibility();

        if !self.player.is_alive() {
            self.player_died();
        }
        self.report(turns)
    }

    /// Recomputes the field of vision from the player.
    pub fn refresh_visibility(&mut self) {
        compute_visibility_with(&mut self.grid, self.player.position, self.config.fov);
    }

    /// The status line for the current player.
    pub fn status_line(&self) -> String {
        self.player.status_line()
    }

    pub fn is_game_ended(&self) -> bool {
        self.completion_state != GameCompletionState::Playing
    }

    fn player_died(&mut self) {
        if self.completion_state == GameCompletionState::PlayerDied {
            return;
        }
        log::info!("Player died on turn {}", self.turn_number);
        self.completion_state = GameCompletionState::PlayerDied;
        self.messages.push("See you later...");
    }

    fn report(&self, turns: u32) -> TurnReport {
        TurnReport {
            turns,
            state: self.completion_state,
        }
    }
}
