//! # Delve
//!
//! A turn-based, grid-based dungeon crawler.
//!
//! ## Architecture Overview
//!
//! The crate is split between a deterministic simulation core and thin
//! input/output layers around it:
//!
//! - **Game**: the grid model, dice engine, field of vision, movement and
//!   combat resolution, monster AI and the turn orchestrator
//! - **Generation**: level generators producing a populated grid
//! - **Input**: table-driven mapping from keys to player intents
//! - **Rendering**: text frames of the map plus a macroquad front end
//!
//! Every turn resolves to completion on a single thread: the player acts,
//! every monster acts in list order, and visibility is recomputed.

pub mod config;
pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;

// Core module re-exports
pub use config::*;
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;

/// Core error type for the Delve engine.
#[derive(thiserror::Error, Debug)]
pub enum DelveError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration parsed but holds unusable values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Level generation produced an unusable map
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

impl DelveError {
    /// Maps the error onto the process outcome code reported at exit.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            DelveError::Io(_) | DelveError::Config(_) | DelveError::InvalidConfig(_) => {
                ExitStatus::UserError
            }
            DelveError::GenerationFailed(_) | DelveError::InvalidState(_) => {
                ExitStatus::UnknownError
            }
        }
    }
}

/// Result type used throughout the Delve codebase.
pub type DelveResult<T> = Result<T, DelveError>;

/// Process outcome codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    UnknownError = -127,
    AllocationError = -1,
    NoErrors = 0,
    TerminatedEarly = 1,
    UserError = 2,
}

impl ExitStatus {
    /// Numeric code handed to the operating system.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Short human readable description, printed when the game panics out.
    pub fn describe(self) -> &'static str {
        match self {
            ExitStatus::UnknownError => "Unknown error!",
            ExitStatus::AllocationError => "Memory allocation error",
            ExitStatus::NoErrors | ExitStatus::TerminatedEarly => "No errors",
            ExitStatus::UserError => "User error",
        }
    }
}

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
