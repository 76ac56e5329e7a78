//! # Delve Main Entry Point
//!
//! Parses the command line, builds the game state, and runs the macroquad
//! game loop until the player quits or dies.

use clap::Parser;
use delve::{
    AutoEquip, DelveResult, ExitStatus, FovMode, GameConfig, GameState, InputHandler, Intent,
    MacroquadDisplay, ReferenceRoom, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH,
};
use log::{error, info};
use macroquad::prelude::*;
use std::path::PathBuf;

/// Command line arguments for Delve.
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(about = "A turn-based dungeon crawler with shadowcast field of vision")]
#[command(version)]
struct Args {
    /// Random seed for dice rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with the alternate diagonal keys (u i n m)
    #[arg(long)]
    alt_keys: bool,

    /// Disable field of vision; the whole map is visible
    #[arg(long)]
    no_fov: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    let (width, height) = MacroquadDisplay::new().window_size(DEFAULT_MAP_WIDTH, DEFAULT_MAP_HEIGHT);
    Conf {
        window_title: "Delve".to_string(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .format_target(false)
        .init();

    info!("Starting Delve v{}", delve::VERSION);

    let status = match run(&args).await {
        Ok(status) => status,
        Err(err) => {
            error!("{}", err);
            err.exit_status()
        }
    };

    if status != ExitStatus::NoErrors {
        eprintln!("{}", status.describe());
    }
    std::process::exit(status.code());
}

/// Merges the configuration file with command line overrides.
fn load_config(args: &Args) -> DelveResult<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.alt_keys {
        config.alt_keys = true;
    }
    if args.no_fov {
        config.fov = FovMode::Off;
    }
    config.validate()?;
    Ok(config)
}

/// Runs the game loop and returns the outcome to report at exit.
async fn run(args: &Args) -> DelveResult<ExitStatus> {
    let config = load_config(args)?;
    let mut state = GameState::from_generator(&ReferenceRoom, config)?;
    let mut input = InputHandler::new(state.key_mode);
    let mut display = MacroquadDisplay::new();
    let mut screen = AutoEquip;

    state.messages.push(format!("Welcome to Delve! {}", state.key_mode.help_text()));
    display.show_messages(state.messages.flush());

    loop {
        if let Some(intent) = input.poll() {
            // A key press first pages through pending messages.
            if !display.next_page() {
                match intent {
                    Intent::MessageHistory => display.toggle_history(),
                    _ if display.history_open => display.toggle_history(),
                    _ => {
                        let report = state.handle_intent(intent, &mut screen);
                        input.mode = state.key_mode;
                        if report.turns > 0 {
                            log::debug!("Turn {} after {:?}", state.turn_number, intent);
                        }
                    }
                }
                display.show_messages(state.messages.flush());
            }
        }

        display.render_game(&state);
        next_frame().await;

        if state.is_game_ended() {
            info!("Game over after {} turns: {:?}", state.turn_number, state.completion_state);
            break;
        }
    }

    // Leave the last frame up until the player has read every page.
    loop {
        display.render_game(&state);
        next_frame().await;
        if get_last_key_pressed().is_some() && !display.next_page() {
            break;
        }
    }

    Ok(ExitStatus::NoErrors)
}
