//! # Input Module
//!
//! Turns key presses into player intents.

pub mod keymap;

pub use keymap::*;

use macroquad::prelude::*;

/// Special keys polled each frame, with the key each one stands for.
const SPECIAL_KEYS: [(KeyCode, Key); 11] = [
    (KeyCode::Up, Key::Up),
    (KeyCode::Down, Key::Down),
    (KeyCode::Left, Key::Left),
    (KeyCode::Right, Key::Right),
    (KeyCode::Home, Key::Home),
    (KeyCode::End, Key::End),
    (KeyCode::PageUp, Key::PageUp),
    (KeyCode::PageDown, Key::PageDown),
    (KeyCode::F1, Key::F(1)),
    (KeyCode::F4, Key::F(4)),
    (KeyCode::F12, Key::F(12)),
];

/// Input handler for processing player commands.
///
/// Owns the key table and the active binding mode.
pub struct InputHandler {
    keymap: Keymap,
    /// Currently active diagonal layout
    pub mode: KeyMode,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(KeyMode::Standard)
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{InputHandler, Intent, Key, KeyMode};
    ///
    /// let mut input = InputHandler::new(KeyMode::Standard);
    /// assert_eq!(input.intent_for(Key::Char('i')), Intent::Inventory);
    /// input.toggle_mode();
    /// assert_eq!(input.intent_for(Key::Char('b')), Intent::Inventory);
    /// ```
    pub fn new(mode: KeyMode) -> Self {
        Self {
            keymap: Keymap::new(),
            mode,
        }
    }

    /// Flips between the standard and alternate layouts and returns the new
    /// mode.
    pub fn toggle_mode(&mut self) -> KeyMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn intent_for(&self, key: Key) -> Intent {
        self.keymap.lookup(key, self.mode)
    }

    /// Gets the intent for this frame's key press, if any.
    pub fn poll(&self) -> Option<Intent> {
        self.pressed_key().map(|key| self.intent_for(key))
    }

    fn pressed_key(&self) -> Option<Key> {
        if let Some(ch) = get_char_pressed() {
            if !ch.is_control() {
                return Some(Key::Char(ch));
            }
        }

        SPECIAL_KEYS
            .iter()
            .find(|(code, _)| is_key_pressed(*code))
            .map(|(_, key)| *key)
    }
}
