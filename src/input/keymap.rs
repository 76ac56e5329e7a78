//! # Key Bindings
//!
//! Table-driven mapping from a key press and the active binding mode to a
//! player intent. The alternate mode only moves the diagonals (and with
//! them inventory and help) closer to the home row; the set of intents
//! never changes.

use crate::game::{Direction, PlayerAction};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything a key press can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Move(Direction),
    Wait,
    Get,
    Inventory,
    Help,
    Quit,
    ToggleAltKeys,
    ShowVersion,
    MessageHistory,
    ClearMessage,
}

impl Intent {
    /// The movement-resolver action behind this intent, if it has one.
    pub fn as_action(self) -> Option<PlayerAction> {
        match self {
            Intent::Move(direction) => Some(PlayerAction::Move(direction)),
            Intent::Get => Some(PlayerAction::Get),
            Intent::Inventory => Some(PlayerAction::Inventory),
            _ => None,
        }
    }
}

/// A physical key, independent of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Function key F1 to F12.
    F(u8),
}

/// Which diagonal layout is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KeyMode {
    /// `yubn` diagonals, `i` inventory, `m` help.
    #[default]
    Standard,
    /// `uinm` diagonals, `b` inventory, `y` help.
    Alternate,
}

impl KeyMode {
    pub fn toggled(self) -> Self {
        match self {
            KeyMode::Standard => KeyMode::Alternate,
            KeyMode::Alternate => KeyMode::Standard,
        }
    }

    pub fn from_alt_keys(alt_keys: bool) -> Self {
        if alt_keys {
            KeyMode::Alternate
        } else {
            KeyMode::Standard
        }
    }

    /// One-line key summary shown by the help intent.
    pub fn help_text(self) -> &'static str {
        match self {
            KeyMode::Standard => "hjklyubn or number pad to move.  Q to quit.",
            KeyMode::Alternate => "hjkluinm or number pad to move.  Q to quit.",
        }
    }
}

/// `(key, mode) -> intent` lookup table. Keys missing from the table ask
/// for help.
///
/// # Examples
///
/// ```
/// use delve::{Direction, Intent, Key, KeyMode, Keymap};
///
/// let keymap = Keymap::new();
/// assert_eq!(keymap.lookup(Key::Char('y'), KeyMode::Standard), Intent::Move(Direction::Northwest));
/// assert_eq!(keymap.lookup(Key::Char('y'), KeyMode::Alternate), Intent::Help);
/// assert_eq!(keymap.lookup(Key::Char('z'), KeyMode::Standard), Intent::Help);
/// ```
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<(Key, KeyMode), Intent>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

impl Keymap {
    pub fn new() -> Self {
        use Direction::*;

        let shared: Vec<(Key, Intent)> = vec![
            (Key::Char('h'), Intent::Move(West)),
            (Key::Char('j'), Intent::Move(South)),
            (Key::Char('k'), Intent::Move(North)),
            (Key::Char('l'), Intent::Move(East)),
            (Key::Char('1'), Intent::Move(Southwest)),
            (Key::Char('2'), Intent::Move(South)),
            (Key::Char('3'), Intent::Move(Southeast)),
            (Key::Char('4'), Intent::Move(West)),
            (Key::Char('6'), Intent::Move(East)),
            (Key::Char('7'), Intent::Move(Northwest)),
            (Key::Char('8'), Intent::Move(North)),
            (Key::Char('9'), Intent::Move(Northeast)),
            (Key::Up, Intent::Move(North)),
            (Key::Down, Intent::Move(South)),
            (Key::Left, Intent::Move(West)),
            (Key::Right, Intent::Move(East)),
            (Key::Home, Intent::Move(Northwest)),
            (Key::PageUp, Intent::Move(Northeast)),
            (Key::End, Intent::Move(Southwest)),
            (Key::PageDown, Intent::Move(Southeast)),
            (Key::Char('.'), Intent::Wait),
            (Key::Char('5'), Intent::Wait),
            (Key::Char(','), Intent::Get),
            (Key::Char('P'), Intent::MessageHistory),
            (Key::Char(' '), Intent::ClearMessage),
            (Key::Char('Q'), Intent::Quit),
            (Key::F(1), Intent::Help),
            (Key::F(4), Intent::ShowVersion),
            (Key::F(12), Intent::ToggleAltKeys),
        ];

        let standard = [
            (Key::Char('y'), Intent::Move(Northwest)),
            (Key::Char('u'), Intent::Move(Northeast)),
            (Key::Char('b'), Intent::Move(Southwest)),
            (Key::Char('n'), Intent::Move(Southeast)),
            (Key::Char('i'), Intent::Inventory),
            (Key::Char('m'), Intent::Help),
        ];

        let alternate = [
            (Key::Char('u'), Intent::Move(Northwest)),
            (Key::Char('i'), Intent::Move(Northeast)),
            (Key::Char('n'), Intent::Move(Southwest)),
            (Key::Char('m'), Intent::Move(Southeast)),
            (Key::Char('b'), Intent::Inventory),
            (Key::Char('y'), Intent::Help),
        ];

        let mut bindings = HashMap::new();
        for (key, intent) in shared {
            bindings.insert((key, KeyMode::Standard), intent);
            bindings.insert((key, KeyMode::Alternate), intent);
        }
        for (key, intent) in standard {
            bindings.insert((key, KeyMode::Standard), intent);
        }
        for (key, intent) in alternate {
            bindings.insert((key, KeyMode::Alternate), intent);
        }
        Self { bindings }
    }

    pub fn lookup(&self, key: Key, mode: KeyMode) -> Intent {
        self.bindings
            .get(&(key, mode))
            .copied()
            .unwrap_or(Intent::Help)
    }
}
