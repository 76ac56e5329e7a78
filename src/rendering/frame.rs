//! # Frames
//!
//! Composes what the player sees into a grid of glyphs, independent of any
//! drawing backend. Layers, bottom to top: terrain (or shadow), items,
//! monsters, the player.

use crate::game::{Grid, Player, Position, Symbol, SYM_SHADOW};

/// One composed screen of map glyphs plus the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    cells: Vec<Symbol>,
    /// Hit points and attack roll
    pub status: String,
}

impl Frame {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.cells.len() / self.width
        }
    }

    pub fn symbol_at(&self, pos: Position) -> Symbol {
        self.cells[pos.y as usize * self.width + pos.x as usize]
    }

    /// Map rows as plain text, attributes dropped.
    pub fn lines(&self) -> Vec<String> {
        if self.width == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|symbol| symbol.ch).collect())
            .collect()
    }
}

/// Composes a frame of `grid` as seen by `player`.
///
/// Cells outside the field of vision show as shadow, hiding anything on
/// them. The player is always drawn.
///
/// # Examples
///
/// ```
/// use delve::{render_frame, Dice, Grid, Player, Position, Tile};
///
/// let mut grid = Grid::new(3, 1);
/// grid.set_tile(Position::new(2, 0), Tile::wall());
/// let mut player = Player::new(Position::new(0, 0), 3, 1, &mut Dice::seeded(1));
/// player.hp = 7;
///
/// let frame = render_frame(&grid, &player);
/// assert_eq!(frame.lines(), vec!["@.#".to_string()]);
/// assert_eq!(frame.status, "HP: 7    Attack: 2d + 0");
/// ```
pub fn render_frame(grid: &Grid, player: &Player) -> Frame {
    let (width, height) = (grid.width(), grid.height());
    let mut cells = Vec::with_capacity(width * height);

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let pos = Position::new(x, y);
            let symbol = if !grid.is_visible(pos) {
                SYM_SHADOW
            } else if let Some(item) = grid.item_at(pos) {
                item.symbol
            } else {
                grid.tile(pos).symbol
            };
            cells.push(symbol);
        }
    }

    for (_, monster) in grid.monsters() {
        if monster.is_alive() && grid.is_visible(monster.position) {
            let pos = monster.position;
            cells[pos.y as usize * width + pos.x as usize] = monster.symbol;
        }
    }

    if grid.contains(player.position) {
        let pos = player.position;
        cells[pos.y as usize * width + pos.x as usize] = player.symbol;
    }

    Frame {
        width,
        cells,
        status: player.status_line(),
    }
}
