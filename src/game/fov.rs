//! # Field of Vision
//!
//! Computes which cells the player can see. Two interchangeable backends
//! are provided behind [`FovBackend`]:
//!
//! - [`ConeShadowcast`] sweeps eight octants row by row (or column by
//!   column) and, on meeting a vision blocker, restarts the same octant
//!   sweep from the blocker in shadow mode. Everything starts visible and
//!   only cells behind a blocker are darkened.
//! - [`SlopeShadowcast`] is classic recursive shadowcasting over start and
//!   end slopes. Everything starts dark and lit cells are marked.
//!
//! Both leave a blocking cell itself visible: you see the wall, not
//! through it.
//!
//! ```text
//!    \7777|0000/
//!    6\777|000/1
//!    66\77|00/11
//!    666\7|0/111
//!    6666\|/1111
//!    -----@-----
//!    5555/|\2222
//!    555/4|3\222
//!    55/44|33\22
//!    5/444|333\2
//! ```

use crate::config::FovMode;
use crate::game::grid::Grid;
use crate::game::Position;

/// A visibility algorithm writing into the grid's visibility layer.
pub trait FovBackend {
    fn compute(&self, grid: &mut Grid, viewer: Position);
}

/// Recomputes visibility from `viewer` with the default cone backend.
///
/// Built without the `fov` feature this does nothing and the whole map
/// stays visible.
///
/// # Examples
///
/// ```
/// use delve::{compute_visibility, Grid, Position, Tile};
///
/// let mut grid = Grid::new(9, 9);
/// grid.set_tile(Position::new(4, 5), Tile::wall());
/// compute_visibility(&mut grid, Position::new(4, 4));
///
/// assert!(grid.is_visible(Position::new(4, 5)));
/// # #[cfg(feature = "fov")]
/// assert!(!grid.is_visible(Position::new(4, 7)));
/// ```
pub fn compute_visibility(grid: &mut Grid, viewer: Position) {
    compute_visibility_with(grid, viewer, FovMode::Cone);
}

/// Recomputes visibility with the backend selected by `mode`.
/// [`FovMode::Off`] makes every cell visible.
pub fn compute_visibility_with(grid: &mut Grid, viewer: Position, mode: FovMode) {
    if !cfg!(feature = "fov") {
        return;
    }
    match mode {
        FovMode::Cone => ConeShadowcast.compute(grid, viewer),
        FovMode::Slope => SlopeShadowcast.compute(grid, viewer),
        FovMode::Off => grid.fill_visibility(true),
    }
}

/// Octant cone shadowcasting.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConeShadowcast;

impl FovBackend for ConeShadowcast {
    fn compute(&self, grid: &mut Grid, viewer: Position) {
        grid.fill_visibility(true);
        for octant in 0..8 {
            log::trace!("Casting octant {} from {:?}", octant, viewer);
            cast_octant(grid, viewer, octant, true);
        }
    }
}

#[derive(Clone, Copy)]
enum Line {
    /// Fixed y, walking x.
    Row,
    /// Fixed x, walking y.
    Column,
}

/// Sweeps one octant outward from `origin`. In shadow mode (`lit` false)
/// every cell swept is darkened.
fn cast_octant(grid: &mut Grid, origin: Position, octant: u8, lit: bool) {
    let max_x = grid.width() as i32 - 1;
    let max_y = grid.height() as i32 - 1;
    let (vx, vy) = (origin.x, origin.y);

    match octant {
        0 => {
            let (mut x, mut y) = (vx + 1, vy - 1);
            while y >= 0 {
                scan_line(grid, Line::Row, y, x, vx, octant, lit);
                y -= 1;
                if x < max_x {
                    x += 1;
                }
            }
        }
        1 => {
            let (mut x, mut y) = (vx + 1, vy - 1);
            while x <= max_x {
                scan_line(grid, Line::Column, x, y, vy, octant, lit);
                if y > 0 {
                    y -= 1;
                }
                x += 1;
            }
        }
        2 => {
            let (mut x, mut y) = (vx + 1, vy + 1);
            while x <= max_x {
                scan_line(grid, Line::Column, x, y, vy, octant, lit);
                if y < max_y {
                    y += 1;
                }
                x += 1;
            }
        }
        3 => {
            let (mut x, mut y) = (vx + 1, vy + 1);
            while y <= max_y {
                scan_line(grid, Line::Row, y, x, vx, octant, lit);
                y += 1;
                if x < max_x {
                    x += 1;
                }
            }
        }
        4 => {
            let (mut x, mut y) = (vx - 1, vy + 1);
            while y <= max_y {
                scan_line(grid, Line::Row, y, x, vx, octant, lit);
                if x > 0 {
                    x -= 1;
                }
                y += 1;
            }
        }
        5 => {
            let (mut x, mut y) = (vx - 1, vy + 1);
            while x >= 0 {
                scan_line(grid, Line::Column, x, y, vy, octant, lit);
                x -= 1;
                if y < max_y {
                    y += 1;
                }
            }
        }
        6 => {
            let (mut x, mut y) = (vx - 1, vy - 1);
            while x >= 0 {
                scan_line(grid, Line::Column, x, y, vy, octant, lit);
                x -= 1;
                if y > 0 {
                    y -= 1;
                }
            }
        }
        7 => {
            let (mut x, mut y) = (vx - 1, vy - 1);
            while y >= 0 {
                scan_line(grid, Line::Row, y, x, vx, octant, lit);
                if x > 0 {
                    x -= 1;
                }
                y -= 1;
            }
        }
        _ => unreachable!("octant {octant} out of range"),
    }
}

/// Walks one row or column from `start` to `finish` inclusive. A start
/// outside the map skips the whole line.
fn scan_line(
    grid: &mut Grid,
    line: Line,
    fixed: i32,
    start: i32,
    finish: i32,
    octant: u8,
    lit: bool,
) {
    let limit = match line {
        Line::Row => grid.width() as i32 - 1,
        Line::Column => grid.height() as i32 - 1,
    };
    let step = (finish - start).signum();
    let mut cursor = start;

    while (0..=limit).contains(&cursor) {
        let cell = match line {
            Line::Row => Position::new(cursor, fixed),
            Line::Column => Position::new(fixed, cursor),
        };

        if !lit {
            grid.set_visible(cell, false);
        } else if grid.tile(cell).blocks_vision {
            cast_octant(grid, cell, octant, false);
        }

        if cursor == finish {
            break;
        }
        cursor += step;
    }
}

/// Recursive shadowcasting over rational slopes, unbounded range.
#[derive(Debug, Default, Clone, Copy)]
pub struct SlopeShadowcast;

impl FovBackend for SlopeShadowcast {
    fn compute(&self, grid: &mut Grid, viewer: Position) {
        grid.fill_visibility(false);
        grid.set_visible(viewer, true);
        let range = (grid.width() + grid.height()) as i32;
        for octant in 0..8 {
            log::trace!("Slope scan of octant {} from {:?}", octant, viewer);
            scan_slopes(grid, viewer, range, 1, Slope::new(1, 1), Slope::new(0, 1), octant);
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Slope {
    y: i32,
    x: i32,
}

impl Slope {
    fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    fn greater_or_equal(self, other: Slope) -> bool {
        self.y * other.x >= other.y * self.x
    }

    fn greater_than(self, other: Slope) -> bool {
        self.y * other.x > other.y * self.x
    }
}

/// Maps octant-local `(distance, offset)` onto the grid.
fn transform_octant(origin: Position, distance: i32, offset: i32, octant: u8) -> Position {
    let (dx, dy) = match octant {
        0 => (offset, -distance),
        1 => (distance, -offset),
        2 => (distance, offset),
        3 => (offset, distance),
        4 => (-offset, distance),
        5 => (-distance, offset),
        6 => (-distance, -offset),
        _ => (-offset, -distance),
    };
    Position::new(origin.x + dx, origin.y + dy)
}

fn scan_slopes(
    grid: &mut Grid,
    origin: Position,
    range: i32,
    distance: i32,
    start: Slope,
    end: Slope,
    octant: u8,
) {
    if distance > range {
        return;
    }

    let mut blocked = false;
    let mut current_start = start;
    for offset in (0..=distance).rev() {
        let top = Slope::new(2 * offset + 1, 2 * distance - 1);
        let bottom = Slope::new(2 * offset - 1, 2 * distance + 1);
        if !(current_start.greater_or_equal(bottom) && top.greater_than(end)) {
            continue;
        }

        let cell = transform_octant(origin, distance, offset, octant);
        if grid.contains(cell) {
            grid.set_visible(cell, true);
        }

        if grid.blocks_vision(cell) {
            if !blocked {
                scan_slopes(grid, origin, range, distance + 1, current_start, top, octant);
                blocked = true;
            }
            current_start = bottom;
        } else {
            blocked = false;
        }
    }

    if !blocked {
        scan_slopes(grid, origin, range, distance + 1, current_start, end, octant);
    }
}
