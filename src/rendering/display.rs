//! # Display Management
//!
//! Draws composed frames with macroquad: the map as a character grid, the
//! latest messages above it, paged when a turn delivers more than fit,
//! and the status line below.

use crate::game::{Attr, GameState, Position, Symbol};
use crate::rendering::{render_frame, Frame};
use macroquad::prelude::*;

/// Messages shown above the map at once
const MESSAGE_LINES: usize = 3;

/// Macroquad display manager for the game.
pub struct MacroquadDisplay {
    /// Width of one map cell in pixels
    pub cell_width: f32,
    /// Height of one map cell in pixels
    pub cell_height: f32,
    /// Font size used for every glyph
    pub font_size: f32,
    /// Messages delivered by the last turn
    shown: Vec<String>,
    /// Index of the first message on the current page
    page_start: usize,
    /// Whether the message history overlay is open
    pub history_open: bool,
}

impl Default for MacroquadDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl MacroquadDisplay {
    pub fn new() -> Self {
        Self {
            cell_width: 12.0,
            cell_height: 20.0,
            font_size: 20.0,
            shown: Vec::new(),
            page_start: 0,
            history_open: false,
        }
    }

    /// Window size that fits a map of `width`×`height` cells plus the
    /// message and status rows.
    pub fn window_size(&self, width: usize, height: usize) -> (f32, f32) {
        let rows = height + MESSAGE_LINES + 1;
        (width as f32 * self.cell_width, rows as f32 * self.cell_height)
    }

    /// Replaces the messages shown above the map, starting at their first
    /// page.
    pub fn show_messages(&mut self, messages: Vec<String>) {
        if !messages.is_empty() {
            self.shown = messages;
            self.page_start = 0;
        }
    }

    /// True while delivered messages remain past the current page.
    pub fn has_more_messages(&self) -> bool {
        self.page_start + MESSAGE_LINES < self.shown.len()
    }

    /// Turns to the next page of messages. Returns false when the last page
    /// is already showing.
    pub fn next_page(&mut self) -> bool {
        if !self.has_more_messages() {
            return false;
        }
        self.page_start += MESSAGE_LINES;
        true
    }

    fn current_page(&self) -> &[String] {
        let end = (self.page_start + MESSAGE_LINES).min(self.shown.len());
        &self.shown[self.page_start.min(end)..end]
    }

    pub fn toggle_history(&mut self) {
        self.history_open = !self.history_open;
    }

    /// Renders the complete game screen.
    pub fn render_game(&self, state: &GameState) {
        clear_background(BLACK);

        if self.history_open {
            self.render_history(state);
            return;
        }

        let frame = render_frame(&state.grid, &state.player);
        self.render_messages();
        self.render_map(&frame);
        self.render_status(&frame);
    }

    fn render_messages(&self) {
        let page = self.current_page();
        for (row, message) in page.iter().enumerate() {
            if row + 1 == page.len() && self.has_more_messages() {
                self.draw_line(&format!("{message} (More)"), row, WHITE);
            } else {
                self.draw_line(message, row, WHITE);
            }
        }
    }

    fn render_map(&self, frame: &Frame) {
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let symbol = frame.symbol_at(Position::new(x as i32, y as i32));
                self.draw_symbol(symbol, x, y + MESSAGE_LINES);
            }
        }
    }

    fn render_status(&self, frame: &Frame) {
        self.draw_line(&frame.status, frame.height() + MESSAGE_LINES, LIGHTGRAY);
    }

    fn render_history(&self, state: &GameState) {
        self.draw_line("Message history (P to close)", 0, YELLOW);
        for (row, message) in state.messages.history().enumerate() {
            self.draw_line(message, row + 2, WHITE);
        }
    }

    fn draw_symbol(&self, symbol: Symbol, column: usize, row: usize) {
        let x = column as f32 * self.cell_width;
        let y = row as f32 * self.cell_height;

        let color = match symbol.attr {
            Attr::Normal => LIGHTGRAY,
            Attr::Dim => DARKGRAY,
            Attr::Bold => YELLOW,
            Attr::Reverse => {
                draw_rectangle(x, y, self.cell_width, self.cell_height, LIGHTGRAY);
                BLACK
            }
        };

        let mut buffer = [0u8; 4];
        draw_text(
            symbol.ch.encode_utf8(&mut buffer),
            x,
            y + self.cell_height * 0.8,
            self.font_size,
            color,
        );
    }

    fn draw_line(&self, text: &str, row: usize, color: Color) {
        let y = row as f32 * self.cell_height + self.cell_height * 0.8;
        draw_text(text, 0.0, y, self.font_size, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_fits_map_and_text_rows() {
        let display = MacroquadDisplay::new();
        let (width, height) = display.window_size(80, 22);
        assert_eq!(width, 80.0 * 12.0);
        assert_eq!(height, 26.0 * 20.0);
    }

    #[test]
    fn test_empty_delivery_keeps_last_messages() {
        let mut display = MacroquadDisplay::new();
        display.show_messages(vec!["You bide your time.".to_string()]);
        display.show_messages(Vec::new());
        assert_eq!(display.shown, vec!["You bide your time.".to_string()]);

        display.toggle_history();
        assert!(display.history_open);
    }

    #[test]
    fn test_long_delivery_pages_through_everything() {
        let mut display = MacroquadDisplay::new();
        let messages: Vec<String> = (0..7).map(|n| format!("m{n}")).collect();
        display.show_messages(messages.clone());

        let mut seen = Vec::new();
        loop {
            seen.extend(display.current_page().iter().cloned());
            if !display.next_page() {
                break;
            }
        }
        assert_eq!(seen, messages);
        assert!(!display.has_more_messages());
    }

    #[test]
    fn test_new_delivery_restarts_paging() {
        let mut display = MacroquadDisplay::new();
        display.show_messages((0..4).map(|n| format!("m{n}")).collect());
        assert!(display.next_page());
        assert_eq!(display.current_page(), ["m3".to_string()]);

        display.show_messages(vec!["Ouch!  You walk straight into a wall!".to_string()]);
        assert_eq!(display.current_page().len(), 1);
        assert!(!display.next_page());
    }
}
