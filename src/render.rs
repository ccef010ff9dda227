//! Frame composition over an abstract monochrome cell surface.
//!
//! The game draws through [`RenderSink`], a minimal display contract:
//! clear, fill one grid cell, place a line of text, present. The shipped
//! sink maps the board onto a ratatui frame buffer in white-on-black, two
//! terminal columns per cell; tests substitute a recording sink.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use unicode_width::UnicodeWidthStr;

use crate::config::{CELL_COLUMNS, GLYPH_CELL};
use crate::game::{GameState, GameStatus};
use crate::snake::Position;

/// Display surface the game renders to once per tick.
pub trait RenderSink {
    /// Blanks the whole surface.
    fn clear(&mut self);
    /// Fills one grid cell with the surface's single ink.
    fn fill_cell(&mut self, cell: Position);
    /// Writes a line of text at a character column/row of the surface.
    fn draw_text(&mut self, column: u16, row: u16, text: &str);
    /// Pushes the finished frame to the display.
    fn present(&mut self);
}

/// Renders one full frame from immutable state.
pub fn draw<S: RenderSink>(state: &GameState, sink: &mut S) {
    sink.clear();

    for segment in state.snake.segments() {
        sink.fill_cell(*segment);
    }
    sink.fill_cell(state.food.position);

    sink.draw_text(0, 0, &format!("Score: {}", state.score));

    if state.status == GameStatus::GameOver {
        let banner = "GAME OVER";
        let columns = u16::from(state.bounds().width) * CELL_COLUMNS;
        let width = u16::try_from(banner.width()).unwrap_or(columns);
        let row = u16::from(state.bounds().height) / 2;
        sink.draw_text(columns.saturating_sub(width) / 2, row, banner);
    }

    sink.present();
}

/// Sink drawing into a ratatui frame buffer.
pub struct FrameSink<'a> {
    buffer: &'a mut Buffer,
    area: Rect,
}

impl<'a> FrameSink<'a> {
    /// Wraps the frame being drawn this pass.
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        Self {
            buffer: frame.buffer_mut(),
            area,
        }
    }

    fn ink() -> Style {
        Style::new().fg(Color::White).bg(Color::Black)
    }
}

impl RenderSink for FrameSink<'_> {
    fn clear(&mut self) {
        let blank = " ".repeat(usize::from(self.area.width));
        for row in 0..self.area.height {
            self.buffer
                .set_string(self.area.x, self.area.y + row, &blank, Self::ink());
        }
    }

    fn fill_cell(&mut self, cell: Position) {
        let Ok(column) = u16::try_from(cell.x) else {
            return;
        };
        let Ok(row) = u16::try_from(cell.y) else {
            return;
        };

        self.draw_text(column * CELL_COLUMNS, row, GLYPH_CELL);
    }

    fn draw_text(&mut self, column: u16, row: u16, text: &str) {
        let x = self.area.x.saturating_add(column);
        let y = self.area.y.saturating_add(row);
        if x >= self.area.right() || y >= self.area.bottom() {
            return;
        }

        let room = usize::from(self.area.right() - x);
        self.buffer.set_stringn(x, y, text, room, Self::ink());
    }

    // The terminal presents when the ratatui draw closure returns.
    fn present(&mut self) {}
}
