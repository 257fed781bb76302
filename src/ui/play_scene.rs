//! UI rendering for a Dragon Flap run.

use crate::assets::{Assets, Sprite};
use crate::core::geometry::Rect as WorldRect;
use crate::gameplay::Gameplay;
use crate::ui::ascii_scaler::scale_sprite_2d;
use crate::ui::hud::{render_banner, render_info, render_play_frame, render_status, RunBanner};
use crate::ui::responsive::LayoutContext;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One terminal cell of the play area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub color: Color,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        ch: ' ',
        color: Color::Reset,
    };
}

/// Cell span covered by a world rectangle, end-exclusive and unclipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub col: i32,
    pub row: i32,
    pub width: usize,
    pub height: usize,
}

/// Maps world pixels onto a grid of terminal cells.
#[derive(Debug, Clone, Copy)]
pub struct WorldMapping {
    world_width: f32,
    world_height: f32,
    cols: f32,
    rows: f32,
}

impl WorldMapping {
    pub fn new(world_width: u32, world_height: u32, cols: u16, rows: u16) -> Self {
        Self {
            world_width: world_width.max(1) as f32,
            world_height: world_height.max(1) as f32,
            cols: cols as f32,
            rows: rows as f32,
        }
    }

    fn col(&self, x: f32) -> f32 {
        x * self.cols / self.world_width
    }

    fn row(&self, y: f32) -> f32 {
        y * self.rows / self.world_height
    }

    /// Every rectangle covers at least one cell, however small it is.
    pub fn span(&self, rect: &WorldRect) -> CellSpan {
        let col = self.col(rect.x).floor() as i32;
        let row = self.row(rect.y).floor() as i32;
        let col_end = (self.col(rect.right()).ceil() as i32).max(col + 1);
        let row_end = (self.row(rect.bottom()).ceil() as i32).max(row + 1);
        CellSpan {
            col,
            row,
            width: (col_end - col) as usize,
            height: (row_end - row) as usize,
        }
    }
}

/// Off-screen cell buffer the play area is composed into.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub cols: usize,
    pub rows: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::EMPTY; cols * rows],
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    fn put(&mut self, col: i32, row: i32, cell: Cell) {
        if col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows {
            self.cells[row as usize * self.cols + col as usize] = cell;
        }
    }

    /// Stretch `sprite` over `span`, clipping to the canvas. Spaces are
    /// transparent.
    pub fn draw_sprite(&mut self, sprite: &Sprite, span: CellSpan) {
        // Only the visible part can matter; skip absurd spans outright.
        if span.width > self.cols * 4 + 4 || span.height > self.rows * 4 + 4 {
            return;
        }
        let scaled = scale_sprite_2d(&sprite.lines, span.width, span.height);
        for (dy, line) in scaled.iter().enumerate() {
            for (dx, ch) in line.iter().enumerate() {
                if *ch != ' ' {
                    self.put(
                        span.col + dx as i32,
                        span.row + dy as i32,
                        Cell {
                            ch: *ch,
                            color: sprite.color,
                        },
                    );
                }
            }
        }
    }

    pub fn draw_text(&mut self, col: i32, row: i32, text: &str, color: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, Cell { ch, color });
        }
    }

    /// Convert to ratatui lines, merging runs of the same color.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.rows);
        for row in self.cells.chunks(self.cols.max(1)).take(self.rows) {
            let mut spans = Vec::new();
            let mut run = String::new();
            let mut run_color = row.first().map(|c| c.color).unwrap_or(Color::Reset);
            for cell in row {
                if cell.color != run_color && !run.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut run),
                        Style::default().fg(run_color),
                    ));
                }
                run_color = cell.color;
                run.push(cell.ch);
            }
            if !run.is_empty() {
                spans.push(Span::styled(run, Style::default().fg(run_color)));
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}

/// Background only, stretched over the whole area. A missing background
/// fills the area with the placeholder block like any other sprite.
pub fn background_canvas(assets: &Assets, cols: u16, rows: u16) -> Canvas {
    let mut canvas = Canvas::new(cols as usize, rows as usize);
    canvas.draw_sprite(
        &assets.background,
        CellSpan {
            col: 0,
            row: 0,
            width: cols as usize,
            height: rows as usize,
        },
    );
    canvas
}

/// Compose background, obstacles, dragon and score into a canvas.
pub fn compose_play_canvas(game: &Gameplay, assets: &Assets, cols: u16, rows: u16) -> Canvas {
    let mut canvas = background_canvas(assets, cols, rows);
    let mapping = WorldMapping::new(
        game.config.world_width,
        game.config.world_height,
        cols,
        rows,
    );

    for pair in &game.obstacles {
        canvas.draw_sprite(&assets.obstacle, mapping.span(&pair.top));
        canvas.draw_sprite(&assets.obstacle, mapping.span(&pair.bottom));
    }

    canvas.draw_sprite(&assets.dragon, mapping.span(&game.player.rect()));

    canvas.draw_text(1, 0, &format!("Score: {}", game.score), Color::White);
    canvas
}

/// Render the gameplay screen.
pub fn render_play(
    frame: &mut Frame,
    area: Rect,
    game: &Gameplay,
    assets: &Assets,
    ctx: &LayoutContext,
) {
    let layout = render_play_frame(frame, area, ctx.info_panel_width());

    if layout.world.width > 0 && layout.world.height > 0 {
        let canvas = compose_play_canvas(game, assets, layout.world.width, layout.world.height);
        frame.render_widget(Paragraph::new(canvas.to_lines()), layout.world);
    }
    render_status(frame, layout.status, game);
    if let Some(info) = layout.info {
        render_info(frame, info, game);
    }

    if let Some(reason) = game.end_reason() {
        render_banner(frame, layout.world, &RunBanner::new(reason, game.score));
    }
}
