//! Terminal size checks.
//!
//! The world keeps its logical size whatever the terminal does; the size only
//! decides whether there is room to play and how much chrome fits.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 16;

/// Widths at which the side panel appears, widest first.
const INFO_PANEL_STEPS: [(u16, u16); 2] = [(100, 26), (72, 22)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub cols: u16,
    pub rows: u16,
}

impl LayoutContext {
    pub fn from_frame(frame: &Frame) -> Self {
        Self::from_area(frame.size())
    }

    pub fn from_area(area: Rect) -> Self {
        Self {
            cols: area.width,
            rows: area.height,
        }
    }

    pub fn is_too_small(&self) -> bool {
        self.cols < MIN_COLS || self.rows < MIN_ROWS
    }

    /// Side panel width, if the terminal is wide enough for one.
    pub fn info_panel_width(&self) -> Option<u16> {
        INFO_PANEL_STEPS
            .iter()
            .find(|(min_cols, _)| self.cols >= *min_cols)
            .map(|(_, width)| *width)
    }
}

pub fn render_too_small(frame: &mut Frame, ctx: &LayoutContext) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "The dragon needs more room",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{}x{} or larger, currently {}x{}",
                MIN_COLS, MIN_ROWS, ctx.cols, ctx.rows
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Resize the terminal or press Ctrl+C to quit.",
            Style::default().fg(Color::White),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
