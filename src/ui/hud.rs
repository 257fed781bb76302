//! Frame, status line, info panel and end-of-run banner around the play area.

use crate::gameplay::{EndReason, Gameplay};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TITLE: &str = " Dragon Flap ";
const STATUS_ROWS: u16 = 2;
const MIN_WORLD_COLS: u16 = 20;
const BANNER_ROWS: u16 = 5;

/// Where each part of the play screen goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayLayout {
    pub world: Rect,
    pub status: Rect,
    /// Absent on narrow terminals.
    pub info: Option<Rect>,
}

/// Split the inside of the border.
///
/// ```text
/// ┌─ Dragon Flap ───────────────────┬─ Info ──────┐
/// │ [world]                         │ [info]      │
/// │ [status: 2 rows]                │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn split_play_area(inner: Rect, info_width: Option<u16>) -> PlayLayout {
    let (left, info) = match info_width {
        Some(width) if inner.width >= MIN_WORLD_COLS + width => {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(MIN_WORLD_COLS), Constraint::Length(width)])
                .split(inner);
            (cols[0], Some(cols[1]))
        }
        _ => (inner, None),
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_ROWS)])
        .split(left);

    PlayLayout {
        world: rows[0],
        status: rows[1],
        info,
    }
}

/// Clear `area`, draw the titled border and lay out what goes inside it.
pub fn render_play_frame(frame: &mut Frame, area: Rect, info_width: Option<u16>) -> PlayLayout {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    split_play_area(inner, info_width)
}

/// Score on the first row, key hints on the second while the run is live.
pub fn render_status(frame: &mut Frame, area: Rect, game: &Gameplay) {
    if area.height == 0 {
        return;
    }

    let (text, color) = if game.is_running() {
        (format!("Score: {}", game.score), Color::Green)
    } else {
        (format!("Final score: {}", game.score), Color::Yellow)
    };
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height < 2 || !game.is_running() {
        return;
    }
    let key = Style::default().fg(Color::White);
    let action = Style::default().fg(Color::DarkGray);
    let hints = Line::from(vec![
        Span::styled("[Space/Up]", key),
        Span::styled(" Jump  ", action),
        Span::styled("[Esc]", key),
        Span::styled(" Quit", action),
    ]);
    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Label and value lines for the side panel.
pub fn info_lines(game: &Gameplay) -> Vec<(&'static str, String)> {
    vec![
        ("Score", game.score.to_string()),
        ("Time", format_elapsed(game.elapsed_ms)),
        ("Velocity", format!("{:+.1}", game.player.velocity)),
        ("Gap", format!("{}px", game.config.gap_size)),
        ("On screen", game.obstacles.len().to_string()),
    ]
}

pub fn render_info(frame: &mut Frame, area: Rect, game: &Gameplay) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = info_lines(game)
        .into_iter()
        .map(|(name, text)| {
            Line::from(vec![
                Span::styled(format!(" {}: ", name), label),
                Span::styled(text, value),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Text and color shown over the last frame of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunBanner {
    pub title: &'static str,
    pub message: String,
    pub color: Color,
}

impl RunBanner {
    pub fn new(reason: EndReason, score: u32) -> Self {
        let (title, what, color) = match reason {
            EndReason::Collision => ("CRASH!", "You hit an obstacle", Color::Red),
            EndReason::OutOfBounds => ("OUT OF BOUNDS!", "You flew off the screen", Color::Red),
            EndReason::Quit => ("RUN ENDED", "You left the run", Color::Gray),
        };
        Self {
            title,
            message: format!("{} with {} points.", what, score),
            color,
        }
    }
}

/// Draw the banner along the bottom of `area` without clearing the rest, so
/// the final frame stays visible.
pub fn render_banner(frame: &mut Frame, area: Rect, banner: &RunBanner) {
    let height = BANNER_ROWS.min(area.height);
    let rect = Rect {
        y: area.bottom().saturating_sub(height),
        height,
        ..area
    };
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(banner.color));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let lines = vec![
        Line::from(Span::styled(
            banner.title,
            Style::default()
                .fg(banner.color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            banner.message.as_str(),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Returning to menu...",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// `m:ss`
pub fn format_elapsed(ms: u64) -> String {
    let seconds = ms / 1000;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(9_999), "0:09");
        assert_eq!(format_elapsed(61_000), "1:01");
        assert_eq!(format_elapsed(600_000), "10:00");
    }

    #[test]
    fn test_split_with_info_panel() {
        let layout = split_play_area(Rect::new(1, 1, 98, 28), Some(26));
        assert_eq!(layout.info, Some(Rect::new(73, 1, 26, 28)));
        assert_eq!(layout.world, Rect::new(1, 1, 72, 26));
        assert_eq!(layout.status, Rect::new(1, 27, 72, 2));
    }

    #[test]
    fn test_split_drops_panel_when_cramped() {
        let layout = split_play_area(Rect::new(1, 1, 40, 14), Some(26));
        assert_eq!(layout.info, None);
        assert_eq!(layout.world.width, 40);

        let layout = split_play_area(Rect::new(1, 1, 80, 14), None);
        assert_eq!(layout.info, None);
        assert_eq!(layout.world.height, 12);
    }

    #[test]
    fn test_banner_per_end_reason() {
        let crash = RunBanner::new(EndReason::Collision, 3);
        assert_eq!(crash.title, "CRASH!");
        assert_eq!(crash.message, "You hit an obstacle with 3 points.");
        assert_eq!(crash.color, Color::Red);

        assert_eq!(RunBanner::new(EndReason::OutOfBounds, 0).title, "OUT OF BOUNDS!");
        assert_eq!(RunBanner::new(EndReason::Quit, 1).color, Color::Gray);
    }

    #[test]
    fn test_info_lines() {
        let mut game = Gameplay::new(GameConfig::default());
        game.score = 4;
        game.elapsed_ms = 65_000;
        game.player.velocity = -9.0;
        let lines = info_lines(&game);
        assert_eq!(lines[0], ("Score", "4".to_string()));
        assert_eq!(lines[1], ("Time", "1:05".to_string()));
        assert_eq!(lines[2], ("Velocity", "-9.0".to_string()));
        assert_eq!(lines[3], ("Gap", "170px".to_string()));
        assert_eq!(lines[4], ("On screen", "0".to_string()));
    }
}
