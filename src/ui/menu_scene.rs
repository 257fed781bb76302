//! Main menu and intro screens.

use crate::assets::Assets;
use crate::menu::{MainMenu, MenuEntry, INTRO_LINES};
use crate::ui::play_scene::background_canvas;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BUTTON_COLOR: Color = Color::Blue;
const BUTTON_SELECTED_COLOR: Color = Color::Gray;

/// Button rectangle centered on `center_y`, a third of the area wide.
fn button_rect(area: Rect, center_y: u16) -> Rect {
    let width = (area.width / 3).max(12).min(area.width);
    let height = 3.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        center_y.saturating_sub(height / 2).max(area.y),
        width,
        height,
    )
}

fn render_button(frame: &mut Frame, rect: Rect, label: &str, selected: bool) {
    let bg = if selected {
        BUTTON_SELECTED_COLOR
    } else {
        BUTTON_COLOR
    };
    let style = Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    frame.render_widget(Clear, rect);
    let block = Block::default().borders(Borders::ALL).style(style);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    frame.render_widget(
        Paragraph::new(label).style(style).alignment(Alignment::Center),
        inner,
    );
}

fn render_background(frame: &mut Frame, area: Rect, assets: &Assets) {
    frame.render_widget(Clear, area);
    let canvas = background_canvas(assets, area.width, area.height);
    frame.render_widget(Paragraph::new(canvas.to_lines()), area);
}

fn render_title(frame: &mut Frame, area: Rect, row: u16, title: &str) {
    let title = Paragraph::new(Span::styled(
        title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, Rect::new(area.x, row, area.width, 1));
}

/// Render the main menu: title plus Play / Intro / Quit buttons.
pub fn render_menu(frame: &mut Frame, area: Rect, menu: &MainMenu, assets: &Assets) {
    render_background(frame, area, assets);
    render_title(frame, area, area.y + area.height / 6, "Main Menu");

    let middle = area.y + area.height / 2;
    let step = (area.height / 8).max(3);
    let centers = [middle.saturating_sub(step), middle, middle + step];

    for (entry, center_y) in MenuEntry::ALL.iter().zip(centers) {
        let rect = button_rect(area, center_y);
        if rect.bottom() > area.bottom() {
            continue;
        }
        render_button(frame, rect, entry.label(), menu.selected_entry() == *entry);
    }

    let hint = Paragraph::new(Span::styled(
        "[Up/Down] Move  [Enter] Select  [Esc] Quit",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(
        hint,
        Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1),
    );
}

/// Render the intro screen with instructions and a Back button.
pub fn render_intro(frame: &mut Frame, area: Rect, assets: &Assets) {
    render_background(frame, area, assets);
    render_title(frame, area, area.y + area.height / 8, "Intro Screen");

    let lines: Vec<Line> = INTRO_LINES
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                *line,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    let text_top = area.y + area.height / 4;
    let text_height = (INTRO_LINES.len() as u16).min(area.bottom().saturating_sub(text_top));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(area.x, text_top, area.width, text_height),
    );

    let back_width = (area.width / 6).max(10).min(area.width);
    let back = Rect::new(
        area.x + area.width / 50,
        area.bottom().saturating_sub(area.height / 8 + 3).max(area.y),
        back_width,
        3.min(area.height),
    );
    render_button(frame, back, "Back", true);
}
