//! Keypad pane: the 6×6 button grid with animated backgrounds

use crate::keypad::{self, Slot, COLS, ROWS};
use crate::ui::theme::{contrast_fg, rainbow, DEFAULT_THEME};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to draw the keypad
pub struct KeypadRenderData {
    pub shift: bool,
    pub cursor: Slot,
    pub color_seed: u64,
}

/// Render the keypad and return the screen area of every button.
///
/// The returned areas are used for mouse hit testing.
pub fn render_keypad_pane(
    frame: &mut Frame,
    area: Rect,
    data: &KeypadRenderData,
) -> Vec<(Rect, Slot)> {
    let grid = keypad::layout(data.shift);
    let mut hit_areas = Vec::with_capacity(ROWS * COLS);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, ROWS as u32); ROWS])
        .split(area);

    for (row, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, COLS as u32); COLS])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let button = &grid[row][col];
            let slot = Slot::new(row, col);
            let bg = rainbow(row, col, data.color_seed);
            let is_cursor = slot == data.cursor;

            let border_style = if is_cursor {
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.class_color(button.class))
            };

            let mut label_style = Style::default().bg(bg).fg(contrast_fg(bg));
            if button.active || is_cursor {
                label_style = label_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(Style::default().bg(bg));

            // Center the label vertically inside the bordered cell
            let inner_height = cell.height.saturating_sub(2);
            let top_pad = (inner_height.saturating_sub(1) / 2) as usize;
            let mut lines = vec![Line::raw(""); top_pad];
            lines.push(Line::styled(button.label, label_style));

            let paragraph = Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, *cell);

            hit_areas.push((*cell, slot));
        }
    }

    hit_areas
}
