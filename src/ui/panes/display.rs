//! Display pane: indicator line plus the current number

use crate::calculator::Session;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the calculator display.
///
/// The top line shows the pending operation preview, the memory marker and
/// the angle mode; the bottom line shows the display string right-aligned.
pub fn render_display_pane(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .title(" calctty ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let mut indicators = Vec::new();
    if let Some(preview) = session.pending_preview() {
        indicators.push(Span::styled(
            preview,
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        indicators.push(Span::raw(" "));
    }
    if session.memory.is_some() {
        indicators.push(Span::styled(
            "M",
            Style::default()
                .fg(DEFAULT_THEME.memory)
                .add_modifier(Modifier::BOLD),
        ));
        indicators.push(Span::raw(" "));
    }
    indicators.push(Span::styled(
        if session.degree_mode { "DEG" } else { "RAD" },
        Style::default().fg(DEFAULT_THEME.primary),
    ));

    frame.render_widget(
        Paragraph::new(Line::from(indicators)).alignment(Alignment::Right),
        rows[0],
    );

    let value_style = if session.display.contains("NaN") || session.display.contains("Infinity")
    {
        Style::default().fg(DEFAULT_THEME.error)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            session.display.as_str(),
            value_style.add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Right),
        rows[1],
    );
}
