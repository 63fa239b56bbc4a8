//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line text field with a label and a cursor when active
pub fn draw_text_field(frame: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    // Keep the tail of long values visible, that is where typing happens
    let inner_width = area.width.saturating_sub(3) as usize;
    let char_count = display_value.chars().count();
    let visible: String = if char_count > inner_width {
        display_value
            .chars()
            .skip(char_count - inner_width)
            .collect()
    } else {
        display_value.to_string()
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(visible, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.block(block), area);
}
