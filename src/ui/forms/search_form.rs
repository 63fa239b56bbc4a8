//! Craigslist search form rendering

use super::field_renderer::draw_text_field;
use crate::app::App;
use crate::neighborhoods::NEIGHBORHOODS;
use crate::platform::{SUBMIT_SHORTCUT, TOGGLE_SHORTCUT};
use crate::state::FormFocus;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Submit button width in columns
const SUBMIT_BUTTON_WIDTH: u16 = 18;

/// Most rows the error line may grow to
const MAX_ERROR_LINES: u16 = 4;

/// Draw the search form
pub fn draw_search_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    // Form content is inset by one column on each side
    let error_height = if form.has_error() {
        let width = usize::from(area.width.saturating_sub(2));
        let lines = wrapped_line_count(&form.error, width);
        u16::try_from(lines).unwrap_or(MAX_ERROR_LINES).clamp(1, MAX_ERROR_LINES)
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // URL
            Constraint::Min(3),                // Neighborhoods
            Constraint::Length(3),             // Notion database title
            Constraint::Length(error_height),  // Error
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
        ])
        .horizontal_margin(1)
        .split(area);

    draw_text_field(
        frame,
        chunks[0],
        FormFocus::Url.label(),
        &form.url,
        app.state.focus == FormFocus::Url,
    );

    draw_neighborhoods(frame, chunks[1], app);

    draw_text_field(
        frame,
        chunks[2],
        FormFocus::Title.label(),
        &form.notion_db_title,
        app.state.focus == FormFocus::Title,
    );

    if form.has_error() {
        let error = Paragraph::new(form.error.as_str())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });
        frame.render_widget(error, chunks[3]);
    }

    let pending = app.state.submission.is_pending();
    let button_area = Rect {
        width: SUBMIT_BUTTON_WIDTH.min(chunks[4].width),
        ..chunks[4]
    };
    render_button(
        frame,
        button_area,
        if pending { "Submitting..." } else { "Submit" },
        app.state.focus == FormFocus::Submit,
        !pending,
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next  "),
        Span::styled(TOGGLE_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": toggle  "),
        Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[5]);
}

/// Rows `text` takes when word-wrapped to `width` columns.
///
/// Words longer than a row are split across rows, as the paragraph wrapper does.
fn wrapped_line_count(text: &str, width: usize) -> usize {
    if width == 0 {
        return 1;
    }
    let mut lines = 1;
    let mut column = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if column == 0 {
            column = len;
        } else if column + 1 + len <= width {
            column += 1 + len;
        } else {
            lines += 1;
            column = len;
        }
        while column > width {
            lines += 1;
            column -= width;
        }
    }
    lines
}

/// Draw the neighborhood checkbox list
fn draw_neighborhoods(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.state.focus == FormFocus::Neighborhoods;
    let form = &app.state.form;

    let items: Vec<ListItem> = NEIGHBORHOODS
        .iter()
        .map(|n| {
            let checked = form.is_selected(n.value);
            let mark = if checked { "x" } else { " " };
            let style = if checked {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("[{mark}] {}", n.name),
                style,
            )))
        })
        .collect();

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = if form.selected_neighborhoods.is_empty() {
        format!(" {} ", FormFocus::Neighborhoods.label())
    } else {
        format!(
            " {} ({} selected) ",
            FormFocus::Neighborhoods.label(),
            form.selected_neighborhoods.len()
        )
    };

    let mut list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    if is_active {
        list = list
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
    }

    render_scrollable_list(frame, area, list, app.state.neighborhood_cursor);
}
