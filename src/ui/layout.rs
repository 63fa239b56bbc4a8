//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{FormFocus, SubmissionStatus, ALREADY_PENDING_MESSAGE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Create the main layout: header on top, form below, status bar reserved at the bottom
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the application header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Craigslist Housing Aggregator",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(title, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submission status
    let (marker, color) = match app.state.submission {
        SubmissionStatus::Idle => (" ○ ", Color::Gray),
        SubmissionStatus::Pending { .. } => (" ◌ ", Color::Yellow),
        SubmissionStatus::Succeeded { .. } => (" ● ", Color::Green),
        SubmissionStatus::Failed { .. } => (" ● ", Color::Red),
    };
    spans.push(Span::styled(marker, Style::default().fg(color)));
    spans.push(Span::styled(
        app.state.submission.label(),
        Style::default().fg(color),
    ));

    // Endpoint
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        app.endpoint.as_str(),
        Style::default().fg(Color::Blue),
    ));

    // Transient message
    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        let color = if msg == ALREADY_PENDING_MESSAGE {
            Color::Yellow
        } else {
            Color::Green
        };
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        get_focus_hints(app.state.focus),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(status, status_area);
}

/// Get keyboard hints for the focused form element
fn get_focus_hints(focus: FormFocus) -> String {
    match focus {
        FormFocus::Url | FormFocus::Title => {
            format!("Tab:next  Ctrl+U:clear  {SUBMIT_SHORTCUT}:submit  Esc:quit")
        }
        FormFocus::Neighborhoods => {
            format!("j/k:nav  Space:toggle  {SUBMIT_SHORTCUT}:submit  Esc:quit")
        }
        FormFocus::Submit => "Enter:submit  Tab:next  Esc:quit".to_string(),
    }
}
