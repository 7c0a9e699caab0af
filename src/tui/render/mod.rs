//! TUI rendering
//!
//! A pure function from [`App`] state to the frame: `Loading` draws only a
//! blocking indicator, `Ready` draws the catalog rows in received order,
//! and `Failed` draws a neutral note with zero rows.

pub mod colors;

use crate::app::{App, ViewState};
use crate::ui::ModelListWidget;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    match &app.view {
        ViewState::Loading => render_loading(frame),
        ViewState::Ready(catalog) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(4),
                    Constraint::Min(3),
                    Constraint::Length(2),
                    Constraint::Length(1),
                ])
                .split(frame.area());

            render_header(frame, chunks[0]);
            let widget = ModelListWidget::new(catalog.as_slice(), app.selected);
            frame.render_widget(widget.to_list(), chunks[1]);
            render_doc_line(frame, app, chunks[2]);
            render_footer(frame, chunks[3]);
        }
        ViewState::Failed => render_failed(frame),
    }
}

/// Blocking loading indicator; nothing else is drawn while the fetch is
/// outstanding.
fn render_loading(frame: &mut Frame<'_>) {
    let area = centered_rect_absolute(30, 3, frame.area());
    let paragraph = Paragraph::new(Line::from(Span::styled(
        "Loading...",
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER)),
    );
    frame.render_widget(paragraph, area);
}

fn render_header(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Indra Agent-Based Modeling System",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please choose a model:",
            Style::default().fg(colors::TEXT_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_doc_line(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let doc = app.selected_model().map_or("", |model| model.doc.as_str());
    let paragraph = Paragraph::new(Line::from(Span::styled(
        doc,
        Style::default().fg(colors::TEXT_DIM),
    )));
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect) {
    let hint = Line::from(Span::styled(
        "↑/↓ select • Enter choose • d project description • r reload • q quit",
        Style::default().fg(colors::TEXT_MUTED),
    ));
    frame.render_widget(Paragraph::new(hint), area);
}

/// Neutral failed state: no rows, no stale data, just a note and the keys
/// that still work.
fn render_failed(frame: &mut Frame<'_>) {
    let area = centered_rect_absolute(50, 4, frame.area());
    let lines = vec![
        Line::from(Span::styled(
            "Model catalog unavailable",
            Style::default().fg(colors::ACCENT_WARNING),
        )),
        Line::from(Span::styled(
            "r reload • q quit",
            Style::default().fg(colors::TEXT_MUTED),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER)),
    );
    frame.render_widget(paragraph, area);
}

/// Create a centered rect with percentage width and absolute height
fn centered_rect_absolute(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical_padding = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height),
            Constraint::Length(vertical_padding),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
