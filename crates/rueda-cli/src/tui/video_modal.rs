use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::VideoModal;

/// Render the video popup over the move list.
pub fn render(frame: &mut Frame, modal: &VideoModal) {
    let area = centered(frame.area(), 80, 9);

    let start = modal
        .video
        .start_time
        .map_or_else(|| String::from("from the beginning"), |t| format!("{t}s"));

    let label = Style::default().fg(Color::Cyan);
    let lines = vec![
        Line::from(vec![Span::styled("Embed:  ", label), Span::raw(modal.video.embed_url())]),
        Line::from(vec![Span::styled("Watch:  ", label), Span::raw(modal.video.watch_url())]),
        Line::from(vec![Span::styled("Start:  ", label), Span::raw(start)]),
        Line::from(""),
        Line::from(Span::styled("Esc Close", Style::default().fg(Color::DarkGray))),
    ];

    let popup = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(modal.title.as_str())
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// A rectangle `percent_x` wide and `height` rows tall, centred in `area`.
fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    let side = (100 - percent_x) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(side),
            Constraint::Percentage(percent_x),
            Constraint::Percentage(side),
        ])
        .split(vertical[1])[1]
}
