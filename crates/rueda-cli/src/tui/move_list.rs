use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use rueda_core::{SortField, EMPTY_MESSAGE};

use super::{App, LoadState};

/// Render the move list view.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Filters
            Constraint::Min(5),    // Move table
            Constraint::Length(3), // Help bar
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    render_filters(frame, app, chunks[1]);
    match app.state.clone() {
        LoadState::Loading => render_message(frame, chunks[2], "Loading moves...", Color::Yellow),
        LoadState::Failed(message) => {
            render_message(frame, chunks[2], &format!("Error: {message}"), Color::Red);
        }
        LoadState::Loaded if app.visible.is_empty() => {
            render_message(frame, chunks[2], EMPTY_MESSAGE, Color::DarkGray);
        }
        LoadState::Loaded => render_table(frame, app, chunks[2]),
    }
    render_help(frame, chunks[3]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(app.title())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_filters(frame: &mut Frame, app: &App, area: Rect) {
    let sort = app.selection.field.label();
    let line = Line::from(vec![
        Span::styled("  Category: ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.category_label()),
        Span::styled("    Difficulty: ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.selection.difficulty.label()),
        Span::styled("    Sort: ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{sort} {}", app.selection.direction.arrow())),
    ]);
    let filters = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(filters, area);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, colour: Color) {
    let paragraph = Paragraph::new(format!("  {message}"))
        .style(Style::default().fg(colour))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(paragraph, area);
}

fn header_label(app: &App, label: &str, field: SortField) -> String {
    match app.selection.indicator(field) {
        Some(arrow) => format!("{label} {arrow}"),
        None => label.to_string(),
    }
}

fn render_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let header = Row::new(vec![
        Cell::from(header_label(app, "Move", SortField::SpanishName))
            .style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Translation"),
        Cell::from(header_label(app, "Difficulty", SortField::Difficulty)),
        Cell::from("Category"),
        Cell::from("Video"),
    ])
    .height(1);

    // area.height - 2 for borders - 1 for header
    let viewport_height = area.height.saturating_sub(3) as usize;
    app.set_viewport_height(viewport_height);
    let visible_start = app.offset;
    let visible_end = (visible_start + viewport_height).min(app.visible.len());

    let rows: Vec<Row> = app
        .visible
        .iter()
        .enumerate()
        .skip(visible_start)
        .take(viewport_height)
        .map(|(i, m)| {
            let style = if i == app.selected {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(m.spanish_name.clone()),
                Cell::from(m.english_name.clone()),
                Cell::from(Span::styled(
                    m.difficulty.stars(),
                    Style::default().fg(Color::Yellow),
                )),
                Cell::from(app.catalog.display_name(m.category_id).to_string()),
                Cell::from(if m.has_video() { "\u{25b6}" } else { "-" }),
            ])
            .style(style)
        })
        .collect();

    let title = if app.visible.len() > viewport_height {
        format!(
            "Moves [{}-{} of {}]",
            visible_start + 1,
            visible_end,
            app.visible.len()
        )
    } else {
        String::from("Moves")
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Length(12),
            Constraint::Percentage(25),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);

    if let Some(m) = app.selected_move() {
        if !m.description.is_empty() && area.height > 4 {
            let footer = Rect {
                y: area.y + area.height - 1,
                height: 1,
                x: area.x + 2,
                width: area.width.saturating_sub(4),
            };
            let description = Paragraph::new(format!(" {} ", m.description))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(description, footer);
        }
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "  \u{2191}/k Up  \u{2193}/j Down  c Category  d Difficulty  n Sort name  s Sort difficulty  Enter Video  q Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
