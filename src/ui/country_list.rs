use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::api::Country;
use crate::logic::formatting;
use crate::model::{LoadState, SelectionState};

/// Panel title describing what the rows are
pub fn list_title(selection: &SelectionState, shown: usize, loaded: usize) -> String {
    let order = if selection.alphabetical() { ", A-Z" } else { "" };
    match selection.rank_by() {
        Some(metric) => format!(" Top {} by {}{} ", shown, metric, order),
        None if shown == loaded => format!(" Countries ({}){} ", loaded, order),
        None => format!(" Countries ({} of {}){} ", shown, loaded, order),
    }
}

/// Placeholder text when there are no rows to draw
fn empty_message(load_state: &LoadState) -> String {
    match load_state {
        LoadState::Loading => "Loading countries...".to_string(),
        LoadState::Failed { message, .. } => format!("Could not load countries: {}", message),
        LoadState::Loaded { .. } => "No countries match the current filters".to_string(),
    }
}

fn country_row(country: &Country) -> Row<'static> {
    Row::new(vec![
        Cell::from(country.flag.clone().unwrap_or_default()),
        Cell::from(country.name.clone()),
        Cell::from(formatting::format_list(&country.capital)),
        Cell::from(Line::from(formatting::format_population(country.population)).alignment(Alignment::Right)),
        Cell::from(Line::from(formatting::format_area(country.area)).alignment(Alignment::Right)),
        Cell::from(formatting::format_list(&country.continents)),
    ])
}

/// Render the country table; returns the number of data rows that fit
pub fn render_country_list(
    f: &mut Frame,
    area: Rect,
    rows: &[&Country],
    selected_index: Option<usize>,
    selection: &SelectionState,
    load_state: &LoadState,
    loaded: usize,
) -> usize {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(list_title(selection, rows.len(), loaded))
        .border_style(Style::default().fg(Color::Cyan));

    // Borders and header row
    let page_rows = area.height.saturating_sub(3) as usize;

    if rows.is_empty() {
        let style = match load_state {
            LoadState::Failed { .. } => Style::default().fg(Color::Red),
            _ => Style::default().fg(Color::Gray),
        };
        let placeholder = Paragraph::new(empty_message(load_state))
            .block(block)
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(placeholder, area);
        return page_rows;
    }

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Country"),
        Cell::from("Capital"),
        Cell::from(Line::from("Population").alignment(Alignment::Right)),
        Cell::from(Line::from("Area").alignment(Alignment::Right)),
        Cell::from("Continents"),
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let widths = [
        Constraint::Length(2),
        Constraint::Percentage(30),
        Constraint::Percentage(20),
        Constraint::Length(15),
        Constraint::Length(16),
        Constraint::Min(10),
    ];

    let table = Table::new(rows.iter().map(|c| country_row(c)), widths)
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut state = TableState::default();
    state.select(selected_index);
    f.render_stateful_widget(table, area, &mut state);

    page_rows
}
