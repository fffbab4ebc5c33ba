use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::layout::centered_rect;
use crate::api::Country;
use crate::logic::formatting;
use crate::model::SubregionPickerState;

/// Render the subregion picker menu
pub fn render_subregion_picker(f: &mut Frame, picker: &SubregionPickerState, current: Option<&str>) {
    let menu_items: Vec<ListItem> = std::iter::once(SubregionPickerState::NONE_LABEL)
        .chain(picker.options.iter().map(String::as_str))
        .map(|option| {
            let is_current = match current {
                Some(cur) => cur == option,
                None => option == SubregionPickerState::NONE_LABEL,
            };
            let style = if is_current {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Span::raw(option.to_string())).style(style)
        })
        .collect();

    let title = "Subregion (↑↓ to navigate, Enter to choose, Esc to cancel)";
    let widest = picker
        .options
        .iter()
        .map(|s| s.width())
        .max()
        .unwrap_or(0)
        .max(title.width());
    let menu_width = (widest + 6) as u16;
    let menu_height = (picker.len() as u16).saturating_add(2).min(24);
    let menu_area = centered_rect(f.area(), menu_width, menu_height);

    let menu = List::new(menu_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut state = ListState::default();
    state.select(picker.selected_index);

    f.render_widget(Clear, menu_area);
    f.render_stateful_widget(menu, menu_area, &mut state);
}

/// Label/value lines shown on the country card
pub fn build_detail_lines(country: &Country) -> Vec<Line<'static>> {
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), Style::default().fg(Color::Yellow)),
            Span::raw(value),
        ])
    };
    let or_dash = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    let heading = match &country.flag {
        Some(flag) => format!("{}  {}", flag, country.name),
        None => country.name.clone(),
    };

    vec![
        Line::from(Span::styled(
            heading,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Official", or_dash(&country.official_name)),
        field("Code", or_dash(&country.code)),
        field("Capital", formatting::format_list(&country.capital)),
        field("Population", formatting::format_population(country.population)),
        field("Area", formatting::format_area(country.area)),
        field("Continents", formatting::format_list(&country.continents)),
        field("Region", or_dash(&country.region)),
        field("Subregion", or_dash(&country.subregion)),
        field("Flag", or_dash(&country.flag_url)),
    ]
}

/// Render the country detail card
pub fn render_country_detail(f: &mut Frame, country: &Country) {
    let lines = build_detail_lines(country);
    let card_height = lines.len() as u16 + 2;
    let card_area = centered_rect(f.area(), 70, card_height);

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Country (Esc to close) ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, card_area);
    f.render_widget(card, card_area);
}
