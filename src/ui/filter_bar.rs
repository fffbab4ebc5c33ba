//! Filter Bar UI
//!
//! One line mirroring the control surface: the alphabetical checkbox, the
//! top-10 radio pair, and the continent and subregion values.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{RankMetric, SelectionState};

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::Yellow))
}

fn value(text: String, active: bool) -> Span<'static> {
    if active {
        Span::styled(
            text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(text, Style::default().fg(Color::Gray))
    }
}

fn radio(metric: RankMetric, current: Option<RankMetric>) -> Span<'static> {
    let active = current == Some(metric);
    let mark = if active { "(•)" } else { "( )" };
    value(format!("{} {}", mark, metric.as_str()), active)
}

/// Build the filter line (extracted for testability)
pub fn build_filter_line(selection: &SelectionState) -> Line<'static> {
    let alphabetical = selection.alphabetical();
    let continent = selection.continent();
    let subregion = selection.subregion();

    Line::from(vec![
        value(
            format!("[{}] A-Z", if alphabetical { "x" } else { " " }),
            alphabetical,
        ),
        Span::raw("  │  "),
        label("Top 10: "),
        radio(RankMetric::Population, selection.rank_by()),
        Span::raw(" "),
        radio(RankMetric::Area, selection.rank_by()),
        Span::raw("  │  "),
        label("Continent: "),
        value(
            continent.map_or_else(|| "All".to_string(), |c| c.as_str().to_string()),
            continent.is_some(),
        ),
        Span::raw("  │  "),
        label("Subregion: "),
        value(subregion.unwrap_or("-").to_string(), subregion.is_some()),
    ])
}

/// Render the filter bar
pub fn render_filter_bar(f: &mut Frame, area: Rect, selection: &SelectionState) {
    let paragraph = Paragraph::new(build_filter_line(selection))
        .block(Block::default().borders(Borders::ALL).title("Filters"));
    f.render_widget(paragraph, area);
}
