//! Subregion Input UI
//!
//! Renders the free-text subregion entry with a blinking cursor.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::centered_rect;

/// Render the subregion entry box centered over the list
///
/// `known` tells whether the typed text matches a subregion in the dataset
/// exactly; anything else still applies, it just matches nothing.
pub fn render_subregion_input(f: &mut Frame, text: &str, known: bool) {
    let title = if text.is_empty() {
        " Subregion - Enter with empty text clears ".to_string()
    } else if known {
        " Subregion - Enter to apply, Esc to cancel ".to_string()
    } else {
        " Subregion (no exact match) - Esc to cancel ".to_string()
    };

    let border_color = if known || text.is_empty() {
        Color::Cyan
    } else {
        Color::Red
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = Line::from(vec![
        Span::raw("Subregion: "),
        Span::raw(text.to_string()),
        Span::styled("█", cursor_style), // Blinking cursor
    ]);

    let area = centered_rect(f.area(), 60, 3);
    let paragraph = Paragraph::new(vec![input_line]).block(block);

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
