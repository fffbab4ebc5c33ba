use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Which keys are live right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendContext {
    /// Country list
    Main,
    /// Subregion picker open
    Picker,
    /// Free-text subregion entry open
    Input,
    /// Country detail card open
    Detail,
}

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, context: LegendContext) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    match context {
        LegendContext::Input => {
            hotkey_spans.extend(vec![
                key("Enter"),
                Span::raw(":Apply  "),
                key("Esc"),
                Span::raw(":Cancel  "),
                key("Backspace"),
                Span::raw(":Delete"),
            ]);
            return hotkey_spans;
        }
        LegendContext::Picker => {
            let nav = if vim_mode { "j/k" } else { "↑/↓" };
            hotkey_spans.extend(vec![
                key(nav),
                Span::raw(":Nav  "),
                key("Enter"),
                Span::raw(":Choose  "),
                key("Esc"),
                Span::raw(":Cancel  "),
                key("q"),
                Span::raw(":Quit"),
            ]);
            return hotkey_spans;
        }
        LegendContext::Detail => {
            hotkey_spans.extend(vec![
                key("Esc"),
                Span::raw(":Close  "),
                key("q"),
                Span::raw(":Quit"),
            ]);
            return hotkey_spans;
        }
        LegendContext::Main => {}
    }

    // Navigation keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(vec![
            key("jk"),
            Span::raw(":Nav  "),
            key("gg/G"),
            Span::raw(":First/Last  "),
            key("^d/^u"),
            Span::raw(":½Page  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            key("↑/↓"),
            Span::raw(":Nav  "),
            key("PgUp/PgDn"),
            Span::raw(":Page  "),
        ]);
    }

    hotkey_spans.extend(vec![
        key("Enter"),
        Span::raw(":Details  "),
        key("a"),
        Span::raw(":A-Z  "),
        key("p"),
        Span::raw(":Top Pop  "),
        key("A"),
        Span::raw(":Top Area  "),
        key("c/C"),
        Span::raw(":Continent  "),
        key("s"),
        Span::raw(":Subregion  "),
    ]);

    let search_key = if vim_mode { "/" } else { "^F" };
    hotkey_spans.extend(vec![
        key(search_key),
        Span::raw(":Type Subregion  "),
        key("x"),
        Span::raw(":Reset  "),
    ]);

    // Quit - always available
    hotkey_spans.extend(vec![key("q"), Span::raw(":Quit")]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(vim_mode: bool, context: LegendContext) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, context));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend (changes with vim mode and the open popup)
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, context: LegendContext) {
    f.render_widget(build_legend_paragraph(vim_mode, context), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, vim_mode: bool, context: LegendContext) -> u16 {
    // line_count() doesn't account for borders correctly when block is attached
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, context));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    // Subtract left + right borders
    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
