use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::formatting::format_elapsed_ms;
use crate::model::LoadState;

/// Build the status text: dataset state, row counts, selected country
pub fn build_status_line(
    source: &str,
    load_state: &LoadState,
    shown: usize,
    selected: Option<&str>,
) -> String {
    let mut metrics = Vec::new();

    match load_state {
        LoadState::Loading => {
            metrics.push(format!("Dataset: loading from {}", source));
        }
        LoadState::Loaded {
            count,
            elapsed_ms,
            at,
        } => {
            metrics.push(format!(
                "Dataset: {} loaded in {} at {}",
                count,
                format_elapsed_ms(*elapsed_ms),
                at.format("%H:%M:%S")
            ));
            metrics.push(format!("Shown: {} of {}", shown, count));
        }
        LoadState::Failed {
            error_type,
            message,
        } => {
            metrics.push(format!("Load failed: {} ({})", message, error_type.label()));
        }
    }

    if let Some(name) = selected {
        metrics.push(format!("Selected: {}", name));
    }

    metrics.join(" | ")
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    source: &str,
    load_state: &LoadState,
    shown: usize,
    selected: Option<&str>,
) {
    let status_line = build_status_line(source, load_state, shown, selected);
    let failed = matches!(load_state, LoadState::Failed { .. });

    // Color the labels (before colons)
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }

        if let Some(colon_pos) = part.find(':') {
            // Split on first colon to separate label from value
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            let label_color = if failed { Color::Red } else { Color::Yellow };
            spans.push(Span::styled(label.to_string(), Style::default().fg(label_color)));
            spans.push(Span::raw(value.to_string()));
        } else {
            spans.push(Span::raw(part.to_string()));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::errors::ErrorType;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_loading_status() {
        let line = build_status_line("https://example.test/all", &LoadState::Loading, 0, None);
        assert_eq!(line, "Dataset: loading from https://example.test/all");
    }

    #[test]
    fn test_loaded_status() {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 14, 3, 11).unwrap();
        let state = LoadState::Loaded {
            count: 250,
            elapsed_ms: 812,
            at,
        };
        let line = build_status_line("src", &state, 10, Some("France"));
        assert_eq!(
            line,
            "Dataset: 250 loaded in 812ms at 14:03:11 | Shown: 10 of 250 | Selected: France"
        );
    }

    #[test]
    fn test_failed_status() {
        let state = LoadState::Failed {
            error_type: ErrorType::HttpStatus(503),
            message: "service unavailable".to_string(),
        };
        let line = build_status_line("src", &state, 0, None);
        assert_eq!(line, "Load failed: service unavailable (HTTP 503)");
    }
}
