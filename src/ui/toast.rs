use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const MAX_TOAST_WIDTH: usize = 80;

/// Rows from the top of the screen; the toast sits over the first table rows
const TOAST_TOP: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastKind {
    Info,
    Error,
}

impl ToastKind {
    fn of(message: &str) -> Self {
        if message.starts_with("Error:") {
            ToastKind::Error
        } else {
            ToastKind::Info
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "✓ ",
            ToastKind::Error => "✗ ",
        }
    }

    fn color(self) -> Color {
        match self {
            ToastKind::Info => Color::Green,
            ToastKind::Error => Color::Red,
        }
    }
}

/// Box for a toast holding `message`, centered horizontally in `area`
fn toast_rect(area: Rect, message: &str) -> Rect {
    let width = (message.width() + 6).min(MAX_TOAST_WIDTH).min(area.width as usize) as u16;
    let top = TOAST_TOP.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + top,
        width,
        height: 4.min(area.height - top),
    }
}

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_rect(area, message);
    let kind = ToastKind::of(message);
    let accent = Style::default().fg(kind.color()).add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled(kind.icon(), accent),
        Span::raw(message.to_string()),
    ]);

    let toast = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).border_style(accent))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, toast_area);
    f.render_widget(toast, toast_area);
}
