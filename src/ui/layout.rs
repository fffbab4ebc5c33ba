use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::legend::LegendContext;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Filter bar mirroring the selection controls
    pub filter_area: Rect,
    /// Country table
    pub list_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, vim_mode: bool, context: LegendContext) -> LayoutInfo {
    // Calculate dynamic legend height based on terminal width and content
    let legend_height = super::legend::calculate_legend_height(terminal_size.width, vim_mode, context);

    // Filter bar (top) + country table + legend + status bar (bottom)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Filter bar (top border, text, bottom border)
            Constraint::Min(3),                // Country table
            Constraint::Length(legend_height), // Legend area (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        filter_area: chunks[0],
        list_area: chunks[1],
        legend_area: chunks[2],
        status_area: chunks[3],
    }
}

/// Rect of `width` x `height` centered in `area`, shrunk to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
