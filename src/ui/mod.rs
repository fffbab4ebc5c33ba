// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (filter bar, table, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - filter_bar: Renders the selection controls (A-Z, Top 10, continent, subregion)
// - country_list: Renders the country table
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar with dataset state
// - dialogs: Renders the subregion picker and the country detail card
// - subregion_input: Renders the free-text subregion entry
// - toast: Renders toast notifications (brief pop-up messages)

pub mod country_list;
pub mod dialogs;
pub mod filter_bar;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_bar;
pub mod subregion_input;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
