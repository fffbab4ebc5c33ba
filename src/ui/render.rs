use crate::App;
use ratatui::Frame;

use super::{
    country_list, dialogs, filter_bar, layout, legend, legend::LegendContext, status_bar,
    subregion_input, toast,
};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let ui = &app.model.ui;

    let context = if ui.subregion_input.is_some() {
        LegendContext::Input
    } else if ui.subregion_picker.is_some() {
        LegendContext::Picker
    } else if ui.detail_open {
        LegendContext::Detail
    } else {
        LegendContext::Main
    };

    let layout_info = layout::calculate_layout(size, ui.vim_mode, context);

    filter_bar::render_filter_bar(f, layout_info.filter_area, app.model.selection());

    let rows = app.model.visible();
    let page_rows = country_list::render_country_list(
        f,
        layout_info.list_area,
        &rows,
        app.model.ui.selected_index,
        app.model.selection(),
        &app.model.dataset.load_state,
        app.model.dataset.countries().len(),
    );

    legend::render_legend(f, layout_info.legend_area, app.model.ui.vim_mode, context);

    let selected = app.model.selected_country();
    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &app.model.dataset.source,
        &app.model.dataset.load_state,
        rows.len(),
        selected.map(|c| c.name.as_str()),
    );

    // Popups
    if app.model.ui.detail_open {
        if let Some(country) = selected {
            dialogs::render_country_detail(f, country);
        }
    }

    if let Some(picker) = &app.model.ui.subregion_picker {
        dialogs::render_subregion_picker(f, picker, app.model.selection().subregion());
    }

    if let Some(input) = &app.model.ui.subregion_input {
        let known = app
            .model
            .dataset
            .subregions()
            .iter()
            .any(|s| *s == input.text);
        subregion_input::render_subregion_input(f, &input.text, known);
    }

    // Render toast notification if active
    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }

    app.page_size = page_rows.max(1);
}
