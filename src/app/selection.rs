//! Selection orchestration methods
//!
//! One method per control. Each applies exactly one selection transition
//! through `Model::apply_selection`, which re-derives the displayed rows and
//! keeps the cursor on the same country where possible.

use crate::logic::ui::{self as ui_logic, RankToggle};
use crate::model::{RankMetric, SubregionInputState, SubregionPickerState};
use crate::App;

impl App {
    pub(crate) fn toggle_alphabetical(&mut self) {
        self.model.apply_selection(|s| s.toggle_alphabetical());
        tracing::debug!(selection = ?self.model.selection(), "toggled alphabetical");
    }

    /// Ranking radio: select `metric`, or deselect it when already active
    pub(crate) fn toggle_rank(&mut self, metric: RankMetric) {
        match ui_logic::rank_toggle(self.model.selection().rank_by(), metric) {
            RankToggle::Set(metric) => self.model.apply_selection(|s| s.set_rank_by(metric)),
            RankToggle::Clear => self.model.apply_selection(|s| s.clear_rank_by()),
        }
        tracing::debug!(selection = ?self.model.selection(), "ranking changed");
    }

    /// Step the continent control forward (All → Antarctica → … → All) or back
    pub(crate) fn cycle_continent(&mut self, forward: bool) {
        let current = self.model.selection().continent();
        let next = if forward {
            ui_logic::next_continent(current)
        } else {
            ui_logic::prev_continent(current)
        };
        self.model.apply_selection(|s| s.set_continent(next));
        tracing::debug!(selection = ?self.model.selection(), "continent changed");
    }

    pub(crate) fn reset_selection(&mut self) {
        self.model.apply_selection(|s| s.reset());
        self.model.show_toast("Filters cleared".to_string());
    }

    // ============================================
    // SUBREGION PICKER
    // ============================================

    pub(crate) fn open_subregion_picker(&mut self) {
        let picker = SubregionPickerState::new(
            self.model.dataset.subregions(),
            self.model.selection().subregion(),
        );
        self.model.ui.subregion_picker = Some(picker);
    }

    pub(crate) fn picker_next(&mut self) {
        if let Some(picker) = self.model.ui.subregion_picker.as_mut() {
            picker.selected_index =
                crate::logic::navigation::step_down(picker.selected_index, picker.len());
        }
    }

    pub(crate) fn picker_previous(&mut self) {
        if let Some(picker) = self.model.ui.subregion_picker.as_mut() {
            picker.selected_index =
                crate::logic::navigation::step_up(picker.selected_index, picker.len());
        }
    }

    pub(crate) fn picker_first(&mut self) {
        if let Some(picker) = self.model.ui.subregion_picker.as_mut() {
            picker.selected_index = crate::logic::navigation::first(picker.len());
        }
    }

    pub(crate) fn picker_last(&mut self) {
        if let Some(picker) = self.model.ui.subregion_picker.as_mut() {
            picker.selected_index = crate::logic::navigation::last(picker.len());
        }
    }

    /// Apply the highlighted picker entry ("(none)" clears the filter) and close
    pub(crate) fn choose_subregion(&mut self) {
        let Some(picker) = self.model.ui.subregion_picker.take() else {
            return;
        };
        if let Some(value) = picker.chosen_value() {
            let value = value.to_string();
            self.model.apply_selection(|s| s.set_subregion(value));
            tracing::debug!(selection = ?self.model.selection(), "subregion chosen");
        }
    }

    pub(crate) fn cancel_subregion_picker(&mut self) {
        self.model.ui.subregion_picker = None;
    }

    // ============================================
    // FREE-TEXT SUBREGION
    // ============================================

    /// Open the text entry, prefilled with the active subregion
    pub(crate) fn open_subregion_input(&mut self) {
        let text = self.model.selection().subregion().unwrap_or_default().to_string();
        self.model.ui.subregion_input = Some(SubregionInputState { text });
    }

    /// Apply the typed text verbatim (empty clears the filter) and close
    pub(crate) fn submit_subregion_input(&mut self) {
        let Some(input) = self.model.ui.subregion_input.take() else {
            return;
        };
        self.model.apply_selection(|s| s.set_subregion(input.text));
        if self.model.visible_len() == 0 && self.model.selection().subregion().is_some() {
            self.model.show_toast("No countries in that subregion".to_string());
        }
        tracing::debug!(selection = ?self.model.selection(), "subregion entered");
    }

    pub(crate) fn cancel_subregion_input(&mut self) {
        self.model.ui.subregion_input = None;
    }
}
