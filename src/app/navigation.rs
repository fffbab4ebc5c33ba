//! Navigation orchestration methods
//!
//! Moving the cursor over the displayed rows and opening the detail card.

use crate::{logic, App};

impl App {
    /// Navigate with a custom update function
    ///
    /// The update_fn receives (current_selection, list_length) and returns new_selection.
    fn navigate_with<F>(&mut self, update_fn: F)
    where
        F: Fn(Option<usize>, usize) -> Option<usize>,
    {
        let len = self.model.visible_len();
        self.model.ui.selected_index = update_fn(self.model.ui.selected_index, len);
    }

    pub(crate) fn next_item(&mut self) {
        self.navigate_with(logic::navigation::step_down);
    }

    pub(crate) fn previous_item(&mut self) {
        self.navigate_with(logic::navigation::step_up);
    }

    pub(crate) fn jump_to_first(&mut self) {
        self.navigate_with(|_, len| logic::navigation::first(len));
    }

    pub(crate) fn jump_to_last(&mut self) {
        self.navigate_with(|_, len| logic::navigation::last(len));
    }

    pub(crate) fn page_down(&mut self, page_size: usize) {
        let delta = page_size.max(1) as isize;
        self.navigate_with(|sel, len| logic::navigation::page(sel, len, delta));
    }

    pub(crate) fn page_up(&mut self, page_size: usize) {
        let delta = -(page_size.max(1) as isize);
        self.navigate_with(|sel, len| logic::navigation::page(sel, len, delta));
    }

    pub(crate) fn half_page_down(&mut self) {
        self.page_down(self.page_size / 2);
    }

    pub(crate) fn half_page_up(&mut self) {
        self.page_up(self.page_size / 2);
    }

    pub(crate) fn full_page_down(&mut self) {
        self.page_down(self.page_size);
    }

    pub(crate) fn full_page_up(&mut self) {
        self.page_up(self.page_size);
    }

    /// Open the detail card for the row under the cursor (no-op on an empty list)
    pub(crate) fn open_detail(&mut self) {
        if self.model.selected_country().is_some() {
            self.model.ui.detail_open = true;
        }
    }

    pub(crate) fn close_detail(&mut self) {
        self.model.ui.detail_open = false;
    }
}
