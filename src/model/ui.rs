//! UI Model
//!
//! Cursor position, open popups, the current toast and the quit flag.
//! Nothing here affects which countries are displayed.

use std::time::Instant;

use super::types::{SubregionInputState, SubregionPickerState, VimCommandState};

#[derive(Clone, Debug)]
pub struct UiModel {
    pub vim_mode: bool,

    /// Pending first key of 'gg'
    pub vim_command_state: VimCommandState,

    /// Cursor row in the displayed list; `None` only when the list is empty
    pub selected_index: Option<usize>,

    pub subregion_picker: Option<SubregionPickerState>,
    pub subregion_input: Option<SubregionInputState>,

    /// Detail card for the country under the cursor
    pub detail_open: bool,

    /// Toast text and when it appeared
    pub toast_message: Option<(String, Instant)>,

    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            selected_index: None,
            subregion_picker: None,
            subregion_input: None,
            detail_open: false,
            toast_message: None,
            should_quit: false,
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Whether the toast has been up for its full duration
    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message.as_ref().is_some_and(|(_, shown_at)| {
            crate::logic::ui::should_dismiss_toast(shown_at.elapsed().as_millis())
        })
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
