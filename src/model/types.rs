//! Shared types for the Model
//!
//! Popup and input states used by the UI sub-model.

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// Subregion picker: "(none)" followed by the dataset's subregions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubregionPickerState {
    pub options: Vec<String>,
    pub selected_index: Option<usize>,
}

impl SubregionPickerState {
    /// Label of the leading entry that clears the filter
    pub const NONE_LABEL: &'static str = "(none)";

    /// Build the picker with the cursor on `current` when it is listed
    pub fn new(subregions: &[String], current: Option<&str>) -> Self {
        let selected = current
            .and_then(|cur| subregions.iter().position(|s| s == cur))
            .map(|idx| idx + 1)
            .unwrap_or(0);
        Self {
            options: subregions.to_vec(),
            selected_index: Some(selected),
        }
    }

    /// Number of rows including the leading "(none)"
    pub fn len(&self) -> usize {
        self.options.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Value the highlighted row stands for ("" for "(none)")
    pub fn chosen_value(&self) -> Option<&str> {
        match self.selected_index? {
            0 => Some(""),
            idx => self.options.get(idx - 1).map(String::as_str),
        }
    }
}

/// Free-text subregion entry
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubregionInputState {
    pub text: String,
}
