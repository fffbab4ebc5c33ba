//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **DatasetModel**: the country records and their load state
//! - **SelectionState**: the filter/sort controls
//! - **UiModel**: cursor, popups, preferences
//!
//! The displayed rows are derived from (dataset, selection) by
//! `logic::pipeline`; the model caches the result as dataset positions and
//! recomputes it after every selection transition and when the dataset arrives.
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state
//! - No services: All I/O lives in the App runtime
//! - Pure accessors: Helper methods are side-effect free

pub mod dataset;
pub mod selection;
pub mod types;
pub mod ui;

pub use dataset::{DatasetModel, LoadState};
pub use selection::{Continent, RankMetric, SelectionError, SelectionState};
pub use types::*;
pub use ui::UiModel;

use crate::api::Country;
use crate::logic;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Country records and load state
    pub dataset: DatasetModel,

    /// Current filter/sort choices; change via [`Model::apply_selection`]
    selection: SelectionState,

    /// Cursor, popups and preferences
    pub ui: UiModel,

    /// Pipeline output as dataset positions, in display order
    view: Vec<usize>,
}

impl Model {
    /// Create initial model with an empty, loading dataset
    pub fn new(source: String, vim_mode: bool) -> Self {
        Self {
            dataset: DatasetModel::new(source),
            selection: SelectionState::new(),
            ui: UiModel::new(vim_mode),
            view: Vec::new(),
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Run one selection transition and re-derive the displayed rows
    pub fn apply_selection<T>(&mut self, transition: impl FnOnce(&mut SelectionState) -> T) -> T {
        let out = transition(&mut self.selection);
        self.refresh_view();
        out
    }

    /// Rows to display, in order
    pub fn visible(&self) -> Vec<&Country> {
        let countries = self.dataset.countries();
        self.view.iter().map(|&idx| &countries[idx]).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.view.len()
    }

    /// Country under the cursor (if any)
    pub fn selected_country(&self) -> Option<&Country> {
        let idx = self.ui.selected_index?;
        self.view
            .get(idx)
            .and_then(|&pos| self.dataset.countries().get(pos))
    }

    /// Install loaded records and derive the first view
    pub fn dataset_loaded(&mut self, countries: Vec<Country>, elapsed_ms: u64) -> bool {
        let accepted = self.dataset.set_loaded(countries, elapsed_ms);
        if accepted {
            self.refresh_view();
        }
        accepted
    }

    /// Re-evaluate the pipeline, keeping the cursor on the same country when possible
    pub fn refresh_view(&mut self) {
        let previous_name = self.selected_country().map(|c| c.name.clone());
        self.view = logic::pipeline::evaluate_indices(self.dataset.countries(), &self.selection);
        let rows = self.visible();
        let cursor = logic::navigation::reselect(&rows, previous_name.as_deref());
        self.ui.selected_index = cursor;
        if cursor.is_none() {
            self.ui.detail_open = false;
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}
