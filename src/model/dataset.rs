//! Dataset Model
//!
//! The country records and the state of their one-shot load. The records are
//! set once when the load completes and never change afterwards; a failed load
//! leaves them empty for the rest of the session.

use chrono::{DateTime, Local};

use crate::api::Country;
use crate::logic::errors::ErrorType;

/// Progress of the one-shot dataset load
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    /// Request in flight
    Loading,
    /// Records available
    Loaded {
        count: usize,
        elapsed_ms: u64,
        at: DateTime<Local>,
    },
    /// Load failed; dataset stays empty
    Failed {
        error_type: ErrorType,
        message: String,
    },
}

/// Dataset and where it came from
#[derive(Clone, Debug)]
pub struct DatasetModel {
    countries: Vec<Country>,

    /// Human-readable source (URL or file path)
    pub source: String,

    pub load_state: LoadState,

    /// Distinct subregions, computed once on load
    subregions: Vec<String>,
}

impl DatasetModel {
    pub fn new(source: String) -> Self {
        Self {
            countries: Vec::new(),
            source,
            load_state: LoadState::Loading,
            subregions: Vec::new(),
        }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn subregions(&self) -> &[String] {
        &self.subregions
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading)
    }

    /// Install the loaded records. Only the first completed load is accepted.
    pub fn set_loaded(&mut self, countries: Vec<Country>, elapsed_ms: u64) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.subregions = crate::logic::subregions::distinct_subregions(&countries);
        self.load_state = LoadState::Loaded {
            count: countries.len(),
            elapsed_ms,
            at: Local::now(),
        };
        self.countries = countries;
        true
    }

    /// Record a failed load; the dataset stays empty
    pub fn set_failed(&mut self, error_type: ErrorType, message: String) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.load_state = LoadState::Failed {
            error_type,
            message,
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_loading_and_empty() {
        let model = DatasetModel::new("test".to_string());
        assert!(model.is_loading());
        assert!(model.countries().is_empty());
    }

    #[test]
    fn test_set_loaded_once() {
        let mut model = DatasetModel::new("test".to_string());
        assert!(model.set_loaded(vec![Country::named("Chad")], 12));
        assert_eq!(model.countries().len(), 1);
        assert!(matches!(model.load_state, LoadState::Loaded { count: 1, elapsed_ms: 12, .. }));

        // Dataset is never replaced after the first load
        assert!(!model.set_loaded(vec![], 5));
        assert_eq!(model.countries().len(), 1);
    }

    #[test]
    fn test_failed_load_stays_empty() {
        let mut model = DatasetModel::new("test".to_string());
        assert!(model.set_failed(ErrorType::Timeout, "timed out".to_string()));
        assert!(model.countries().is_empty());
        assert!(!model.set_loaded(vec![Country::named("Chad")], 1));
        assert!(model.countries().is_empty());
    }

    #[test]
    fn test_subregions_computed_on_load() {
        let mut model = DatasetModel::new("test".to_string());
        let mut cuba = Country::named("Cuba");
        cuba.subregion = Some("Caribbean".to_string());
        model.set_loaded(vec![cuba], 1);
        assert_eq!(model.subregions(), &["Caribbean".to_string()]);
    }
}
