//! Filter-and-rank pipeline
//!
//! Derives the displayed sequence from the full dataset and the current
//! selection. Steps run in a fixed order, each on the previous step's output:
//!
//! 1. membership filter (continent, else subregion, else everything)
//! 2. ranking: stable descending sort by the metric, truncated to [`RANK_LIMIT`]
//! 3. alphabetical sort by collated name
//!
//! With ranking and alphabetical both active the result is the top-10 subset in
//! name order, not a name-ordered top 10 of the whole dataset.
//!
//! Evaluation never fails and never touches the dataset: absent metrics count
//! as zero and unmatched filters give an empty sequence.

use std::cmp::Ordering;

use crate::api::Country;
use crate::logic::collation::NameCollator;
use crate::model::selection::{RankMetric, SelectionState};

/// Maximum number of records kept by the ranking step
pub const RANK_LIMIT: usize = 10;

/// Value of `metric` for ranking; absent counts as zero
pub fn metric_value(country: &Country, metric: RankMetric) -> f64 {
    match metric {
        RankMetric::Population => country.population.unwrap_or(0) as f64,
        RankMetric::Area => country.area.unwrap_or(0.0),
    }
}

/// Whether `country` passes the membership filter of `state`
pub fn matches_membership(country: &Country, state: &SelectionState) -> bool {
    if let Some(continent) = state.continent() {
        country.in_continent(continent.as_str())
    } else if let Some(subregion) = state.subregion() {
        country.subregion.as_deref() == Some(subregion)
    } else {
        true
    }
}

/// Evaluate the pipeline, returning dataset positions in display order
pub fn evaluate_indices(dataset: &[Country], state: &SelectionState) -> Vec<usize> {
    let mut working: Vec<usize> = dataset
        .iter()
        .enumerate()
        .filter(|(_, country)| matches_membership(country, state))
        .map(|(idx, _)| idx)
        .collect();

    if let Some(metric) = state.rank_by() {
        // sort_by is stable: equal metrics keep dataset order
        working.sort_by(|&a, &b| {
            metric_value(&dataset[b], metric)
                .partial_cmp(&metric_value(&dataset[a], metric))
                .unwrap_or(Ordering::Equal)
        });
        working.truncate(RANK_LIMIT);
    }

    if state.alphabetical() {
        let mut collator = NameCollator::new();
        working.sort_by(|&a, &b| collator.compare(&dataset[a].name, &dataset[b].name));
    }

    working
}

/// Evaluate the pipeline, borrowing the selected records from the dataset
pub fn evaluate<'a>(dataset: &'a [Country], state: &SelectionState) -> Vec<&'a Country> {
    evaluate_indices(dataset, state)
        .into_iter()
        .map(|idx| &dataset[idx])
        .collect()
}
