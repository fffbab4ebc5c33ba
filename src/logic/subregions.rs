//! Subregion choices for the picker
//!
//! Subregion is free text matched exactly against the data, so the picker just
//! offers whatever distinct values the loaded dataset contains.

use std::collections::HashSet;

use crate::api::Country;
use crate::logic::collation::NameCollator;

/// Distinct, non-empty subregions present in `dataset`, in collated order
pub fn distinct_subregions(dataset: &[Country]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut subregions: Vec<String> = dataset
        .iter()
        .filter_map(|c| c.subregion.as_deref())
        .filter(|s| seen.insert(*s))
        .map(str::to_string)
        .collect();

    let mut collator = NameCollator::new();
    subregions.sort_by(|a, b| collator.compare(a, b));
    subregions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_subregion(name: &str, subregion: Option<&str>) -> Country {
        Country {
            subregion: subregion.map(str::to_string),
            ..Country::named(name)
        }
    }

    #[test]
    fn test_distinct_and_sorted() {
        let data = vec![
            with_subregion("Jamaica", Some("Caribbean")),
            with_subregion("France", Some("Western Europe")),
            with_subregion("Cuba", Some("Caribbean")),
            with_subregion("Antarctica", None),
            with_subregion("Chad", Some("Middle Africa")),
        ];
        assert_eq!(
            distinct_subregions(&data),
            vec!["Caribbean", "Middle Africa", "Western Europe"]
        );
    }

    #[test]
    fn test_empty_dataset() {
        assert!(distinct_subregions(&[]).is_empty());
    }
}
