//! Selection State
//!
//! The user's current filter/sort choices. Fields are private: every change goes
//! through one transition method, and each transition replaces the whole state,
//! so the membership filters (continent, subregion) are never both set and the
//! ranking mode never coexists with a membership filter.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised by selection transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Value outside a closed set (continent, ranking metric)
    #[error("invalid {field}: {value:?} (expected one of: {expected})")]
    InvalidEnum {
        field: &'static str,
        value: String,
        expected: String,
    },
}

/// Fixed set of continents offered by the continent filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    Antarctica,
    NorthAmerica,
    Europe,
    Africa,
    Asia,
    Oceania,
    SouthAmerica,
}

impl Continent {
    /// All continents, in control-surface order
    pub const ALL: [Continent; 7] = [
        Continent::Antarctica,
        Continent::NorthAmerica,
        Continent::Europe,
        Continent::Africa,
        Continent::Asia,
        Continent::Oceania,
        Continent::SouthAmerica,
    ];

    /// Spelling used by the dataset's `continents` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::Antarctica => "Antarctica",
            Continent::NorthAmerica => "North America",
            Continent::Europe => "Europe",
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Oceania => "Oceania",
            Continent::SouthAmerica => "South America",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Continent {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Continent::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SelectionError::InvalidEnum {
                field: "continent",
                value: s.to_string(),
                expected: Continent::ALL
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Numeric field used by the top-10 ranking mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankMetric {
    Population,
    Area,
}

impl RankMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankMetric::Population => "population",
            RankMetric::Area => "area",
        }
    }
}

impl fmt::Display for RankMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankMetric {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "population" => Ok(RankMetric::Population),
            "area" => Ok(RankMetric::Area),
            other => Err(SelectionError::InvalidEnum {
                field: "rank metric",
                value: other.to_string(),
                expected: "population, area".to_string(),
            }),
        }
    }
}

/// Current filter/sort configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectionState {
    continent: Option<Continent>,
    subregion: Option<String>,
    rank_by: Option<RankMetric>,
    alphabetical: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn continent(&self) -> Option<Continent> {
        self.continent
    }

    pub fn subregion(&self) -> Option<&str> {
        self.subregion.as_deref()
    }

    pub fn rank_by(&self) -> Option<RankMetric> {
        self.rank_by
    }

    pub fn alphabetical(&self) -> bool {
        self.alphabetical
    }

    /// Filter by continent (`None` = all); clears subregion and ranking
    pub fn set_continent(&mut self, continent: Option<Continent>) {
        *self = Self {
            continent,
            subregion: None,
            rank_by: None,
            alphabetical: self.alphabetical,
        };
    }

    /// String form of [`set_continent`](Self::set_continent); empty means no filter.
    /// On error the state is left untouched.
    pub fn set_continent_str(&mut self, value: &str) -> Result<(), SelectionError> {
        let continent = if value.is_empty() {
            None
        } else {
            Some(value.parse::<Continent>()?)
        };
        self.set_continent(continent);
        Ok(())
    }

    /// Filter by exact subregion text (empty = no filter); clears continent and ranking
    pub fn set_subregion(&mut self, value: impl Into<String>) {
        let value = value.into();
        *self = Self {
            continent: None,
            subregion: if value.is_empty() { None } else { Some(value) },
            rank_by: None,
            alphabetical: self.alphabetical,
        };
    }

    /// Enter top-10 mode; clears both membership filters
    pub fn set_rank_by(&mut self, metric: RankMetric) {
        *self = Self {
            continent: None,
            subregion: None,
            rank_by: Some(metric),
            alphabetical: self.alphabetical,
        };
    }

    /// String form of [`set_rank_by`](Self::set_rank_by). On error the state is left untouched.
    pub fn set_rank_by_str(&mut self, value: &str) -> Result<(), SelectionError> {
        let metric = value.parse::<RankMetric>()?;
        self.set_rank_by(metric);
        Ok(())
    }

    /// Leave top-10 mode without touching anything else
    pub fn clear_rank_by(&mut self) {
        *self = Self {
            rank_by: None,
            ..self.clone()
        };
    }

    pub fn toggle_alphabetical(&mut self) {
        *self = Self {
            alphabetical: !self.alphabetical,
            ..self.clone()
        };
    }

    /// Back to defaults: no filters, no ranking, unsorted
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when both mutual-exclusion rules hold
    pub fn is_consistent(&self) -> bool {
        let membership_exclusive = !(self.continent.is_some() && self.subregion.is_some());
        let ranking_exclusive =
            self.rank_by.is_none() || (self.continent.is_none() && self.subregion.is_none());
        membership_exclusive && ranking_exclusive
    }

    /// True when nothing narrows or reorders the dataset
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
