//! Tests for selection transitions
//!
//! Every transition replaces the whole selection, so after any sequence of
//! calls the continent and subregion filters are never both set, and a
//! ranking never coexists with either of them.

use globetui::model::{Continent, RankMetric, SelectionError, SelectionState};
use proptest::prelude::*;

/// One user action on the controls
#[derive(Debug, Clone)]
enum Transition {
    Continent(Option<Continent>),
    Subregion(String),
    RankBy(RankMetric),
    ClearRankBy,
    ToggleAlphabetical,
    Reset,
}

fn apply(state: &mut SelectionState, transition: &Transition) {
    match transition {
        Transition::Continent(c) => state.set_continent(*c),
        Transition::Subregion(s) => state.set_subregion(s.as_str()),
        Transition::RankBy(m) => state.set_rank_by(*m),
        Transition::ClearRankBy => state.clear_rank_by(),
        Transition::ToggleAlphabetical => state.toggle_alphabetical(),
        Transition::Reset => state.reset(),
    }
}

fn continent_strategy() -> impl Strategy<Value = Option<Continent>> {
    prop_oneof![
        Just(None),
        proptest::sample::select(Continent::ALL.to_vec()).prop_map(Some),
    ]
}

fn transition_strategy() -> impl Strategy<Value = Transition> {
    prop_oneof![
        continent_strategy().prop_map(Transition::Continent),
        prop_oneof![
            Just(String::new()),
            Just("Caribbean".to_string()),
            Just("Western Europe".to_string()),
            "[A-Za-z ]{1,12}",
        ]
        .prop_map(Transition::Subregion),
        prop_oneof![Just(RankMetric::Population), Just(RankMetric::Area)].prop_map(Transition::RankBy),
        Just(Transition::ClearRankBy),
        Just(Transition::ToggleAlphabetical),
        Just(Transition::Reset),
    ]
}

proptest! {
    /// Mutual exclusion holds after every call of any sequence
    #[test]
    fn prop_mutual_exclusion_after_every_transition(
        transitions in proptest::collection::vec(transition_strategy(), 0..40)
    ) {
        let mut state = SelectionState::new();
        for transition in &transitions {
            apply(&mut state, transition);
            prop_assert!(
                !(state.continent().is_some() && state.subregion().is_some()),
                "both membership filters set after {:?}: {:?}", transition, state
            );
            if state.rank_by().is_some() {
                prop_assert!(state.continent().is_none() && state.subregion().is_none());
            }
            prop_assert!(state.is_consistent());
        }
    }

    /// Toggling alphabetical never touches the other controls
    #[test]
    fn prop_toggle_alphabetical_only_flips_flag(
        transitions in proptest::collection::vec(transition_strategy(), 0..20)
    ) {
        let mut state = SelectionState::new();
        for transition in &transitions {
            apply(&mut state, transition);
        }
        let before = state.clone();
        state.toggle_alphabetical();
        prop_assert_eq!(state.alphabetical(), !before.alphabetical());
        prop_assert_eq!(state.continent(), before.continent());
        prop_assert_eq!(state.subregion(), before.subregion());
        prop_assert_eq!(state.rank_by(), before.rank_by());
    }
}

/// Test: continent then subregion keeps only the subregion
#[test]
fn test_subregion_replaces_continent() {
    let mut state = SelectionState::new();
    state.set_continent(Some(Continent::Europe));
    state.set_subregion("Caribbean");

    assert_eq!(state.continent(), None);
    assert_eq!(state.subregion(), Some("Caribbean"));
}

/// Test: choosing a continent drops the ranking but keeps alphabetical
#[test]
fn test_continent_clears_ranking() {
    let mut state = SelectionState::new();
    state.toggle_alphabetical();
    state.set_rank_by(RankMetric::Population);
    state.set_continent(Some(Continent::Asia));

    assert_eq!(state.rank_by(), None);
    assert_eq!(state.continent(), Some(Continent::Asia));
    assert!(state.alphabetical());
}

/// Test: ranking clears both membership filters
#[test]
fn test_ranking_clears_membership() {
    let mut state = SelectionState::new();
    state.set_subregion("Caribbean");
    state.set_rank_by(RankMetric::Area);
    assert_eq!(state.subregion(), None);
    assert_eq!(state.rank_by(), Some(RankMetric::Area));
}

/// Test: clearing the ranking leaves everything else alone
#[test]
fn test_clear_rank_by_is_narrow() {
    let mut state = SelectionState::new();
    state.set_rank_by(RankMetric::Population);
    state.toggle_alphabetical();
    state.clear_rank_by();

    assert_eq!(state.rank_by(), None);
    assert!(state.alphabetical());
    assert_eq!(state.continent(), None);
    assert_eq!(state.subregion(), None);
}

/// Test: invalid continent text is rejected and the state is untouched
#[test]
fn test_invalid_continent_is_rejected() {
    let mut state = SelectionState::new();
    state.set_subregion("Caribbean");
    let before = state.clone();

    let err = state.set_continent_str("Atlantis").unwrap_err();
    match &err {
        SelectionError::InvalidEnum { field, value, .. } => {
            assert_eq!(*field, "continent");
            assert_eq!(value, "Atlantis");
        }
    }
    assert!(err.to_string().contains("North America"));
    assert_eq!(state, before);
}

/// Test: continent spelling is exact
#[test]
fn test_continent_spelling_is_exact() {
    let mut state = SelectionState::new();
    assert!(state.set_continent_str("europe").is_err());
    assert!(state.set_continent_str("NorthAmerica").is_err());
    state.set_continent_str("North America").unwrap();
    assert_eq!(state.continent(), Some(Continent::NorthAmerica));

    // Empty means "All"
    state.set_continent_str("").unwrap();
    assert_eq!(state.continent(), None);
}

/// Test: unknown metric is rejected
#[test]
fn test_invalid_metric_is_rejected() {
    let mut state = SelectionState::new();
    let err = state.set_rank_by_str("gdp").unwrap_err();
    assert!(matches!(err, SelectionError::InvalidEnum { field: "rank metric", .. }));
    assert!(state.is_default());
}

/// Test: unmatched subregion text is accepted, not an error
#[test]
fn test_subregion_is_free_text() {
    let mut state = SelectionState::new();
    state.set_subregion("Nowhereland");
    assert_eq!(state.subregion(), Some("Nowhereland"));
}

/// Test: reset returns to the default state
#[test]
fn test_reset() {
    let mut state = SelectionState::new();
    state.toggle_alphabetical();
    state.set_continent(Some(Continent::Oceania));
    state.reset();
    assert!(state.is_default());
    assert_eq!(state, SelectionState::default());
}
