//! UI state transition logic
//!
//! Pure functions for control cycling and transient UI state.

use crate::model::selection::{Continent, RankMetric};

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 2500;

/// Next value of the continent control: All → Antarctica → … → South America → All
///
/// # Examples
/// ```
/// use globetui::logic::ui::next_continent;
/// use globetui::model::selection::Continent;
///
/// assert_eq!(next_continent(None), Some(Continent::Antarctica));
/// assert_eq!(next_continent(Some(Continent::Antarctica)), Some(Continent::NorthAmerica));
/// assert_eq!(next_continent(Some(Continent::SouthAmerica)), None);
/// ```
pub fn next_continent(current: Option<Continent>) -> Option<Continent> {
    match current {
        None => Continent::ALL.first().copied(),
        Some(c) => {
            let idx = Continent::ALL.iter().position(|&x| x == c)?;
            Continent::ALL.get(idx + 1).copied()
        }
    }
}

/// Previous value of the continent control (reverse of [`next_continent`])
pub fn prev_continent(current: Option<Continent>) -> Option<Continent> {
    match current {
        None => Continent::ALL.last().copied(),
        Some(c) => {
            let idx = Continent::ALL.iter().position(|&x| x == c)?;
            idx.checked_sub(1).map(|i| Continent::ALL[i])
        }
    }
}

/// What pressing a ranking radio does: select it, or deselect it if already active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankToggle {
    Set(RankMetric),
    Clear,
}

pub fn rank_toggle(current: Option<RankMetric>, pressed: RankMetric) -> RankToggle {
    if current == Some(pressed) {
        RankToggle::Clear
    } else {
        RankToggle::Set(pressed)
    }
}

pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}
