//! Cursor movement over the country list
//!
//! Pure functions computing the next cursor position. Single steps wrap
//! around the ends of the list; page and jump moves clamp.

use crate::api::Country;

/// Move one row down, wrapping from the last row to the first
///
/// # Examples
/// ```
/// use globetui::logic::navigation::step_down;
///
/// assert_eq!(step_down(None, 0), None);
/// assert_eq!(step_down(None, 3), Some(0));
/// assert_eq!(step_down(Some(1), 3), Some(2));
/// assert_eq!(step_down(Some(2), 3), Some(0));
/// ```
pub fn step_down(current: Option<usize>, len: usize) -> Option<usize> {
    match (current, len) {
        (_, 0) => None,
        (Some(i), len) if i + 1 < len => Some(i + 1),
        (Some(_), _) | (None, _) => Some(0),
    }
}

/// Move one row up, wrapping from the first row to the last
///
/// # Examples
/// ```
/// use globetui::logic::navigation::step_up;
///
/// assert_eq!(step_up(None, 0), None);
/// assert_eq!(step_up(None, 3), Some(2));
/// assert_eq!(step_up(Some(0), 3), Some(2));
/// assert_eq!(step_up(Some(2), 3), Some(1));
/// ```
pub fn step_up(current: Option<usize>, len: usize) -> Option<usize> {
    match (current, len) {
        (_, 0) => None,
        (Some(i), len) if i > 0 && i < len => Some(i - 1),
        _ => Some(len - 1),
    }
}

/// Move by `delta` rows, clamped to the list bounds
pub fn page(current: Option<usize>, len: usize, delta: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let from = current.unwrap_or(0).min(len - 1) as isize;
    let to = (from + delta).clamp(0, len as isize - 1);
    Some(to as usize)
}

pub fn first(len: usize) -> Option<usize> {
    (len > 0).then_some(0)
}

pub fn last(len: usize) -> Option<usize> {
    len.checked_sub(1)
}

/// Position of the country named `name` among the displayed rows
pub fn find_row_by_name(rows: &[&Country], name: &str) -> Option<usize> {
    rows.iter().position(|c| c.name == name)
}

/// Cursor after the displayed rows changed: stay on `previous_name` if it is
/// still shown, otherwise the first row (or nothing when empty)
pub fn reselect(rows: &[&Country], previous_name: Option<&str>) -> Option<usize> {
    if rows.is_empty() {
        return None;
    }
    previous_name
        .and_then(|name| find_row_by_name(rows, name))
        .or(Some(0))
}
