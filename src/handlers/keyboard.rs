//! Keyboard Input Handler
//!
//! Handles all keyboard input. Popups get the keys first; everything else
//! maps to one selection control or one cursor move.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{RankMetric, VimCommandState};
use crate::App;

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Some platforms report releases too
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    // Free-text subregion entry captures every printable key
    if app.model.ui.subregion_input.is_some() {
        match key.code {
            KeyCode::Enter => app.submit_subregion_input(),
            KeyCode::Esc => app.cancel_subregion_input(),
            KeyCode::Backspace => {
                if let Some(input) = app.model.ui.subregion_input.as_mut() {
                    input.text.pop();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(input) = app.model.ui.subregion_input.as_mut() {
                    input.text.push(c);
                }
            }
            _ => {}
        }
        return Ok(());
    }

    // Subregion picker menu
    if app.model.ui.subregion_picker.is_some() {
        let vim_mode = app.model.ui.vim_mode;
        match key.code {
            KeyCode::Up => app.picker_previous(),
            KeyCode::Down => app.picker_next(),
            KeyCode::Char('k') if vim_mode => app.picker_previous(),
            KeyCode::Char('j') if vim_mode => app.picker_next(),
            KeyCode::Home => app.picker_first(),
            KeyCode::End => app.picker_last(),
            KeyCode::Enter => app.choose_subregion(),
            KeyCode::Esc | KeyCode::Char('s') => app.cancel_subregion_picker(),
            KeyCode::Char('q') => app.model.ui.should_quit = true,
            _ => {}
        }
        return Ok(());
    }

    // Country detail card
    if app.model.ui.detail_open {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.close_detail(),
            KeyCode::Char('q') => app.model.ui.should_quit = true,
            _ => {
                // Ignore other keys while popup is showing
            }
        }
        return Ok(());
    }

    let vim_mode = app.model.ui.vim_mode;
    let waiting_for_g = app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG;
    // Any key other than the second 'g' ends the 'gg' sequence
    app.model.ui.vim_command_state = VimCommandState::None;

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,

        // Selection controls
        KeyCode::Char('f') if ctrl => app.open_subregion_input(),
        KeyCode::Char('d') if vim_mode && ctrl => app.half_page_down(),
        KeyCode::Char('u') if vim_mode && ctrl => app.half_page_up(),
        KeyCode::Char('a') => app.toggle_alphabetical(),
        KeyCode::Char('p') => app.toggle_rank(RankMetric::Population),
        KeyCode::Char('A') => app.toggle_rank(RankMetric::Area),
        KeyCode::Char('c') => app.cycle_continent(true),
        KeyCode::Char('C') => app.cycle_continent(false),
        KeyCode::Char('s') => app.open_subregion_picker(),
        KeyCode::Char('/') => app.open_subregion_input(),
        KeyCode::Char('x') => app.reset_selection(),

        // Vim keybindings
        KeyCode::Char('j') if vim_mode => app.next_item(),
        KeyCode::Char('k') if vim_mode => app.previous_item(),
        KeyCode::Char('g') if vim_mode => {
            if waiting_for_g {
                // gg - jump to first
                app.jump_to_first();
            } else {
                // First 'g' press
                app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
        }
        KeyCode::Char('G') if vim_mode => app.jump_to_last(),

        // Standard navigation keys
        KeyCode::Down => app.next_item(),
        KeyCode::Up => app.previous_item(),
        KeyCode::PageDown => app.full_page_down(),
        KeyCode::PageUp => app.full_page_up(),
        KeyCode::Home => app.jump_to_first(),
        KeyCode::End => app.jump_to_last(),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Esc => app.model.dismiss_toast(),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Country;
    use crate::model::{Continent, Model};

    fn country(name: &str, continent: &str, subregion: &str, population: u64, area: f64) -> Country {
        Country {
            continents: vec![continent.to_string()],
            subregion: Some(subregion.to_string()),
            population: Some(population),
            area: Some(area),
            ..Country::named(name)
        }
    }

    fn app(vim_mode: bool) -> App {
        let mut model = Model::new("test".to_string(), vim_mode);
        model.dataset_loaded(
            vec![
                country("France", "Europe", "Western Europe", 67_000_000, 551_695.0),
                country("Cuba", "North America", "Caribbean", 11_000_000, 109_884.0),
                country("Chad", "Africa", "Middle Africa", 17_000_000, 1_284_000.0),
                country("Jamaica", "North America", "Caribbean", 3_000_000, 10_991.0),
            ],
            5,
        );
        App::with_model(model)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn press_ctrl(app: &mut App, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)).unwrap();
    }

    fn names(app: &App) -> Vec<String> {
        app.model.visible().iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_rank_keys_toggle() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.model.selection().rank_by(), Some(RankMetric::Population));
        assert_eq!(names(&app), vec!["France", "Chad", "Cuba", "Jamaica"]);

        press(&mut app, KeyCode::Char('A'));
        assert_eq!(app.model.selection().rank_by(), Some(RankMetric::Area));

        // Pressing the active radio again clears it
        press(&mut app, KeyCode::Char('A'));
        assert_eq!(app.model.selection().rank_by(), None);
        assert_eq!(names(&app), vec!["France", "Cuba", "Chad", "Jamaica"]);
    }

    #[test]
    fn test_continent_cycle_keys() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.model.selection().continent(), Some(Continent::Antarctica));
        assert!(app.model.visible().is_empty());

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.model.selection().continent(), Some(Continent::NorthAmerica));
        assert_eq!(names(&app), vec!["Cuba", "Jamaica"]);

        press(&mut app, KeyCode::Char('C'));
        press(&mut app, KeyCode::Char('C'));
        assert_eq!(app.model.selection().continent(), None);
    }

    #[test]
    fn test_subregion_picker_flow() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('s'));
        let picker = app.model.ui.subregion_picker.as_ref().unwrap();
        assert_eq!(picker.options, vec!["Caribbean", "Middle Africa", "Western Europe"]);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.model.ui.subregion_picker.is_none());
        assert_eq!(app.model.selection().subregion(), Some("Caribbean"));
        assert_eq!(names(&app), vec!["Cuba", "Jamaica"]);

        // "(none)" clears the filter
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.model.selection().subregion(), None);
        assert_eq!(names(&app).len(), 4);
    }

    #[test]
    fn test_picker_escape_leaves_selection() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);
        assert!(app.model.ui.subregion_picker.is_none());
        assert_eq!(app.model.selection().rank_by(), Some(RankMetric::Population));
    }

    #[test]
    fn test_free_text_subregion_captures_letters() {
        let mut app = app(false);
        press_ctrl(&mut app, 'f');
        for c in "Caribbeanx".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        // Letters went into the text, not to the controls
        assert!(!app.model.ui.should_quit);
        assert!(!app.model.selection().alphabetical());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.model.selection().subregion(), Some("Caribbean"));
        assert_eq!(names(&app), vec!["Cuba", "Jamaica"]);
    }

    #[test]
    fn test_free_text_subregion_is_exact_match() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('/'));
        for c in "caribbean".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.model.selection().subregion(), Some("caribbean"));
        assert!(app.model.visible().is_empty());
        assert!(app.model.ui.selected_index.is_none());
    }

    #[test]
    fn test_reset_key() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('x'));
        assert!(app.model.selection().is_default());
    }

    #[test]
    fn test_navigation_wraps_and_detail_opens() {
        let mut app = app(false);
        assert_eq!(app.model.ui.selected_index, Some(0));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.model.ui.selected_index, Some(3));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.model.ui.selected_index, Some(0));
        press(&mut app, KeyCode::End);
        assert_eq!(app.model.ui.selected_index, Some(3));

        press(&mut app, KeyCode::Enter);
        assert!(app.model.ui.detail_open);
        // Selection keys are inert while the card is open
        press(&mut app, KeyCode::Char('a'));
        assert!(!app.model.selection().alphabetical());
        press(&mut app, KeyCode::Esc);
        assert!(!app.model.ui.detail_open);
    }

    #[test]
    fn test_cursor_stays_on_country_when_sorting() {
        let mut app = app(false);
        press(&mut app, KeyCode::Down); // Cuba
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(names(&app), vec!["Chad", "Cuba", "France", "Jamaica"]);
        assert_eq!(app.model.selected_country().map(|c| c.name.as_str()), Some("Cuba"));
    }

    #[test]
    fn test_vim_gg_and_g() {
        let mut app = app(true);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.model.ui.selected_index, Some(3));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.model.ui.selected_index, Some(3));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.model.ui.selected_index, Some(0));

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.model.ui.selected_index, Some(1));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.model.ui.selected_index, Some(0));
    }

    #[test]
    fn test_interrupted_gg_does_not_jump() {
        let mut app = app(true);
        press(&mut app, KeyCode::Char('G'));
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.model.ui.selected_index, Some(2));
    }

    #[test]
    fn test_quit() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.model.ui.should_quit);
    }
}
