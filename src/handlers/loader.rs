//! Loader Response Handler
//!
//! Installs the loaded dataset, or records the failure, and tells the user.

use crate::logic::errors::{classify_error, format_error_message};
use crate::logic::formatting::format_elapsed_ms;
use crate::services::LoadResponse;
use crate::App;

/// Handle the dataset load result from the background task
///
/// Only the first response counts; the dataset is never replaced.
pub fn handle_load_response(app: &mut App, response: LoadResponse) {
    let LoadResponse {
        countries,
        elapsed_ms,
    } = response;

    match countries {
        Ok(countries) => {
            let count = countries.len();
            if app.model.dataset_loaded(countries, elapsed_ms) {
                app.model.show_toast(format!(
                    "Loaded {} countries in {}",
                    count,
                    format_elapsed_ms(elapsed_ms)
                ));
            } else {
                tracing::warn!("ignoring second dataset load");
            }
        }
        Err(error) => {
            let error_type = classify_error(&error);
            let message = format_error_message(&error);
            tracing::error!(?error_type, "dataset load failed: {:#}", error);
            if app.model.dataset.set_failed(error_type, message.clone()) {
                app.model.show_toast(format!("Error: {} ({})", message, error_type.label()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Country;
    use crate::logic::errors::ErrorType;
    use crate::model::{LoadState, Model, RankMetric};

    fn app() -> App {
        App::with_model(Model::new("test".to_string(), false))
    }

    #[test]
    fn test_successful_load_installs_dataset() {
        let mut app = app();
        handle_load_response(
            &mut app,
            LoadResponse {
                countries: Ok(vec![Country::named("Chad"), Country::named("Benin")]),
                elapsed_ms: 42,
            },
        );
        assert_eq!(app.model.visible_len(), 2);
        assert!(matches!(
            app.model.dataset.load_state,
            LoadState::Loaded { count: 2, elapsed_ms: 42, .. }
        ));
        let (toast, _) = app.model.ui.toast_message.as_ref().unwrap();
        assert_eq!(toast, "Loaded 2 countries in 42ms");
    }

    #[test]
    fn test_selection_made_while_loading_survives() {
        let mut app = app();
        app.model.apply_selection(|s| s.set_rank_by(RankMetric::Area));

        let mut big = Country::named("Big");
        big.area = Some(100.0);
        let mut small = Country::named("Small");
        small.area = Some(1.0);
        handle_load_response(
            &mut app,
            LoadResponse {
                countries: Ok(vec![small, big]),
                elapsed_ms: 1,
            },
        );
        let names: Vec<&str> = app.model.visible().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Big", "Small"]);
    }

    #[test]
    fn test_failed_load_keeps_empty_dataset() {
        let mut app = app();
        let error = anyhow::Error::from(serde_json::from_str::<Vec<u8>>("{").unwrap_err())
            .context("Failed to parse countries response");
        handle_load_response(
            &mut app,
            LoadResponse {
                countries: Err(error),
                elapsed_ms: 3,
            },
        );
        assert_eq!(app.model.visible_len(), 0);
        assert!(matches!(
            app.model.dataset.load_state,
            LoadState::Failed { error_type: ErrorType::Parse, .. }
        ));
        let (toast, _) = app.model.ui.toast_message.as_ref().unwrap();
        assert!(toast.starts_with("Error:"));

        // Selection still works over the empty dataset
        app.model.apply_selection(|s| s.toggle_alphabetical());
        assert_eq!(app.model.visible_len(), 0);
    }
}
