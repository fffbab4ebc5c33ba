//! globetui library
//!
//! Exposes the dataset, selection and pipeline modules for the binary and
//! for testing.

pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod services;

pub use api::Country;
pub use model::selection::{Continent, RankMetric, SelectionError, SelectionState};
