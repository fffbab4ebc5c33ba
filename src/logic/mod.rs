//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or network:
//! - pipeline: filter-and-rank evaluation of the dataset
//! - collation: locale-aware ordering of country names
//! - subregions: subregion choices derived from the dataset
//! - navigation: cursor movement over the country list
//! - formatting: human-readable record fields
//! - errors: load error classification
//! - ui: control cycling and transient UI state

pub mod collation;
pub mod errors;
pub mod formatting;
pub mod navigation;
pub mod pipeline;
pub mod subregions;
pub mod ui;
