//! External Services
//!
//! Services that interact with external systems:
//! - loader: one-shot dataset load (HTTP or local file) in a background task

pub mod loader;

pub use loader::{spawn_dataset_load, DatasetSource, LoadResponse};
