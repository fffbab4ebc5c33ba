//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - loader: the one-shot dataset load result from the background task
//! - keyboard: User keyboard input
//!
//! Handlers are functions that take &mut App and process events.

pub mod keyboard;
pub mod loader;

// Re-export for convenience
pub use keyboard::handle_key;
pub use loader::handle_load_response;
