//! App Orchestration Methods
//!
//! `impl App` blocks grouped by what they act on:
//! - navigation: cursor movement and the detail card
//! - selection: the filter/sort controls and the subregion popups
//!
//! Each method changes the model through its own transitions and leaves
//! rendering to `ui`.

pub(crate) mod navigation;
pub(crate) mod selection;
