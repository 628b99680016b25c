// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{refresh, clear_filters}.

mod filters; // src/gui/actions/filters.rs
mod refresh; // src/gui/actions/refresh.rs

pub use filters::clear_filters;
pub use refresh::refresh;
