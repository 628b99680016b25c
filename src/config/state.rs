// src/config/state.rs
use super::options::AppOptions;
use crate::filter::FilterSelection;

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// Current choices in the left filter panel
    pub selection: FilterSelection,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
