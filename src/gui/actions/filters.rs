// src/gui/actions/filters.rs
use crate::{filter::FilterSelection, gui::app::App};

pub fn clear_filters(app: &mut App) {
    if app.state.gui.selection.is_empty() { return; }
    app.state.gui.selection = FilterSelection::default();
    log::info!("UI: Filters cleared");
    app.rebuild_view();
}
