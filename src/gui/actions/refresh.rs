// src/gui/actions/refresh.rs
use crate::gui::app::App;

/// Throw away the cached sheet and run a full pass against the source.
pub fn refresh(app: &mut App) {
    log::info!("UI: Refresh requested (cache age {:?})", app.cache.age());
    app.cache.invalidate();
    app.rebuild_view();
}
