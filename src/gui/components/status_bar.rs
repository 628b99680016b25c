// src/gui/components/status_bar.rs

use std::time::Duration;

use eframe::egui;

use crate::gui::{actions, app::App};

const AGE_TICK: Duration = Duration::from_secs(1);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("Refresh").on_hover_text("Reload the sheet now").clicked() {
            actions::refresh(app);
        }

        ui.label(&app.status);

        if let Some(age) = app.cache.age() {
            ui.weak(format!("· data {}s old, refresh every {}s", age.as_secs(), app.cache.ttl().as_secs()));
            // Keep the age ticking without input
            ui.ctx().request_repaint_after(AGE_TICK);
        }
    });
}
