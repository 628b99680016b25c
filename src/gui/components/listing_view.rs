// src/gui/components/listing_view.rs
//
// Draws the grouped wine list. Purely a view over app.listing.
// Three states: load error, no matches, or country → region → producer groups
// with a small table of wines under each producer.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::consts::{APP_TITLE, NO_MATCHES},
    gui::app::App,
    listing::{ProducerGroup, group_label},
};

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading(APP_TITLE);
    ui.separator();

    if let Some(err) = &app.error {
        ui.colored_label(ui.visuals().error_fg_color, format!("Error: {}", err));
        ui.label("Nothing is shown until the sheet loads. Use Refresh to try again.");
        return;
    }

    if app.listing.is_empty() {
        ui.label(RichText::new(NO_MATCHES).italics());
        return;
    }

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    egui::ScrollArea::vertical()
        .id_salt("listing_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (ci, country) in app.listing.countries.iter().enumerate() {
                ui.add_space(6.0);
                ui.label(RichText::new(group_label(&country.country)).heading().strong());

                for (ri, region) in country.regions.iter().enumerate() {
                    ui.add_space(4.0);
                    ui.label(RichText::new(group_label(&region.region)).size(17.0).strong());

                    for (pi, producer) in region.producers.iter().enumerate() {
                        ui.indent(("producer", ci, ri, pi), |ui| {
                            wine_table(ui, (ci, ri, pi), producer);
                        });
                    }
                }
                ui.separator();
            }
        });
}

fn wine_table(ui: &mut egui::Ui, key: (usize, usize, usize), producer: &ProducerGroup) {
    ui.label(RichText::new(group_label(&producer.producer)).strong());

    TableBuilder::new(ui)
        .id_salt(("wines", key))
        .striped(true)
        .vscroll(false)
        .column(Column::exact(48.0))
        .column(Column::initial(260.0).at_least(120.0).clip(true))
        .column(Column::initial(200.0).at_least(80.0).clip(true))
        .column(Column::exact(70.0))
        .column(Column::remainder().at_least(60.0))
        .body(|body| {
            body.rows(ROW_H, producer.wines.len(), |mut row| {
                let Some(w) = producer.wines.get(row.index()) else { return };
                row.col(|ui| { ui.label(&w.vintage); });
                row.col(|ui| { ui.label(&w.name); });
                row.col(|ui| { ui.label(RichText::new(&w.grapes).weak()); });
                row.col(|ui| { ui.label(&w.size); });
                row.col(|ui| {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(&w.price); });
                });
            });
        });
}
