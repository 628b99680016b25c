// src/gui/components/filter_panel.rs
//
// Renders the left filter panel: one multi-select list per facet plus the
// price-bucket checkboxes. Edits app.state.gui.selection in place and, when
// anything changed, runs a new render pass.

use std::collections::BTreeSet;
use std::fmt::Display;

use eframe::egui;

use crate::{
    facets::Dimension,
    filter::PriceBucket,
    gui::{actions, app::App},
};

/// Collapsible multi-select over `options`. Clicking a value toggles it.
/// Returns true if the selection changed.
fn multi_select<T>(ui: &mut egui::Ui, dim: Dimension, options: &[T], selected: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone + Display,
{
    let mut changed = false;
    let title = if selected.is_empty() {
        s!(dim.label())
    } else {
        format!("{} ({})", dim.label(), selected.len())
    };

    egui::CollapsingHeader::new(title)
        .id_salt(("facet", dim))
        .default_open(matches!(dim, Dimension::Country | Dimension::Region))
        .show(ui, |ui| {
            if options.is_empty() {
                ui.weak("No values");
                return;
            }

            ui.horizontal(|ui| {
                if ui.small_button("All").clicked() {
                    selected.extend(options.iter().cloned());
                    changed = true;
                }
                if ui.small_button("Clear").clicked() && !selected.is_empty() {
                    selected.clear();
                    changed = true;
                }
            });

            egui::ScrollArea::vertical()
                .id_salt(("facet_scroll", dim))
                .max_height(180.0)
                .show(ui, |ui| {
                    for value in options {
                        let is_selected = selected.contains(value);
                        if ui.selectable_label(is_selected, value.to_string()).clicked() {
                            if is_selected { selected.remove(value); } else { selected.insert(value.clone()); }
                            changed = true;
                        }
                    }
                });
        });

    if changed {
        log::info!("UI: {} selection → {} value(s)", dim, selected.len());
    }
    changed
}

fn price_checkboxes(ui: &mut egui::Ui, selected: &mut BTreeSet<PriceBucket>) -> bool {
    let mut changed = false;
    ui.label(egui::RichText::new("Price").strong());
    for bucket in PriceBucket::ALL {
        let mut on = selected.contains(&bucket);
        if ui.checkbox(&mut on, bucket.label()).changed() {
            if on { selected.insert(bucket); } else { selected.remove(&bucket); }
            log::info!("UI: Price bucket {} → {}", bucket, on);
            changed = true;
        }
    }
    changed
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");

    let mut clear_all = false;
    ui.horizontal(|ui| {
        let active = app.state.gui.selection.active_count();
        ui.label(format!("{} active", active));
        if ui.add_enabled(active > 0, egui::Button::new("Clear all")).clicked() {
            clear_all = true;
        }
    });
    if clear_all {
        actions::clear_filters(app);
    }

    ui.separator();

    // Match the scroll bar aesthetics used in the listing
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let mut changed = false;
    egui::ScrollArea::vertical()
        .id_salt("filters_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            let facets = &app.facets;
            let sel = &mut app.state.gui.selection;

            changed |= multi_select(ui, Dimension::Country, &facets.countries, &mut sel.countries);
            changed |= multi_select(ui, Dimension::Region, &facets.regions, &mut sel.regions);
            changed |= multi_select(ui, Dimension::Producer, &facets.producers, &mut sel.producers);
            changed |= multi_select(ui, Dimension::Vintage, &facets.years, &mut sel.years);
            changed |= multi_select(ui, Dimension::Grape, &facets.grapes, &mut sel.grapes);
            changed |= multi_select(ui, Dimension::Size, &facets.sizes, &mut sel.sizes);
            changed |= multi_select(ui, Dimension::Type, &facets.types, &mut sel.types);

            ui.separator();
            changed |= price_checkboxes(ui, &mut sel.prices);
        });

    if changed {
        app.rebuild_view();
    }
}
