// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, options::AppOptions, state::AppState},
    data::Catalog,
    facets::FacetOptions,
    listing::Listing,
    source::{LocationSource, SheetCache},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let app_options = AppOptions::from_env()?;
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(AppState::new(app_options))))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub cache: SheetCache<LocationSource>,

    // results of the last render pass
    pub catalog: Option<Arc<Catalog>>,
    pub facets: FacetOptions,
    pub listing: Listing,
    pub matched: usize,

    /// Set when the last pass could not load the sheet; nothing else is shown then.
    pub error: Option<String>,
    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let src = &state.options.source;
        let cache = SheetCache::new(LocationSource::new(src.location.clone()), src.ttl);
        log::info!("Init: source={} ttl={}s", src.location, src.ttl.as_secs());

        let mut app = Self {
            state,
            cache,
            catalog: None,
            facets: FacetOptions::default(),
            listing: Listing::default(),
            matched: 0,
            error: None,
            status: s!("Idle"),
        };
        app.rebuild_view();
        app
    }

    /// One render pass: catalog (cached) → facets → filter → group.
    /// A load failure stops the pass and leaves only the error to show.
    pub fn rebuild_view(&mut self) {
        let catalog = match self.cache.get() {
            Ok(c) => c,
            Err(e) => {
                self.catalog = None;
                self.facets = FacetOptions::default();
                self.listing = Listing::default();
                self.matched = 0;
                self.error = Some(e.to_string());
                self.status = s!("Could not load the wine list");
                return;
            }
        };

        let (facets, settled) = FacetOptions::settle(catalog.rows(), &self.state.gui.selection);
        if settled != self.state.gui.selection {
            log::debug!("UI: Dropped picks no longer offered by parent facets");
            self.state.gui.selection = settled;
        }

        let view = catalog.view(&self.state.gui.selection);
        self.matched = view.len();
        self.listing = view.listing();
        self.status = format!("Showing {} of {} wines", self.matched, catalog.len());
        log::debug!(
            "View: {} active filter(s), {} of {} rows",
            self.state.gui.selection.active_count(),
            self.matched,
            catalog.len()
        );

        self.facets = facets;
        self.catalog = Some(catalog);
        self.error = None;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Periodic refresh once the TTL runs out; after a failure wait for the user.
        // Zero TTL: manual refresh only.
        let ttl = self.cache.ttl();
        if !ttl.is_zero() {
            if self.error.is_none() && self.cache.is_stale() {
                self.rebuild_view();
            }
            ctx.request_repaint_after(ttl);
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            crate::gui::components::status_bar::draw(ui, self);
        });

        egui::SidePanel::left("filters")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                crate::gui::components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::listing_view::draw(ui, self);
        });
    }
}
