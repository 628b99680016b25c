// src/gui/components/mod.rs
pub mod filter_panel;
pub mod listing_view;
pub mod status_bar;
