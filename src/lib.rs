// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;

pub mod csv;
pub mod wine;
pub mod normalize;
pub mod source;

pub mod data;
pub mod facets;
pub mod filter;
pub mod listing;

pub mod cli;
pub mod gui;
