//! Terminal platform: reads commands, runs effects, renders the view model.
mod app;
mod commands;
mod effects;
mod persistence;
mod ui;
mod viewport;

pub use app::run_app;
