mod app;
mod config;
mod effects;
mod logging;
mod navigation;
mod ui;

pub use app::run_app;
