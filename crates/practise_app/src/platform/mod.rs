//! Process-level plumbing: config, logging and command dispatch.
mod app;
mod config;
mod logging;

pub use app::run_app;
