//! `palletstore` program wiring: seed, persist, reload, report.

pub mod app;
pub mod config;
pub mod seed;

pub use app::run;
pub use config::AppConfig;
