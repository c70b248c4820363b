//! Core comicgen library (data model, prompt renderer, record store, config).

pub mod config;
pub mod i18n;
pub mod models;
pub mod references;
pub mod render;
pub mod store;
