// src/models/mod.rs

//! Domain models for the scraper application.

mod config;
mod studio;
mod workshop;

// Re-export all public types
pub use config::{
    Config, ExportConfig, HttpConfig, SelectorConfig, StudioSelectorConfig, WorkshopSelectorConfig,
};
pub use studio::{AddressParts, ContactInfo, StudioRecord};
pub use workshop::{WorkshopDetailRecord, WorkshopRecord};
