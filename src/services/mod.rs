//! Service layer for the scraper application.
//!
//! This module contains the extraction logic for:
//! - Studio overview pages (`studios`)
//! - Workshop schedule and event detail pages (`workshops`)

mod studios;
mod workshops;

pub use studios::{StudioSelectors, parse_studio_page, scrape_studio};
pub use workshops::{
    WorkshopSelectors, parse_event_page, parse_schedule_page, scrape_workshop_detail,
    scrape_workshops,
};

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};

/// Parse a CSS selector string, mapping failures to a config-level error.
pub(crate) fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// Collected, trimmed text of a node.
pub(crate) fn node_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first node matching `selector`, if any.
pub(crate) fn first_node_text(document: &Html, selector: &Selector) -> Option<String> {
    document.select(selector).next().map(node_text)
}
