//! Pipeline entry points for scraper operations.
//!
//! - `load_urls`: Read the URL column from an input spreadsheet
//! - `run_batch`: Scrape every URL sequentially into accumulator tables

pub mod batch;
pub mod load;
pub mod tables;

pub use batch::{Selectors, run_batch};
pub use load::load_urls;
pub use tables::{AttemptStatus, BatchOutcome, TableKind, TableRecord, UrlAttempt};
