// src/pipeline/batch.rs

//! Sequential batch processing.

use std::thread;
use std::time::Duration;

use crate::models::{Config, StudioRecord};
use crate::services::{
    StudioSelectors, WorkshopSelectors, scrape_studio, scrape_workshop_detail, scrape_workshops,
};
use crate::utils::http::Fetch;
use crate::utils::workshop_list_url;

use super::tables::{AttemptStatus, BatchOutcome, UrlAttempt};

/// Compiled selector sets for one batch run.
pub struct Selectors {
    pub studio: StudioSelectors,
    pub workshop: WorkshopSelectors,
}

impl Selectors {
    pub fn compile(config: &Config) -> crate::error::Result<Self> {
        Ok(Self {
            studio: StudioSelectors::compile(&config.selectors.studio)?,
            workshop: WorkshopSelectors::compile(&config.selectors.workshop)?,
        })
    }
}

/// Scrape every URL in input order into accumulator tables.
///
/// One URL at a time, no overlap. A URL whose studio page fails to load adds
/// nothing to the content tables but is still recorded in the attempt table;
/// a failed sub-page affects only its own rows. Nothing here aborts the
/// batch.
pub fn run_batch(
    fetcher: &dyn Fetch,
    selectors: &Selectors,
    urls: &[String],
    delay_ms: u64,
) -> BatchOutcome {
    let delay = Duration::from_millis(delay_ms);
    let mut outcome = BatchOutcome::default();

    for (index, url) in urls.iter().enumerate() {
        log::info!("Scraping data from: {url}");

        match scrape_studio(fetcher, &selectors.studio, url) {
            Some(record) => {
                outcome.attempts.push(UrlAttempt {
                    url: url.clone(),
                    status: AttemptStatus::Ok,
                });
                fan_out_workshops(fetcher, selectors, &record, &mut outcome);
                outcome.studios.push(record);
            }
            None => {
                outcome.attempts.push(UrlAttempt {
                    url: url.clone(),
                    status: AttemptStatus::Failed,
                });
            }
        }

        if !delay.is_zero() && index + 1 < urls.len() {
            thread::sleep(delay);
        }
    }

    outcome
}

/// Scrape the studio's schedule page and every linked event page.
fn fan_out_workshops(
    fetcher: &dyn Fetch,
    selectors: &Selectors,
    studio: &StudioRecord,
    outcome: &mut BatchOutcome,
) {
    let Some(schedule_url) = workshop_list_url(&studio.source_url) else {
        log::debug!(
            "No schedule URL derivable from {}, skipping workshops",
            studio.source_url
        );
        return;
    };

    let workshops = scrape_workshops(fetcher, &selectors.workshop, &schedule_url);
    log::info!("Workshop Liste: {} entries", workshops.len());

    for workshop in &workshops {
        if let Some(detail) = scrape_workshop_detail(fetcher, &selectors.workshop, &workshop.link)
        {
            outcome.workshop_details.push(detail);
        }
    }
    outcome.workshops.extend(workshops);
}
