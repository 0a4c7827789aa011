// src/services/workshops.rs

//! Workshop schedule and event detail page extraction.
//!
//! The batch fans out from each studio overview to the studio's `/sw/`
//! schedule page and from there to every linked `/e/` event page. The same
//! degradation rules apply as for the studio extractors: missing markup means
//! missing fields, never an aborted record.

use scraper::{Html, Selector};
use url::Url;

use crate::error::Result;
use crate::models::{WorkshopDetailRecord, WorkshopRecord, WorkshopSelectorConfig};
use crate::utils::http::{Fetch, fetch_document};
use crate::utils::{now_stamp, resolve_url};

use super::{first_node_text, node_text, parse_selector};

/// Compiled selector set for the schedule and event detail templates.
pub struct WorkshopSelectors {
    heading: Selector,
    schedule: Selector,
    row_title: Selector,
    row_date: Selector,
    event_path_marker: String,
    detail_title: Selector,
    detail_date: Selector,
    detail_time: Selector,
    detail_price: Selector,
    detail_trainer: Selector,
    detail_description: Selector,
    anchor: Selector,
}

impl WorkshopSelectors {
    pub fn compile(config: &WorkshopSelectorConfig) -> Result<Self> {
        Ok(Self {
            heading: parse_selector(&config.heading)?,
            schedule: parse_selector(&config.schedule)?,
            row_title: parse_selector(&config.row_title)?,
            row_date: parse_selector(&config.row_date)?,
            event_path_marker: config.event_path_marker.clone(),
            detail_title: parse_selector(&config.detail_title)?,
            detail_date: parse_selector(&config.detail_date)?,
            detail_time: parse_selector(&config.detail_time)?,
            detail_price: parse_selector(&config.detail_price)?,
            detail_trainer: parse_selector(&config.detail_trainer)?,
            detail_description: parse_selector(&config.detail_description)?,
            anchor: parse_selector("a[href]")?,
        })
    }
}

/// Extract one workshop row per event link on an already-parsed schedule page.
///
/// Only anchors whose href carries the event path marker count as rows; other
/// navigation inside the schedule container is ignored. Links are resolved to
/// absolute URLs against the page URL.
pub fn parse_schedule_page(
    document: &Html,
    selectors: &WorkshopSelectors,
    url: &str,
) -> Vec<WorkshopRecord> {
    let studio = first_node_text(document, &selectors.heading);
    let base = Url::parse(url).ok();
    let stamp = now_stamp();

    let mut records = Vec::new();
    for container in document.select(&selectors.schedule) {
        for anchor in container.select(&selectors.anchor) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            if !href.contains(&selectors.event_path_marker) {
                continue;
            }

            let link = match &base {
                Some(base) => resolve_url(base, href),
                None => href.to_string(),
            };
            let title = anchor
                .select(&selectors.row_title)
                .next()
                .map(node_text)
                .or_else(|| Some(node_text(anchor)))
                .filter(|t| !t.is_empty());
            let date = anchor.select(&selectors.row_date).next().map(node_text);

            records.push(WorkshopRecord {
                studio: studio.clone(),
                title,
                date,
                link,
                source_url: url.to_string(),
                created_at: stamp.clone(),
                updated_at: stamp.clone(),
            });
        }
    }
    records
}

/// Assemble a workshop detail record from an already-parsed event page.
pub fn parse_event_page(
    document: &Html,
    selectors: &WorkshopSelectors,
    url: &str,
) -> WorkshopDetailRecord {
    let stamp = now_stamp();
    WorkshopDetailRecord {
        title: first_node_text(document, &selectors.detail_title),
        date: first_node_text(document, &selectors.detail_date),
        time: first_node_text(document, &selectors.detail_time),
        price: first_node_text(document, &selectors.detail_price),
        trainer: first_node_text(document, &selectors.detail_trainer),
        description: first_node_text(document, &selectors.detail_description)
            .filter(|text| !text.is_empty()),
        source_url: url.to_string(),
        created_at: stamp.clone(),
        updated_at: stamp,
    }
}

/// Fetch a schedule page and scrape its workshop rows.
///
/// A page that fails to load yields no rows; the failure stays contained.
pub fn scrape_workshops(
    fetcher: &dyn Fetch,
    selectors: &WorkshopSelectors,
    url: &str,
) -> Vec<WorkshopRecord> {
    match fetch_document(fetcher, url) {
        Some(document) => parse_schedule_page(&document, selectors, url),
        None => Vec::new(),
    }
}

/// Fetch and scrape a single event detail page.
pub fn scrape_workshop_detail(
    fetcher: &dyn Fetch,
    selectors: &WorkshopSelectors,
    url: &str,
) -> Option<WorkshopDetailRecord> {
    let document = fetch_document(fetcher, url)?;
    Some(parse_event_page(&document, selectors, url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkshopSelectorConfig;

    const SCHEDULE_PAGE: &str = r#"
        <html><body>
          <h1 class="MuiTypography-root MuiTypography-h1 css-l64ylu">Poda Studio</h1>
          <div class="MuiStack-root css-1v5z18m">
            <a href="/e/handstand-basics">
              <p class="MuiTypography-root MuiTypography-body1 css-d8fzsd">Handstand Basics</p>
              <p class="MuiTypography-root MuiTypography-body2 css-1a4qu0s">Sa., 14.09.</p>
            </a>
            <a href="/e/flexi-flow">
              <p class="MuiTypography-root MuiTypography-body1 css-d8fzsd">Flexi Flow</p>
            </a>
            <a href="/s/poda-studio">Zurück zum Studio</a>
          </div>
        </body></html>"#;

    const EVENT_PAGE: &str = r#"
        <html><body>
          <h1 class="MuiTypography-root MuiTypography-h1 css-l64ylu">Handstand Basics</h1>
          <p class="MuiTypography-root MuiTypography-body1 css-1e1x7b6">Samstag, 14.09.2024</p>
          <p class="MuiTypography-root MuiTypography-body1 css-cs23xy">14:00 - 16:00</p>
          <p class="MuiTypography-root MuiTypography-body1 css-wjsspw">35,00 €</p>
          <p class="MuiTypography-root MuiTypography-body1 css-1t2vmkw">Anna Beispiel</p>
          <div class="MuiBox-root css-0">Zwei Stunden Handstand von Grund auf.</div>
        </body></html>"#;

    fn selectors() -> WorkshopSelectors {
        WorkshopSelectors::compile(&WorkshopSelectorConfig::default()).unwrap()
    }

    #[test]
    fn schedule_rows_only_from_event_links() {
        let document = Html::parse_document(SCHEDULE_PAGE);
        let rows =
            parse_schedule_page(&document, &selectors(), "https://www.eversports.de/sw/poda-studio");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].studio.as_deref(), Some("Poda Studio"));
        assert_eq!(rows[0].title.as_deref(), Some("Handstand Basics"));
        assert_eq!(rows[0].date.as_deref(), Some("Sa., 14.09."));
        assert_eq!(rows[0].link, "https://www.eversports.de/e/handstand-basics");
        assert_eq!(rows[1].title.as_deref(), Some("Flexi Flow"));
        assert_eq!(rows[1].date, None);
    }

    #[test]
    fn schedule_without_container_yields_no_rows() {
        let document = Html::parse_document("<html><body></body></html>");
        let rows = parse_schedule_page(&document, &selectors(), "https://x.de/sw/y");
        assert!(rows.is_empty());
    }

    #[test]
    fn row_title_falls_back_to_anchor_text() {
        let document = Html::parse_document(
            r#"<div class="MuiStack-root css-1v5z18m">
                 <a href="/e/bare-link">Spontankurs</a>
               </div>"#,
        );
        let rows = parse_schedule_page(&document, &selectors(), "https://x.de/sw/y");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title.as_deref(), Some("Spontankurs"));
    }

    #[test]
    fn event_page_full_extraction() {
        let document = Html::parse_document(EVENT_PAGE);
        let record =
            parse_event_page(&document, &selectors(), "https://www.eversports.de/e/handstand-basics");

        assert_eq!(record.title.as_deref(), Some("Handstand Basics"));
        assert_eq!(record.date.as_deref(), Some("Samstag, 14.09.2024"));
        assert_eq!(record.time.as_deref(), Some("14:00 - 16:00"));
        assert_eq!(record.price.as_deref(), Some("35,00 €"));
        assert_eq!(record.trainer.as_deref(), Some("Anna Beispiel"));
        assert_eq!(
            record.description.as_deref(),
            Some("Zwei Stunden Handstand von Grund auf.")
        );
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn event_page_missing_nodes_degrade_to_absent() {
        let document = Html::parse_document("<html><body></body></html>");
        let record = parse_event_page(&document, &selectors(), "https://x.de/e/y");
        assert_eq!(record.title, None);
        assert_eq!(record.price, None);
        assert_eq!(record.trainer, None);
        assert_eq!(record.description, None);
    }
}
