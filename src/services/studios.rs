// src/services/studios.rs

//! Studio overview page extraction.
//!
//! Every extractor is a pure function over the parsed document. A selector
//! that matches nothing degrades its field to absent (or an empty list) and
//! leaves the rest of the record untouched; markup drift on the directory
//! site shows up as missing fields, not as errors.

use scraper::{Html, Selector};

use crate::error::Result;
use crate::models::{AddressParts, ContactInfo, StudioRecord, StudioSelectorConfig};
use crate::utils::http::{Fetch, fetch_document};
use crate::utils::now_stamp;

use super::{first_node_text, node_text, parse_selector};

/// Compiled selector set for the studio overview template.
///
/// Compiling once per run turns a bad fingerprint string into a startup
/// config error instead of a silent per-page failure.
pub struct StudioSelectors {
    name: Selector,
    overview: Selector,
    contact: Selector,
    address: Selector,
    description: Selector,
    category: Selector,
    promotion: Selector,
    anchor: Selector,
}

impl StudioSelectors {
    pub fn compile(config: &StudioSelectorConfig) -> Result<Self> {
        Ok(Self {
            name: parse_selector(&config.name)?,
            overview: parse_selector(&config.overview)?,
            contact: parse_selector(&config.contact)?,
            address: parse_selector(&config.address)?,
            description: parse_selector(&config.description)?,
            category: parse_selector(&config.category)?,
            promotion: parse_selector(&config.promotion)?,
            anchor: parse_selector("a[href]")?,
        })
    }
}

/// Extract the studio name heading.
fn extract_name(document: &Html, selectors: &StudioSelectors) -> Option<String> {
    first_node_text(document, &selectors.name)
}

/// Extract the trimmed text of every overview navigation button.
///
/// A missing container yields an empty list, not absent.
fn extract_overview_links(document: &Html, selectors: &StudioSelectors) -> Vec<String> {
    document
        .select(&selectors.overview)
        .flat_map(|container| container.select(&selectors.anchor))
        .map(node_text)
        .collect()
}

/// Classify every contact anchor by its URI scheme.
///
/// `mailto:` fills email, `tel:` fills phone, anything else is treated as the
/// homepage. The last anchor of a given kind wins; no dedup, no validation of
/// the address or number format.
fn extract_contact(document: &Html, selectors: &StudioSelectors) -> ContactInfo {
    let mut contact = ContactInfo::default();
    for container in document.select(&selectors.contact) {
        for anchor in container.select(&selectors.anchor) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            if let Some(address) = href.strip_prefix("mailto:") {
                contact.email = Some(address.trim().to_string());
            } else if let Some(number) = href.strip_prefix("tel:") {
                contact.phone = Some(number.trim().to_string());
            } else {
                contact.homepage = Some(href.trim().to_string());
            }
        }
    }
    contact
}

/// Split the address paragraph into segments and derive street, postal code
/// and city by fixed positions.
///
/// The site renders `"Street, 12345 City"`, so segment 1 split on single
/// spaces puts the postal code at token 1 and the city at token 2 (token 0 is
/// the empty string before the leading space). Addresses in any other shape
/// produce absent or wrong derived values; that weakness is kept as designed.
fn extract_address(document: &Html, selectors: &StudioSelectors) -> AddressParts {
    let Some(element) = document.select(&selectors.address).next() else {
        return AddressParts::default();
    };

    let text: String = element.text().collect();
    let raw: Vec<String> = text.split(',').map(str::to_string).collect();

    let street = raw.first().map(|s| s.trim().to_string());
    let (postal_code, city) = match raw.get(1) {
        Some(second) => {
            let tokens: Vec<&str> = second.split(' ').collect();
            (
                tokens.get(1).map(|t| t.trim().to_string()),
                tokens.get(2).map(|t| t.trim().to_string()),
            )
        }
        None => (None, None),
    };

    AddressParts {
        raw,
        street,
        postal_code,
        city,
    }
}

/// Extract the studio description, collapsing whitespace-only content to
/// absent.
fn extract_description(document: &Html, selectors: &StudioSelectors) -> Option<String> {
    first_node_text(document, &selectors.description).filter(|text| !text.is_empty())
}

/// Extract the trimmed text of every category tag, in document order.
fn extract_categories(document: &Html, selectors: &StudioSelectors) -> Vec<String> {
    document.select(&selectors.category).map(node_text).collect()
}

/// Extract the promotion / sale text.
fn extract_promotion(document: &Html, selectors: &StudioSelectors) -> Option<String> {
    first_node_text(document, &selectors.promotion)
}

/// Assemble a studio record from an already-parsed overview page.
///
/// All extractors run against the same document and are independent of each
/// other; a record is always produced, however sparse.
pub fn parse_studio_page(
    document: &Html,
    selectors: &StudioSelectors,
    url: &str,
) -> StudioRecord {
    let name = extract_name(document, selectors);
    let address = extract_address(document, selectors);
    let contact = extract_contact(document, selectors);

    if name.is_none() {
        log::debug!("No studio name found at {url}");
    }
    if address.raw.is_empty() {
        log::debug!("No address found at {url}");
    }

    let stamp = now_stamp();
    StudioRecord {
        name,
        address_raw: address.raw,
        postal_code: address.postal_code,
        city: address.city,
        street: address.street,
        overview_links: extract_overview_links(document, selectors),
        description: extract_description(document, selectors),
        email: contact.email,
        homepage: contact.homepage,
        phone: contact.phone,
        categories: extract_categories(document, selectors),
        promotion: extract_promotion(document, selectors),
        source_url: url.to_string(),
        created_at: stamp.clone(),
        updated_at: stamp,
    }
}

/// Fetch and scrape a studio overview page.
///
/// Returns `None` when the page cannot be loaded; the failure stays contained
/// to this URL.
pub fn scrape_studio(
    fetcher: &dyn Fetch,
    selectors: &StudioSelectors,
    url: &str,
) -> Option<StudioRecord> {
    let document = fetch_document(fetcher, url)?;
    Some(parse_studio_page(&document, selectors, url))
}
