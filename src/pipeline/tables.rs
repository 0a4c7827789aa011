// src/pipeline/tables.rs

//! Accumulator tables and their export schema.
//!
//! Each table is a typed `Vec` on [`BatchOutcome`]; table identity is the
//! [`TableKind`] enum, which also owns the fixed export file stems.

use crate::models::{StudioRecord, WorkshopDetailRecord, WorkshopRecord};

/// The fixed set of export tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    StudioOverview,
    WorkshopList,
    WorkshopDetails,
    Urls,
}

impl TableKind {
    /// File stem used for both CSV and Excel exports.
    pub fn file_stem(&self) -> &'static str {
        match self {
            TableKind::StudioOverview => "Pole_Studio_Übersicht_S",
            TableKind::WorkshopList => "Workshop_Liste_SW",
            TableKind::WorkshopDetails => "Workshop_Übersicht_E",
            TableKind::Urls => "All_URLs",
        }
    }
}

/// A record type that can be flattened to one export row.
///
/// List-valued fields are joined with `"; "`; absent fields become empty
/// cells. No row-index column is ever written.
pub trait TableRecord {
    const KIND: TableKind;

    fn headers() -> &'static [&'static str];
    fn to_row(&self) -> Vec<String>;
}

fn cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn join_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| v.trim())
        .collect::<Vec<_>>()
        .join("; ")
}

impl TableRecord for StudioRecord {
    const KIND: TableKind = TableKind::StudioOverview;

    fn headers() -> &'static [&'static str] {
        &[
            "PoleStudio_Name",
            "Adresse",
            "PLZ",
            "Stadt",
            "Straße",
            "Buttons",
            "Pole Studio Beschreibung",
            "E-Mail",
            "Homepage",
            "Telefon",
            "URL_S",
            "Art",
            "Angebot",
            "Created Date",
            "Updated Date",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            cell(&self.name),
            join_list(&self.address_raw),
            cell(&self.postal_code),
            cell(&self.city),
            cell(&self.street),
            join_list(&self.overview_links),
            cell(&self.description),
            cell(&self.email),
            cell(&self.homepage),
            cell(&self.phone),
            self.source_url.clone(),
            join_list(&self.categories),
            cell(&self.promotion),
            self.created_at.clone(),
            self.updated_at.clone(),
        ]
    }
}

impl TableRecord for WorkshopRecord {
    const KIND: TableKind = TableKind::WorkshopList;

    fn headers() -> &'static [&'static str] {
        &[
            "PoleStudio_Name",
            "Workshop_Name",
            "Datum",
            "URL_E",
            "URL_SW",
            "Created Date",
            "Updated Date",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            cell(&self.studio),
            cell(&self.title),
            cell(&self.date),
            self.link.clone(),
            self.source_url.clone(),
            self.created_at.clone(),
            self.updated_at.clone(),
        ]
    }
}

impl TableRecord for WorkshopDetailRecord {
    const KIND: TableKind = TableKind::WorkshopDetails;

    fn headers() -> &'static [&'static str] {
        &[
            "Workshop_Name",
            "Datum",
            "Uhrzeit",
            "Preis",
            "Trainer",
            "Workshop Beschreibung",
            "URL_E",
            "Created Date",
            "Updated Date",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            cell(&self.title),
            cell(&self.date),
            cell(&self.time),
            cell(&self.price),
            cell(&self.trainer),
            cell(&self.description),
            self.source_url.clone(),
            self.created_at.clone(),
            self.updated_at.clone(),
        ]
    }
}

/// Outcome of one attempted URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStatus {
    Ok,
    Failed,
}

impl AttemptStatus {
    fn as_str(&self) -> &'static str {
        match self {
            AttemptStatus::Ok => "ok",
            AttemptStatus::Failed => "failed",
        }
    }
}

/// One row of the URL attempt table.
///
/// Every processed URL lands here, loaded or not; the status column is the
/// operator's per-URL report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlAttempt {
    pub url: String,
    pub status: AttemptStatus,
}

impl TableRecord for UrlAttempt {
    const KIND: TableKind = TableKind::Urls;

    fn headers() -> &'static [&'static str] {
        &["URL", "Status"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![self.url.clone(), self.status.as_str().to_string()]
    }
}

/// Accumulator tables for one batch run.
///
/// Append-only, insertion order = URL processing order, no dedup: a URL
/// processed twice yields two rows.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub studios: Vec<StudioRecord>,
    pub workshops: Vec<WorkshopRecord>,
    pub workshop_details: Vec<WorkshopDetailRecord>,
    pub attempts: Vec<UrlAttempt>,
}

impl BatchOutcome {
    /// Row counts per table, for the end-of-run summary.
    pub fn counts(&self) -> [(TableKind, usize); 4] {
        [
            (TableKind::StudioOverview, self.studios.len()),
            (TableKind::WorkshopList, self.workshops.len()),
            (TableKind::WorkshopDetails, self.workshop_details.len()),
            (TableKind::Urls, self.attempts.len()),
        ]
    }
}
