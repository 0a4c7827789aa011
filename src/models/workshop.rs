//! Workshop record data structures.

/// One row of the workshop list table, scraped from a schedule page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkshopRecord {
    /// Studio name from the schedule page heading
    pub studio: Option<String>,

    /// Workshop title from the row anchor text
    pub title: Option<String>,

    /// Date text from the row, when the row carries one
    pub date: Option<String>,

    /// Absolute URL of the event detail page
    pub link: String,

    /// Schedule page URL this row was scraped from
    pub source_url: String,

    pub created_at: String,
    pub updated_at: String,
}

/// One row of the workshop detail table, scraped from an event page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkshopDetailRecord {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub price: Option<String>,
    pub trainer: Option<String>,
    pub description: Option<String>,

    /// Event page URL this record was scraped from
    pub source_url: String,

    pub created_at: String,
    pub updated_at: String,
}
