//! Studio record data structures.

/// Contact details scraped from a studio's contact block.
///
/// Absent fields stay `None`; an empty contact block yields all three absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub homepage: Option<String>,
    pub phone: Option<String>,
}

/// Address fields derived from the comma-split address paragraph.
///
/// `raw` keeps the segments exactly as split. The derived fields assume the
/// site's fixed "Street, PLZ City" shape; a deviating address produces absent
/// or wrong values, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    pub raw: Vec<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
}

/// One assembled row of the studio overview table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioRecord {
    /// Studio display name
    pub name: Option<String>,

    /// Comma-split address segments, as found on the page
    pub address_raw: Vec<String>,

    /// Derived by fixed positional parsing of the address segments
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,

    /// Trimmed text of the overview navigation buttons, in document order
    pub overview_links: Vec<String>,

    /// Studio description, absent when empty after trimming
    pub description: Option<String>,

    /// Contact block fields, classified by URI scheme
    pub email: Option<String>,
    pub homepage: Option<String>,
    pub phone: Option<String>,

    /// Category tags, in document order
    pub categories: Vec<String>,

    /// Promotion / sale text
    pub promotion: Option<String>,

    /// Input URL this record was scraped from
    pub source_url: String,

    /// Both stamped at assembly time; no update path exists, so these carry
    /// fetched-at semantics
    pub created_at: String,
    pub updated_at: String,
}
