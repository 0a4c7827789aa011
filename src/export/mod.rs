//! Export sinks for the accumulator tables.
//!
//! One file per table under the configured directory, fixed file stems, no
//! row-index column. Directories are created on demand.

pub mod csv;
pub mod excel;

use std::path::PathBuf;

use crate::error::Result;
use crate::models::ExportConfig;
use crate::pipeline::BatchOutcome;

/// Which export formats the operator selected.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub csv: bool,
    pub excel: bool,
}

impl ExportOptions {
    pub fn any(&self) -> bool {
        self.csv || self.excel
    }
}

/// Write the selected export formats, returning every file written.
pub fn export_tables(
    outcome: &BatchOutcome,
    config: &ExportConfig,
    options: ExportOptions,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if options.csv {
        let dir = PathBuf::from(&config.csv_dir);
        std::fs::create_dir_all(&dir)?;
        written.extend(csv::write_tables(outcome, &dir)?);
    }

    if options.excel {
        let dir = PathBuf::from(&config.excel_dir);
        std::fs::create_dir_all(&dir)?;
        written.extend(excel::write_tables(outcome, &dir)?);
    }

    Ok(written)
}
