// src/export/excel.rs

//! Excel export sink.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::pipeline::{BatchOutcome, TableRecord};

/// Write all four tables as single-sheet XLSX workbooks into `dir`.
pub fn write_tables(outcome: &BatchOutcome, dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(vec![
        write_table(&outcome.studios, dir)?,
        write_table(&outcome.workshops, dir)?,
        write_table(&outcome.workshop_details, dir)?,
        write_table(&outcome.attempts, dir)?,
    ])
}

fn write_table<T: TableRecord>(rows: &[T], dir: &Path) -> Result<PathBuf> {
    let path = dir.join(format!("{}.xlsx", T::KIND.file_stem()));
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in T::headers().iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (index, row) in rows.iter().enumerate() {
        for (col, value) in row.to_row().iter().enumerate() {
            worksheet.write_string(index as u32 + 1, col as u16, value.as_str())?;
        }
    }

    workbook.save(&path)?;
    log::debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::pipeline::tables::{AttemptStatus, UrlAttempt};

    #[test]
    fn writes_one_workbook_per_table() {
        let dir = TempDir::new().unwrap();
        let outcome = BatchOutcome {
            attempts: vec![UrlAttempt {
                url: "https://x.de/s/a".into(),
                status: AttemptStatus::Ok,
            }],
            ..BatchOutcome::default()
        };

        let written = write_tables(&outcome, dir.path()).unwrap();

        assert_eq!(written.len(), 4);
        for path in written {
            assert!(path.exists());
            assert_eq!(path.extension().and_then(|e| e.to_str()), Some("xlsx"));
        }
    }
}
