// src/export/csv.rs

//! CSV export sink.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::pipeline::{BatchOutcome, TableRecord};

/// Write all four tables as CSV files into `dir`.
pub fn write_tables(outcome: &BatchOutcome, dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(vec![
        write_table(&outcome.studios, dir)?,
        write_table(&outcome.workshops, dir)?,
        write_table(&outcome.workshop_details, dir)?,
        write_table(&outcome.attempts, dir)?,
    ])
}

fn write_table<T: TableRecord>(rows: &[T], dir: &Path) -> Result<PathBuf> {
    let path = dir.join(format!("{}.csv", T::KIND.file_stem()));
    let mut writer = csv::Writer::from_path(&path)?;

    writer.write_record(T::headers())?;
    for row in rows {
        writer.write_record(row.to_row())?;
    }
    writer.flush()?;

    log::debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::pipeline::tables::{AttemptStatus, UrlAttempt};

    #[test]
    fn writes_header_and_rows_in_order() {
        let dir = TempDir::new().unwrap();
        let outcome = BatchOutcome {
            attempts: vec![
                UrlAttempt {
                    url: "https://x.de/s/a".into(),
                    status: AttemptStatus::Ok,
                },
                UrlAttempt {
                    url: "https://x.de/s/b".into(),
                    status: AttemptStatus::Failed,
                },
            ],
            ..BatchOutcome::default()
        };

        write_tables(&outcome, dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("All_URLs.csv")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "URL,Status");
        assert_eq!(lines[1], "https://x.de/s/a,ok");
        assert_eq!(lines[2], "https://x.de/s/b,failed");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_tables_still_get_header_files() {
        let dir = TempDir::new().unwrap();

        write_tables(&BatchOutcome::default(), dir.path()).unwrap();

        let content =
            std::fs::read_to_string(dir.path().join("Pole_Studio_Übersicht_S.csv")).unwrap();
        assert!(content.starts_with("PoleStudio_Name,"));
        assert_eq!(content.lines().count(), 1);
    }
}
