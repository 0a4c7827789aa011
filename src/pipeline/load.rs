// src/pipeline/load.rs

//! Input spreadsheet loading.
//!
//! The operator supplies the URL list as a CSV file or a single-sheet XLSX
//! workbook with a header row. One column holds the URLs; an optional row cap
//! limits the batch to the first N data rows.

use std::path::Path;

use calamine::{Reader, Xlsx, open_workbook};

use crate::error::{AppError, Result};

/// Load the URL column from a CSV or XLSX file, capped to the first `rows`
/// data rows when a cap is given.
///
/// Blank cells are skipped. An unknown column is an error listing the
/// available headers.
pub fn load_urls(path: &Path, column: &str, rows: Option<usize>) -> Result<Vec<String>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let mut urls = match extension.as_str() {
        "csv" => load_csv(path, column)?,
        "xlsx" => load_xlsx(path, column)?,
        other => {
            return Err(AppError::input(format!(
                "Unsupported input format '{other}' for {}: expected .csv or .xlsx",
                path.display()
            )));
        }
    };

    if let Some(cap) = rows {
        if cap > 0 && cap < urls.len() {
            urls.truncate(cap);
        }
    }

    Ok(urls)
}

fn unknown_column(column: &str, headers: &[String]) -> AppError {
    AppError::input(format!(
        "Column '{}' not found; available columns: {}",
        column,
        headers.join(", ")
    ))
}

fn load_csv(path: &Path, column: &str) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| unknown_column(column, &headers))?;

    let mut urls = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(value) = record.get(index) {
            let value = value.trim();
            if !value.is_empty() {
                urls.push(value.to_string());
            }
        }
    }
    Ok(urls)
}

fn load_xlsx(path: &Path, column: &str) -> Result<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::input("Workbook contains no sheets"))??;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(|cell| cell.to_string().trim().to_string()).collect())
        .unwrap_or_default();
    let index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| unknown_column(column, &headers))?;

    let mut urls = Vec::new();
    for row in rows {
        if let Some(cell) = row.get(index) {
            let value = cell.to_string().trim().to_string();
            if !value.is_empty() {
                urls.push(value);
            }
        }
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_csv_column_in_order() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "urls.csv",
            "Name,URL\nA,https://x.de/s/a\nB,https://x.de/s/b\nC,https://x.de/s/c\n",
        );

        let urls = load_urls(&path, "URL", None).unwrap();
        assert_eq!(
            urls,
            vec!["https://x.de/s/a", "https://x.de/s/b", "https://x.de/s/c"]
        );
    }

    #[test]
    fn row_cap_keeps_first_n() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "urls.csv",
            "URL\nhttps://x.de/s/a\nhttps://x.de/s/b\nhttps://x.de/s/c\n",
        );

        let urls = load_urls(&path, "URL", Some(2)).unwrap();
        assert_eq!(urls, vec!["https://x.de/s/a", "https://x.de/s/b"]);
    }

    #[test]
    fn cap_larger_than_input_is_clamped() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "urls.csv", "URL\nhttps://x.de/s/a\n");

        let urls = load_urls(&path, "URL", Some(10)).unwrap();
        assert_eq!(urls.len(), 1);
    }

    #[test]
    fn blank_cells_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "urls.csv", "URL\nhttps://x.de/s/a\n\nhttps://x.de/s/b\n");

        let urls = load_urls(&path, "URL", None).unwrap();
        assert_eq!(urls, vec!["https://x.de/s/a", "https://x.de/s/b"]);
    }

    #[test]
    fn unknown_column_lists_headers() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "urls.csv", "Name,Link\nA,https://x.de\n");

        let error = load_urls(&path, "URL", None).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("Name, Link"), "unexpected: {message}");
    }

    #[test]
    fn xlsx_and_csv_sources_yield_identical_lists() {
        use rust_xlsxwriter::Workbook;

        let dir = TempDir::new().unwrap();
        let csv_path = write_csv(
            &dir,
            "urls.csv",
            "Name,URL\nA,https://x.de/s/a\nB,https://x.de/s/b\n",
        );

        let xlsx_path = dir.path().join("urls.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(0, 1, "URL").unwrap();
        sheet.write_string(1, 0, "A").unwrap();
        sheet.write_string(1, 1, "https://x.de/s/a").unwrap();
        sheet.write_string(2, 0, "B").unwrap();
        sheet.write_string(2, 1, "https://x.de/s/b").unwrap();
        workbook.save(&xlsx_path).unwrap();

        let from_csv = load_urls(&csv_path, "URL", None).unwrap();
        let from_xlsx = load_urls(&xlsx_path, "URL", None).unwrap();
        assert_eq!(from_csv, from_xlsx);
        assert_eq!(from_csv, vec!["https://x.de/s/a", "https://x.de/s/b"]);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "urls.txt", "URL\nhttps://x.de\n");

        assert!(load_urls(&path, "URL", None).is_err());
    }
}
