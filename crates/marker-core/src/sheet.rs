//! Spreadsheet input/output for record tables
//!
//! The sheet format is CSV with the fixed header `Name,Number,Variant Type`.
//! Downstream consumers (the sorter and the card renderer) assume exactly
//! these column names, so they are validated on read.

use crate::error::{Error, Result};
use crate::record::Record;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// Column names required in a sheet, in output order.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Name", "Number", "Variant Type"];

/// Write records as CSV, header included.
pub fn write_csv<W: io::Write>(records: &[Record], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write records as a pretty JSON array.
pub fn write_json<W: io::Write>(records: &[Record], mut writer: W) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

/// Save records as a CSV sheet at the given path.
pub fn save_csv<P: AsRef<Path>>(records: &[Record], path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(records, BufWriter::new(file))
}

/// Read records from CSV, validating the required columns.
///
/// `source_name` is used in error messages only. Extra columns are ignored;
/// a missing required column is an error before any row is read.
pub fn read_csv<R: io::Read>(reader: R, source_name: &str) -> Result<Vec<Record>> {
    let path = PathBuf::from(source_name);
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::Csv {
            path: path.clone(),
            source: e,
        })?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn {
                path,
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: Record = result.map_err(|e| Error::Csv {
            path: path.clone(),
            source: e,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Load a CSV sheet from a file.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_csv(BufReader::new(file), &path.to_string_lossy())
}

/// Find the most recently modified CSV sheet directly inside `dir`.
///
/// Used by the sort command when no path is given: the sheet written by a
/// previous convert run is assumed to sit next to the tool. Dotfiles and
/// "~$" office lock files are skipped.
pub fn find_latest_sheet<P: AsRef<Path>>(dir: P) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let mut latest: Option<(SystemTime, PathBuf)> = None;

    for entry in WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "csv") {
            continue;
        }
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.') || n.starts_with("~$"));
        if hidden {
            continue;
        }

        let modified = entry.metadata()?.modified()?;
        if latest.as_ref().is_none_or(|(t, _)| modified > *t) {
            latest = Some((modified, path.to_path_buf()));
        }
    }

    latest
        .map(|(_, path)| path)
        .ok_or_else(|| Error::NoSheetFound(dir.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_csv_header_and_rows() {
        let records = vec![
            Record::new("Pikachu", "025/102", "Normal"),
            Record::new("Pikachu", "025/102", "Reverse Holo"),
        ];

        let mut buf = Vec::new();
        write_csv(&records, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Name,Number,Variant Type"));
        assert_eq!(lines.next(), Some("Pikachu,025/102,Normal"));
        assert_eq!(lines.next(), Some("Pikachu,025/102,Reverse Holo"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_write_csv_quotes_commas() {
        let records = vec![Record::new("Mr. Mime, Jr.", "021/102", "Normal")];

        let mut buf = Vec::new();
        write_csv(&records, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.contains("\"Mr. Mime, Jr.\""));
    }

    #[test]
    fn test_read_csv_roundtrips_fields() {
        let csv = "Name,Number,Variant Type\nPikachu,025/102,Normal\n";
        let records = read_csv(csv.as_bytes(), "test.csv").unwrap();

        assert_eq!(records, vec![Record::new("Pikachu", "025/102", "Normal")]);
    }

    #[test]
    fn test_read_csv_missing_column_is_an_error() {
        let csv = "Name,Number\nPikachu,025/102\n";
        let err = read_csv(csv.as_bytes(), "test.csv").unwrap_err();

        match err {
            Error::MissingColumn { column, .. } => assert_eq!(column, "Variant Type"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_csv_ignores_extra_columns() {
        let csv = "Name,Number,Variant Type,Price\nPikachu,025/102,Normal,$2.50\n";
        let records = read_csv(csv.as_bytes(), "test.csv").unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].variant, "Normal");
    }

    #[test]
    fn test_write_json_is_an_array() {
        let records = vec![Record::new("Pikachu", "025/102", "Normal")];

        let mut buf = Vec::new();
        write_json(&records, &mut buf).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(json[0]["Name"], "Pikachu");
        assert_eq!(json[0]["Variant Type"], "Normal");
    }
}
