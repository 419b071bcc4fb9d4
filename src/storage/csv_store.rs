//! Headerless CSV storage of the work log.
//!
//! Each call opens the file, does its work and releases it before returning.

use crate::errors::{AppError, AppResult};
use crate::models::{LogEntry, LogStore, RejectedRecord};
use csv::{ByteRecord, ReaderBuilder, WriterBuilder};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// Load every record of `path` in file order.
///
/// Records that cannot be converted are kept aside as `RejectedRecord`s.
pub fn load(path: &Path) -> AppResult<LogStore> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::StorageMissing(path.to_path_buf()),
        _ => AppError::Io(e),
    })?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut store = LogStore::new();

    for result in rdr.byte_records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let converted =
            decode_fields(&record, line).and_then(|fields| LogEntry::from_fields(&fields, line));

        match converted {
            Ok(entry) => store.push(entry),
            Err(AppError::MalformedRecord { line, reason }) => {
                let position = store.len();
                store.push_rejected(RejectedRecord {
                    line,
                    position,
                    fields: record.iter().map(|f| f.to_vec()).collect(),
                    reason,
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(store)
}

fn decode_fields(record: &ByteRecord, line: u64) -> AppResult<Vec<&str>> {
    record
        .iter()
        .map(|field| {
            std::str::from_utf8(field).map_err(|e| AppError::MalformedRecord {
                line,
                reason: format!("field is not valid UTF-8 ({})", e),
            })
        })
        .collect()
}

/// Write the whole store to `path`, replacing its content.
///
/// Rejected records go back unchanged, between the same entries as before.
pub fn save(path: &Path, store: &LogStore) -> AppResult<()> {
    write_all(path, store).map_err(|e| AppError::StorageUnwritable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn write_all(path: &Path, store: &LogStore) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rejected = store.rejected().iter().peekable();

    for (i, entry) in store.iter().enumerate() {
        while let Some(record) = rejected.next_if(|r| r.position <= i) {
            wtr.write_record(&record.fields)?;
        }
        wtr.write_record(entry.to_fields())?;
    }

    for record in rejected {
        wtr.write_record(&record.fields)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Create an empty log file at `path`.
///
/// An existing file is left untouched so its records can be loaded.
pub fn create_empty(path: &Path) -> AppResult<()> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map(|_| ())
        .map_err(|e| AppError::StorageUnwritable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}
