use crate::db::models::{COLUMNS, RecordRow};
use crate::errors::{AppError, AppResult};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs;
use std::path::Path;

/// One row as a JSON object, keys in column order.
struct RowObject<'a>(&'a RecordRow);

impl Serialize for RowObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(COLUMNS.len()))?;
        for (k, v) in COLUMNS.iter().zip(self.0.cells()) {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

pub fn write_json(path: &Path, rows: &[RecordRow]) -> AppResult<()> {
    let objects: Vec<RowObject> = rows.iter().map(RowObject).collect();
    let json = serde_json::to_string_pretty(&objects)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {e}")))?;
    fs::write(path, json)?;
    Ok(())
}
