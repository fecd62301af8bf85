// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::{EntityKind, Record};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed, records as the backend sent them.
pub(crate) fn export_json(records: &[Record], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with one column per table field, key first.
pub(crate) fn export_csv(kind: &EntityKind, records: &[Record], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let fields = kind.table_fields();
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(fields.iter().map(|f| f.name))?;
    for record in records {
        wtr.write_record(
            fields
                .iter()
                .map(|f| record.text(f.name).unwrap_or_default()),
        )?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
