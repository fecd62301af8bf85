// src/export/mod.rs

mod fs_utils;
mod json_csv;

use crate::errors::AppResult;
use crate::models::{EntityKind, Record};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `records` of `kind` to `path`, refusing to overwrite an existing
/// file unless `force` is set or the user confirms.
pub fn export(
    kind: &EntityKind,
    records: &[Record],
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;
    tracing::info!(entity = kind.name, format = format.as_str(), rows = records.len(), "exporting");

    match format {
        ExportFormat::Csv => json_csv::export_csv(kind, records, path),
        ExportFormat::Json => json_csv::export_json(records, path),
    }
}
