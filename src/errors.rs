//! Unified application error type.
//! All modules (backend, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::core::validator::ValidationErrors;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Backend-related
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("Invalid backend payload: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Catalog / form errors
    // ---------------------------
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    #[error("Unknown field '{field}' for {entity}")]
    UnknownField { entity: String, field: String },

    #[error("Field '{0}' is read-only")]
    ReadOnlyField(String),

    #[error("Invalid assignment '{0}': expected FIELD=VALUE")]
    InvalidAssignment(String),

    #[error("Validation failed:\n{0}")]
    Validation(ValidationErrors),

    // ---------------------------
    // Routing errors
    // ---------------------------
    #[error("Access denied: {0} requires {1}")]
    Forbidden(String, String),

    #[error("No route matches {0}")]
    RouteNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
