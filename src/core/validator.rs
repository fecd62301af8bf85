//! Field-level validation rules.
//!
//! Rules run in a fixed order (required, enumerated/format, max length) and
//! the first failure wins, so a field never shows more than one message.

use crate::models::field_spec::{FieldSpec, Format};
use chrono::NaiveDateTime;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-[01]\d-[0-3]\dT[0-2]\d:[0-5]\d)(:[0-5]\d(\.\d+)?)?Z?$")
        .expect("timestamp pattern is valid")
});

static QUARTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}[1-4]$").expect("quarter pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Per-field errors of one submit attempt, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Replace the entry for `field`: `Some` sets it, `None` clears it.
    pub fn set(&mut self, field: &str, error: Option<ValidationError>) {
        match (self.0.iter().position(|e| e.field == field), error) {
            (Some(i), Some(err)) => self.0[i] = err,
            (Some(i), None) => {
                self.0.remove(i);
            }
            (None, Some(err)) => self.0.push(err),
            (None, None) => {}
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {e}")?;
        }
        Ok(())
    }
}

fn is_valid_timestamp(value: &str) -> bool {
    let Some(caps) = TIMESTAMP_RE.captures(value) else {
        return false;
    };
    // The pattern allows 2022-19-39; let chrono reject impossible dates.
    let minutes = &caps[1];
    NaiveDateTime::parse_from_str(minutes, "%Y-%m-%dT%H:%M").is_ok()
}

fn format_message(format: Format, label: &str) -> String {
    match format {
        Format::Timestamp => format!("{label} must be in ISO format, e.g. 2022-01-02T12:00"),
        Format::QuarterYYYYQ => {
            format!("{label} must be in the format YYYYQ, e.g. 20224 for Fall 2022")
        }
    }
}

fn allowed_message(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(" or ")
        + " required"
}

/// Check one value against its spec. `None` and blank strings count as empty.
pub fn validate(value: Option<&str>, spec: &FieldSpec) -> Option<ValidationError> {
    let fail = |message: String| {
        Some(ValidationError {
            field: spec.name.to_string(),
            message,
        })
    };

    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            return if spec.required {
                fail(format!("{} is required.", spec.label))
            } else {
                None
            };
        }
    };

    if let Some(allowed) = spec.allowed
        && !allowed.contains(&value)
    {
        return fail(allowed_message(allowed));
    }

    if let Some(format) = spec.format {
        let ok = match format {
            Format::Timestamp => is_valid_timestamp(value),
            Format::QuarterYYYYQ => QUARTER_RE.is_match(value),
        };
        if !ok {
            return fail(format_message(format, spec.label));
        }
    }

    if let Some(max) = spec.max_length
        && value.chars().count() > max
    {
        return fail(format!("Max length {max} characters"));
    }

    None
}

/// Run every spec, collecting all failures.
pub fn validate_all<'a, F>(specs: &[&FieldSpec], lookup: F) -> ValidationErrors
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut errors = ValidationErrors::new();
    for spec in specs {
        let err = validate(lookup(spec.name), spec);
        errors.set(spec.name, err);
    }
    errors
}
