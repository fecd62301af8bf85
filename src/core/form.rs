//! Generic create/edit form bound to an [`EntityKind`].
//!
//! The binder owns the current text of every input, validates on submit and
//! on blur, and hands a [`Submission`] to the caller only when every field
//! passes. In edit mode the key is shown but disabled, and it travels out of
//! band (as a query parameter) rather than in the update body.

use crate::core::validator::{self, ValidationErrors};
use crate::errors::{AppError, AppResult};
use crate::models::field_spec::{FieldSpec, ValueKind};
use crate::models::{EntityKind, Record};
use serde_json::Value;

pub const DEFAULT_BUTTON_LABEL: &str = "Create";

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Every editable field, sent as `POST` query parameters.
    Create { params: Record },
    /// Key out of band, mutable fields only in the JSON body.
    Update { key: String, body: Record },
}

#[derive(Debug, Clone)]
struct FieldState {
    spec: &'static FieldSpec,
    value: String,
    disabled: bool,
}

/// Read-only view of one input, for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView<'a> {
    pub name: &'static str,
    pub label: &'static str,
    pub value: &'a str,
    pub disabled: bool,
    pub error: Option<&'a str>,
    pub test_id: String,
}

#[derive(Debug, Clone)]
pub struct FormBinder {
    kind: &'static EntityKind,
    key: Option<String>,
    button_label: String,
    fields: Vec<FieldState>,
    errors: ValidationErrors,
    submitted: bool,
}

impl FormBinder {
    /// Empty create form, or a pre-filled edit form when `initial` is given.
    pub fn new(kind: &'static EntityKind, initial: Option<&Record>) -> AppResult<Self> {
        let (key, fields) = match initial {
            None => {
                let fields = kind
                    .create_fields()
                    .into_iter()
                    .map(|spec| FieldState {
                        spec,
                        value: String::new(),
                        disabled: false,
                    })
                    .collect();
                (None, fields)
            }
            Some(record) => {
                let key = record.key(kind).ok_or_else(|| {
                    AppError::Other(format!(
                        "{} record has no {}",
                        kind.display, kind.key.name
                    ))
                })?;
                let mut fields = vec![FieldState {
                    spec: &kind.key,
                    value: key.clone(),
                    disabled: true,
                }];
                fields.extend(kind.fields.iter().map(|spec| FieldState {
                    spec,
                    value: record.text(spec.name).unwrap_or_default(),
                    disabled: false,
                }));
                (Some(key), fields)
            }
        };

        Ok(Self {
            kind,
            key,
            button_label: DEFAULT_BUTTON_LABEL.to_string(),
            fields,
            errors: ValidationErrors::new(),
            submitted: false,
        })
    }

    pub fn with_button_label(mut self, label: &str) -> Self {
        self.button_label = label.to_string();
        self
    }

    /// Preset values layered over the initial contents, e.g. a fixed
    /// `diningCommonsCode` when creating from one commons' page.
    pub fn with_overrides(mut self, overrides: &Record) -> AppResult<Self> {
        for (field, _) in overrides.fields() {
            let value = overrides.text(field).unwrap_or_default();
            self.set(field, &value)?;
        }
        Ok(self)
    }

    pub fn kind(&self) -> &'static EntityKind {
        self.kind
    }

    pub fn submit_test_id(&self) -> String {
        self.kind.form_test_id("submit")
    }

    pub fn cancel_test_id(&self) -> String {
        self.kind.form_test_id("cancel")
    }

    pub fn button_label(&self) -> &str {
        &self.button_label
    }

    pub fn is_edit(&self) -> bool {
        self.key.is_some()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.state(field).map(|s| s.value.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldView<'_>> {
        self.fields.iter().map(|s| FieldView {
            name: s.spec.name,
            label: s.spec.label,
            value: &s.value,
            disabled: s.disabled,
            error: self.errors.get(s.spec.name),
            test_id: self.kind.form_test_id(s.spec.name),
        })
    }

    fn state(&self, field: &str) -> Option<&FieldState> {
        self.fields.iter().find(|s| s.spec.name == field)
    }

    /// Type into an input. After the first submit the field is revalidated
    /// on every change.
    pub fn set(&mut self, field: &str, value: &str) -> AppResult<()> {
        let kind = self.kind;
        let state = self
            .fields
            .iter_mut()
            .find(|s| s.spec.name == field)
            .ok_or_else(|| AppError::UnknownField {
                entity: kind.display.to_string(),
                field: field.to_string(),
            })?;

        if state.disabled {
            return Err(AppError::ReadOnlyField(field.to_string()));
        }

        state.value = value.to_string();
        if self.submitted {
            self.blur(field);
        }
        Ok(())
    }

    /// Recompute the error of a single field.
    pub fn blur(&mut self, field: &str) {
        if let Some(state) = self.state(field) {
            if state.disabled {
                return;
            }
            let err = validator::validate(Some(&state.value), state.spec);
            self.errors.set(field, err);
        }
    }

    /// Validate every field and, if all pass, call `action` exactly once.
    /// On failure all messages are kept and `action` is dropped uncalled.
    pub fn submit<T, F>(&mut self, action: F) -> Result<T, ValidationErrors>
    where
        F: FnOnce(Submission) -> T,
    {
        self.submitted = true;

        let specs: Vec<&FieldSpec> = self
            .fields
            .iter()
            .filter(|s| !s.disabled)
            .map(|s| s.spec)
            .collect();
        self.errors = validator::validate_all(&specs, |name| self.value(name));

        if !self.errors.is_empty() {
            tracing::debug!(
                entity = self.kind.name,
                errors = self.errors.len(),
                "form submission blocked by validation"
            );
            return Err(self.errors.clone());
        }

        Ok(action(self.submission()))
    }

    /// Navigate back without validating or submitting.
    pub fn cancel<T, F>(&self, back: F) -> T
    where
        F: FnOnce() -> T,
    {
        back()
    }

    fn submission(&self) -> Submission {
        let mut payload = Record::new();
        for state in self.fields.iter().filter(|s| !s.disabled) {
            if let Some(v) = typed_value(state.spec, &state.value) {
                payload.insert(state.spec.name, v);
            }
        }

        match &self.key {
            Some(key) => Submission::Update {
                key: key.clone(),
                body: payload,
            },
            None => Submission::Create { params: payload },
        }
    }
}

/// Convert input text to the JSON type the backend expects. Blank optional
/// fields are left out.
fn typed_value(spec: &FieldSpec, text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    let value = match spec.kind {
        ValueKind::Boolean => Value::Bool(text == "true"),
        ValueKind::Integer => text
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(text.to_string())),
        ValueKind::Text | ValueKind::Timestamp => Value::String(text.to_string()),
    };
    Some(value)
}
