//! Index, create and edit pages for any entity kind.
//!
//! Pages fetch and mutate through a [`Backend`] and report what the shell
//! should do next as an [`Outcome`] (notification plus navigation). A
//! failed write yields [`Outcome::Stay`]: no notification and no navigation.

use crate::backend::{ApiRequest, Backend, Method};
use crate::core::form::{FormBinder, Submission};
use crate::core::role::{ROLE_ADMIN, has_role};
use crate::core::table::EntityTable;
use crate::errors::{AppError, AppResult};
use crate::models::{CurrentUser, EntityKind, Record, ValueKind};
use serde_json::Value;

pub const UPDATE_LABEL: &str = "Update";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Write confirmed: show `toast`, then go to `to`.
    Navigate { to: String, toast: String },
    /// Write confirmed and the current list was reloaded.
    Refreshed { toast: Option<String> },
    /// Write not confirmed; the page stays as it is.
    Stay,
}

/// `"<field>: <value>"` pairs over the kind's summary fields.
pub fn summarize(kind: &EntityKind, record: &Record) -> String {
    kind.summary
        .iter()
        .filter_map(|f| record.text(f).map(|v| format!("{f}: {v}")))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Key as a query parameter value: numeric keys go out as numbers.
pub fn key_param(kind: &EntityKind, key: &str) -> Value {
    if kind.key.kind == ValueKind::Integer
        && let Ok(n) = key.parse::<i64>()
    {
        return Value::from(n);
    }
    Value::String(key.to_string())
}

/// `GET /api/<entity>?<key>=<value>` decoded as a single record.
pub fn fetch_one(backend: &dyn Backend, kind: &EntityKind, key: &str) -> AppResult<Record> {
    let request = ApiRequest::get(kind.api_base()).param(kind.key.name, key_param(kind, key));
    backend.send(&request).and_then(Record::from_value)
}

fn delete_request(kind: &EntityKind, key: &str) -> ApiRequest {
    ApiRequest::new(Method::Delete, kind.api_base()).param(kind.key.name, key_param(kind, key))
}

// ----------------------------------------------------------------------
// Index
// ----------------------------------------------------------------------

pub struct IndexPage<'b> {
    kind: &'static EntityKind,
    backend: &'b dyn Backend,
    user: Option<CurrentUser>,
    records: Vec<Record>,
}

impl<'b> IndexPage<'b> {
    /// Fetch `GET /api/<entity>/all`. A failed read is logged and shows an
    /// empty table.
    pub fn load(
        backend: &'b dyn Backend,
        kind: &'static EntityKind,
        user: Option<&CurrentUser>,
    ) -> Self {
        let mut page = Self {
            kind,
            backend,
            user: user.cloned(),
            records: Vec::new(),
        };
        page.refetch();
        page
    }

    /// Replace the list wholesale with the backend's current contents.
    pub fn refetch(&mut self) {
        let request = ApiRequest::get(self.kind.api_all());
        let kind = self.kind;
        self.records = match self.backend.send(&request).and_then(Record::list_from_value) {
            Ok(mut records) => {
                records.retain(|r| r.key(kind).is_some());
                records
            }
            Err(e) => {
                tracing::warn!(%request, error = %e, "could not load list");
                Vec::new()
            }
        };
    }

    pub fn kind(&self) -> &'static EntityKind {
        self.kind
    }

    pub fn heading(&self) -> &'static str {
        self.kind.plural
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Row index of the record whose key reads as `key`.
    pub fn row_of(&self, key: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.key(self.kind).as_deref() == Some(key))
    }

    pub fn table(&self) -> EntityTable {
        EntityTable::build(self.kind, &self.records, self.user.as_ref())
    }

    /// The "Create" affordance, shown to admins only.
    pub fn create_link(&self) -> Option<(String, String)> {
        has_role(self.user.as_ref(), ROLE_ADMIN).then(|| {
            (
                format!("Create {}", self.kind.display),
                self.kind.create_route(),
            )
        })
    }

    /// Press Delete on `row`, then reload the list once the backend confirms.
    pub fn delete(&mut self, row: usize) -> AppResult<Outcome> {
        let table = self.table();
        let kind = self.kind;
        let backend = self.backend;

        let result = table.delete(row, |key| Ok(backend.send(&delete_request(kind, key))))?;
        match result {
            Ok(reply) => {
                self.refetch();
                let toast = reply
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                Ok(Outcome::Refreshed { toast })
            }
            Err(e) => {
                tracing::warn!(entity = kind.name, error = %e, "delete failed");
                Ok(Outcome::Stay)
            }
        }
    }
}

// ----------------------------------------------------------------------
// Create
// ----------------------------------------------------------------------

pub struct CreatePage<'b> {
    kind: &'static EntityKind,
    backend: &'b dyn Backend,
    form: FormBinder,
}

impl<'b> CreatePage<'b> {
    pub fn new(backend: &'b dyn Backend, kind: &'static EntityKind) -> AppResult<Self> {
        Ok(Self {
            kind,
            backend,
            form: FormBinder::new(kind, None)?,
        })
    }

    pub fn heading(&self) -> String {
        format!("Create New {}", self.kind.display)
    }

    pub fn form(&self) -> &FormBinder {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormBinder {
        &mut self.form
    }

    /// Validate, then `POST /api/<entity>/post` with the fields as query
    /// parameters.
    pub fn submit(&mut self) -> AppResult<Outcome> {
        let kind = self.kind;
        let backend = self.backend;

        let sent = self
            .form
            .submit(|submission| {
                let Submission::Create { params } = submission else {
                    return Err(AppError::Other("create form produced an update".into()));
                };
                let request = ApiRequest::new(Method::Post, kind.api_post()).params(params.clone());
                backend.send(&request).map(|reply| (params, reply))
            })
            .map_err(AppError::Validation)?;

        match sent {
            Ok((params, reply)) => {
                let created = Record::from_value(reply).unwrap_or(params);
                Ok(Outcome::Navigate {
                    to: kind.index_route(),
                    toast: format!("New {} Created - {}", kind.display, summarize(kind, &created)),
                })
            }
            Err(e) => {
                tracing::warn!(entity = kind.name, error = %e, "create failed");
                Ok(Outcome::Stay)
            }
        }
    }
}

// ----------------------------------------------------------------------
// Edit
// ----------------------------------------------------------------------

pub struct EditPage<'b> {
    kind: &'static EntityKind,
    backend: &'b dyn Backend,
    key: String,
    form: Option<FormBinder>,
}

impl<'b> EditPage<'b> {
    /// Fetch `GET /api/<entity>?<key>=<value>`. When the read fails the
    /// page has no form.
    pub fn load(backend: &'b dyn Backend, kind: &'static EntityKind, key: &str) -> Self {
        let form = fetch_one(backend, kind, key)
            .and_then(|record| FormBinder::new(kind, Some(&record)))
            .map(|form| form.with_button_label(UPDATE_LABEL));

        let form = match form {
            Ok(f) => Some(f),
            Err(e) => {
                tracing::warn!(entity = kind.name, key, error = %e, "could not load record for editing");
                None
            }
        };

        Self {
            kind,
            backend,
            key: key.to_string(),
            form,
        }
    }

    pub fn heading(&self) -> String {
        format!("Edit {}", self.kind.display)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn form(&self) -> Option<&FormBinder> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FormBinder> {
        self.form.as_mut()
    }

    /// Validate, then `PUT /api/<entity>?<key>=<value>` with the mutable
    /// fields as the JSON body.
    pub fn submit(&mut self) -> AppResult<Outcome> {
        let kind = self.kind;
        let backend = self.backend;
        let form = self
            .form
            .as_mut()
            .ok_or_else(|| AppError::Other(format!("{} {} not loaded", kind.display, self.key)))?;

        let sent = form
            .submit(|submission| {
                let Submission::Update { key, body } = submission else {
                    return Err(AppError::Other("edit form produced a create".into()));
                };
                let request = ApiRequest::new(Method::Put, kind.api_base())
                    .param(kind.key.name, key_param(kind, &key))
                    .data(body.clone().into_value());
                backend
                    .send(&request)
                    .map(|reply| (body.with(kind.key.name, key_param(kind, &key)), reply))
            })
            .map_err(AppError::Validation)?;

        match sent {
            Ok((submitted, reply)) => {
                let updated = Record::from_value(reply).unwrap_or(submitted);
                Ok(Outcome::Navigate {
                    to: kind.index_route(),
                    toast: format!("{} Updated - {}", kind.display, summarize(kind, &updated)),
                })
            }
            Err(e) => {
                tracing::warn!(entity = kind.name, error = %e, "update failed");
                Ok(Outcome::Stay)
            }
        }
    }
}
