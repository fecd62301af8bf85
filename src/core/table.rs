//! Generic entity table with role-gated row actions.

use crate::core::role::{ROLE_ADMIN, has_role};
use crate::errors::{AppError, AppResult};
use crate::models::{CurrentUser, EntityKind, Record};

pub const EDIT: &str = "Edit";
pub const DELETE: &str = "Delete";

/// One data column: header text and the record field it reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub header: String,
    pub accessor: String,
}

impl ColumnSpec {
    pub fn new(header: &str, accessor: &str) -> Self {
        Self {
            header: header.to_string(),
            accessor: accessor.to_string(),
        }
    }

    /// Key first, then every mutable field, labelled as declared.
    pub fn for_kind(kind: &EntityKind) -> Vec<Self> {
        kind.table_fields()
            .into_iter()
            .map(|f| Self::new(f.label, f.name))
            .collect()
    }
}

/// Action handles bound to one row's key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActions {
    pub key: String,
    pub edit_route: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub actions: Option<RowActions>,
}

#[derive(Debug, Clone)]
pub struct EntityTable {
    kind: &'static EntityKind,
    columns: Vec<ColumnSpec>,
    rows: Vec<TableRow>,
    with_actions: bool,
}

impl EntityTable {
    pub fn build(
        kind: &'static EntityKind,
        entities: &[Record],
        user: Option<&CurrentUser>,
    ) -> Self {
        Self::build_with_columns(kind, entities, user, ColumnSpec::for_kind(kind))
    }

    /// Rows keep input order. Whether Edit/Delete appear is decided once
    /// for the whole table; records without a key are left out so every
    /// row carries the same actions.
    pub fn build_with_columns(
        kind: &'static EntityKind,
        entities: &[Record],
        user: Option<&CurrentUser>,
        columns: Vec<ColumnSpec>,
    ) -> Self {
        let with_actions = has_role(user, ROLE_ADMIN);

        let rows = entities
            .iter()
            .filter_map(|record| {
                let Some(key) = record.key(kind) else {
                    tracing::warn!(entity = kind.name, "skipping record without {}", kind.key.name);
                    return None;
                };
                let cells = columns
                    .iter()
                    .map(|c| record.text(&c.accessor).unwrap_or_default())
                    .collect();
                let actions = with_actions.then(|| RowActions {
                    edit_route: kind.edit_route(&key),
                    key,
                });
                Some(TableRow { cells, actions })
            })
            .collect();

        Self {
            kind,
            columns,
            rows,
            with_actions,
        }
    }

    pub fn kind(&self) -> &'static EntityKind {
        self.kind
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn has_actions(&self) -> bool {
        self.with_actions
    }

    /// Data headers followed by the action headers, when shown.
    pub fn headers(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        if self.with_actions {
            out.push(EDIT);
            out.push(DELETE);
        }
        out
    }

    pub fn cell(&self, row: usize, accessor: &str) -> Option<&str> {
        let col = self.columns.iter().position(|c| c.accessor == accessor)?;
        self.rows.get(row).map(|r| r.cells[col].as_str())
    }

    /// Test ids of every rendered cell and action button.
    pub fn test_ids(&self) -> Vec<String> {
        let prefix = self.kind.table_test_id();
        let mut ids = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            for c in &self.columns {
                ids.push(format!("{prefix}-cell-row-{i}-col-{}", c.accessor));
            }
            if row.actions.is_some() {
                ids.push(format!("{prefix}-cell-row-{i}-col-{EDIT}-button"));
                ids.push(format!("{prefix}-cell-row-{i}-col-{DELETE}-button"));
            }
        }
        ids
    }

    fn actions(&self, row: usize) -> AppResult<&RowActions> {
        let r = self
            .rows
            .get(row)
            .ok_or_else(|| AppError::Other(format!("no row {row} in table")))?;
        r.actions.as_ref().ok_or_else(|| {
            AppError::Forbidden(self.kind.edit_route_template(), ROLE_ADMIN.to_string())
        })
    }

    /// Press Edit: `navigate` receives `/<route>/edit/<key>`.
    pub fn edit<T, F>(&self, row: usize, navigate: F) -> AppResult<T>
    where
        F: FnOnce(&str) -> T,
    {
        let actions = self.actions(row)?;
        Ok(navigate(&actions.edit_route))
    }

    /// Press Delete: `mutate` receives the row key. The row stays until the
    /// owner reloads the list.
    pub fn delete<T, F>(&self, row: usize, mutate: F) -> AppResult<T>
    where
        F: FnOnce(&str) -> AppResult<T>,
    {
        let actions = self.actions(row)?;
        mutate(&actions.key)
    }
}
