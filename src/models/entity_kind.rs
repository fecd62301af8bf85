use super::field_spec::FieldSpec;

/// Whether the key is assigned by the backend or typed in by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Generated,
    Natural,
}

/// Declarative description of one entity type: endpoints, routes and fields.
///
/// Every page, form and table in the client is driven by one of these; the
/// instances live in [`crate::models::catalog`].
#[derive(Debug)]
pub struct EntityKind {
    /// Short name accepted on the command line.
    pub name: &'static str,
    /// Singular display name used in headings and notifications.
    pub display: &'static str,
    /// Plural display name used on index pages.
    pub plural: &'static str,
    /// Path segment under `/api/`.
    pub api: &'static str,
    /// Path segment of the index route.
    pub route: &'static str,
    /// Prefix for form/table test ids, e.g. `UCSBOrganizations`.
    pub test_id_prefix: &'static str,
    pub key: FieldSpec,
    pub key_kind: KeyKind,
    /// Mutable fields, in form and column order.
    pub fields: &'static [FieldSpec],
    /// Fields quoted in create/update notifications.
    pub summary: &'static [&'static str],
}

impl EntityKind {
    pub fn api_base(&self) -> String {
        format!("/api/{}", self.api)
    }

    pub fn api_all(&self) -> String {
        format!("/api/{}/all", self.api)
    }

    pub fn api_post(&self) -> String {
        format!("/api/{}/post", self.api)
    }

    pub fn index_route(&self) -> String {
        format!("/{}", self.route)
    }

    pub fn create_route(&self) -> String {
        format!("/{}/create", self.route)
    }

    pub fn edit_route_template(&self) -> String {
        format!("/{}/edit/:{}", self.route, self.key.name)
    }

    pub fn edit_route(&self, key: &str) -> String {
        format!("/{}/edit/{}", self.route, key)
    }

    /// Look up a declared field, key included.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        if self.key.name == name {
            return Some(&self.key);
        }
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields the user fills in on the create form.
    pub fn create_fields(&self) -> Vec<&FieldSpec> {
        let mut out = Vec::with_capacity(self.fields.len() + 1);
        if self.key_kind == KeyKind::Natural {
            out.push(&self.key);
        }
        out.extend(self.fields.iter());
        out
    }

    /// Columns shown by the entity table: key first, then mutable fields.
    pub fn table_fields(&self) -> Vec<&FieldSpec> {
        std::iter::once(&self.key).chain(self.fields.iter()).collect()
    }

    pub fn form_test_id(&self, suffix: &str) -> String {
        format!("{}Form-{}", self.test_id_prefix, suffix)
    }

    pub fn table_test_id(&self) -> String {
        format!("{}Table", self.test_id_prefix)
    }
}

impl PartialEq for EntityKind {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for EntityKind {}
