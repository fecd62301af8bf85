//! Static per-field declarations: label, validation rules and value kind.

/// Allowed values for boolean fields edited as text.
pub const BOOLEAN_VALUES: &[&str] = &["true", "false"];

/// How a field value travels to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Boolean,
    Timestamp,
    Integer,
}

/// Format checks applied on top of `required`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `YYYY-MM-DDTHH:MM[:SS[.fff]][Z]`
    Timestamp,
    /// Five digits: year followed by quarter 1..=4.
    QuarterYYYYQ,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: ValueKind,
    pub required: bool,
    pub max_length: Option<usize>,
    pub format: Option<Format>,
    pub allowed: Option<&'static [&'static str]>,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: ValueKind::Text,
            required: false,
            max_length: None,
            format: None,
            allowed: None,
        }
    }

    /// Boolean edited as `"true"` / `"false"`.
    pub const fn boolean(name: &'static str, label: &'static str) -> Self {
        let mut spec = Self::text(name, label);
        spec.kind = ValueKind::Boolean;
        spec.allowed = Some(BOOLEAN_VALUES);
        spec
    }

    pub const fn timestamp(name: &'static str, label: &'static str) -> Self {
        let mut spec = Self::text(name, label);
        spec.kind = ValueKind::Timestamp;
        spec.format = Some(Format::Timestamp);
        spec
    }

    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        let mut spec = Self::text(name, label);
        spec.kind = ValueKind::Integer;
        spec
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub const fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Short human description of the rules, used by `clubadmin entities`.
    pub fn describe_rules(&self) -> String {
        let mut rules = Vec::new();
        if self.required {
            rules.push("required".to_string());
        }
        if let Some(values) = self.allowed {
            rules.push(format!("one of {}", values.join("|")));
        }
        match self.format {
            Some(Format::Timestamp) => rules.push("ISO timestamp".to_string()),
            Some(Format::QuarterYYYYQ) => rules.push("YYYYQ".to_string()),
            None => {}
        }
        if let Some(n) = self.max_length {
            rules.push(format!("max {n} chars"));
        }
        rules.join(", ")
    }
}
