pub mod catalog;
pub mod entities;
pub mod entity_kind;
pub mod field_spec;
pub mod record;
pub mod user;

pub use entity_kind::{EntityKind, KeyKind};
pub use field_spec::{FieldSpec, Format, ValueKind};
pub use record::Record;
pub use user::{CurrentUser, SystemInfo};
