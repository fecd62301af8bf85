use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
pub const ROLE_USER: &str = "ROLE_USER";

/// The logged-in user as reported by `GET /api/currentUser`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CurrentUserPayload")]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub roles: BTreeSet<String>,
}

impl CurrentUser {
    pub fn new<I, S>(id: i64, email: &str, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            email: email.to_string(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.roles.contains(ROLE_ADMIN)
    }
}

#[derive(Deserialize)]
struct CurrentUserPayload {
    user: UserPayload,
    #[serde(default)]
    roles: Vec<Authority>,
}

#[derive(Deserialize)]
struct UserPayload {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    email: String,
}

#[derive(Deserialize)]
struct Authority {
    authority: String,
}

impl From<CurrentUserPayload> for CurrentUser {
    fn from(p: CurrentUserPayload) -> Self {
        Self {
            id: p.user.id,
            email: p.user.email,
            roles: p.roles.into_iter().map(|r| r.authority).collect(),
        }
    }
}

/// Flags from `GET /api/systemInfo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemInfo {
    pub spring_h2_console_enabled: bool,
    pub show_swagger_ui_link: bool,
    pub source_repo: Option<String>,
}
