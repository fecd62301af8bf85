use crate::models::CurrentUser;

pub use crate::models::user::{ROLE_ADMIN, ROLE_USER};

/// True iff a user is loaded and holds `role`. A missing user never passes.
pub fn has_role(user: Option<&CurrentUser>, role: &str) -> bool {
    user.is_some_and(|u| u.roles.contains(role))
}
