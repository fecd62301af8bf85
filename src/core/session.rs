//! Process-wide session context, loaded once at startup.

use crate::backend::{ApiRequest, Backend};
use crate::core::role::has_role;
use crate::models::{CurrentUser, SystemInfo};

#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<CurrentUser>,
    system: SystemInfo,
}

impl Session {
    /// Fetch current user and system info. Failures leave the session
    /// anonymous rather than aborting.
    pub fn start(backend: &dyn Backend) -> Self {
        let user = match backend.send(&ApiRequest::get("/api/currentUser")) {
            Ok(v) => match serde_json::from_value::<CurrentUser>(v) {
                Ok(u) => Some(u),
                Err(e) => {
                    tracing::warn!(error = %e, "unexpected currentUser payload");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "could not load current user");
                None
            }
        };

        let system = match backend
            .send(&ApiRequest::get("/api/systemInfo"))
            .and_then(|v| Ok(serde_json::from_value::<SystemInfo>(v)?))
        {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "could not load system info");
                SystemInfo::default()
            }
        };

        Self { user, system }
    }

    pub fn with_user(user: CurrentUser) -> Self {
        Self {
            user: Some(user),
            system: SystemInfo::default(),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub fn system(&self) -> &SystemInfo {
        &self.system
    }

    pub fn has_role(&self, role: &str) -> bool {
        has_role(self.user(), role)
    }

    pub fn logout(&mut self) {
        self.user = None;
    }
}
