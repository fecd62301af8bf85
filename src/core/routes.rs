//! Declarative route table with role requirements.
//!
//! All route visibility decisions go through [`RouteTable::resolve`] and
//! [`RouteTable::reachable`], which consult the role gate once per route.

use crate::core::role::{ROLE_ADMIN, ROLE_USER, has_role};
use crate::errors::{AppError, AppResult};
use crate::models::{CurrentUser, EntityKind, catalog};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Profile,
    AdminUsers,
    Index(&'static EntityKind),
    Create(&'static EntityKind),
    Edit(&'static EntityKind),
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Home => f.write_str("Home"),
            Page::Profile => f.write_str("Profile"),
            Page::AdminUsers => f.write_str("Users"),
            Page::Index(k) => f.write_str(k.plural),
            Page::Create(k) => write!(f, "Create {}", k.display),
            Page::Edit(k) => write!(f, "Edit {}", k.display),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub role: Option<&'static str>,
    pub page: Page,
}

/// A concrete path matched against a route, with its `:param` bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub page: Page,
    pub param: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::from_catalog(&catalog::ALL)
    }
}

impl RouteTable {
    pub fn from_catalog(kinds: &[&'static EntityKind]) -> Self {
        let mut routes = vec![
            Route {
                path: "/".into(),
                role: None,
                page: Page::Home,
            },
            Route {
                path: "/profile".into(),
                role: None,
                page: Page::Profile,
            },
            Route {
                path: "/admin/users".into(),
                role: Some(ROLE_ADMIN),
                page: Page::AdminUsers,
            },
        ];

        for &kind in kinds {
            routes.push(Route {
                path: kind.index_route(),
                role: Some(ROLE_USER),
                page: Page::Index(kind),
            });
            routes.push(Route {
                path: kind.create_route(),
                role: Some(ROLE_ADMIN),
                page: Page::Create(kind),
            });
            routes.push(Route {
                path: kind.edit_route_template(),
                role: Some(ROLE_ADMIN),
                page: Page::Edit(kind),
            });
        }

        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    fn allowed(route: &Route, user: Option<&CurrentUser>) -> bool {
        route.role.is_none_or(|r| has_role(user, r))
    }

    /// Routes the user may visit, in declaration order.
    pub fn reachable(&self, user: Option<&CurrentUser>) -> Vec<&Route> {
        self.routes
            .iter()
            .filter(|r| Self::allowed(r, user))
            .collect()
    }

    pub fn resolve(&self, path: &str, user: Option<&CurrentUser>) -> AppResult<Resolved> {
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };

        for route in &self.routes {
            if let Some(param) = match_template(&route.path, path) {
                if !Self::allowed(route, user) {
                    tracing::info!(path, role = ?route.role, "route hidden for current user");
                    return Err(AppError::Forbidden(
                        path.to_string(),
                        route.role.unwrap_or_default().to_string(),
                    ));
                }
                return Ok(Resolved {
                    page: route.page,
                    param,
                });
            }
        }

        Err(AppError::RouteNotFound(path.to_string()))
    }
}

/// `Some(param)` when `path` fits `template`; `param` is the value bound to
/// a `:name` segment, if the template has one.
fn match_template(template: &str, path: &str) -> Option<Option<String>> {
    let t: Vec<&str> = template.split('/').collect();
    let p: Vec<&str> = path.split('/').collect();
    if t.len() != p.len() {
        return None;
    }

    let mut param = None;
    for (ts, ps) in t.iter().zip(p.iter()) {
        if ts.starts_with(':') {
            if ps.is_empty() {
                return None;
            }
            param = Some((*ps).to_string());
        } else if ts != ps {
            return None;
        }
    }
    Some(param)
}
