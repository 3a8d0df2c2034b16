use perkhub_auth::{Role, Session};

use crate::outcome::{Outcome, RedirectTarget};
use crate::pattern::normalize_path;
use crate::requirement::{RouteAccess, RouteTable};

/// Resolves a navigation request to a single [`Outcome`].
///
/// The gate never raises: unknown paths become [`Outcome::NotFound`],
/// insufficient roles become [`Outcome::Denied`], and an unresolved session
/// degrades to [`Outcome::Pending`] so protected content is never flashed
/// before authorization is confirmed.
#[derive(Debug, Clone)]
pub struct AccessGate {
    table: RouteTable,
}

impl AccessGate {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Decide the outcome for one navigation.
    ///
    /// Pure function of its inputs: the requested path, the session (absent
    /// means unauthenticated), and whether the session fetch is still in
    /// flight.
    pub fn decide(&self, path: &str, session: Option<&Session>, loading: bool) -> Outcome {
        let path = normalize_path(path);
        let outcome = self.decide_normalized(path, session, loading);
        tracing::debug!(path, outcome = outcome.as_str(), "navigation decided");
        outcome
    }

    fn decide_normalized(&self, path: &str, session: Option<&Session>, loading: bool) -> Outcome {
        // The root never renders content; it only dispatches to a landing
        // page, so the loading flag does not apply here.
        if path == "/" {
            return match session {
                None => Outcome::Redirect(RedirectTarget::Login),
                Some(s) => match s.role {
                    Role::Admin | Role::SuperAdmin => Outcome::Redirect(RedirectTarget::AdminHome),
                    Role::User => Outcome::Redirect(RedirectTarget::UserHome),
                },
            };
        }

        let Some(requirement) = self.table.find(path) else {
            return Outcome::NotFound;
        };

        if matches!(requirement.access(), RouteAccess::Public) {
            return Outcome::Render;
        }
        if loading {
            return Outcome::Pending;
        }
        let Some(session) = session else {
            return Outcome::Redirect(RedirectTarget::Login);
        };

        match requirement.access() {
            RouteAccess::Public | RouteAccess::Authenticated => Outcome::Render,
            RouteAccess::Restricted(roles) => {
                if roles.contains(&session.role) {
                    Outcome::Render
                } else {
                    Outcome::Denied
                }
            }
        }
    }
}
