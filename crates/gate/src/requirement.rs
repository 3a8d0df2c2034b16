use thiserror::Error;

use perkhub_auth::Role;

use crate::pattern::PathPattern;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("route '{pattern}' restricts to an empty role set")]
    EmptyRoleSet { pattern: String },
}

/// Who may render a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    /// Renders for anyone, including an unresolved session (login page).
    Public,
    /// Any authenticated role.
    Authenticated,
    /// Strict membership in the listed roles. Never empty.
    Restricted(Vec<Role>),
}

/// Declared access restriction for a navigable path.
///
/// Requirements are built once at composition time and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequirement {
    pattern: PathPattern,
    access: RouteAccess,
}

impl RouteRequirement {
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn access(&self) -> &RouteAccess {
        &self.access
    }
}

/// Static table of path patterns and their access requirements.
///
/// The root path `/` is not registered here: its outcome is always a
/// redirect, decided by [`crate::AccessGate`] directly.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RouteRequirement>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// First registered pattern matching the (normalized) path wins.
    pub fn find(&self, path: &str) -> Option<&RouteRequirement> {
        self.routes.iter().find(|r| r.pattern.matches(path))
    }

    pub fn routes(&self) -> &[RouteRequirement] {
        &self.routes
    }
}

#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    entries: Vec<(String, RouteAccess)>,
}

impl RouteTableBuilder {
    pub fn public(mut self, pattern: impl Into<String>) -> Self {
        self.entries.push((pattern.into(), RouteAccess::Public));
        self
    }

    pub fn authenticated(mut self, pattern: impl Into<String>) -> Self {
        self.entries.push((pattern.into(), RouteAccess::Authenticated));
        self
    }

    pub fn restricted(mut self, pattern: impl Into<String>, roles: impl Into<Vec<Role>>) -> Self {
        self.entries
            .push((pattern.into(), RouteAccess::Restricted(roles.into())));
        self
    }

    /// Validate every entry and freeze the table.
    pub fn build(self) -> Result<RouteTable, RouteTableError> {
        let mut routes = Vec::with_capacity(self.entries.len());
        for (pattern, access) in self.entries {
            if let RouteAccess::Restricted(roles) = &access {
                if roles.is_empty() {
                    return Err(RouteTableError::EmptyRoleSet { pattern });
                }
            }
            routes.push(RouteRequirement {
                pattern: PathPattern::parse(&pattern)?,
                access,
            });
        }
        Ok(RouteTable { routes })
    }
}
