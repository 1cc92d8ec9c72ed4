//! # Routes
//!
//! The application's route table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A view the application can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// `/`
    Landing,
    /// `/marketplace`
    Marketplace,
    /// `/node/:id`
    NodeDetail(String),
    /// `/login`
    Login,
    /// `/auth-required`
    AuthRequired,
    /// `/dashboard`
    Dashboard,
    /// `/add`
    AddNode,
    /// `/edit/:id`
    EditNode(String),
    /// Anything else.
    NotFound(String),
}

impl Route {
    /// Match a path against the route table. Query strings and a trailing
    /// slash are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        match segments.as_slice() {
            [] => Self::Landing,
            ["marketplace"] => Self::Marketplace,
            ["node", id] if !id.is_empty() => Self::NodeDetail((*id).to_string()),
            ["login"] => Self::Login,
            ["auth-required"] => Self::AuthRequired,
            ["dashboard"] => Self::Dashboard,
            ["add"] => Self::AddNode,
            ["edit", id] if !id.is_empty() => Self::EditNode((*id).to_string()),
            _ => Self::NotFound(path.to_string()),
        }
    }

    /// Path of this route.
    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Marketplace => "/marketplace".to_string(),
            Self::NodeDetail(id) => format!("/node/{id}"),
            Self::Login => "/login".to_string(),
            Self::AuthRequired => "/auth-required".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::AddNode => "/add".to_string(),
            Self::EditNode(id) => format!("/edit/{id}"),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Whether the view renders behind the route guard.
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Dashboard | Self::AddNode | Self::EditNode(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse(""), Route::Landing);
        assert_eq!(Route::parse("/marketplace/"), Route::Marketplace);
        assert_eq!(Route::parse("/node/42"), Route::NodeDetail("42".into()));
        assert_eq!(Route::parse("/edit/7?tab=io"), Route::EditNode("7".into()));
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/auth-required"), Route::AuthRequired);
        assert_eq!(Route::parse("/nope"), Route::NotFound("/nope".into()));
        assert_eq!(Route::parse("/node"), Route::NotFound("/node".into()));
    }

    #[test]
    fn test_protected_routes() {
        assert!(Route::Dashboard.is_protected());
        assert!(Route::AddNode.is_protected());
        assert!(Route::EditNode("1".into()).is_protected());
        assert!(!Route::Marketplace.is_protected());
        assert!(!Route::AuthRequired.is_protected());
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Landing,
            Route::NodeDetail("abc".into()),
            Route::Dashboard,
            Route::EditNode("9".into()),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
