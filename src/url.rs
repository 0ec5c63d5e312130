//! Route descriptors and URL resolution.
//!
//! The helpers never build endpoint URLs themselves; they hand an opaque
//! [`Route`] to a [`UrlResolver`] supplied by the host application and embed
//! whatever string comes back. Resolver failures propagate unchanged.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An opaque descriptor of the completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// A named server action, e.g. `auto_complete_for_item_title`.
    Action(String),
    /// A literal URL or path used as-is.
    Path(String),
}

impl Default for Route {
    /// An empty path; what a missing `url` option resolves to is entirely up
    /// to the resolver.
    fn default() -> Self {
        Route::Path(String::new())
    }
}

impl Route {
    /// The default completion route for a composite field:
    /// `auto_complete_for_<object>_<method>`.
    pub fn for_field(object: &str, method: &str) -> Self {
        Route::Action(format!("auto_complete_for_{object}_{method}"))
    }
}

/// Resolves a [`Route`] to an endpoint URL string.
pub trait UrlResolver {
    /// Resolves `route` to the URL the client widget should query.
    ///
    /// # Errors
    ///
    /// Implementations decide what an unresolvable route means; errors are
    /// propagated by the helpers without interpretation.
    fn resolve(&self, route: &Route) -> Result<String>;
}

/// Resolution failure of [`StaticRoutes`].
#[derive(Debug, Error)]
pub enum RouteError {
    /// The action has no registered URL and no base path is configured.
    #[error("no route registered for action: {0}")]
    UnknownAction(String),
}

/// A table-driven [`UrlResolver`]: explicit action→URL entries, with an
/// optional base path under which unregistered actions are mounted.
#[derive(Debug, Clone, Default)]
pub struct StaticRoutes {
    base: Option<String>,
    actions: BTreeMap<String, String>,
}

impl StaticRoutes {
    /// An empty route table; every unregistered action fails to resolve.
    pub fn new() -> Self {
        Self::default()
    }

    /// A route table mounting unregistered actions under `base`, so
    /// `Action("auto_complete_for_item_title")` resolves to
    /// `<base>/auto_complete_for_item_title`.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: Some(base.into()),
            actions: BTreeMap::new(),
        }
    }

    /// Registers an explicit URL for `action`.
    #[must_use]
    pub fn route(mut self, action: impl Into<String>, url: impl Into<String>) -> Self {
        self.actions.insert(action.into(), url.into());
        self
    }
}

impl UrlResolver for StaticRoutes {
    fn resolve(&self, route: &Route) -> Result<String> {
        match route {
            Route::Path(path) => Ok(path.clone()),
            Route::Action(action) => {
                if let Some(url) = self.actions.get(action) {
                    return Ok(url.clone());
                }
                match &self.base {
                    Some(base) => Ok(format!("{}/{}", base.trim_end_matches('/'), action)),
                    None => Err(RouteError::UnknownAction(action.clone()).into()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_routes_resolve_verbatim() {
        let routes = StaticRoutes::new();
        let url = routes.resolve(&Route::Path("/items/complete".into()));
        assert_eq!(url.ok().as_deref(), Some("/items/complete"));
    }

    #[test]
    fn registered_action_wins_over_base() {
        let routes = StaticRoutes::with_base("/ajax").route("auto_complete_for_item_title", "/x");
        let url = routes.resolve(&Route::Action("auto_complete_for_item_title".into()));
        assert_eq!(url.ok().as_deref(), Some("/x"));
    }

    #[test]
    fn base_mounts_unregistered_actions() {
        let routes = StaticRoutes::with_base("/ajax/");
        let url = routes.resolve(&Route::Action("auto_complete_for_item_title".into()));
        assert_eq!(url.ok().as_deref(), Some("/ajax/auto_complete_for_item_title"));
    }

    #[test]
    fn unknown_action_without_base_fails() {
        let routes = StaticRoutes::new();
        assert!(routes.resolve(&Route::Action("missing".into())).is_err());
    }

    #[test]
    fn default_route_is_empty_path() {
        assert_eq!(Route::default(), Route::Path(String::new()));
    }

    #[test]
    fn field_route_name() {
        assert_eq!(
            Route::for_field("item", "title"),
            Route::Action("auto_complete_for_item_title".into())
        );
    }
}
