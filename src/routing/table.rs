//! Route table
//!
//! Static mapping from (method, path pattern) to a handler, installed
//! once at startup and immutable afterwards.

use hyper::Method;

use super::pattern::{PathParams, PathPattern};

/// Handlers a route can dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteHandler {
    /// `GET /` — the static homepage
    Home,
    /// `GET /hello/{name}` — the templated greeting
    Hello,
}

/// A single registered route
#[derive(Debug)]
pub struct Route {
    method: Method,
    pattern: PathPattern,
    handler: RouteHandler,
}

/// The route table, searched in registration order
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Every pattern must be unique per method;
    /// a duplicate registration is rejected.
    pub fn insert(
        &mut self,
        method: Method,
        pattern: &str,
        handler: RouteHandler,
    ) -> Result<(), String> {
        if self
            .routes
            .iter()
            .any(|r| r.method == method && r.pattern.as_str() == pattern)
        {
            return Err(format!("Duplicate route: {method} {pattern}"));
        }

        self.routes.push(Route {
            method,
            pattern: PathPattern::parse(pattern),
            handler,
        });
        Ok(())
    }

    /// Find the first route matching the method and path, extracting
    /// any path parameters.
    pub fn find(&self, method: &Method, path: &str) -> Option<(RouteHandler, PathParams)> {
        self.routes
            .iter()
            .filter(|route| route.method == *method)
            .find_map(|route| {
                route
                    .pattern
                    .matches(path)
                    .map(|params| (route.handler, params))
            })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Build the route table for this server
pub fn default_routes() -> Result<RouteTable, String> {
    let mut table = RouteTable::new();
    table.insert(Method::GET, "/", RouteHandler::Home)?;
    table.insert(Method::GET, "/hello/{name}", RouteHandler::Hello)?;
    Ok(table)
}
