//! Routing module
//!
//! Path pattern matching and the static route table.

pub mod pattern;
pub mod table;

pub use pattern::{PathParams, PathPattern};
pub use table::{default_routes, RouteHandler, RouteTable};
