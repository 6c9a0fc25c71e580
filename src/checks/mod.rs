//! # Route Checks
//!
//! The three checks run on composed routes and route-host classes:
//!
//! - [`RouteRegistry`] detects two declarations claiming the same verb and
//!   wildcarded path.
//! - [`validate_bindings`] matches `@PathVariable` parameters against the
//!   placeholders of each route.
//! - [`check_has_endpoint`] flags route-host classes without a
//!   `@RequestMapping` method.

mod bindings;
mod collisions;
mod endpoints;


pub use bindings::{resolve_bindings, validate_bindings, PathBinding};
pub use collisions::RouteRegistry;
pub use endpoints::check_has_endpoint;
