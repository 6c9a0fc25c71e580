//! # routecheck
//!
//! **routecheck** statically validates HTTP routes declared through annotations
//! (markers) on classes and methods, in the style of Spring's
//! `@RestController` / `@RequestMapping` / `@PathVariable`.
//!
//! ## Checks
//!
//! 1. **Duplicate routes** - two endpoint methods answering the same verb and
//!    path (placeholders compared as wildcards, so `/pets/{id}` and
//!    `/pets/{petId}` collide)
//! 2. **Path bindings** - `@PathVariable` parameters must correspond to `{name}`
//!    placeholders of the route
//! 3. **Missing endpoints** - controllers with no `@RequestMapping` method
//! 4. **Endpoints outside controllers** and methods not enclosed in a class
//! 5. **Malformed marker arguments** - e.g. a path given as a string instead of a list
//!
//! ## Architecture
//!
//! - **[`model`]** - declarations, marker instances and decoded argument values
//! - **[`markers`]** - the supported marker catalog and meta-marker resolution
//! - **[`graph`]** - cycle-safe breadth-first search used by the resolver
//! - **[`routes`]** - route fragment extraction and class/method composition
//! - **[`checks`]** - collision registry, binding validation, endpoint presence
//! - **[`session`]** - per-run state and per-declaration isolation
//! - **[`driver`]** - splits a unit into passes and runs them through a session
//! - **[`diagnostics`]** - diagnostic types, sinks and report rendering
//!
//! ## Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Driver as driver::run
//!     participant Session as AnalysisSession
//!     participant Compose as routes::compose_routes
//!     participant Registry as RouteRegistry
//!     participant Bindings as checks::validate_bindings
//!     participant Sink as DiagnosticSink
//!
//!     Driver->>Session: process_batch(batch, is_last_pass)
//!     loop each declaration
//!         Session->>Compose: compose_routes(method)
//!         Compose-->>Session: Vec<ComposedRoute>
//!         Session->>Registry: register_routes(method, routes)
//!         Session->>Bindings: validate_bindings(method, routes)
//!         Session->>Sink: emit(diagnostic)
//!     end
//!     Session->>Registry: reset() on the last pass
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use routecheck::markers::{GET_MAPPING, REQUEST_MAPPING};
//! use routecheck::model::{AnalysisUnit, MarkerInstance, Value};
//! use routecheck::session::AnalysisSession;
//! use routecheck::diagnostics::Diagnostic;
//!
//! let mut unit = AnalysisUnit::new();
//! let class = unit.add_class(
//!     "com.example.PetController",
//!     vec![MarkerInstance::new(REQUEST_MAPPING)
//!         .with_arg("value", Value::List(vec![Value::Str("/pets".into())]))],
//! );
//! let first = unit.add_method(class, "list", vec![MarkerInstance::new(GET_MAPPING)]);
//! let second = unit.add_method(class, "all", vec![MarkerInstance::new(GET_MAPPING)]);
//!
//! let mut session = AnalysisSession::new();
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! session
//!     .process_batch(&unit, &[first, second], true, &mut diagnostics)
//!     .expect("session is open");
//! assert!(diagnostics.iter().any(|d| d.message == "Duplicate path: GET /pets"));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod driver;
pub mod error;
pub mod graph;
pub mod logging;
pub mod markers;
pub mod model;
pub mod routes;
pub mod session;

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, Severity};
pub use error::AnalysisError;
pub use model::{load_unit, AnalysisUnit, DeclId, DeclKind, MarkerInstance, Value};
pub use session::AnalysisSession;
