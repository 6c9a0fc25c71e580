//! # Analysis Model
//!
//! The input side of the checker: declarations (classes, methods, parameters),
//! the marker instances attached to them and the meta-marker graph of marker
//! types. Argument values arrive already decoded into [`Value`].
//!
//! A unit is usually built by [`load_unit`] from a YAML or JSON document, or
//! directly through the `add_*` builders on [`AnalysisUnit`].

mod load;
mod types;
mod value;


pub use load::*;
pub use types::*;
pub use value::*;
