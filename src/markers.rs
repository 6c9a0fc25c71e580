//! # Marker Catalog and Resolution
//!
//! The fixed set of markers the checker understands, and the transitive
//! (meta-marker) lookup used to decide whether a declaration carries one.
//!
//! A marker type can itself be annotated: `@RestController` is meta-annotated
//! with `@Controller`, so a class carrying `@RestController` also resolves
//! [`CONTROLLER`]. The meta-marker graph may contain cycles; [`resolve`] visits
//! each marker instance at most once.

use crate::graph::{breadth_first_find, by_address};
use crate::model::{AnalysisUnit, DeclKind, Declaration, MarkerInstance};
use crate::routes::Verb;


/// Route-host marker: classes eligible to contain endpoints
pub const CONTROLLER: &str = "org.springframework.stereotype.Controller";
/// Generic route marker (all verbs unless overridden)
pub const REQUEST_MAPPING: &str = "org.springframework.web.bind.annotation.RequestMapping";
pub const GET_MAPPING: &str = "org.springframework.web.bind.annotation.GetMapping";
pub const POST_MAPPING: &str = "org.springframework.web.bind.annotation.PostMapping";
pub const PUT_MAPPING: &str = "org.springframework.web.bind.annotation.PutMapping";
pub const DELETE_MAPPING: &str = "org.springframework.web.bind.annotation.DeleteMapping";
pub const PATCH_MAPPING: &str = "org.springframework.web.bind.annotation.PatchMapping";
/// Binding marker: parameter receives a named path segment
pub const PATH_VARIABLE: &str = "org.springframework.web.bind.annotation.PathVariable";

/// Marker types a driver has to hand declarations for
pub const SUPPORTED_MARKERS: [&str; 8] = [
    CONTROLLER,
    REQUEST_MAPPING,
    GET_MAPPING,
    POST_MAPPING,
    PUT_MAPPING,
    DELETE_MAPPING,
    PATCH_MAPPING,
    PATH_VARIABLE,
];

/// Argument names carrying path templates
pub const PATH_ARGUMENTS: [&str; 2] = ["value", "path"];
/// Argument overriding the verbs of the generic route marker
pub const METHOD_ARGUMENT: &str = "method";
/// Argument names aliasing a path binding
pub const ALIAS_ARGUMENTS: [&str; 2] = ["value", "name"];

/// Recognized route marker kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMarker {
    /// `@RequestMapping`
    Generic,
    /// `@GetMapping`, `@PostMapping`, ...
    Specific(Verb),
}

impl RouteMarker {
    #[must_use]
    pub fn from_qualified_name(name: &str) -> Option<Self> {
        match name {
            REQUEST_MAPPING => Some(RouteMarker::Generic),
            GET_MAPPING => Some(RouteMarker::Specific(Verb::Get)),
            POST_MAPPING => Some(RouteMarker::Specific(Verb::Post)),
            PUT_MAPPING => Some(RouteMarker::Specific(Verb::Put)),
            DELETE_MAPPING => Some(RouteMarker::Specific(Verb::Delete)),
            PATCH_MAPPING => Some(RouteMarker::Specific(Verb::Patch)),
            _ => None,
        }
    }

    /// Verbs a marker of this kind answers to before any override
    #[must_use]
    pub fn default_verbs(&self) -> Vec<Verb> {
        match self {
            RouteMarker::Generic => Verb::ALL.to_vec(),
            RouteMarker::Specific(verb) => vec![*verb],
        }
    }
}

/// Find `target` among the declaration's markers or, transitively, their meta-markers
pub fn resolve<'a>(
    unit: &'a AnalysisUnit,
    declaration: &'a Declaration,
    target: &str,
) -> Option<&'a MarkerInstance> {
    resolve_from(unit, &declaration.markers, target)
}

/// Same search as [`resolve`], starting from an arbitrary set of marker instances
pub fn resolve_from<'a>(
    unit: &'a AnalysisUnit,
    roots: &'a [MarkerInstance],
    target: &str,
) -> Option<&'a MarkerInstance> {
    breadth_first_find(
        roots,
        by_address,
        |marker: &'a MarkerInstance| unit.meta_markers(&marker.qualified_name),
        |marker: &'a MarkerInstance| marker.qualified_name == target,
    )
}

/// The directly attached marker that makes a driver hand this declaration to the checker
///
/// A marker qualifies when its type is one of [`SUPPORTED_MARKERS`]; on classes
/// and interfaces a marker also qualifies when it resolves the route-host marker
/// through its meta-markers (e.g. `@RestController`).
pub fn admitting_marker<'a>(
    unit: &'a AnalysisUnit,
    declaration: &'a Declaration,
) -> Option<&'a MarkerInstance> {
    let type_level = matches!(declaration.kind, DeclKind::Class | DeclKind::Interface);
    declaration.markers.iter().find(|marker| {
        SUPPORTED_MARKERS.contains(&marker.qualified_name.as_str())
            || (type_level
                && resolve_from(unit, std::slice::from_ref(*marker), CONTROLLER).is_some())
    })
}
