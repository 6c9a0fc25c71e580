#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for route extraction and composition

use super::*;
use crate::diagnostics::{DiagnosticKind, Severity};
use crate::markers::{
    CONTROLLER, DELETE_MAPPING, GET_MAPPING, POST_MAPPING, REQUEST_MAPPING,
};
use crate::model::{AnalysisUnit, DeclKind, MarkerInstance, Value};

fn paths(items: &[&str]) -> Value {
    Value::List(items.iter().map(|p| Value::Str(p.to_string())).collect())
}

fn tokens(items: &[&str]) -> Value {
    Value::List(items.iter().map(|t| Value::Token(t.to_string())).collect())
}

fn mapping(kind: &str, value: &[&str]) -> MarkerInstance {
    MarkerInstance::new(kind).with_arg("value", paths(value))
}

fn controller(unit: &mut AnalysisUnit, markers: Vec<MarkerInstance>) -> crate::model::DeclId {
    let mut all = vec![MarkerInstance::new(CONTROLLER)];
    all.extend(markers);
    unit.add_class("com.example.Api", all)
}

#[test]
fn test_generic_marker_defaults_to_all_verbs() {
    let mut unit = AnalysisUnit::new();
    let class = unit.add_class("A", vec![MarkerInstance::new(REQUEST_MAPPING)]);
    let extraction = extract_fragments(unit.get(class).unwrap());
    assert!(extraction.diagnostics.is_empty());
    assert_eq!(extraction.fragments, vec![RouteFragment::new("", Verb::ALL.to_vec())]);
    assert_eq!(
        Verb::ALL.iter().map(Verb::as_str).collect::<Vec<_>>(),
        vec!["GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "OPTIONS", "TRACE"]
    );
}

#[test]
fn test_specific_marker_yields_exactly_its_verb() {
    let mut unit = AnalysisUnit::new();
    let class = unit.add_class(
        "A",
        vec![mapping(POST_MAPPING, &["/a"]).with_arg("method", tokens(&["RequestMethod.GET"]))],
    );
    let extraction = extract_fragments(unit.get(class).unwrap());
    assert_eq!(extraction.fragments, vec![RouteFragment::new("/a", vec![Verb::Post])]);
}

#[test]
fn test_each_path_yields_a_fragment() {
    let mut unit = AnalysisUnit::new();
    let class = unit.add_class(
        "A",
        vec![
            mapping(GET_MAPPING, &["/a", "/b"]),
            MarkerInstance::new("com.example.NotARoute").with_arg("value", paths(&["/c"])),
            mapping(DELETE_MAPPING, &["/d"]),
        ],
    );
    let extraction = extract_fragments(unit.get(class).unwrap());
    assert_eq!(
        extraction.fragments,
        vec![
            RouteFragment::new("/a", vec![Verb::Get]),
            RouteFragment::new("/b", vec![Verb::Get]),
            RouteFragment::new("/d", vec![Verb::Delete]),
        ]
    );
}

#[test]
fn test_path_and_value_both_contribute() {
    let mut unit = AnalysisUnit::new();
    let class = unit.add_class(
        "A",
        vec![MarkerInstance::new(GET_MAPPING)
            .with_arg("path", paths(&["/p"]))
            .with_arg("value", paths(&["/v"]))],
    );
    let extraction = extract_fragments(unit.get(class).unwrap());
    let found: Vec<_> = extraction.fragments.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(found, vec!["/p", "/v"]);
}

#[test]
fn test_empty_path_list_contributes_nothing() {
    let mut unit = AnalysisUnit::new();
    let class = unit.add_class("A", vec![mapping(GET_MAPPING, &[])]);
    let extraction = extract_fragments(unit.get(class).unwrap());
    assert!(extraction.fragments.is_empty());
}

#[test]
fn test_verb_override_replaces_defaults_regardless_of_order() {
    let mut unit = AnalysisUnit::new();
    let class = unit.add_class(
        "A",
        vec![mapping(REQUEST_MAPPING, &["/x", "/y"]).with_arg(
            "method",
            tokens(&["RequestMethod.PUT", "org.springframework.web.bind.annotation.RequestMethod.PATCH"]),
        )],
    );
    let extraction = extract_fragments(unit.get(class).unwrap());
    assert!(extraction.diagnostics.is_empty());
    assert_eq!(
        extraction.fragments,
        vec![
            RouteFragment::new("/x", vec![Verb::Put, Verb::Patch]),
            RouteFragment::new("/y", vec![Verb::Put, Verb::Patch]),
        ]
    );
}

#[test]
fn test_empty_verb_override_keeps_defaults() {
    let mut unit = AnalysisUnit::new();
    let class = unit.add_class(
        "A",
        vec![MarkerInstance::new(REQUEST_MAPPING).with_arg("method", Value::List(vec![]))],
    );
    let extraction = extract_fragments(unit.get(class).unwrap());
    assert_eq!(extraction.fragments[0].verbs, Verb::ALL.to_vec());
}

#[test]
fn test_scalar_path_is_a_shape_error() {
    let mut unit = AnalysisUnit::new();
    let class = unit.add_class(
        "A",
        vec![MarkerInstance::new(GET_MAPPING).with_arg("value", Value::Str("/a".into()))],
    );
    let extraction = extract_fragments(unit.get(class).unwrap());
    assert!(extraction.fragments.is_empty());
    assert_eq!(extraction.diagnostics.len(), 1);
    let diagnostic = &extraction.diagnostics[0];
    assert_eq!(diagnostic.kind, DiagnosticKind::Shape);
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.anchor, class);
    assert_eq!(diagnostic.message, "expected list of paths but got string");
}

#[test]
fn test_non_string_path_element_is_reported_and_skipped() {
    let mut unit = AnalysisUnit::new();
    let class = unit.add_class(
        "A",
        vec![MarkerInstance::new(GET_MAPPING).with_arg(
            "value",
            Value::List(vec![Value::Token("Paths.ROOT".into()), Value::Str("/ok".into())]),
        )],
    );
    let extraction = extract_fragments(unit.get(class).unwrap());
    assert_eq!(extraction.fragments, vec![RouteFragment::new("/ok", vec![Verb::Get])]);
    assert_eq!(extraction.diagnostics[0].message, "expected path string but got token");
}

#[test]
fn test_bad_verb_override_shapes() {
    let mut unit = AnalysisUnit::new();
    let class = unit.add_class(
        "A",
        vec![
            MarkerInstance::new(REQUEST_MAPPING).with_arg("method", Value::Token("RequestMethod.GET".into())),
            MarkerInstance::new(REQUEST_MAPPING)
                .with_arg("method", tokens(&["RequestMethod.FETCH", "RequestMethod.GET"])),
        ],
    );
    let extraction = extract_fragments(unit.get(class).unwrap());
    assert_eq!(extraction.fragments.len(), 2);
    assert_eq!(extraction.fragments[0].verbs, Verb::ALL.to_vec());
    assert_eq!(extraction.fragments[1].verbs, vec![Verb::Get]);
    let messages: Vec<_> = extraction.diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "expected list of request methods but got token",
            "unknown request method RequestMethod.FETCH",
        ]
    );
}

#[test]
fn test_unparseable_verb_override_still_replaces_defaults() {
    let mut unit = AnalysisUnit::new();
    let class = unit.add_class(
        "A",
        vec![mapping(REQUEST_MAPPING, &["/x"]).with_arg("method", tokens(&["RequestMethod.FETCH"]))],
    );
    let extraction = extract_fragments(unit.get(class).unwrap());
    assert_eq!(extraction.fragments, vec![RouteFragment::new("/x", vec![])]);
    assert_eq!(extraction.diagnostics.len(), 1);
    assert_eq!(
        extraction.diagnostics[0].message,
        "unknown request method RequestMethod.FETCH"
    );
}

#[test]
fn test_lowercase_verb_constant_is_unknown() {
    let mut unit = AnalysisUnit::new();
    let class = unit.add_class(
        "A",
        vec![MarkerInstance::new(REQUEST_MAPPING)
            .with_arg("method", tokens(&["RequestMethod.get", "RequestMethod.POST"]))],
    );
    let extraction = extract_fragments(unit.get(class).unwrap());
    assert_eq!(extraction.fragments[0].verbs, vec![Verb::Post]);
    assert_eq!(
        extraction.diagnostics[0].message,
        "unknown request method RequestMethod.get"
    );
}

#[test]
fn test_compose_prefix_and_suffix() {
    let mut unit = AnalysisUnit::new();
    let class = controller(&mut unit, vec![mapping(REQUEST_MAPPING, &["/api"])]);
    let method = unit.add_method(class, "get", vec![mapping(GET_MAPPING, &["/{id}"])]);
    let composition = compose_routes(&unit, unit.get(method).unwrap()).unwrap();
    assert!(composition.diagnostics.is_empty());
    assert_eq!(
        composition.routes,
        vec![ComposedRoute {
            path: "/api/{id}".into(),
            verbs: vec![Verb::Get],
            method,
        }]
    );
}

#[test]
fn test_compose_inserts_leading_slash() {
    let mut unit = AnalysisUnit::new();
    let class = controller(&mut unit, vec![]);
    let method = unit.add_method(class, "items", vec![mapping(GET_MAPPING, &["items"])]);
    let composition = compose_routes(&unit, unit.get(method).unwrap()).unwrap();
    assert_eq!(composition.routes[0].path, "/items");
}

#[test]
fn test_compose_without_any_route_marker_is_catch_all_root() {
    let mut unit = AnalysisUnit::new();
    let class = controller(&mut unit, vec![]);
    let method = unit.add_method(class, "any", vec![]);
    let composition = compose_routes(&unit, unit.get(method).unwrap()).unwrap();
    assert_eq!(composition.routes.len(), 1);
    assert_eq!(composition.routes[0].path, "/");
    assert_eq!(composition.routes[0].verbs, Verb::ALL.to_vec());
}

#[test]
fn test_compose_is_cartesian_and_uses_method_verbs() {
    let mut unit = AnalysisUnit::new();
    let class = controller(
        &mut unit,
        vec![mapping(REQUEST_MAPPING, &["/v1", "/v2"]).with_arg("method", tokens(&["RequestMethod.POST"]))],
    );
    let method = unit.add_method(
        class,
        "get",
        vec![mapping(GET_MAPPING, &["/a"]), mapping(DELETE_MAPPING, &["/b"])],
    );
    let composition = compose_routes(&unit, unit.get(method).unwrap()).unwrap();
    let routes: Vec<_> = composition
        .routes
        .iter()
        .map(|r| (r.path.as_str(), r.verbs.clone()))
        .collect();
    assert_eq!(
        routes,
        vec![
            ("/v1/a", vec![Verb::Get]),
            ("/v1/b", vec![Verb::Delete]),
            ("/v2/a", vec![Verb::Get]),
            ("/v2/b", vec![Verb::Delete]),
        ]
    );
}

#[test]
fn test_compose_outside_class_is_structural_error() {
    let mut unit = AnalysisUnit::new();
    let api = unit.add_interface("com.example.Api", vec![]);
    let method = unit.add_method(api, "get", vec![mapping(GET_MAPPING, &["/a"])]);
    let composition = compose_routes(&unit, unit.get(method).unwrap()).unwrap();
    assert!(composition.routes.is_empty());
    assert_eq!(composition.diagnostics.len(), 1);
    assert_eq!(composition.diagnostics[0].kind, DiagnosticKind::Structural);
    assert_eq!(composition.diagnostics[0].anchor, method);

    let orphan = unit.add_declaration(DeclKind::Method, "orphan", None, vec![]);
    let composition = compose_routes(&unit, unit.get(orphan).unwrap()).unwrap();
    assert!(composition.routes.is_empty());
    assert_eq!(composition.diagnostics[0].kind, DiagnosticKind::Structural);
}

#[test]
fn test_compose_outside_controller_warns_but_still_composes() {
    let mut unit = AnalysisUnit::new();
    let class = unit.add_class("com.example.Plain", vec![]);
    let method = unit.add_method(class, "get", vec![mapping(GET_MAPPING, &["/a"])]);
    let composition = compose_routes(&unit, unit.get(method).unwrap()).unwrap();
    assert_eq!(composition.routes.len(), 1);
    assert_eq!(composition.diagnostics.len(), 1);
    assert_eq!(composition.diagnostics[0].kind, DiagnosticKind::MissingRouteHost);
    assert_eq!(composition.diagnostics[0].severity, Severity::MandatoryWarning);
}

#[test]
fn test_compose_with_dangling_enclosing_fails() {
    let mut unit = AnalysisUnit::new();
    let method = unit.add_declaration(
        DeclKind::Method,
        "lost",
        Some(crate::model::DeclId(99)),
        vec![],
    );
    let err = compose_routes(&unit, unit.get(method).unwrap()).unwrap_err();
    assert_eq!(
        err,
        crate::error::AnalysisError::UnknownDeclaration(crate::model::DeclId(99))
    );
}

#[test]
fn test_route_keys_wildcard_placeholders() {
    let route = ComposedRoute {
        path: "/users/{id}/posts/{postId}".into(),
        verbs: vec![Verb::Get, Verb::Head],
        method: crate::model::DeclId(0),
    };
    let keys: Vec<_> = route.keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["GET /users/*/posts/*", "HEAD /users/*/posts/*"]);
}

#[test]
fn test_placeholders_are_distinct_names() {
    let names = placeholders("/a/{x}/b/{y}/c/{x}/{not/one}");
    assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["x", "y"]);
    assert!(placeholders("/plain").is_empty());
    assert_eq!(wildcarded("/{a}{b}/{}"), "/**/{}");
}

#[test]
fn test_verb_from_token() {
    assert_eq!(Verb::from_token("RequestMethod.OPTIONS"), Some(Verb::Options));
    assert_eq!(Verb::from_token("TRACE"), Some(Verb::Trace));
    assert_eq!(Verb::from_token("RequestMethod.get"), None);
    assert_eq!(Verb::from_token("trace"), None);
    assert_eq!(Verb::from_token("RequestMethod.CONNECT"), None);
    assert!("BREW".parse::<Verb>().is_err());
}
