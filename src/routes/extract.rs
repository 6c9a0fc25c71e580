use super::{RouteFragment, Verb};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::markers::{RouteMarker, METHOD_ARGUMENT, PATH_ARGUMENTS};
use crate::model::{Declaration, MarkerInstance, Value};

/// Fragments found on one declaration plus any shape problems in the marker arguments
#[derive(Debug, Default)]
pub struct Extraction {
    pub fragments: Vec<RouteFragment>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Collect route fragments from the route markers attached directly to `declaration`
///
/// Each path in a marker's `value`/`path` argument yields one fragment; a marker
/// without path arguments yields a single fragment with an empty path. All
/// fragments of a marker share its verb set.
#[must_use]
pub fn extract_fragments(declaration: &Declaration) -> Extraction {
    let mut extraction = Extraction::default();
    for marker in &declaration.markers {
        let Some(kind) = RouteMarker::from_qualified_name(&marker.qualified_name) else {
            continue;
        };
        let verbs = match kind {
            RouteMarker::Generic => verb_override(declaration, marker, &mut extraction.diagnostics)
                .unwrap_or_else(|| kind.default_verbs()),
            RouteMarker::Specific(_) => kind.default_verbs(),
        };

        let mut has_path_argument = false;
        for (name, value) in &marker.arguments {
            if !PATH_ARGUMENTS.contains(&name.as_str()) {
                continue;
            }
            has_path_argument = true;
            add_paths(declaration, value, &verbs, &mut extraction);
        }
        if !has_path_argument {
            extraction.fragments.push(RouteFragment::new("", verbs));
        }
    }
    extraction
}

fn add_paths(declaration: &Declaration, value: &Value, verbs: &[Verb], out: &mut Extraction) {
    let Value::List(paths) = value else {
        out.diagnostics.push(Diagnostic::error(
            DiagnosticKind::Shape,
            declaration.id,
            format!("expected list of paths but got {}", value.kind_name()),
        ));
        return;
    };
    for path in paths {
        match path {
            Value::Str(path) => out
                .fragments
                .push(RouteFragment::new(path.as_str(), verbs.to_vec())),
            other => out.diagnostics.push(Diagnostic::error(
                DiagnosticKind::Shape,
                declaration.id,
                format!("expected path string but got {}", other.kind_name()),
            )),
        }
    }
}

/// Verbs listed in the `method` argument, if it is present and non-empty
///
/// The result replaces the marker's default verbs rather than adding to them,
/// even when none of the listed tokens is a known verb.
fn verb_override(
    declaration: &Declaration,
    marker: &MarkerInstance,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Vec<Verb>> {
    let value = marker.argument(METHOD_ARGUMENT)?;
    let Value::List(tokens) = value else {
        diagnostics.push(Diagnostic::error(
            DiagnosticKind::Shape,
            declaration.id,
            format!("expected list of request methods but got {}", value.kind_name()),
        ));
        return None;
    };

    let mut verbs = Vec::with_capacity(tokens.len());
    for token in tokens {
        let text = match token {
            Value::Token(t) | Value::Str(t) => t,
            other => {
                diagnostics.push(Diagnostic::error(
                    DiagnosticKind::Shape,
                    declaration.id,
                    format!("expected request method but got {}", other.kind_name()),
                ));
                continue;
            }
        };
        match Verb::from_token(text) {
            Some(verb) if !verbs.contains(&verb) => verbs.push(verb),
            Some(_) => {}
            None => diagnostics.push(Diagnostic::error(
                DiagnosticKind::Shape,
                declaration.id,
                format!("unknown request method {}", text),
            )),
        }
    }
    (!tokens.is_empty()).then_some(verbs)
}
