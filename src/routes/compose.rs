use super::{extract_fragments, ComposedRoute, RouteFragment};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::error::AnalysisError;
use crate::markers::{self, CONTROLLER};
use crate::model::{AnalysisUnit, DeclKind, Declaration};
use tracing::debug;

/// Routes of one endpoint method plus the problems found while building them
#[derive(Debug, Default)]
pub struct Composition {
    pub routes: Vec<ComposedRoute>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Combine the enclosing class's fragments with the method's fragments
///
/// Every (class, method) fragment pair yields one route whose path is the
/// concatenation of both, with a leading `/` added when missing. Verbs always
/// come from the method fragment.
pub fn compose_routes(
    unit: &AnalysisUnit,
    method: &Declaration,
) -> Result<Composition, AnalysisError> {
    let mut composition = Composition::default();

    let class = match method.enclosing {
        Some(id) => unit.declaration(id)?,
        None => {
            composition.diagnostics.push(Diagnostic::error(
                DiagnosticKind::Structural,
                method.id,
                "expected to be enclosed in class",
            ));
            return Ok(composition);
        }
    };
    if class.kind != DeclKind::Class {
        composition.diagnostics.push(Diagnostic::error(
            DiagnosticKind::Structural,
            method.id,
            format!("expected to be enclosed in class, found {}", class.kind),
        ));
        return Ok(composition);
    }

    if markers::resolve(unit, class, CONTROLLER).is_none() {
        composition.diagnostics.push(Diagnostic::mandatory_warning(
            DiagnosticKind::MissingRouteHost,
            method.id,
            "endpoint outside of controller",
        ));
    }

    let class_fragments = fragments_or_catch_all(class, &mut composition.diagnostics);
    let method_fragments = fragments_or_catch_all(method, &mut composition.diagnostics);

    for prefix in &class_fragments {
        for suffix in &method_fragments {
            let mut path = format!("{}{}", prefix.path, suffix.path);
            if !path.starts_with('/') {
                path.insert(0, '/');
            }
            composition.routes.push(ComposedRoute {
                path,
                verbs: suffix.verbs.clone(),
                method: method.id,
            });
        }
    }
    debug!(
        method = %unit.label(method.id),
        routes = composition.routes.len(),
        "Composed routes"
    );
    Ok(composition)
}

fn fragments_or_catch_all(
    declaration: &Declaration,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<RouteFragment> {
    let extraction = extract_fragments(declaration);
    diagnostics.extend(extraction.diagnostics);
    if extraction.fragments.is_empty() {
        vec![RouteFragment::catch_all()]
    } else {
        extraction.fragments
    }
}
