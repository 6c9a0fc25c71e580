use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::error::AnalysisError;
use crate::markers::{self, ALIAS_ARGUMENTS, PATH_VARIABLE};
use crate::model::{AnalysisUnit, DeclKind, Declaration};
use crate::routes::{placeholders, ComposedRoute};

/// A `@PathVariable` parameter and the path segment name it binds
#[derive(Debug, Clone)]
pub struct PathBinding<'a> {
    pub parameter: &'a Declaration,
    pub name: String,
    /// Literal aliases beyond the first one, each a duplicate-name error
    pub extra_aliases: usize,
}

impl PathBinding<'_> {
    /// Duplicate-name errors for this binding, reported once per checked route
    #[must_use]
    pub fn alias_diagnostics(&self) -> Vec<Diagnostic> {
        (0..self.extra_aliases)
            .map(|_| {
                Diagnostic::error(
                    DiagnosticKind::DuplicateAlias,
                    self.parameter.id,
                    "Duplicate name for path variable",
                )
            })
            .collect()
    }
}

/// Resolve the path bindings declared by the formal parameters of `method`
///
/// The bound name comes from the `value` or `name` argument when one of them is
/// a string literal, and falls back to the parameter's identifier otherwise.
/// When both are literals the first one wins and the other is counted in
/// [`PathBinding::extra_aliases`].
pub fn resolve_bindings<'a>(
    unit: &'a AnalysisUnit,
    method: &'a Declaration,
) -> Result<Vec<PathBinding<'a>>, AnalysisError> {
    let mut bindings = Vec::new();
    for id in &method.enclosed {
        let parameter = unit.declaration(*id)?;
        if parameter.kind != DeclKind::Parameter {
            continue;
        }
        let Some(marker) = markers::resolve(unit, parameter, PATH_VARIABLE) else {
            continue;
        };

        let mut literals = marker
            .arguments
            .iter()
            .filter(|(arg, _)| ALIAS_ARGUMENTS.contains(&arg.as_str()))
            .filter_map(|(_, value)| value.as_literal());
        let alias = literals.next();
        let extra_aliases = literals.count();

        bindings.push(PathBinding {
            parameter,
            name: alias.unwrap_or(&parameter.name).to_string(),
            extra_aliases,
        });
    }
    Ok(bindings)
}

/// Check the path bindings of `method` against each of its routes
///
/// For every route, each binding first reports its duplicate aliases; then a
/// binding whose name is among the route's placeholders consumes that
/// placeholder, and any other binding is reported as unmatched. The route is
/// rejected when the number of unmatched bindings differs from the number of
/// placeholders left unconsumed. Only the counts are compared, not which names
/// are involved. A method without routes produces nothing.
pub fn validate_bindings(
    unit: &AnalysisUnit,
    method: &Declaration,
    routes: &[ComposedRoute],
) -> Result<Vec<Diagnostic>, AnalysisError> {
    let mut diagnostics = Vec::new();
    if routes.is_empty() {
        return Ok(diagnostics);
    }
    let bindings = resolve_bindings(unit, method)?;

    for route in routes {
        let mut expected = placeholders(&route.path);
        let mut unmatched = 0usize;
        for binding in &bindings {
            diagnostics.extend(binding.alias_diagnostics());
            if expected.remove(&binding.name) {
                continue;
            }
            unmatched += 1;
            diagnostics.push(Diagnostic::warning(
                DiagnosticKind::UnmatchedBinding,
                binding.parameter.id,
                format!(
                    "@PathVariable {} cannot be found in path {}",
                    binding.name, route.path
                ),
            ));
        }
        if unmatched != expected.len() {
            diagnostics.push(Diagnostic::error(
                DiagnosticKind::BindingCountMismatch,
                method.id,
                format!("@PathVariables do not match endpoint path {}", route.path),
            ));
        }
    }
    Ok(diagnostics)
}
