use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::error::AnalysisError;
use crate::markers::{self, REQUEST_MAPPING};
use crate::model::{AnalysisUnit, DeclKind, Declaration};

/// Warn when a class has no method carrying `@RequestMapping`
///
/// Only the generic route marker counts, found directly or through
/// meta-markers. A class whose methods only use `@GetMapping` and friends is
/// still reported.
pub fn check_has_endpoint(
    unit: &AnalysisUnit,
    class: &Declaration,
) -> Result<Vec<Diagnostic>, AnalysisError> {
    for id in &class.enclosed {
        let member = unit.declaration(*id)?;
        if member.kind == DeclKind::Method
            && markers::resolve(unit, member, REQUEST_MAPPING).is_some()
        {
            return Ok(Vec::new());
        }
    }

    let marker = markers::admitting_marker(unit, class)
        .map(|m| m.simple_name())
        .unwrap_or("Controller");
    Ok(vec![Diagnostic::mandatory_warning(
        DiagnosticKind::MissingEndpoint,
        class.id,
        format!("@{} without endpoint", marker),
    )])
}
