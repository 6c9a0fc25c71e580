//! # Analysis Session
//!
//! An [`AnalysisSession`] is the only state that survives between passes: it
//! owns the [`RouteRegistry`] used for collision detection. A driver creates
//! one session per analysis run, hands it every batch in order and flags the
//! final batch, which clears the registry and closes the session.
//!
//! ## Isolation
//!
//! Each declaration is processed on its own by
//! [`AnalysisSession::process_declaration`], which returns either the
//! diagnostics found or an [`AnalysisError`]. [`AnalysisSession::process_batch`]
//! turns an error into an `internal_failure` diagnostic anchored at the
//! declaration and carries on with the next one.

use crate::checks::{check_has_endpoint, validate_bindings, RouteRegistry};
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::error::AnalysisError;
use crate::model::{AnalysisUnit, DeclId, DeclKind};
use crate::routes::compose_routes;
use tracing::{debug, info, warn};


/// Outcome of processing one declaration
pub type DeclarationResult = Result<Vec<Diagnostic>, AnalysisError>;

/// Counters for one processed batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub declarations: usize,
    pub diagnostics: usize,
    pub internal_failures: usize,
}

/// State of one analysis run across all of its passes
#[derive(Debug, Default)]
pub struct AnalysisSession {
    registry: RouteRegistry,
    passes: usize,
    finished: bool,
}

impl AnalysisSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one pass worth of declarations
    ///
    /// Diagnostics go to `sink` in declaration order. With `is_last_pass` the
    /// registry is cleared afterwards and later batches are rejected.
    pub fn process_batch(
        &mut self,
        unit: &AnalysisUnit,
        batch: &[DeclId],
        is_last_pass: bool,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<BatchSummary, AnalysisError> {
        if self.finished {
            return Err(AnalysisError::SessionFinished);
        }
        self.passes += 1;

        let mut summary = BatchSummary::default();
        for id in batch {
            summary.declarations += 1;
            let diagnostics = match self.process_declaration(unit, *id) {
                Ok(diagnostics) => diagnostics,
                Err(e) => {
                    warn!(declaration = %id, error = %e, "Declaration processing failed");
                    summary.internal_failures += 1;
                    vec![Diagnostic::error(
                        DiagnosticKind::InternalFailure,
                        *id,
                        format!("An internal failure occurred: {}", e),
                    )]
                }
            };
            summary.diagnostics += diagnostics.len();
            for diagnostic in diagnostics {
                sink.emit(diagnostic);
            }
        }

        info!(
            pass = self.passes,
            declarations = summary.declarations,
            diagnostics = summary.diagnostics,
            internal_failures = summary.internal_failures,
            last_pass = is_last_pass,
            "Processed batch"
        );

        if is_last_pass {
            self.registry.reset();
            self.finished = true;
        }
        Ok(summary)
    }

    /// Run the checks that apply to one declaration
    ///
    /// Methods get route composition, collision detection and binding
    /// validation; classes get the endpoint presence check. Other kinds have
    /// nothing to check.
    pub fn process_declaration(&mut self, unit: &AnalysisUnit, id: DeclId) -> DeclarationResult {
        let declaration = unit.declaration(id)?;
        debug!(
            declaration = %unit.label(id),
            kind = %declaration.kind,
            "Processing declaration"
        );
        match declaration.kind {
            DeclKind::Method => {
                let composition = compose_routes(unit, declaration)?;
                let mut diagnostics = composition.diagnostics;
                diagnostics.extend(self.registry.register_routes(id, &composition.routes));
                diagnostics.extend(validate_bindings(unit, declaration, &composition.routes)?);
                Ok(diagnostics)
            }
            DeclKind::Class => check_has_endpoint(unit, declaration),
            DeclKind::Interface | DeclKind::Parameter => Ok(Vec::new()),
        }
    }

    /// Route registry shared by all passes of this session
    #[must_use]
    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// Number of batches processed so far
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Whether the final pass has been processed
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
