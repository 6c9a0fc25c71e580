//! # Reference Driver
//!
//! Feeds an [`AnalysisUnit`] to an [`AnalysisSession`] the way a host
//! compiler's annotation processing would: top-level declarations are grouped
//! into rounds, each round becomes one batch, and only declarations carrying a
//! supported marker are handed over. The last round is flagged as the final
//! pass.

use crate::diagnostics::DiagnosticSink;
use crate::error::AnalysisError;
use crate::markers;
use crate::model::{AnalysisUnit, DeclId, Declaration};
use crate::session::AnalysisSession;
use std::collections::BTreeMap;
use tracing::info;

/// Totals over all passes of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passes: usize,
    pub declarations: usize,
    pub diagnostics: usize,
    pub internal_failures: usize,
}

/// Split the unit into batches, one per round in ascending order
///
/// A batch lists each admitted top-level declaration followed by its admitted
/// methods, each method followed by its admitted parameters. Descendants are
/// visited even when their parent is not admitted.
#[must_use]
pub fn plan_batches(unit: &AnalysisUnit) -> Vec<Vec<DeclId>> {
    let mut rounds: BTreeMap<u32, Vec<DeclId>> = BTreeMap::new();
    for top in unit.declarations().filter(|d| d.enclosing.is_none()) {
        let batch = rounds.entry(top.round).or_default();
        collect_admitted(unit, top, batch);
    }
    rounds.into_values().collect()
}

fn collect_admitted(unit: &AnalysisUnit, declaration: &Declaration, batch: &mut Vec<DeclId>) {
    if markers::admitting_marker(unit, declaration).is_some() {
        batch.push(declaration.id);
    }
    for child in declaration.enclosed.iter().filter_map(|id| unit.get(*id)) {
        // enclosed ids always point forward, so this cannot loop
        if child.id > declaration.id {
            collect_admitted(unit, child, batch);
        }
    }
}

/// Run every batch of the unit through `session`
///
/// A unit without declarations still gets one (empty) final pass so the
/// session is closed.
pub fn run(
    unit: &AnalysisUnit,
    session: &mut AnalysisSession,
    sink: &mut dyn DiagnosticSink,
) -> Result<RunSummary, AnalysisError> {
    let mut batches = plan_batches(unit);
    if batches.is_empty() {
        batches.push(Vec::new());
    }

    let mut summary = RunSummary::default();
    let last = batches.len() - 1;
    for (idx, batch) in batches.iter().enumerate() {
        let batch_summary = session.process_batch(unit, batch, idx == last, sink)?;
        summary.passes += 1;
        summary.declarations += batch_summary.declarations;
        summary.diagnostics += batch_summary.diagnostics;
        summary.internal_failures += batch_summary.internal_failures;
    }

    info!(
        passes = summary.passes,
        declarations = summary.declarations,
        diagnostics = summary.diagnostics,
        internal_failures = summary.internal_failures,
        "Route check finished"
    );
    Ok(summary)
}
