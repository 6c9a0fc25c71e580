//! # Diagnostics
//!
//! Everything the checker reports is a [`Diagnostic`]: a severity, a machine
//! readable kind, a message and the declaration it is anchored at. Nothing the
//! checker finds aborts the analysis.
//!
//! Diagnostics flow into a [`DiagnosticSink`]. `Vec<Diagnostic>` collects them;
//! [`TracingSink`] logs them. [`render_text`] and [`render_json`] turn a
//! collected list into CLI output.

use crate::model::{AnalysisUnit, DeclId};
use serde::Serialize;
use std::fmt::{self, Write as _};
use tracing::{error, warn};


/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Suspicious but possibly intended
    Warning,
    /// Warning that must always be shown, even when warnings are suppressed
    MandatoryWarning,
    /// The route declarations are wrong
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Warning => "warning",
            Severity::MandatoryWarning => "mandatory warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// What kind of problem a diagnostic reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A marker argument has the wrong shape (e.g. a string where a list is expected)
    Shape,
    /// An endpoint method is not enclosed in a class
    Structural,
    /// Two declarations claim the same verb and path
    DuplicateRoute,
    /// A path binding names itself twice
    DuplicateAlias,
    /// A path binding has no matching placeholder
    UnmatchedBinding,
    /// Bindings and placeholders of a route do not add up
    BindingCountMismatch,
    /// A route-host class declares no endpoint
    MissingEndpoint,
    /// An endpoint lives in a class without the route-host marker
    MissingRouteHost,
    /// Processing the declaration failed
    InternalFailure,
}

impl DiagnosticKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::Shape => "shape",
            DiagnosticKind::Structural => "structural",
            DiagnosticKind::DuplicateRoute => "duplicate_route",
            DiagnosticKind::DuplicateAlias => "duplicate_alias",
            DiagnosticKind::UnmatchedBinding => "unmatched_binding",
            DiagnosticKind::BindingCountMismatch => "binding_count_mismatch",
            DiagnosticKind::MissingEndpoint => "missing_endpoint",
            DiagnosticKind::MissingRouteHost => "missing_route_host",
            DiagnosticKind::InternalFailure => "internal_failure",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem found in the route declarations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
    /// Declaration the diagnostic is reported on
    pub anchor: DeclId,
}

impl Diagnostic {
    pub fn new(
        severity: Severity,
        kind: DiagnosticKind,
        anchor: DeclId,
        message: impl Into<String>,
    ) -> Self {
        Diagnostic {
            severity,
            kind,
            message: message.into(),
            anchor,
        }
    }

    pub fn error(kind: DiagnosticKind, anchor: DeclId, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, kind, anchor, message)
    }

    pub fn warning(kind: DiagnosticKind, anchor: DeclId, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, kind, anchor, message)
    }

    pub fn mandatory_warning(
        kind: DiagnosticKind,
        anchor: DeclId,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::MandatoryWarning, kind, anchor, message)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Receiver of diagnostics
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that logs every diagnostic through `tracing`
///
/// The CLI replays a run's diagnostics into it when debug logging is enabled.
pub struct TracingSink<'a> {
    unit: &'a AnalysisUnit,
}

impl<'a> TracingSink<'a> {
    #[must_use]
    pub fn new(unit: &'a AnalysisUnit) -> Self {
        TracingSink { unit }
    }
}

impl DiagnosticSink for TracingSink<'_> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let location = self.unit.label(diagnostic.anchor);
        match diagnostic.severity {
            Severity::Error => error!(
                kind = %diagnostic.kind,
                location = %location,
                "{}",
                diagnostic.message
            ),
            Severity::Warning | Severity::MandatoryWarning => warn!(
                kind = %diagnostic.kind,
                location = %location,
                "{}",
                diagnostic.message
            ),
        }
    }
}

/// Whether the diagnostics should fail a run
///
/// Errors always fail; warnings only when `deny_warnings` is set.
#[must_use]
pub fn has_failures(diagnostics: &[Diagnostic], deny_warnings: bool) -> bool {
    diagnostics
        .iter()
        .any(|d| d.is_error() || deny_warnings)
}

/// Render diagnostics grouped by severity for a terminal
#[must_use]
pub fn render_text(unit: &AnalysisUnit, diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    write_text(&mut out, unit, diagnostics)
        .map(|()| out)
        .unwrap_or_default()
}

fn write_text(out: &mut String, unit: &AnalysisUnit, diagnostics: &[Diagnostic]) -> fmt::Result {
    if diagnostics.is_empty() {
        return writeln!(out, "✅ No route issues found!");
    }

    let errors: Vec<_> = diagnostics.iter().filter(|d| d.is_error()).collect();
    let mandatory: Vec<_> = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::MandatoryWarning)
        .collect();
    let warnings: Vec<_> = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .collect();

    writeln!(out, "\n📋 Route Check Results:")?;
    writeln!(
        out,
        "   {} error(s), {} mandatory warning(s), {} warning(s)\n",
        errors.len(),
        mandatory.len(),
        warnings.len()
    )?;

    let groups = [
        ("❌ Errors (must fix):", errors),
        ("⚠️  Mandatory warnings:", mandatory),
        ("⚠️  Warnings (should fix):", warnings),
    ];
    for (title, group) in groups {
        if group.is_empty() {
            continue;
        }
        writeln!(out, "{}", title)?;
        for diagnostic in group {
            writeln!(
                out,
                "   [{}] {}",
                diagnostic.kind,
                unit.label(diagnostic.anchor)
            )?;
            writeln!(out, "      {}", diagnostic.message)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct ReportEntry<'a> {
    severity: Severity,
    kind: DiagnosticKind,
    location: String,
    message: &'a str,
}

/// Render diagnostics as a JSON array with resolved locations
pub fn render_json(unit: &AnalysisUnit, diagnostics: &[Diagnostic]) -> anyhow::Result<String> {
    let entries: Vec<_> = diagnostics
        .iter()
        .map(|d| ReportEntry {
            severity: d.severity,
            kind: d.kind,
            location: unit.label(d.anchor),
            message: &d.message,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}
