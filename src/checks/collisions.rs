use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::model::DeclId;
use crate::routes::{ComposedRoute, RouteKey};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// Which declaration first claimed each route key
///
/// Lives for a whole analysis run (all passes) and is cleared once at the end.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    entries: HashMap<RouteKey, DeclId>,
}

impl RouteRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim every (verb, path) of `routes` for `declaration`
    ///
    /// Claiming a key twice from the same declaration is allowed; a key already
    /// held by another declaration produces a duplicate-route error on both.
    pub fn register_routes(
        &mut self,
        declaration: DeclId,
        routes: &[ComposedRoute],
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for key in routes.iter().flat_map(ComposedRoute::keys) {
            match self.entries.entry(key) {
                Entry::Vacant(slot) => {
                    debug!(key = %slot.key(), owner = %declaration, "Registered route");
                    slot.insert(declaration);
                }
                Entry::Occupied(slot) => {
                    let owner = *slot.get();
                    if owner != declaration {
                        let message = format!("Duplicate path: {}", slot.key());
                        diagnostics.push(Diagnostic::error(
                            DiagnosticKind::DuplicateRoute,
                            declaration,
                            message.clone(),
                        ));
                        diagnostics.push(Diagnostic::error(
                            DiagnosticKind::DuplicateRoute,
                            owner,
                            message,
                        ));
                    }
                }
            }
        }
        diagnostics
    }

    /// Declaration currently holding `key`
    #[must_use]
    pub fn owner(&self, key: &RouteKey) -> Option<DeclId> {
        self.entries.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
