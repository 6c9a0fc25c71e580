//! # Routes Module
//!
//! Turns route markers into concrete routes.
//!
//! Route extraction happens in two steps:
//!
//! 1. **Extraction** ([`extract_fragments`]): every recognized route marker on a
//!    declaration yields one [`RouteFragment`] per declared path, carrying the
//!    marker's verb set.
//! 2. **Composition** ([`compose_routes`]): the fragments of the enclosing class
//!    and of the method are combined pairwise into [`ComposedRoute`]s, each with
//!    a path that starts with `/`.
//!
//! Path templates use `{name}` placeholders. For collision detection every
//! placeholder is replaced by a single `*` wildcard, so `/users/{id}` and
//! `/users/{user_id}` produce the same [`RouteKey`].

mod compose;
mod extract;
mod verb;

#[cfg(test)]
mod tests;

pub use compose::{compose_routes, Composition};
pub use extract::{extract_fragments, Extraction};
pub use verb::Verb;

use crate::model::DeclId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// `{name}` placeholder in a path template; the name cannot contain braces or `/`
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([^{}/]+)\}").expect("placeholder regex should be valid")
});

/// Token that replaces every placeholder in a [`RouteKey`]
pub const WILDCARD: &str = "*";

/// Path template and verbs contributed by one route marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteFragment {
    pub path: String,
    pub verbs: Vec<Verb>,
}

impl RouteFragment {
    pub fn new(path: impl Into<String>, verbs: Vec<Verb>) -> Self {
        RouteFragment {
            path: path.into(),
            verbs,
        }
    }

    /// Stand-in used when a declaration carries no route marker at all
    #[must_use]
    pub fn catch_all() -> Self {
        RouteFragment::new("", Verb::ALL.to_vec())
    }
}

/// Concrete route of an endpoint method (class prefix + method suffix)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedRoute {
    /// Always starts with `/`
    pub path: String,
    pub verbs: Vec<Verb>,
    pub method: DeclId,
}

impl ComposedRoute {
    /// One collision key per verb
    pub fn keys(&self) -> impl Iterator<Item = RouteKey> + '_ {
        self.verbs.iter().map(|verb| RouteKey::new(*verb, &self.path))
    }
}

/// Collision identity: `<VERB> <wildcarded path>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RouteKey(String);

impl RouteKey {
    #[must_use]
    pub fn new(verb: Verb, path: &str) -> Self {
        RouteKey(format!("{} {}", verb, wildcarded(path)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Distinct placeholder names in a path template
#[must_use]
pub fn placeholders(path: &str) -> BTreeSet<String> {
    PLACEHOLDER
        .captures_iter(path)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Replace every placeholder with [`WILDCARD`]
#[must_use]
pub fn wildcarded(path: &str) -> String {
    PLACEHOLDER.replace_all(path, WILDCARD).into_owned()
}
