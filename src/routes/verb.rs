use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// HTTP verb a route answers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Trace,
}

impl Verb {
    /// Default verb set of the generic route marker, in declaration order
    pub const ALL: [Verb; 8] = [
        Verb::Get,
        Verb::Head,
        Verb::Post,
        Verb::Put,
        Verb::Patch,
        Verb::Delete,
        Verb::Options,
        Verb::Trace,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Head => "HEAD",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
            Verb::Options => "OPTIONS",
            Verb::Trace => "TRACE",
        }
    }

    /// Parse the trailing segment of a qualified constant (`RequestMethod.GET` → GET)
    ///
    /// Constants are matched exactly, so `RequestMethod.get` is not a verb.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Verb> {
        let tail = token.rsplit_once('.').map(|(_, t)| t).unwrap_or(token);
        Verb::ALL.iter().copied().find(|verb| verb.as_str() == tail)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::ALL
            .iter()
            .copied()
            .find(|verb| verb.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown request method '{}'", s))
    }
}
