use crate::model::DeclId;
use std::fmt;

/// Internal failure while analysing a declaration or driving a session
///
/// Per-declaration failures never abort a batch: the session turns them into
/// an `internal_failure` diagnostic anchored at the declaration being processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A declaration handle does not point into the analysis unit
    UnknownDeclaration(DeclId),
    /// A batch arrived after the final pass already reset the session
    SessionFinished,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::UnknownDeclaration(id) => {
                write!(f, "declaration {} does not exist in the analysis unit", id)
            }
            AnalysisError::SessionFinished => {
                write!(
                    f,
                    "analysis session already processed its final pass; \
                    start a new session for another run"
                )
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
