//! Resolution error types.

use crate::SyntaxId;
use thiserror::Error;

/// Errors that can occur while deriving a semantic handle.
///
/// Both variants are recoverable: a later attempt may succeed once the
/// syntax is attached or a resolver is injected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The node carries no resolver to ask.
    #[error("No resolver bound for syntax {0}")]
    Unbound(SyntaxId),

    /// The resolver could not bind the syntax (detached, synthetic or malformed).
    #[error("No semantic binding for syntax {0}")]
    NotFound(SyntaxId),
}

/// Result type for resolution.
pub type ResolutionResult<T> = Result<T, ResolutionError>;
