//! Opaque references into the external syntax tree.

use crate::SyntaxId;
use std::fmt;

/// Source location of a parsed construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// Where a syntax handle came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxOrigin {
    /// Produced by parsing source text.
    Parsed(Span),
    /// Created programmatically; no external construct backs it.
    Synthetic,
}

/// Opaque handle to one construct of the external syntax tree.
///
/// Handles are cheap to clone and are shared between a node and its copies.
/// Layout details such as the span never take part in same-intent comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxHandle {
    id: SyntaxId,
    kind: String,
    origin: SyntaxOrigin,
}

impl SyntaxHandle {
    /// Handle for a construct the adapter read from source.
    pub fn parsed(id: SyntaxId, kind: impl Into<String>, span: Span) -> Self {
        Self {
            id,
            kind: kind.into(),
            origin: SyntaxOrigin::Parsed(span),
        }
    }

    /// Handle for a node built in memory rather than parsed.
    pub fn synthetic(kind: impl Into<String>) -> Self {
        Self {
            id: SyntaxId::SYNTHETIC,
            kind: kind.into(),
            origin: SyntaxOrigin::Synthetic,
        }
    }

    pub fn id(&self) -> SyntaxId {
        self.id
    }

    /// Adapter-defined label of the construct (e.g. "method_declaration").
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn origin(&self) -> SyntaxOrigin {
        self.origin
    }

    /// Source span, if the construct was parsed.
    pub fn span(&self) -> Option<Span> {
        match self.origin {
            SyntaxOrigin::Parsed(span) => Some(span),
            SyntaxOrigin::Synthetic => None,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self.origin, SyntaxOrigin::Synthetic)
    }
}

impl fmt::Display for SyntaxHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            SyntaxOrigin::Parsed(span) => {
                write!(f, "{}@{}:{}", self.kind, span.line, span.column)
            }
            SyntaxOrigin::Synthetic => write!(f, "{}@synthetic", self.kind),
        }
    }
}
