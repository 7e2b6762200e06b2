//! Syntax fixtures.

use crate::MapResolver;
use intent_core::{SemanticHandle, Span, SyntaxHandle, SyntaxId};
use std::sync::Arc;

/// Hands out parsed syntax handles with distinct ids and increasing spans,
/// registering a symbol for each one in a shared [`MapResolver`].
#[derive(Debug)]
pub struct SyntaxSource {
    resolver: Arc<MapResolver>,
    next: u64,
    line: usize,
}

impl Default for SyntaxSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxSource {
    pub fn new() -> Self {
        Self {
            resolver: Arc::new(MapResolver::new()),
            next: 1,
            line: 1,
        }
    }

    pub fn resolver(&self) -> Arc<MapResolver> {
        Arc::clone(&self.resolver)
    }

    /// A fresh handle with no symbol registered.
    pub fn unbound(&mut self, kind: &str) -> SyntaxHandle {
        let id = SyntaxId::new(self.next);
        self.next += 1;
        let span = Span::new(self.line * 100, self.line * 100 + 10, self.line, 1);
        self.line += 1;
        SyntaxHandle::parsed(id, kind, span)
    }

    /// A fresh handle whose symbol is `symbol`.
    pub fn bound(&mut self, kind: &str, symbol: SemanticHandle) -> SyntaxHandle {
        let handle = self.unbound(kind);
        self.resolver.register(handle.id(), symbol);
        handle
    }

    /// Advance the line counter so later handles get different spans.
    pub fn skip_lines(&mut self, lines: usize) {
        self.line += lines;
    }
}
