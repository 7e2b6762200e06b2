//! A map-backed symbol resolver.

use intent_core::{SemanticHandle, SymbolResolver, SyntaxHandle, SyntaxId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Resolves syntax handles by looking up their id in a table.
///
/// Entries can be added or removed at any time, which lets tests model a
/// semantic model that becomes available late or goes away. Every call to
/// [`SymbolResolver::resolve`] is counted.
#[derive(Debug, Default)]
pub struct MapResolver {
    symbols: Mutex<HashMap<SyntaxId, SemanticHandle>>,
    calls: AtomicUsize,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, id: SyntaxId, symbol: SemanticHandle) {
        if let Ok(mut symbols) = self.symbols.lock() {
            symbols.insert(id, symbol);
        }
    }

    pub fn unregister(&self, id: SyntaxId) {
        if let Ok(mut symbols) = self.symbols.lock() {
            symbols.remove(&id);
        }
    }

    /// Number of resolve calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SymbolResolver for MapResolver {
    fn resolve(&self, handle: &SyntaxHandle) -> Option<SemanticHandle> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.symbols
            .lock()
            .ok()
            .and_then(|symbols| symbols.get(&handle.id()).cloned())
    }
}
