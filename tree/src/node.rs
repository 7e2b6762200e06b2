//! The generic node engine.
//!
//! Every concrete node embeds a [`NodeBase`] holding the state all nodes
//! share (identity, name, syntax handle, lazily resolved symbol, parent link
//! and annotations) and implements [`IntentNode`] to expose its capability
//! facets and children. Comparison and copying are written once against
//! those two pieces; see [`crate::same_intent`] and [`CopyNode`].

use crate::{
    AnnotationStore, CanBeStatic, CompareOptions, HasAccessModifier, HasAttributes, HasNamespace,
    HasReturnType, MemberTraits, TreeResult,
};
use intent_core::{NodeId, ResolutionError, SemanticHandle, SymbolResolver, SyntaxHandle, Value};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// State shared by every node.
#[derive(Debug)]
pub struct NodeBase {
    id: NodeId,
    name: String,
    raw: SyntaxHandle,
    resolver: Option<Arc<dyn SymbolResolver>>,
    symbol: OnceCell<SemanticHandle>,
    parent: Option<NodeId>,
    annotations: AnnotationStore,
}

impl NodeBase {
    /// Wrap a syntax handle, resolving it once to seed the name.
    ///
    /// If the resolver cannot bind the handle the name starts empty and
    /// resolution is retried on the next access.
    pub fn bind(raw: SyntaxHandle, resolver: Arc<dyn SymbolResolver>) -> Self {
        let mut base = Self::with_parts(String::new(), raw, Some(resolver));
        let seeded = base.resolve_symbol().ok().map(|symbol| symbol.name.clone());
        if let Some(name) = seeded {
            base.name = name;
        }
        base
    }

    /// A node with no backing syntax and no resolver.
    pub fn detached(name: impl Into<String>, kind: &str) -> Self {
        Self::with_parts(name.into(), SyntaxHandle::synthetic(kind), None)
    }

    fn with_parts(
        name: String,
        raw: SyntaxHandle,
        resolver: Option<Arc<dyn SymbolResolver>>,
    ) -> Self {
        Self {
            id: NodeId::fresh(),
            name,
            raw,
            resolver,
            symbol: OnceCell::new(),
            parent: None,
            annotations: AnnotationStore::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The opaque syntax handle this node wraps.
    pub fn raw_item(&self) -> &SyntaxHandle {
        &self.raw
    }

    /// Owning node, if this node sits in an ownership collection.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    pub fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    pub fn annotations_mut(&mut self) -> &mut AnnotationStore {
        &mut self.annotations
    }

    /// Inject or replace the resolver. A cached symbol is kept.
    pub fn set_resolver(&mut self, resolver: Arc<dyn SymbolResolver>) {
        self.resolver = Some(resolver);
    }

    /// The semantic handle, resolving and caching it on first success.
    ///
    /// Failures are not cached; the next call asks the resolver again.
    pub fn resolve_symbol(&self) -> Result<&SemanticHandle, ResolutionError> {
        let resolver = self
            .resolver
            .as_ref()
            .ok_or(ResolutionError::Unbound(self.raw.id()))?;

        self.symbol.get_or_try_init(|| {
            trace!(node = %self.id, syntax = %self.raw, "resolving symbol");
            match resolver.resolve(&self.raw) {
                Some(symbol) => {
                    debug!(node = %self.id, name = %symbol.name, "symbol resolved");
                    Ok(symbol)
                }
                None => {
                    debug!(node = %self.id, syntax = %self.raw, "symbol unavailable");
                    Err(ResolutionError::NotFound(self.raw.id()))
                }
            }
        })
    }

    /// The semantic handle, or `None` when it cannot be derived.
    pub fn symbol(&self) -> Option<&SemanticHandle> {
        self.resolve_symbol().ok()
    }

    /// Whether a symbol is already cached. Never triggers resolution.
    pub fn is_resolved(&self) -> bool {
        self.symbol.get().is_some()
    }

    /// The cached symbol, if any. Never triggers resolution.
    pub fn cached_symbol(&self) -> Option<&SemanticHandle> {
        self.symbol.get()
    }

    /// Name qualified by the enclosing types, excluding the namespace.
    ///
    /// `None` when the semantic handle is unavailable.
    pub fn outer_name(&self) -> Option<String> {
        self.symbol().map(|symbol| symbol.outer_name_for(&self.name))
    }

    /// Name qualified by the namespace and enclosing types.
    pub fn qualified_name(&self) -> Option<String> {
        self.symbol().map(|symbol| symbol.qualified_name_for(&self.name))
    }

    /// Containing namespace; `Some("")` for the global namespace.
    pub fn namespace(&self) -> Option<String> {
        self.symbol().map(|symbol| symbol.namespace.clone())
    }

    /// A detached copy: fresh identity, no parent, empty symbol cache,
    /// annotations copied with fresh identities. The syntax handle and
    /// resolver are shared so the symbol can be derived again.
    pub fn copy_base(&self) -> NodeBase {
        let mut copy = Self::with_parts(self.name.clone(), self.raw.clone(), self.resolver.clone());
        copy.annotations.add_copy(&self.annotations);
        trace!(source = %self.id, copy = %copy.id, "copied node base");
        copy
    }
}

/// Upcast to `Any`, implemented for every sized `'static` type.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A node of the intent tree.
///
/// Facet accessors default to `None`; a concrete type overrides the ones it
/// implements. Comparison, field lookup and walking only ever go through
/// these accessors.
pub trait IntentNode: AsAny + fmt::Debug + Send + Sync {
    fn base(&self) -> &NodeBase;

    fn base_mut(&mut self) -> &mut NodeBase;

    /// Short label of the concrete node type, e.g. "method".
    fn kind(&self) -> &'static str;

    /// Directly owned child nodes, in declaration order.
    fn children(&self) -> Vec<&dyn IntentNode> {
        Vec::new()
    }

    /// Object-safe form of [`CopyNode::copy`].
    fn copy_boxed(&self) -> TreeResult<Box<dyn IntentNode>>;

    fn as_namespaced(&self) -> Option<&dyn HasNamespace> {
        None
    }

    fn as_access_controlled(&self) -> Option<&dyn HasAccessModifier> {
        None
    }

    fn as_attributed(&self) -> Option<&dyn HasAttributes> {
        None
    }

    fn as_static_capable(&self) -> Option<&dyn CanBeStatic> {
        None
    }

    fn as_typed(&self) -> Option<&dyn HasReturnType> {
        None
    }

    fn as_member(&self) -> Option<&dyn MemberTraits> {
        None
    }

    /// Comparison of the content specific to the concrete type, run after
    /// the facet and annotation checks. `other` has the same concrete type.
    fn same_content(&self, _other: &dyn IntentNode, _options: &CompareOptions) -> bool {
        true
    }

    /// Lookup of fields specific to the concrete type.
    fn own_field(&self, _field: crate::Field) -> Option<Value> {
        None
    }

    /// Same-intent comparison with default options.
    fn same_intent(&self, other: &dyn IntentNode) -> bool
    where
        Self: Sized,
    {
        crate::same_intent(self, other, &CompareOptions::default())
    }

    fn same_intent_with(&self, other: &dyn IntentNode, options: &CompareOptions) -> bool
    where
        Self: Sized,
    {
        crate::same_intent(self, other, options)
    }
}

/// Explicit deep copy, implemented by every concrete node type.
///
/// The copy has fresh identities throughout, no parent, and shares no
/// mutable state with the source. The source is never modified, even when
/// the copy fails.
pub trait CopyNode: IntentNode + Sized {
    fn copy(&self) -> TreeResult<Self>;
}
