//! Semantic handles and the resolver abstraction.
//!
//! A semantic handle is the richer binding information an external compiler
//! derives for a syntax construct. The tree never computes it itself; it asks
//! a [`SymbolResolver`] injected at node construction.

use crate::SyntaxHandle;
use std::fmt;

/// Declared accessibility of a member or type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessModifier {
    /// No modifier was written.
    #[default]
    None,
    Private,
    Protected,
    Internal,
    ProtectedInternal,
    PrivateProtected,
    Public,
}

impl AccessModifier {
    /// Source keyword(s) for this modifier; empty for `None`.
    pub fn keyword(&self) -> &'static str {
        match self {
            AccessModifier::None => "",
            AccessModifier::Private => "private",
            AccessModifier::Protected => "protected",
            AccessModifier::Internal => "internal",
            AccessModifier::ProtectedInternal => "protected internal",
            AccessModifier::PrivateProtected => "private protected",
            AccessModifier::Public => "public",
        }
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessModifier::None => write!(f, "none"),
            other => write!(f, "{}", other.keyword()),
        }
    }
}

/// Category of a resolved symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Type,
    Method,
    Property,
    Parameter,
    Attribute,
    TypeReference,
    Other,
}

/// Declaration modifiers reported by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_override: bool,
    pub is_sealed: bool,
    pub is_virtual: bool,
}

/// Binding information resolved for one syntax handle.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticHandle {
    /// Declared name.
    pub name: String,
    /// Symbol category.
    pub kind: SymbolKind,
    /// Containing namespace, dotted; empty for the global namespace.
    pub namespace: String,
    /// Enclosing type names, outermost first.
    pub containing_types: Vec<String>,
    /// Declared accessibility.
    pub access: AccessModifier,
    /// Declaration modifiers.
    pub modifiers: Modifiers,
}

impl SemanticHandle {
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
            namespace: String::new(),
            containing_types: Vec::new(),
            access: AccessModifier::None,
            modifiers: Modifiers::default(),
        }
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Append an enclosing type; call outermost first.
    pub fn nested_in(mut self, type_name: impl Into<String>) -> Self {
        self.containing_types.push(type_name.into());
        self
    }

    pub fn with_access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Name qualified by the enclosing types only, using `name` as the leaf.
    pub fn outer_name_for(&self, name: &str) -> String {
        let mut parts: Vec<&str> = self.containing_types.iter().map(String::as_str).collect();
        parts.push(name);
        parts.join(".")
    }

    /// Fully qualified name including the namespace, using `name` as the leaf.
    pub fn qualified_name_for(&self, name: &str) -> String {
        let outer = self.outer_name_for(name);
        if self.namespace.is_empty() {
            outer
        } else {
            format!("{}.{}", self.namespace, outer)
        }
    }
}

/// The external capability that binds syntax handles to semantic handles.
///
/// Returning `None` means the handle cannot be bound (detached, synthetic or
/// malformed syntax). Implementations must be safe to share across threads.
pub trait SymbolResolver: fmt::Debug + Send + Sync {
    fn resolve(&self, handle: &SyntaxHandle) -> Option<SemanticHandle>;
}
