//! Type declarations: classes, structs and interfaces.

use crate::{Attribute, ExtensionNode, Method, Property};
use intent_core::{AccessModifier, SymbolResolver, SyntaxHandle, Value};
use intent_tree::{
    same_intent_unordered, CanBeStatic, ChildList, CompareOptions, CopyNode, Field,
    HasAccessModifier, HasAttributes, HasNamespace, IntentNode, NodeBase, TreeResult,
};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeDeclKind {
    #[default]
    Class,
    Struct,
    Interface,
}

impl TypeDeclKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeDeclKind::Class => "class",
            TypeDeclKind::Struct => "struct",
            TypeDeclKind::Interface => "interface",
        }
    }
}

impl fmt::Display for TypeDeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A type declaration.
///
/// Members are compared as sets: reordering methods, properties, nested
/// types or extensions does not change intent.
#[derive(Debug)]
pub struct TypeDecl {
    base: NodeBase,
    declaration_kind: TypeDeclKind,
    attributes: ChildList<Attribute>,
    methods: ChildList<Method>,
    properties: ChildList<Property>,
    nested_types: ChildList<TypeDecl>,
    extensions: ChildList<ExtensionNode>,
    access: AccessModifier,
    is_static: bool,
    is_abstract: bool,
    is_sealed: bool,
}

impl TypeDecl {
    /// A detached class.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_base(NodeBase::detached(name, "type_declaration"))
    }

    /// Bind to syntax, seeding access and modifiers from the resolved symbol
    /// when it is available.
    pub fn bind(raw: SyntaxHandle, resolver: Arc<dyn SymbolResolver>) -> Self {
        let base = NodeBase::bind(raw, resolver);
        let seeded = base.cached_symbol().map(|symbol| (symbol.access, symbol.modifiers));
        let mut decl = Self::from_base(base);
        if let Some((access, modifiers)) = seeded {
            decl.access = access;
            decl.is_static = modifiers.is_static;
            decl.is_abstract = modifiers.is_abstract;
            decl.is_sealed = modifiers.is_sealed;
        }
        decl
    }

    fn from_base(base: NodeBase) -> Self {
        let owner = base.id();
        Self {
            base,
            declaration_kind: TypeDeclKind::Class,
            attributes: ChildList::new(owner),
            methods: ChildList::new(owner),
            properties: ChildList::new(owner),
            nested_types: ChildList::new(owner),
            extensions: ChildList::new(owner),
            access: AccessModifier::None,
            is_static: false,
            is_abstract: false,
            is_sealed: false,
        }
    }

    pub fn with_kind(mut self, kind: TypeDeclKind) -> Self {
        self.declaration_kind = kind;
        self
    }

    pub fn declaration_kind(&self) -> TypeDeclKind {
        self.declaration_kind
    }

    pub fn set_declaration_kind(&mut self, kind: TypeDeclKind) {
        self.declaration_kind = kind;
    }

    pub fn attributes(&self) -> &ChildList<Attribute> {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut ChildList<Attribute> {
        &mut self.attributes
    }

    pub fn methods(&self) -> &ChildList<Method> {
        &self.methods
    }

    pub fn methods_mut(&mut self) -> &mut ChildList<Method> {
        &mut self.methods
    }

    pub fn properties(&self) -> &ChildList<Property> {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut ChildList<Property> {
        &mut self.properties
    }

    pub fn nested_types(&self) -> &ChildList<TypeDecl> {
        &self.nested_types
    }

    pub fn nested_types_mut(&mut self) -> &mut ChildList<TypeDecl> {
        &mut self.nested_types
    }

    pub fn extensions(&self) -> &ChildList<ExtensionNode> {
        &self.extensions
    }

    pub fn extensions_mut(&mut self) -> &mut ChildList<ExtensionNode> {
        &mut self.extensions
    }

    pub fn access(&self) -> AccessModifier {
        self.access
    }

    pub fn set_access(&mut self, access: AccessModifier) {
        self.access = access;
    }

    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn set_abstract(&mut self, is_abstract: bool) {
        self.is_abstract = is_abstract;
    }

    pub fn is_sealed(&self) -> bool {
        self.is_sealed
    }

    pub fn set_sealed(&mut self, is_sealed: bool) {
        self.is_sealed = is_sealed;
    }
}

impl HasNamespace for TypeDecl {
    fn namespace(&self) -> Option<String> {
        self.base.namespace()
    }

    fn outer_name(&self) -> Option<String> {
        self.base.outer_name()
    }

    fn qualified_name(&self) -> Option<String> {
        self.base.qualified_name()
    }
}

impl HasAttributes for TypeDecl {
    fn attributes(&self) -> Vec<&dyn IntentNode> {
        self.attributes.as_nodes()
    }
}

impl HasAccessModifier for TypeDecl {
    fn access_modifier(&self) -> AccessModifier {
        self.access
    }
}

impl CanBeStatic for TypeDecl {
    fn is_static(&self) -> bool {
        self.is_static
    }
}

impl IntentNode for TypeDecl {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "type_declaration"
    }

    fn children(&self) -> Vec<&dyn IntentNode> {
        let mut children = self.attributes.as_nodes();
        children.extend(self.methods.as_nodes());
        children.extend(self.properties.as_nodes());
        children.extend(self.nested_types.as_nodes());
        children.extend(self.extensions.as_nodes());
        children
    }

    fn copy_boxed(&self) -> TreeResult<Box<dyn IntentNode>> {
        Ok(Box::new(self.copy()?))
    }

    fn as_namespaced(&self) -> Option<&dyn HasNamespace> {
        Some(self)
    }

    fn as_access_controlled(&self) -> Option<&dyn HasAccessModifier> {
        Some(self)
    }

    fn as_attributed(&self) -> Option<&dyn HasAttributes> {
        Some(self)
    }

    fn as_static_capable(&self) -> Option<&dyn CanBeStatic> {
        Some(self)
    }

    fn same_content(&self, other: &dyn IntentNode, options: &CompareOptions) -> bool {
        let Some(other) = other.as_any().downcast_ref::<TypeDecl>() else {
            return false;
        };
        self.declaration_kind == other.declaration_kind
            && self.is_abstract == other.is_abstract
            && self.is_sealed == other.is_sealed
            && same_intent_unordered(&self.methods.as_nodes(), &other.methods.as_nodes(), options)
            && same_intent_unordered(
                &self.properties.as_nodes(),
                &other.properties.as_nodes(),
                options,
            )
            && same_intent_unordered(
                &self.nested_types.as_nodes(),
                &other.nested_types.as_nodes(),
                options,
            )
            && same_intent_unordered(
                &self.extensions.as_nodes(),
                &other.extensions.as_nodes(),
                options,
            )
    }

    fn own_field(&self, field: Field) -> Option<Value> {
        match field {
            Field::DeclarationKind => Some(Value::from(self.declaration_kind.keyword())),
            _ => None,
        }
    }
}

impl CopyNode for TypeDecl {
    fn copy(&self) -> TreeResult<Self> {
        let base = self.base.copy_base();
        let owner = base.id();
        Ok(Self {
            attributes: self.attributes.copy_for(owner)?,
            methods: self.methods.copy_for(owner)?,
            properties: self.properties.copy_for(owner)?,
            nested_types: self.nested_types.copy_for(owner)?,
            extensions: self.extensions.copy_for(owner)?,
            base,
            declaration_kind: self.declaration_kind,
            access: self.access,
            is_static: self.is_static,
            is_abstract: self.is_abstract,
            is_sealed: self.is_sealed,
        })
    }
}
