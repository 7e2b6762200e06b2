//! Property declarations.

use crate::{Attribute, TypeRef};
use intent_core::{AccessModifier, Modifiers, SymbolResolver, SyntaxHandle, Value};
use intent_tree::{
    CanBeStatic, ChildList, ChildSlot, CompareOptions, CopyNode, Field, HasAccessModifier,
    HasAttributes, HasReturnType, IntentNode, MemberTraits, NodeBase, TreeResult,
};
use std::sync::Arc;

#[derive(Debug)]
pub struct Property {
    base: NodeBase,
    attributes: ChildList<Attribute>,
    property_type: ChildSlot<TypeRef>,
    access: AccessModifier,
    modifiers: Modifiers,
    can_get: bool,
    can_set: bool,
}

impl Property {
    /// A detached read-write property.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_base(NodeBase::detached(name, "property"))
    }

    pub fn bind(raw: SyntaxHandle, resolver: Arc<dyn SymbolResolver>) -> Self {
        let base = NodeBase::bind(raw, resolver);
        let seeded = base.cached_symbol().map(|symbol| (symbol.access, symbol.modifiers));
        let mut property = Self::from_base(base);
        if let Some((access, modifiers)) = seeded {
            property.access = access;
            property.modifiers = modifiers;
        }
        property
    }

    fn from_base(base: NodeBase) -> Self {
        let owner = base.id();
        Self {
            base,
            attributes: ChildList::new(owner),
            property_type: ChildSlot::new(owner),
            access: AccessModifier::None,
            modifiers: Modifiers::default(),
            can_get: true,
            can_set: true,
        }
    }

    pub fn attributes(&self) -> &ChildList<Attribute> {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut ChildList<Attribute> {
        &mut self.attributes
    }

    pub fn property_type(&self) -> Option<&TypeRef> {
        self.property_type.get()
    }

    pub fn set_property_type(&mut self, property_type: TypeRef) -> TreeResult<Option<TypeRef>> {
        self.property_type.set(property_type)
    }

    pub fn access(&self) -> AccessModifier {
        self.access
    }

    pub fn set_access(&mut self, access: AccessModifier) {
        self.access = access;
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }

    pub fn can_get(&self) -> bool {
        self.can_get
    }

    pub fn can_set(&self) -> bool {
        self.can_set
    }

    pub fn set_accessors(&mut self, can_get: bool, can_set: bool) {
        self.can_get = can_get;
        self.can_set = can_set;
    }
}

impl HasAttributes for Property {
    fn attributes(&self) -> Vec<&dyn IntentNode> {
        self.attributes.as_nodes()
    }
}

impl HasAccessModifier for Property {
    fn access_modifier(&self) -> AccessModifier {
        self.access
    }
}

impl CanBeStatic for Property {
    fn is_static(&self) -> bool {
        self.modifiers.is_static
    }
}

impl HasReturnType for Property {
    fn return_type(&self) -> Option<&dyn IntentNode> {
        self.property_type.as_node()
    }
}

impl MemberTraits for Property {
    fn is_abstract(&self) -> bool {
        self.modifiers.is_abstract
    }

    fn is_override(&self) -> bool {
        self.modifiers.is_override
    }

    fn is_sealed(&self) -> bool {
        self.modifiers.is_sealed
    }

    fn is_virtual(&self) -> bool {
        self.modifiers.is_virtual
    }
}

impl IntentNode for Property {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "property"
    }

    fn children(&self) -> Vec<&dyn IntentNode> {
        let mut children = self.attributes.as_nodes();
        children.extend(self.property_type.as_node());
        children
    }

    fn copy_boxed(&self) -> TreeResult<Box<dyn IntentNode>> {
        Ok(Box::new(self.copy()?))
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

    fn as_typed(&self) -> Option<&dyn HasReturnType> {
        Some(self)
    }

    fn as_member(&self) -> Option<&dyn MemberTraits> {
        Some(self)
    }

    fn same_content(&self, other: &dyn IntentNode, _options: &CompareOptions) -> bool {
        other
            .as_any()
            .downcast_ref::<Property>()
            .is_some_and(|other| self.can_get == other.can_get && self.can_set == other.can_set)
    }

    fn own_field(&self, field: Field) -> Option<Value> {
        match field {
            Field::CanGet => Some(Value::from(self.can_get)),
            Field::CanSet => Some(Value::from(self.can_set)),
            _ => None,
        }
    }
}

impl CopyNode for Property {
    fn copy(&self) -> TreeResult<Self> {
        let base = self.base.copy_base();
        let owner = base.id();
        Ok(Self {
            attributes: self.attributes.copy_for(owner)?,
            property_type: self.property_type.copy_for(owner)?,
            base,
            access: self.access,
            modifiers: self.modifiers,
            can_get: self.can_get,
            can_set: self.can_set,
        })
    }
}
