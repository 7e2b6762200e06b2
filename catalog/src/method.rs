//! Method declarations.

use crate::{Attribute, Parameter, TypeRef};
use intent_core::{AccessModifier, Modifiers, NodeId, SymbolResolver, SyntaxHandle, Value};
use intent_tree::{
    same_intent_ordered, CanBeStatic, ChildList, ChildSlot, CompareOptions, CopyNode, Field,
    HasAccessModifier, HasAttributes, HasReturnType, IntentNode, MemberTraits, NodeBase,
    TreeResult,
};
use std::sync::Arc;

/// A method. Parameters compare in declaration order.
#[derive(Debug)]
pub struct Method {
    base: NodeBase,
    attributes: ChildList<Attribute>,
    return_type: ChildSlot<TypeRef>,
    parameters: ChildList<Parameter>,
    access: AccessModifier,
    modifiers: Modifiers,
    is_extension: bool,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_base(NodeBase::detached(name, "method"))
    }

    /// Bind to syntax, seeding access and modifiers from the resolved symbol
    /// when it is available.
    pub fn bind(raw: SyntaxHandle, resolver: Arc<dyn SymbolResolver>) -> Self {
        let base = NodeBase::bind(raw, resolver);
        let seeded = base.cached_symbol().map(|symbol| (symbol.access, symbol.modifiers));
        let mut method = Self::from_base(base);
        if let Some((access, modifiers)) = seeded {
            method.access = access;
            method.modifiers = modifiers;
        }
        method
    }

    fn from_base(base: NodeBase) -> Self {
        let owner = base.id();
        Self {
            base,
            attributes: ChildList::new(owner),
            return_type: ChildSlot::new(owner),
            parameters: ChildList::new(owner),
            access: AccessModifier::None,
            modifiers: Modifiers::default(),
            is_extension: false,
        }
    }

    pub fn attributes(&self) -> &ChildList<Attribute> {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut ChildList<Attribute> {
        &mut self.attributes
    }

    pub fn return_type(&self) -> Option<&TypeRef> {
        self.return_type.get()
    }

    /// Replace the return type, returning the previous one detached.
    pub fn set_return_type(&mut self, return_type: TypeRef) -> TreeResult<Option<TypeRef>> {
        self.return_type.set(return_type)
    }

    pub fn parameters(&self) -> &ChildList<Parameter> {
        &self.parameters
    }

    /// Mutable access to one parameter, by identity.
    pub fn parameter_mut(&mut self, id: NodeId) -> Option<&mut Parameter> {
        self.parameters.find_mut(id)
    }

    /// Append a parameter; its ordinal is its position.
    pub fn add_parameter(&mut self, parameter: Parameter) -> TreeResult<()> {
        self.parameters.add(parameter)?;
        self.renumber();
        Ok(())
    }

    /// Append several parameters. On error none is added.
    pub fn add_parameters(
        &mut self,
        parameters: impl IntoIterator<Item = Parameter>,
    ) -> TreeResult<()> {
        self.parameters.add_range(parameters)?;
        self.renumber();
        Ok(())
    }

    /// Remove a parameter; later parameters move up one position.
    pub fn remove_parameter(&mut self, id: NodeId) -> Option<Parameter> {
        let mut removed = self.parameters.remove(id)?;
        removed.set_ordinal(0);
        self.renumber();
        Some(removed)
    }

    /// Move a parameter to the end of `dest`'s parameter list.
    pub fn move_parameter(&mut self, id: NodeId, dest: &mut Method) -> TreeResult<()> {
        self.parameters.move_to(id, &mut dest.parameters)?;
        self.renumber();
        dest.renumber();
        Ok(())
    }

    fn renumber(&mut self) {
        for (ordinal, parameter) in self.parameters.iter_mut().enumerate() {
            parameter.set_ordinal(ordinal);
        }
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

    pub fn is_extension(&self) -> bool {
        self.is_extension
    }

    pub fn set_extension(&mut self, is_extension: bool) {
        self.is_extension = is_extension;
    }
}

impl HasAttributes for Method {
    fn attributes(&self) -> Vec<&dyn IntentNode> {
        self.attributes.as_nodes()
    }
}

impl HasAccessModifier for Method {
    fn access_modifier(&self) -> AccessModifier {
        self.access
    }
}

impl CanBeStatic for Method {
    fn is_static(&self) -> bool {
        self.modifiers.is_static
    }
}

impl HasReturnType for Method {
    fn return_type(&self) -> Option<&dyn IntentNode> {
        self.return_type.as_node()
    }
}

impl MemberTraits for Method {
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

impl IntentNode for Method {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "method"
    }

    fn children(&self) -> Vec<&dyn IntentNode> {
        let mut children = self.attributes.as_nodes();
        children.extend(self.return_type.as_node());
        children.extend(self.parameters.as_nodes());
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

    fn same_content(&self, other: &dyn IntentNode, options: &CompareOptions) -> bool {
        let Some(other) = other.as_any().downcast_ref::<Method>() else {
            return false;
        };
        self.is_extension == other.is_extension
            && same_intent_ordered(
                &self.parameters.as_nodes(),
                &other.parameters.as_nodes(),
                options,
            )
    }

    fn own_field(&self, field: Field) -> Option<Value> {
        match field {
            Field::IsExtension => Some(Value::from(self.is_extension)),
            _ => None,
        }
    }
}

impl CopyNode for Method {
    fn copy(&self) -> TreeResult<Self> {
        let base = self.base.copy_base();
        let owner = base.id();
        Ok(Self {
            attributes: self.attributes.copy_for(owner)?,
            return_type: self.return_type.copy_for(owner)?,
            parameters: self.parameters.copy_for(owner)?,
            base,
            access: self.access,
            modifiers: self.modifiers,
            is_extension: self.is_extension,
        })
    }
}
