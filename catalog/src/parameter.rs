//! Method parameters.

use crate::{Attribute, TypeRef};
use intent_core::{SymbolResolver, SyntaxHandle, Value};
use intent_tree::{
    ChildList, ChildSlot, CompareOptions, CopyNode, Field, HasAttributes, HasReturnType, IntentNode,
    NodeBase, TreeResult,
};
use std::fmt;
use std::sync::Arc;

/// How an argument is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParameterModifier {
    #[default]
    None,
    Ref,
    Out,
    In,
    Params,
}

impl ParameterModifier {
    pub fn keyword(&self) -> &'static str {
        match self {
            ParameterModifier::None => "",
            ParameterModifier::Ref => "ref",
            ParameterModifier::Out => "out",
            ParameterModifier::In => "in",
            ParameterModifier::Params => "params",
        }
    }
}

impl fmt::Display for ParameterModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterModifier::None => write!(f, "none"),
            other => write!(f, "{}", other.keyword()),
        }
    }
}

#[derive(Debug)]
pub struct Parameter {
    base: NodeBase,
    attributes: ChildList<Attribute>,
    declared_type: ChildSlot<TypeRef>,
    ordinal: usize,
    modifier: ParameterModifier,
    default_value: Option<Value>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_base(NodeBase::detached(name, "parameter"))
    }

    pub fn bind(raw: SyntaxHandle, resolver: Arc<dyn SymbolResolver>) -> Self {
        Self::from_base(NodeBase::bind(raw, resolver))
    }

    fn from_base(base: NodeBase) -> Self {
        let owner = base.id();
        Self {
            base,
            attributes: ChildList::new(owner),
            declared_type: ChildSlot::new(owner),
            ordinal: 0,
            modifier: ParameterModifier::None,
            default_value: None,
        }
    }

    /// Builder shorthand for a typed parameter.
    pub fn typed(name: impl Into<String>, declared_type: TypeRef) -> TreeResult<Self> {
        let mut param = Self::new(name);
        param.declared_type.set(declared_type)?;
        Ok(param)
    }

    pub fn attributes(&self) -> &ChildList<Attribute> {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut ChildList<Attribute> {
        &mut self.attributes
    }

    pub fn declared_type(&self) -> Option<&TypeRef> {
        self.declared_type.get()
    }

    /// Replace the declared type, returning the previous one detached.
    pub fn set_declared_type(&mut self, declared_type: TypeRef) -> TreeResult<Option<TypeRef>> {
        self.declared_type.set(declared_type)
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Kept in step with the position in the owning method.
    pub(crate) fn set_ordinal(&mut self, ordinal: usize) {
        self.ordinal = ordinal;
    }

    pub fn modifier(&self) -> ParameterModifier {
        self.modifier
    }

    pub fn set_modifier(&mut self, modifier: ParameterModifier) {
        self.modifier = modifier;
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// A parameter with a default value is optional.
    pub fn set_default_value(&mut self, value: Option<Value>) {
        self.default_value = value;
    }

    pub fn is_optional(&self) -> bool {
        self.default_value.is_some()
    }
}

impl HasAttributes for Parameter {
    fn attributes(&self) -> Vec<&dyn IntentNode> {
        self.attributes.as_nodes()
    }
}

impl HasReturnType for Parameter {
    fn return_type(&self) -> Option<&dyn IntentNode> {
        self.declared_type.as_node()
    }
}

impl IntentNode for Parameter {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "parameter"
    }

    fn children(&self) -> Vec<&dyn IntentNode> {
        let mut children = self.attributes.as_nodes();
        children.extend(self.declared_type.as_node());
        children
    }

    fn copy_boxed(&self) -> TreeResult<Box<dyn IntentNode>> {
        Ok(Box::new(self.copy()?))
    }

    fn as_attributed(&self) -> Option<&dyn HasAttributes> {
        Some(self)
    }

    fn as_typed(&self) -> Option<&dyn HasReturnType> {
        Some(self)
    }

    fn same_content(&self, other: &dyn IntentNode, _options: &CompareOptions) -> bool {
        let Some(other) = other.as_any().downcast_ref::<Parameter>() else {
            return false;
        };
        let same_default = match (&self.default_value, &other.default_value) {
            (Some(l), Some(r)) => l.same_intent(r),
            (None, None) => true,
            _ => false,
        };
        self.modifier == other.modifier && same_default
    }

    fn own_field(&self, field: Field) -> Option<Value> {
        match field {
            Field::Ordinal => Some(Value::from(self.ordinal)),
            Field::IsOptional => Some(Value::from(self.is_optional())),
            Field::DefaultValue => Some(self.default_value.clone().unwrap_or(Value::Null)),
            Field::ParameterModifier => Some(Value::from(self.modifier.to_string())),
            _ => None,
        }
    }
}

impl CopyNode for Parameter {
    fn copy(&self) -> TreeResult<Self> {
        let base = self.base.copy_base();
        let owner = base.id();
        Ok(Self {
            attributes: self.attributes.copy_for(owner)?,
            declared_type: self.declared_type.copy_for(owner)?,
            base,
            ordinal: self.ordinal,
            modifier: self.modifier,
            default_value: self.default_value.clone(),
        })
    }
}
