//! Attributes attached to declarations.

use intent_core::{SymbolResolver, SyntaxHandle, Value};
use intent_tree::{CompareOptions, CopyNode, IntentNode, NodeBase, TreeResult};
use std::sync::Arc;

/// One attribute argument; named when `name` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeArg {
    pub name: Option<String>,
    pub value: Value,
}

impl AttributeArg {
    pub fn positional(value: impl Into<Value>) -> Self {
        Self {
            name: None,
            value: value.into(),
        }
    }

    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
        }
    }

    fn same_intent(&self, other: &AttributeArg) -> bool {
        self.name == other.name && self.value.same_intent(&other.value)
    }
}

/// An attribute such as `[Obsolete("use Run", error: true)]`.
///
/// Positional arguments compare in order; named arguments compare as a set.
#[derive(Debug)]
pub struct Attribute {
    base: NodeBase,
    args: Vec<AttributeArg>,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: NodeBase::detached(name, "attribute"),
            args: Vec::new(),
        }
    }

    pub fn bind(raw: SyntaxHandle, resolver: Arc<dyn SymbolResolver>) -> Self {
        Self {
            base: NodeBase::bind(raw, resolver),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: AttributeArg) -> Self {
        self.args.push(arg);
        self
    }

    pub fn args(&self) -> &[AttributeArg] {
        &self.args
    }

    pub fn args_mut(&mut self) -> &mut Vec<AttributeArg> {
        &mut self.args
    }

    fn positional(&self) -> impl Iterator<Item = &AttributeArg> {
        self.args.iter().filter(|arg| arg.name.is_none())
    }

    fn named(&self) -> impl Iterator<Item = &AttributeArg> {
        self.args.iter().filter(|arg| arg.name.is_some())
    }

    fn same_args(&self, other: &Attribute) -> bool {
        let left: Vec<&AttributeArg> = self.positional().collect();
        let right: Vec<&AttributeArg> = other.positional().collect();
        if left.len() != right.len() || !left.iter().zip(&right).all(|(l, r)| l.same_intent(r)) {
            return false;
        }

        let left: Vec<&AttributeArg> = self.named().collect();
        let right: Vec<&AttributeArg> = other.named().collect();
        left.len() == right.len()
            && left.iter().all(|l| right.iter().any(|r| l.same_intent(r)))
            && right.iter().all(|r| left.iter().any(|l| r.same_intent(l)))
    }
}

impl IntentNode for Attribute {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "attribute"
    }

    fn copy_boxed(&self) -> TreeResult<Box<dyn IntentNode>> {
        Ok(Box::new(self.copy()?))
    }

    fn same_content(&self, other: &dyn IntentNode, _options: &CompareOptions) -> bool {
        other
            .as_any()
            .downcast_ref::<Attribute>()
            .is_some_and(|other| self.same_args(other))
    }
}

impl CopyNode for Attribute {
    fn copy(&self) -> TreeResult<Self> {
        Ok(Self {
            base: self.base.copy_base(),
            args: self.args.clone(),
        })
    }
}
