//! References to types, as used by return types and declared types.

use intent_core::{SymbolResolver, SyntaxHandle, Value};
use intent_tree::{
    same_intent_ordered, ChildList, CompareOptions, CopyNode, Field, IntentNode, NodeBase,
    TreeResult,
};
use std::sync::Arc;

/// A (possibly generic) type reference such as `Int` or `List<String>`.
#[derive(Debug)]
pub struct TypeRef {
    base: NodeBase,
    type_args: ChildList<TypeRef>,
    nullable: bool,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_base(NodeBase::detached(name, "type_reference"))
    }

    pub fn bind(raw: SyntaxHandle, resolver: Arc<dyn SymbolResolver>) -> Self {
        Self::from_base(NodeBase::bind(raw, resolver))
    }

    fn from_base(base: NodeBase) -> Self {
        let owner = base.id();
        Self {
            base,
            type_args: ChildList::new(owner),
            nullable: false,
        }
    }

    /// A generic instantiation, e.g. `generic("Map", [String, Int])`.
    pub fn generic(
        name: impl Into<String>,
        args: impl IntoIterator<Item = TypeRef>,
    ) -> TreeResult<Self> {
        let mut type_ref = Self::new(name);
        type_ref.type_args.add_range(args)?;
        Ok(type_ref)
    }

    pub fn type_args(&self) -> &ChildList<TypeRef> {
        &self.type_args
    }

    pub fn type_args_mut(&mut self) -> &mut ChildList<TypeRef> {
        &mut self.type_args
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn set_nullable(&mut self, nullable: bool) {
        self.nullable = nullable;
    }

    /// Source-like rendering: `Map<String, Int?>?`.
    pub fn display_name(&self) -> String {
        let mut out = self.base.name().to_string();
        if !self.type_args.is_empty() {
            let args: Vec<String> = self.type_args.iter().map(TypeRef::display_name).collect();
            out.push('<');
            out.push_str(&args.join(", "));
            out.push('>');
        }
        if self.nullable {
            out.push('?');
        }
        out
    }
}

impl IntentNode for TypeRef {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "type_reference"
    }

    fn children(&self) -> Vec<&dyn IntentNode> {
        self.type_args.as_nodes()
    }

    fn copy_boxed(&self) -> TreeResult<Box<dyn IntentNode>> {
        Ok(Box::new(self.copy()?))
    }

    fn same_content(&self, other: &dyn IntentNode, options: &CompareOptions) -> bool {
        let Some(other) = other.as_any().downcast_ref::<TypeRef>() else {
            return false;
        };
        self.nullable == other.nullable
            && same_intent_ordered(
                &self.type_args.as_nodes(),
                &other.type_args.as_nodes(),
                options,
            )
    }

    fn own_field(&self, field: Field) -> Option<Value> {
        match field {
            Field::IsNullable => Some(Value::from(self.nullable)),
            _ => None,
        }
    }
}

impl CopyNode for TypeRef {
    fn copy(&self) -> TreeResult<Self> {
        let base = self.base.copy_base();
        let type_args = self.type_args.copy_for(base.id())?;
        Ok(Self {
            base,
            type_args,
            nullable: self.nullable,
        })
    }
}
