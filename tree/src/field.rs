//! Generic field lookup.
//!
//! Tooling that only holds a `&dyn IntentNode` can read fields through a
//! closed [`Field`] enumeration. Common fields are answered from the node
//! base and facets; the rest are delegated to [`IntentNode::own_field`].

use crate::{IntentNode, TreeError};
use intent_core::Value;
use std::fmt;
use std::str::FromStr;

/// Every field readable through [`request_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Kind,
    OuterName,
    Namespace,
    QualifiedName,
    AccessModifier,
    IsStatic,
    ReturnType,
    IsAbstract,
    IsOverride,
    IsSealed,
    IsVirtual,
    AttributeCount,
    ChildCount,
    Ordinal,
    IsOptional,
    DefaultValue,
    ParameterModifier,
    IsNullable,
    CanGet,
    CanSet,
    DeclarationKind,
    IsExtension,
}

impl Field {
    pub const ALL: [Field; 23] = [
        Field::Name,
        Field::Kind,
        Field::OuterName,
        Field::Namespace,
        Field::QualifiedName,
        Field::AccessModifier,
        Field::IsStatic,
        Field::ReturnType,
        Field::IsAbstract,
        Field::IsOverride,
        Field::IsSealed,
        Field::IsVirtual,
        Field::AttributeCount,
        Field::ChildCount,
        Field::Ordinal,
        Field::IsOptional,
        Field::DefaultValue,
        Field::ParameterModifier,
        Field::IsNullable,
        Field::CanGet,
        Field::CanSet,
        Field::DeclarationKind,
        Field::IsExtension,
    ];

    /// Field name as used by [`request_value_by_name`].
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Kind => "Kind",
            Field::OuterName => "OuterName",
            Field::Namespace => "Namespace",
            Field::QualifiedName => "QualifiedName",
            Field::AccessModifier => "AccessModifier",
            Field::IsStatic => "IsStatic",
            Field::ReturnType => "ReturnType",
            Field::IsAbstract => "IsAbstract",
            Field::IsOverride => "IsOverride",
            Field::IsSealed => "IsSealed",
            Field::IsVirtual => "IsVirtual",
            Field::AttributeCount => "AttributeCount",
            Field::ChildCount => "ChildCount",
            Field::Ordinal => "Ordinal",
            Field::IsOptional => "IsOptional",
            Field::DefaultValue => "DefaultValue",
            Field::ParameterModifier => "ParameterModifier",
            Field::IsNullable => "IsNullable",
            Field::CanGet => "CanGet",
            Field::CanSet => "CanSet",
            Field::DeclarationKind => "DeclarationKind",
            Field::IsExtension => "IsExtension",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Field {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| TreeError::UnknownField(s.to_string()))
    }
}

/// Read `field` from `node`; `None` when the node has no such field or the
/// value is unavailable.
pub fn request_value(node: &dyn IntentNode, field: Field) -> Option<Value> {
    let base = node.base();
    match field {
        Field::Name => Some(Value::from(base.name())),
        Field::Kind => Some(Value::from(node.kind())),
        Field::OuterName => base.outer_name().map(Value::from),
        Field::Namespace => node
            .as_namespaced()
            .and_then(|n| n.namespace())
            .map(Value::from),
        Field::QualifiedName => node
            .as_namespaced()
            .and_then(|n| n.qualified_name())
            .map(Value::from),
        Field::AccessModifier => node
            .as_access_controlled()
            .map(|a| Value::from(a.access_modifier().keyword())),
        Field::IsStatic => node.as_static_capable().map(|s| Value::from(s.is_static())),
        Field::ReturnType => node
            .as_typed()
            .and_then(|t| t.return_type())
            .map(|t| Value::from(t.base().name())),
        Field::IsAbstract => node.as_member().map(|m| Value::from(m.is_abstract())),
        Field::IsOverride => node.as_member().map(|m| Value::from(m.is_override())),
        Field::IsSealed => node.as_member().map(|m| Value::from(m.is_sealed())),
        Field::IsVirtual => node.as_member().map(|m| Value::from(m.is_virtual())),
        Field::AttributeCount => node
            .as_attributed()
            .map(|a| Value::from(a.attributes().len())),
        Field::ChildCount => Some(Value::from(node.children().len())),
        Field::Ordinal
        | Field::IsOptional
        | Field::DefaultValue
        | Field::ParameterModifier
        | Field::IsNullable
        | Field::CanGet
        | Field::CanSet
        | Field::DeclarationKind
        | Field::IsExtension => node.own_field(field),
    }
}

/// Read a field by name. Unknown names yield `None`.
pub fn request_value_by_name(node: &dyn IntentNode, name: &str) -> Option<Value> {
    name.parse::<Field>()
        .ok()
        .and_then(|field| request_value(node, field))
}
