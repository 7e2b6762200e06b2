//! Capability facets.
//!
//! Facets are optional structural roles a concrete node type may take on.
//! They are independent traits, not a hierarchy: a type implements the subset
//! it needs and exposes each one through the matching `as_*` accessor on
//! [`IntentNode`]. Generic algorithms test facet presence through those
//! accessors before touching facet-specific fields.
//!
//! | Facet          | Accessor                | Fields compared                           |
//! |----------------|-------------------------|-------------------------------------------|
//! | Namespace      | `as_namespaced`         | outer name, namespace, qualified name     |
//! | AccessModifier | `as_access_controlled`  | access modifier                           |
//! | Attributes     | `as_attributed`         | attribute set                             |
//! | Static         | `as_static_capable`     | static flag                               |
//! | ReturnType     | `as_typed`              | referenced type                           |
//! | MemberTraits   | `as_member`             | abstract, override, sealed, virtual flags |

use crate::IntentNode;
use intent_core::AccessModifier;
use std::fmt;

/// Participates in a namespace.
pub trait HasNamespace {
    fn namespace(&self) -> Option<String>;
    fn outer_name(&self) -> Option<String>;
    fn qualified_name(&self) -> Option<String>;
}

/// Carries a declared access modifier.
pub trait HasAccessModifier {
    fn access_modifier(&self) -> AccessModifier;
}

/// Owns attribute nodes.
pub trait HasAttributes {
    fn attributes(&self) -> Vec<&dyn IntentNode>;
}

/// May be declared static.
pub trait CanBeStatic {
    fn is_static(&self) -> bool;
}

/// References a type: the return type of a method, the declared type of a
/// property or parameter.
pub trait HasReturnType {
    fn return_type(&self) -> Option<&dyn IntentNode>;
}

/// Inheritance modifiers shared by properties and methods.
pub trait MemberTraits {
    fn is_abstract(&self) -> bool;
    fn is_override(&self) -> bool;
    fn is_sealed(&self) -> bool;
    fn is_virtual(&self) -> bool;
}

/// Identifies one facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Namespace,
    AccessModifier,
    Attributes,
    Static,
    ReturnType,
    MemberTraits,
}

impl Facet {
    /// All facets, in the order comparisons check them.
    pub const ALL: [Facet; 6] = [
        Facet::Namespace,
        Facet::AccessModifier,
        Facet::Attributes,
        Facet::Static,
        Facet::ReturnType,
        Facet::MemberTraits,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Facet::Namespace => "has-namespace",
            Facet::AccessModifier => "has-access-modifier",
            Facet::Attributes => "has-attributes",
            Facet::Static => "can-be-static",
            Facet::ReturnType => "has-return-type",
            Facet::MemberTraits => "property-or-method-traits",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Whether `node` exposes this facet.
    pub fn is_exposed_by(self, node: &dyn IntentNode) -> bool {
        match self {
            Facet::Namespace => node.as_namespaced().is_some(),
            Facet::AccessModifier => node.as_access_controlled().is_some(),
            Facet::Attributes => node.as_attributed().is_some(),
            Facet::Static => node.as_static_capable().is_some(),
            Facet::ReturnType => node.as_typed().is_some(),
            Facet::MemberTraits => node.as_member().is_some(),
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A set of facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FacetSet(u8);

impl FacetSet {
    pub fn empty() -> Self {
        Self(0)
    }

    /// The facets `node` exposes.
    pub fn of(node: &dyn IntentNode) -> Self {
        Facet::ALL
            .into_iter()
            .filter(|facet| facet.is_exposed_by(node))
            .collect()
    }

    pub fn insert(&mut self, facet: Facet) {
        self.0 |= facet.bit();
    }

    pub fn contains(&self, facet: Facet) -> bool {
        self.0 & facet.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Contained facets in comparison order.
    pub fn iter(&self) -> impl Iterator<Item = Facet> + '_ {
        Facet::ALL.into_iter().filter(|facet| self.contains(*facet))
    }
}

impl FromIterator<Facet> for FacetSet {
    fn from_iter<I: IntoIterator<Item = Facet>>(iter: I) -> Self {
        let mut set = FacetSet::empty();
        for facet in iter {
            set.insert(facet);
        }
        set
    }
}
