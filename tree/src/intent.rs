//! Same-intent comparison.
//!
//! Two nodes have the same intent when they say the same thing, regardless
//! of layout, trivia or source spans. Checks run in a fixed order and stop at
//! the first mismatch:
//!
//! 1. shape: both nodes have the same concrete type
//! 2. name
//! 3. one check per facet the left node exposes, in [`Facet::ALL`] order
//! 4. annotations, when [`CompareOptions::include_annotations`] is set
//! 5. content specific to the concrete type

use crate::{Facet, IntentNode};
use std::fmt;
use tracing::trace;

/// Comparison settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Compare public annotations. Defaults to `true`.
    pub include_annotations: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            include_annotations: true,
        }
    }
}

impl CompareOptions {
    pub fn without_annotations() -> Self {
        Self {
            include_annotations: false,
        }
    }
}

/// The first check two nodes failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// Different concrete node types.
    Shape,
    Name,
    Facet(Facet),
    Annotations,
    /// Type-specific content (parameters, arguments, members...).
    Content,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Shape => write!(f, "shape"),
            Mismatch::Name => write!(f, "name"),
            Mismatch::Facet(facet) => write!(f, "{}", facet),
            Mismatch::Annotations => write!(f, "annotations"),
            Mismatch::Content => write!(f, "content"),
        }
    }
}

/// Whether `left` and `right` have the same intent.
pub fn same_intent(left: &dyn IntentNode, right: &dyn IntentNode, options: &CompareOptions) -> bool {
    match first_mismatch(left, right, options) {
        None => true,
        Some(mismatch) => {
            trace!(
                left = %left.base().id(),
                right = %right.base().id(),
                kind = left.kind(),
                %mismatch,
                "same-intent mismatch"
            );
            false
        }
    }
}

/// The first failed check, or `None` when the nodes have the same intent.
pub fn first_mismatch(
    left: &dyn IntentNode,
    right: &dyn IntentNode,
    options: &CompareOptions,
) -> Option<Mismatch> {
    if left.as_any().type_id() != right.as_any().type_id() {
        return Some(Mismatch::Shape);
    }
    if left.base().name() != right.base().name() {
        return Some(Mismatch::Name);
    }
    for facet in Facet::ALL {
        if facet.is_exposed_by(left) && !facet_matches(facet, left, right, options) {
            return Some(Mismatch::Facet(facet));
        }
    }
    if options.include_annotations
        && !left
            .base()
            .annotations()
            .equivalent(right.base().annotations())
    {
        return Some(Mismatch::Annotations);
    }
    if !left.same_content(right, options) {
        return Some(Mismatch::Content);
    }
    None
}

fn facet_matches(
    facet: Facet,
    left: &dyn IntentNode,
    right: &dyn IntentNode,
    options: &CompareOptions,
) -> bool {
    match facet {
        Facet::Namespace => match (left.as_namespaced(), right.as_namespaced()) {
            (Some(l), Some(r)) => {
                l.outer_name() == r.outer_name()
                    && l.namespace() == r.namespace()
                    && l.qualified_name() == r.qualified_name()
            }
            _ => false,
        },
        Facet::AccessModifier => match (left.as_access_controlled(), right.as_access_controlled()) {
            (Some(l), Some(r)) => l.access_modifier() == r.access_modifier(),
            _ => false,
        },
        Facet::Attributes => match (left.as_attributed(), right.as_attributed()) {
            (Some(l), Some(r)) => attributes_match(&l.attributes(), &r.attributes(), options),
            _ => false,
        },
        Facet::Static => match (left.as_static_capable(), right.as_static_capable()) {
            (Some(l), Some(r)) => l.is_static() == r.is_static(),
            _ => false,
        },
        Facet::ReturnType => match (left.as_typed(), right.as_typed()) {
            (Some(l), Some(r)) => match (l.return_type(), r.return_type()) {
                (Some(lt), Some(rt)) => same_intent(lt, rt, options),
                (None, None) => true,
                _ => false,
            },
            _ => false,
        },
        Facet::MemberTraits => match (left.as_member(), right.as_member()) {
            (Some(l), Some(r)) => {
                l.is_abstract() == r.is_abstract()
                    && l.is_override() == r.is_override()
                    && l.is_sealed() == r.is_sealed()
                    && l.is_virtual() == r.is_virtual()
            }
            _ => false,
        },
    }
}

/// Equal counts, and every attribute on each side is matched by name to a
/// same-intent attribute on the other.
fn attributes_match(
    left: &[&dyn IntentNode],
    right: &[&dyn IntentNode],
    options: &CompareOptions,
) -> bool {
    let covered = |from: &[&dyn IntentNode], to: &[&dyn IntentNode]| {
        from.iter().all(|attr| {
            to.iter().any(|candidate| {
                attr.base().name() == candidate.base().name()
                    && same_intent(*attr, *candidate, options)
            })
        })
    };
    left.len() == right.len() && covered(left, right) && covered(right, left)
}

/// Pairwise same-intent comparison in order.
pub fn same_intent_ordered(
    left: &[&dyn IntentNode],
    right: &[&dyn IntentNode],
    options: &CompareOptions,
) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(l, r)| same_intent(*l, *r, options))
}

/// Order-independent comparison: every node on the left is paired with a
/// distinct same-intent node on the right.
pub fn same_intent_unordered(
    left: &[&dyn IntentNode],
    right: &[&dyn IntentNode],
    options: &CompareOptions,
) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut used = vec![false; right.len()];
    left.iter().all(|l| {
        let found = right
            .iter()
            .enumerate()
            .position(|(i, r)| !used[i] && same_intent(*l, *r, options));
        match found {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}
