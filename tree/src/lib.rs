//! Intent Tree Engine
//!
//! This crate provides the generic machinery every node of the intent tree
//! shares:
//! - Node base state: identity, name, syntax handle, lazily resolved symbol
//! - Capability facets and facet sets
//! - Ownership collections that maintain parent links
//! - Public annotations and their set-equivalence rule
//! - Same-intent comparison and explicit deep copy
//! - Generic field lookup and tree walking

mod annotation;
mod children;
mod error;
mod facet;
mod field;
mod intent;
mod node;
mod walk;

pub use annotation::*;
pub use children::*;
pub use error::*;
pub use facet::*;
pub use field::*;
pub use intent::*;
pub use node::*;
pub use walk::*;
