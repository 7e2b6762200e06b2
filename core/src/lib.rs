//! Intent Core Types
//!
//! This crate provides the foundational types shared by the intent tree:
//! - Identity types (NodeId, SyntaxId, AnnotationId)
//! - Syntax handles (the opaque reference to a parsed construct)
//! - Semantic handles and the resolver abstraction that produces them
//! - Value types (the Value enum used by annotations and field lookups)
//! - Resolution errors

mod error;
mod id;
mod symbol;
mod syntax;
mod value;

pub use error::*;
pub use id::*;
pub use symbol::*;
pub use syntax::*;
pub use value::*;
