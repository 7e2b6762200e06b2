//! Intent Node Catalog
//!
//! Concrete node types built on the intent tree engine:
//! - Type references and attributes
//! - Parameters, methods and properties
//! - Type declarations owning their members
//! - Extension nodes carrying adapter-defined payloads

mod attribute;
mod extension;
mod method;
mod parameter;
mod property;
mod type_decl;
mod type_ref;

pub use attribute::*;
pub use extension::*;
pub use method::*;
pub use parameter::*;
pub use property::*;
pub use type_decl::*;
pub use type_ref::*;
