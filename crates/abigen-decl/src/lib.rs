//! abigen-decl: Declaration graph for the ABI generator
//!
//! This crate defines the narrow view of a contract's declarations that the
//! ABI builder consumes. A front end resolves source into these types (or
//! emits them as JSON) and the builder walks them:
//! - [`Decl`]: the closed set of declaration kinds the generator visits
//! - [`SemanticType`]: resolved types with builtin/record/container/alias queries
//! - [`Attribute`]: raw `action`/`table`/`contract` attribute arguments
//! - [`DeclarationGraph`]: ordered declarations with record lookup by name

mod attr;
mod decl;
mod graph;
mod location;
mod types;

pub use attr::*;
pub use decl::*;
pub use graph::*;
pub use location::*;
pub use types::*;
