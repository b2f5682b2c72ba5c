//! abigen-builder: ABI generation from a declaration graph
//!
//! This crate turns the declarations of one contract into its interface
//! description:
//! - Resolve semantic types to ABI type names, building structs on demand
//! - Register actions and tables, validating their encoded names
//! - Merge attribute and `multi_index` tables, prune unreferenced structs
//! - Report fatal errors E-ABI-001..004 and warnings W-ABI-001/002
//!
//! # Example
//!
//! ```ignore
//! use abigen_builder::{generate, GeneratorConfig};
//! use abigen_decl::DeclarationGraph;
//!
//! let graph: DeclarationGraph = serde_json::from_str(&json)?;
//! let result = generate(&graph, GeneratorConfig::new("hello"))?;
//! println!("{}", result.abi.to_json(true)?);
//! ```

mod abi;
mod assembler;
mod builder;
pub mod builtins;
mod config;
mod driver;
mod error;
mod interface;
mod name;
mod registry;
mod resolver;
mod structs;

pub use abi::{
    strip_suffixes, Abi, AbiExtension, ActionDef, ClausePair, FieldDef, StructDef, TableDef,
    TypeDef, ABI_VERSION, TABLE_INDEX_TYPE,
};
pub use assembler::generation_comment;
pub use builder::AbiBuilder;
pub use config::{GeneratorConfig, PruneMode, DEFAULT_TOOL_NAME};
pub use driver::generate;
pub use error::{AbigenError, AbigenWarning};
pub use interface::InterfaceDescription;
pub use name::{
    name_to_string, string_to_name, validate_name, InvalidNameError, NameViolation, MAX_NAME_LEN,
    NAME_CHARSET,
};
pub use structs::{EXTENSIONS_FIELD, EXTENSION_STRUCT};

/// Outcome of a successful generation
#[derive(Debug)]
pub struct GenerationResult {
    /// The finalized description
    pub abi: Abi,
    /// Soft errors reported while building; the description is still valid
    pub warnings: Vec<AbigenWarning>,
}

impl GenerationResult {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
