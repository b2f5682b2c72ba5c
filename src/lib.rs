//! abigen - ABI generator for contracts
//!
//! This is the root workspace crate that provides integration tests.
//! The implementation lives in the workspace member crates.

pub use abigen_builder as builder;
pub use abigen_decl as decl;
