//! Error and warning types for ABI generation

use abigen_decl::{AttributeError, Location};
use thiserror::Error;

use crate::InvalidNameError;

/// Fatal errors: the generation run stops and no interface description is produced
#[derive(Debug, Clone, Error)]
pub enum AbigenError {
    /// E-ABI-001: more than one direct base
    #[error(
        "abigen can only handle single inheritance <class {record}> (bases: {})",
        .bases.join(", ")
    )]
    MultipleInheritance {
        record: String,
        bases: Vec<String>,
        location: Option<Location>,
    },

    /// E-ABI-002: attribute argument could not be parsed
    #[error("malformed attribute argument on `{decl}`: {source}")]
    MalformedAttribute {
        decl: String,
        #[source]
        source: AttributeError,
        location: Option<Location>,
    },

    /// E-ABI-003: the configured contract name cannot be encoded
    #[error("invalid contract name: {source}")]
    InvalidContractName {
        #[source]
        source: InvalidNameError,
    },

    /// E-ABI-004: a type refers to a record the declaration graph does not contain
    #[error("unknown record `{name}` referenced from `{referrer}`")]
    UnknownRecord {
        name: String,
        referrer: String,
        location: Option<Location>,
    },
}

impl AbigenError {
    /// Error code for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            AbigenError::MultipleInheritance { .. } => "E-ABI-001",
            AbigenError::MalformedAttribute { .. } => "E-ABI-002",
            AbigenError::InvalidContractName { .. } => "E-ABI-003",
            AbigenError::UnknownRecord { .. } => "E-ABI-004",
        }
    }

    /// Declaration the diagnostic is about
    pub fn decl(&self) -> &str {
        match self {
            AbigenError::MultipleInheritance { record, .. } => record,
            AbigenError::MalformedAttribute { decl, .. } => decl,
            AbigenError::InvalidContractName { source } => &source.name,
            AbigenError::UnknownRecord { referrer, .. } => referrer,
        }
    }

    /// Source location of the declaration, when the front end supplied one
    pub fn location(&self) -> Option<&Location> {
        match self {
            AbigenError::MultipleInheritance { location, .. }
            | AbigenError::MalformedAttribute { location, .. }
            | AbigenError::UnknownRecord { location, .. } => location.as_ref(),
            AbigenError::InvalidContractName { .. } => None,
        }
    }
}

/// Reported-but-continued problems, collected on the generation result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbigenWarning {
    /// W-ABI-001: action name outside the name alphabet or too long
    #[error("action name <{name}> on `{decl}` is an invalid name: {source}")]
    InvalidActionName {
        decl: String,
        name: String,
        #[source]
        source: InvalidNameError,
        location: Option<Location>,
    },

    /// W-ABI-002: table name outside the name alphabet or too long
    #[error("table name <{name}> on `{decl}` is an invalid name: {source}")]
    InvalidTableName {
        decl: String,
        name: String,
        #[source]
        source: InvalidNameError,
        location: Option<Location>,
    },
}

impl AbigenWarning {
    pub fn code(&self) -> &'static str {
        match self {
            AbigenWarning::InvalidActionName { .. } => "W-ABI-001",
            AbigenWarning::InvalidTableName { .. } => "W-ABI-002",
        }
    }

    pub fn decl(&self) -> &str {
        match self {
            AbigenWarning::InvalidActionName { decl, .. } => decl,
            AbigenWarning::InvalidTableName { decl, .. } => decl,
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            AbigenWarning::InvalidActionName { location, .. }
            | AbigenWarning::InvalidTableName { location, .. } => location.as_ref(),
        }
    }
}
