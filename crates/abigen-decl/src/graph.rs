//! Declaration graph container and the query interface the builder needs

use crate::{AttributeError, Attributes, Decl, RecordDecl};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors assembling a declaration graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("record `{name}` is declared more than once")]
    DuplicateRecord { name: String },
}

/// Queries the generator runs against the front end's declarations
pub trait DeclSource {
    /// Every matched declaration, in visitation order
    fn declarations(&self) -> &[Decl];

    /// Look up a record declaration by name
    fn record(&self, name: &str) -> Option<&RecordDecl>;

    /// Name of the contract a declaration belongs to
    ///
    /// The declaration's own `contract` attribute wins; otherwise the
    /// enclosing record's attribute, otherwise the enclosing record's name.
    /// `None` when none of these exist.
    fn contract_of(
        &self,
        attributes: &Attributes,
        parent: Option<&str>,
    ) -> Result<Option<String>, AttributeError> {
        if let Some(attr) = &attributes.contract {
            if let Some(name) = attr.explicit_name()? {
                return Ok(Some(name));
            }
        }

        let Some(parent) = parent else {
            return Ok(None);
        };

        if let Some(attr) = self
            .record(parent)
            .and_then(|record| record.attributes.contract.as_ref())
        {
            if let Some(name) = attr.explicit_name()? {
                return Ok(Some(name));
            }
        }

        Ok(Some(parent.to_string()))
    }
}

/// In-memory declaration graph, as emitted by a front end
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GraphRepr", into = "GraphRepr")]
pub struct DeclarationGraph {
    decls: Vec<Decl>,
    /// Record name to index into `decls`
    records: HashMap<String, usize>,
}

#[derive(Serialize, Deserialize)]
struct GraphRepr {
    declarations: Vec<Decl>,
}

impl TryFrom<GraphRepr> for DeclarationGraph {
    type Error = GraphError;

    fn try_from(repr: GraphRepr) -> Result<Self, Self::Error> {
        Self::from_decls(repr.declarations)
    }
}

impl From<DeclarationGraph> for GraphRepr {
    fn from(graph: DeclarationGraph) -> Self {
        GraphRepr {
            declarations: graph.decls,
        }
    }
}

impl DeclarationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_decls(decls: impl IntoIterator<Item = Decl>) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for decl in decls {
            graph.push(decl)?;
        }
        Ok(graph)
    }

    /// Append a declaration, returning error if a record name repeats
    pub fn push(&mut self, decl: Decl) -> Result<(), GraphError> {
        if let Decl::Record(record) = &decl {
            if self.records.contains_key(&record.name) {
                return Err(GraphError::DuplicateRecord {
                    name: record.name.clone(),
                });
            }
            self.records.insert(record.name.clone(), self.decls.len());
        }
        self.decls.push(decl);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl DeclSource for DeclarationGraph {
    fn declarations(&self) -> &[Decl] {
        &self.decls
    }

    fn record(&self, name: &str) -> Option<&RecordDecl> {
        self.records.get(name).and_then(|&i| match &self.decls[i] {
            Decl::Record(r) => Some(r),
            _ => None,
        })
    }
}
