//! The builder owning one generation run's state

use abigen_decl::{Attribute, Attributes, DeclSource, Location};
use tracing::debug;

use crate::{validate_name, AbigenError, AbigenWarning, GeneratorConfig, InterfaceDescription};

/// A declaration currently being built, for diagnostics
#[derive(Debug, Clone)]
pub(crate) struct Frame {
    pub(crate) name: String,
    pub(crate) location: Option<Location>,
}

impl Frame {
    pub(crate) fn new(name: &str, location: Option<&Location>) -> Self {
        Self {
            name: name.to_string(),
            location: location.cloned(),
        }
    }
}

/// Accumulates the interface description while declarations are visited
///
/// One builder serves exactly one traversal. Start a new one for every
/// independent generation.
pub struct AbiBuilder<'g, G: DeclSource> {
    pub(crate) graph: &'g G,
    pub(crate) config: GeneratorConfig,
    pub(crate) interface: InterfaceDescription,
    /// Records whose structs are being built, innermost last
    pub(crate) building: Vec<Frame>,
    /// Method whose parameter struct is being built
    pub(crate) origin: Option<Frame>,
    pub(crate) warnings: Vec<AbigenWarning>,
}

impl<'g, G: DeclSource> AbiBuilder<'g, G> {
    /// Create a builder for `config.contract`; fails when the contract name
    /// cannot be encoded
    pub fn new(graph: &'g G, config: GeneratorConfig) -> Result<Self, AbigenError> {
        validate_name(&config.contract)
            .map_err(|source| AbigenError::InvalidContractName { source })?;

        Ok(Self {
            graph,
            config,
            interface: InterfaceDescription::new(),
            building: Vec::new(),
            origin: None,
            warnings: Vec::new(),
        })
    }

    /// Everything collected so far, before merging and pruning
    pub fn interface(&self) -> &InterfaceDescription {
        &self.interface
    }

    pub fn warnings(&self) -> &[AbigenWarning] {
        &self.warnings
    }

    /// Declaration that caused the current resolution, for diagnostics
    pub(crate) fn referrer(&self) -> Frame {
        self.building
            .last()
            .or(self.origin.as_ref())
            .cloned()
            .unwrap_or_else(|| Frame::new("<root>", None))
    }

    pub(crate) fn report(&mut self, warning: AbigenWarning) {
        debug!(code = warning.code(), decl = warning.decl(), "{warning}");
        self.warnings.push(warning);
    }

    /// Explicit name from an attribute argument; malformed arguments are fatal
    pub(crate) fn explicit_name(
        &self,
        decl: &str,
        location: Option<&Location>,
        attr: Option<&Attribute>,
    ) -> Result<Option<String>, AbigenError> {
        match attr {
            Some(attr) => attr
                .explicit_name()
                .map_err(|source| AbigenError::MalformedAttribute {
                    decl: decl.to_string(),
                    source,
                    location: location.cloned(),
                }),
            None => Ok(None),
        }
    }

    /// Whether a declaration belongs to the configured contract
    pub(crate) fn in_contract(
        &self,
        decl: &str,
        location: Option<&Location>,
        attributes: &Attributes,
        parent: Option<&str>,
    ) -> Result<bool, AbigenError> {
        let contract = self
            .graph
            .contract_of(attributes, parent)
            .map_err(|source| AbigenError::MalformedAttribute {
                decl: decl.to_string(),
                source,
                location: location.cloned(),
            })?;
        Ok(contract.as_deref() == Some(self.config.contract.as_str()))
    }
}
