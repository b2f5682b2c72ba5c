//! Traversal driver: dispatch over declaration kinds

use abigen_decl::{Decl, DeclSource};
use tracing::{debug_span, info, trace};

use crate::{AbiBuilder, AbigenError, GenerationResult, GeneratorConfig};

/// Run one generation over every declaration of `graph`
///
/// # Returns
/// * `Ok(GenerationResult)` - the finalized description and any warnings
/// * `Err(AbigenError)` - a fatal error; no description is produced
pub fn generate<G: DeclSource>(
    graph: &G,
    config: GeneratorConfig,
) -> Result<GenerationResult, AbigenError> {
    let span = debug_span!("generate", contract = %config.contract);
    let _entered = span.enter();

    let mut builder = AbiBuilder::new(graph, config)?;
    builder.visit_all()?;
    let result = builder.finalize();

    info!(
        structs = result.abi.structs.len(),
        actions = result.abi.actions.len(),
        tables = result.abi.tables.len(),
        warnings = result.warnings.len(),
        "generated interface description"
    );
    Ok(result)
}

impl<'g, G: DeclSource> AbiBuilder<'g, G> {
    /// Visit every declaration of the graph in order
    pub fn visit_all(&mut self) -> Result<(), AbigenError> {
        let graph = self.graph;
        for decl in graph.declarations() {
            self.visit(decl)?;
        }
        Ok(())
    }

    /// Visit one declaration
    pub fn visit(&mut self, decl: &Decl) -> Result<(), AbigenError> {
        trace!(decl = decl.name(), "visit");
        match decl {
            Decl::Method(method) => {
                if method.attributes.is_action()
                    && self.in_contract(
                        &method.name,
                        method.location.as_ref(),
                        &method.attributes,
                        method.parent.as_deref(),
                    )?
                {
                    self.build_struct_from_method(method)?;
                    self.add_action_from_method(method)?;
                }
            }
            Decl::Record(record) => {
                let attrs = &record.attributes;
                if !(attrs.is_action() || attrs.is_table())
                    || !self.in_contract(
                        &record.name,
                        record.location.as_ref(),
                        attrs,
                        record.parent.as_deref(),
                    )?
                {
                    return Ok(());
                }
                if attrs.is_action() {
                    self.build_struct(record)?;
                    self.add_action_from_record(record)?;
                }
                if attrs.is_table() {
                    self.build_struct(record)?;
                    self.add_table_from_attribute(record)?;
                }
            }
            // Aliases only matter once a reached type uses them
            Decl::Alias(_) => {}
            Decl::Specialization(specialization) => {
                let graph = self.graph;
                if let Some((encoded, row)) = specialization.as_multi_index() {
                    if let Some(record) = graph.record(row) {
                        self.add_table_from_template(encoded, record)?;
                    }
                }
            }
        }
        Ok(())
    }
}
