//! Type resolution: semantic types to ABI type names
//!
//! Resolution and struct building are mutually recursive. Resolving a record
//! type builds its struct; building a struct resolves its field types.

use abigen_decl::{ContainerKind, DeclSource, SemanticType};
use tracing::debug;

use crate::{builtins, AbiBuilder, AbigenError, TypeDef};

impl<'g, G: DeclSource> AbiBuilder<'g, G> {
    /// Map a semantic type to its ABI type name
    ///
    /// Ignorable markers are replaced first. `vector`/`optional` append
    /// `[]`/`?` to the resolved element, aliases over non-record types
    /// register a typedef, and records resolve to their own name after their
    /// struct is built. Builtins map to ABI primitives.
    pub fn resolve(&mut self, ty: &SemanticType) -> Result<String, AbigenError> {
        if let Some(replacement) = ty.ignored_replacement() {
            return self.resolve(replacement);
        }
        if let Some((kind, element)) = ty.as_container() {
            return self.resolve_container(kind, element);
        }
        if let Some((name, target)) = ty.as_alias() {
            return self.resolve_alias(name, target);
        }
        if let Some(name) = ty.as_record() {
            self.ensure_struct(name)?;
            return Ok(name.to_string());
        }

        // Builtins resolve by spelling; unknown spellings pass through
        let spelling = ty.to_string();
        Ok(builtins::abi_name(&spelling)
            .map(str::to_string)
            .unwrap_or(spelling))
    }

    fn resolve_container(
        &mut self,
        kind: ContainerKind,
        element: &SemanticType,
    ) -> Result<String, AbigenError> {
        if kind == ContainerKind::Vector
            && element.is_builtin()
            && builtins::is_byte_element(&element.to_string())
        {
            return Ok("bytes".to_string());
        }
        let inner = self.resolve(element)?;
        Ok(format!("{inner}{}", kind.suffix()))
    }

    fn resolve_alias(&mut self, name: &str, target: &SemanticType) -> Result<String, AbigenError> {
        if let Some(primitive) = builtins::abi_name(name) {
            return Ok(primitive.to_string());
        }

        // Aliases of records are transparent
        if target.canonical().is_record() {
            return self.resolve(target);
        }

        let aliased_type = self.resolve(target)?;
        if aliased_type == name {
            return Ok(aliased_type);
        }

        let typedef = TypeDef {
            new_name: name.to_string(),
            aliased_type,
        };
        if self.interface.insert_typedef(typedef) {
            debug!(alias = name, "registered typedef");
        }
        Ok(name.to_string())
    }

    /// Build the struct for a record unless it exists or is being built
    pub(crate) fn ensure_struct(&mut self, name: &str) -> Result<(), AbigenError> {
        if self.interface.has_struct(name) || self.building.iter().any(|f| f.name == name) {
            return Ok(());
        }

        let graph = self.graph;
        let Some(record) = graph.record(name) else {
            let referrer = self.referrer();
            return Err(AbigenError::UnknownRecord {
                name: name.to_string(),
                referrer: referrer.name,
                location: referrer.location,
            });
        };
        self.build_struct(record)
    }
}
