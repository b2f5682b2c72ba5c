//! Action and table registration

use abigen_decl::{Attribute, DeclSource, Location, MethodDecl, RecordDecl};
use tracing::{debug, trace};

use crate::{
    name_to_string, validate_name, AbiBuilder, AbigenError, AbigenWarning, ActionDef, TableDef,
};

impl<'g, G: DeclSource> AbiBuilder<'g, G> {
    /// Register the action declared by an action-attributed record
    pub fn add_action_from_record(&mut self, record: &RecordDecl) -> Result<(), AbigenError> {
        self.add_action(
            &record.name,
            record.location.as_ref(),
            record.attributes.action.as_ref(),
        )
    }

    /// Register the action declared by an action-attributed method
    pub fn add_action_from_method(&mut self, method: &MethodDecl) -> Result<(), AbigenError> {
        self.add_action(
            &method.name,
            method.location.as_ref(),
            method.attributes.action.as_ref(),
        )
    }

    /// The action is named by the attribute argument when present, else by
    /// the declaration. An invalid name is reported and registered as given.
    fn add_action(
        &mut self,
        decl: &str,
        location: Option<&Location>,
        attr: Option<&Attribute>,
    ) -> Result<(), AbigenError> {
        let name = self
            .explicit_name(decl, location, attr)?
            .unwrap_or_else(|| decl.to_string());

        if let Err(source) = validate_name(&name) {
            self.report(AbigenWarning::InvalidActionName {
                decl: decl.to_string(),
                name: name.clone(),
                source,
                location: location.cloned(),
            });
        }

        let action = ActionDef {
            name,
            ty: decl.to_string(),
            doc: String::new(),
        };
        debug!(name = %action.name, ty = %action.ty, "registered action");
        self.interface.insert_action(action);
        Ok(())
    }

    /// Register a table declared with the table attribute
    ///
    /// Always recorded; a `multi_index` table for the same row replaces it
    /// when the description is assembled.
    pub fn add_table_from_attribute(&mut self, record: &RecordDecl) -> Result<(), AbigenError> {
        let name = self
            .explicit_name(
                &record.name,
                record.location.as_ref(),
                record.attributes.table.as_ref(),
            )?
            .unwrap_or_else(|| record.name.clone());

        if let Err(source) = validate_name(&name) {
            self.report(AbigenWarning::InvalidTableName {
                decl: record.name.clone(),
                name: name.clone(),
                source,
                location: record.location.clone(),
            });
        }

        debug!(name = %name, row = %record.name, "registered attribute table");
        self.interface
            .insert_attribute_table(TableDef::new(name, &record.name));
        Ok(())
    }

    /// Register a table declared by a `multi_index<encoded_name, row>` instantiation
    ///
    /// Rows that are not table-attributed members of the contract are skipped
    /// silently: most instantiations of the container are not contract tables.
    pub fn add_table_from_template(
        &mut self,
        encoded_name: u64,
        row: &RecordDecl,
    ) -> Result<(), AbigenError> {
        if !row.attributes.is_table()
            || !self.in_contract(
                &row.name,
                row.location.as_ref(),
                &row.attributes,
                row.parent.as_deref(),
            )?
        {
            trace!(row = %row.name, "skipping multi_index outside the contract");
            return Ok(());
        }

        let name = name_to_string(encoded_name);
        debug!(name = %name, row = %row.name, "registered multi_index table");
        self.interface.insert_table(TableDef::new(name, &row.name));
        Ok(())
    }
}
