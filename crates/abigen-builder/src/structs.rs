//! Struct building from records and from method parameter lists

use abigen_decl::{DeclSource, MethodDecl, RecordDecl};
use tracing::debug;

use crate::builder::Frame;
use crate::{AbiBuilder, AbigenError, FieldDef, StructDef};

/// Field name that is normalized to an array of [`EXTENSION_STRUCT`]
pub const EXTENSIONS_FIELD: &str = "transaction_extensions";

/// Helper struct synthesized for [`EXTENSIONS_FIELD`]
pub const EXTENSION_STRUCT: &str = "extension";

fn extension_struct() -> StructDef {
    StructDef {
        name: EXTENSION_STRUCT.to_string(),
        base: String::new(),
        fields: vec![FieldDef::new("type", "uint16"), FieldDef::new("data", "bytes")],
    }
}

impl<'g, G: DeclSource> AbiBuilder<'g, G> {
    /// Build (or rebuild) the struct for a record
    ///
    /// More than one direct base is a fatal error; nothing is inserted for
    /// the record in that case. A single base is resolved and built first.
    pub fn build_struct(&mut self, record: &RecordDecl) -> Result<(), AbigenError> {
        if record.bases.len() > 1 {
            return Err(AbigenError::MultipleInheritance {
                record: record.name.clone(),
                bases: record.bases.iter().map(ToString::to_string).collect(),
                location: record.location.clone(),
            });
        }

        self.building
            .push(Frame::new(&record.name, record.location.as_ref()));
        let built = self.struct_from_record(record);
        self.building.pop();

        let def = built?;
        debug!(name = %def.name, base = %def.base, fields = def.fields.len(), "built struct");
        self.interface.insert_struct(def);
        Ok(())
    }

    fn struct_from_record(&mut self, record: &RecordDecl) -> Result<StructDef, AbigenError> {
        let mut def = StructDef::new(&record.name);

        if let Some(base) = record.bases.first() {
            def.base = self.resolve(base)?;
        }

        for field in &record.fields {
            if field.name == EXTENSIONS_FIELD {
                self.interface.insert_struct(extension_struct());
                def.fields
                    .push(FieldDef::new(EXTENSIONS_FIELD, format!("{EXTENSION_STRUCT}[]")));
            } else {
                let ty = self.resolve(&field.ty)?;
                def.fields.push(FieldDef::new(&field.name, ty));
            }
        }

        Ok(def)
    }

    /// Build the parameter struct of an action method
    ///
    /// The struct is named after the method and has one field per
    /// parameter. There is no inheritance.
    pub fn build_struct_from_method(&mut self, method: &MethodDecl) -> Result<(), AbigenError> {
        let previous = self
            .origin
            .replace(Frame::new(&method.name, method.location.as_ref()));
        let built = self.struct_from_params(method);
        self.origin = previous;

        let def = built?;
        debug!(name = %def.name, fields = def.fields.len(), "built parameter struct");
        self.interface.insert_struct(def);
        Ok(())
    }

    fn struct_from_params(&mut self, method: &MethodDecl) -> Result<StructDef, AbigenError> {
        let mut def = StructDef::new(&method.name);
        for param in &method.params {
            let ty = self.resolve(&param.ty)?;
            def.fields.push(FieldDef::new(&param.name, ty));
        }
        Ok(def)
    }
}
