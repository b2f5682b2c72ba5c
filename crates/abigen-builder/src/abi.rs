//! Interface description output model
//!
//! Field order of every type here is the serialization key order of the
//! `.abi` file.

use serde::{Deserialize, Serialize};

/// Schema version written into every generated description
pub const ABI_VERSION: &str = "eosio::abi/1.1";

/// Index type recorded for every table
pub const TABLE_INDEX_TYPE: &str = "i64";

/// Named alias for a builtin or container type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    #[serde(rename = "new_type_name")]
    pub new_name: String,
    #[serde(rename = "type")]
    pub aliased_type: String,
}

/// Named, typed struct member; `ty` may carry `[]`/`?` suffixes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Field type with trailing container suffixes removed
    pub fn element_type(&self) -> &str {
        strip_suffixes(&self.ty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructDef {
    pub name: String,
    /// Base struct name, empty when there is none
    pub base: String,
    pub fields: Vec<FieldDef>,
}

impl StructDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: String::new(),
            fields: Vec::new(),
        }
    }

    pub fn has_base(&self) -> bool {
        !self.base.is_empty()
    }

    /// Whether this struct refers to `name` as its base or a field element type
    pub fn references(&self, name: &str) -> bool {
        self.base == name || self.fields.iter().any(|f| f.element_type() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDef {
    /// Externally callable name
    pub name: String,
    /// Struct carrying the parameters
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(rename = "ricardian_contract", default)]
    pub doc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    pub name: String,
    /// Row struct name
    #[serde(rename = "type")]
    pub ty: String,
    pub index_type: String,
    pub key_names: Vec<String>,
    pub key_types: Vec<String>,
}

impl TableDef {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            index_type: TABLE_INDEX_TYPE.to_string(),
            key_names: Vec::new(),
            key_types: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClausePair {
    pub id: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiExtension {
    pub tag: u16,
    pub value: String,
}

/// Finalized interface description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abi {
    #[serde(rename = "____comment")]
    pub comment: String,
    pub version: String,
    pub structs: Vec<StructDef>,
    #[serde(rename = "types")]
    pub typedefs: Vec<TypeDef>,
    pub actions: Vec<ActionDef>,
    pub tables: Vec<TableDef>,
    pub ricardian_clauses: Vec<ClausePair>,
    pub abi_extensions: Vec<AbiExtension>,
}

impl Abi {
    pub fn find_struct(&self, name: &str) -> Option<&StructDef> {
        self.structs.iter().find(|s| s.name == name)
    }

    pub fn find_action(&self, name: &str) -> Option<&ActionDef> {
        self.actions.iter().find(|a| a.name == name)
    }

    pub fn find_table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Render as JSON in the fixed key order
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Strip trailing `[]` and `?` container suffixes from a type name
pub fn strip_suffixes(ty: &str) -> &str {
    ty.trim_end_matches(['[', ']', '?'])
}
