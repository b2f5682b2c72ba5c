//! Declaration kinds visited by the generator

use serde::{Deserialize, Serialize};
use crate::{Attribute, Attributes, Location, SemanticType};

/// Name of the template whose instantiations declare tables in code
pub const MULTI_INDEX_TEMPLATE: &str = "multi_index";

/// A declaration matched by the front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decl {
    /// Method-like callable: `void transfer(name from, name to, asset q)`
    Method(MethodDecl),

    /// Record type: `struct [[eosio::table]] account { ... }`
    Record(RecordDecl),

    /// Alias declaration: `typedef std::vector<name> names_t;`
    Alias(AliasDecl),

    /// Class template specialization: `multi_index<"accounts"_n, account>`
    Specialization(SpecializationDecl),
}

impl Decl {
    /// Identifier of the declaration, used in diagnostics
    pub fn name(&self) -> &str {
        match self {
            Decl::Method(m) => &m.name,
            Decl::Record(r) => &r.name,
            Decl::Alias(a) => &a.name,
            Decl::Specialization(s) => &s.template,
        }
    }
}

/// Named, typed record member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: SemanticType,
}

/// Callable parameter; references and qualifiers are already stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: SemanticType,
}

/// Record declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDecl {
    pub name: String,
    /// Direct base classes in declaration order
    #[serde(default)]
    pub bases: Vec<SemanticType>,
    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    #[serde(default)]
    pub attributes: Attributes,
    /// Enclosing record, if nested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl RecordDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            fields: Vec::new(),
            attributes: Attributes::default(),
            parent: None,
            location: None,
        }
    }

    pub fn with_base(mut self, base: SemanticType) -> Self {
        self.bases.push(base);
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, ty: SemanticType) -> Self {
        self.fields.push(FieldDecl {
            name: name.into(),
            ty,
        });
        self
    }

    pub fn with_action(mut self, attr: Attribute) -> Self {
        self.attributes.action = Some(attr);
        self
    }

    pub fn with_table(mut self, attr: Attribute) -> Self {
        self.attributes.table = Some(attr);
        self
    }

    pub fn with_contract(mut self, attr: Attribute) -> Self {
        self.attributes.contract = Some(attr);
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

/// Method declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParamDecl>,
    #[serde(default)]
    pub attributes: Attributes,
    /// Record the method is declared in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            attributes: Attributes::default(),
            parent: None,
            location: None,
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, ty: SemanticType) -> Self {
        self.params.push(ParamDecl {
            name: name.into(),
            ty,
        });
        self
    }

    pub fn with_action(mut self, attr: Attribute) -> Self {
        self.attributes.action = Some(attr);
        self
    }

    pub fn with_contract(mut self, attr: Attribute) -> Self {
        self.attributes.contract = Some(attr);
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

/// Alias declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasDecl {
    pub name: String,
    pub target: SemanticType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Template argument of a specialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateArg {
    /// Integral non-type argument, e.g. an encoded table name
    Integral(u64),
    /// Type argument
    Type(SemanticType),
}

impl TemplateArg {
    pub fn as_integral(&self) -> Option<u64> {
        match self {
            TemplateArg::Integral(v) => Some(*v),
            TemplateArg::Type(_) => None,
        }
    }

    pub fn as_type(&self) -> Option<&SemanticType> {
        match self {
            TemplateArg::Type(ty) => Some(ty),
            TemplateArg::Integral(_) => None,
        }
    }
}

/// Class template specialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecializationDecl {
    /// Unqualified template name
    pub template: String,
    #[serde(default)]
    pub args: Vec<TemplateArg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl SpecializationDecl {
    /// `multi_index<encoded_name, row>`
    pub fn multi_index(encoded_name: u64, row: impl Into<String>) -> Self {
        Self {
            template: MULTI_INDEX_TEMPLATE.to_string(),
            args: vec![
                TemplateArg::Integral(encoded_name),
                TemplateArg::Type(SemanticType::record(row)),
            ],
            location: None,
        }
    }

    /// Encoded table name and row record, when this is a well-formed
    /// `multi_index` instantiation
    pub fn as_multi_index(&self) -> Option<(u64, &str)> {
        if self.template != MULTI_INDEX_TEMPLATE {
            return None;
        }
        let encoded = self.args.first()?.as_integral()?;
        let row = self.args.get(1)?.as_type()?.canonical().as_record()?;
        Some((encoded, row))
    }
}
