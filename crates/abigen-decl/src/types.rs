//! Semantic types as resolved by the front end

use serde::{Deserialize, Serialize};
use std::fmt;

/// Single-argument containers the generator unwraps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    /// `vector<T>`, rendered as `T[]`
    Vector,
    /// `optional<T>`, rendered as `T?`
    Optional,
}

impl ContainerKind {
    /// Suffix appended to the element type in the interface description
    pub fn suffix(self) -> &'static str {
        match self {
            ContainerKind::Vector => "[]",
            ContainerKind::Optional => "?",
        }
    }

    pub fn template_name(self) -> &'static str {
        match self {
            ContainerKind::Vector => "vector",
            ContainerKind::Optional => "optional",
        }
    }
}

/// A fully resolved type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    /// Language primitive, spelled the way the front end sees it:
    /// `unsigned long long`, `std::string`, `eosio::name`
    Builtin(String),

    /// Reference to a record declaration by name
    Record(String),

    /// `vector<T>` or `optional<T>`
    Container {
        kind: ContainerKind,
        element: Box<SemanticType>,
    },

    /// Named alias: `typedef std::vector<name> names_t;`
    Alias {
        name: String,
        target: Box<SemanticType>,
    },

    /// Marker type that must be replaced before resolution: `ignore<T>`
    Ignorable { replacement: Box<SemanticType> },
}

impl SemanticType {
    pub fn builtin(spelling: impl Into<String>) -> Self {
        SemanticType::Builtin(spelling.into())
    }

    pub fn record(name: impl Into<String>) -> Self {
        SemanticType::Record(name.into())
    }

    pub fn vector(element: SemanticType) -> Self {
        SemanticType::Container {
            kind: ContainerKind::Vector,
            element: Box::new(element),
        }
    }

    pub fn optional(element: SemanticType) -> Self {
        SemanticType::Container {
            kind: ContainerKind::Optional,
            element: Box::new(element),
        }
    }

    pub fn alias(name: impl Into<String>, target: SemanticType) -> Self {
        SemanticType::Alias {
            name: name.into(),
            target: Box::new(target),
        }
    }

    pub fn ignorable(replacement: SemanticType) -> Self {
        SemanticType::Ignorable {
            replacement: Box::new(replacement),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, SemanticType::Builtin(_))
    }

    pub fn is_record(&self) -> bool {
        matches!(self, SemanticType::Record(_))
    }

    /// Name of the referenced record, if this is a record type
    pub fn as_record(&self) -> Option<&str> {
        match self {
            SemanticType::Record(name) => Some(name),
            _ => None,
        }
    }

    /// Container kind and element type, if this is `vector<T>`/`optional<T>`
    pub fn as_container(&self) -> Option<(ContainerKind, &SemanticType)> {
        match self {
            SemanticType::Container { kind, element } => Some((*kind, element)),
            _ => None,
        }
    }

    /// Alias name and aliased type
    pub fn as_alias(&self) -> Option<(&str, &SemanticType)> {
        match self {
            SemanticType::Alias { name, target } => Some((name, target)),
            _ => None,
        }
    }

    /// Stand-in type for an ignorable marker
    pub fn ignored_replacement(&self) -> Option<&SemanticType> {
        match self {
            SemanticType::Ignorable { replacement } => Some(replacement),
            _ => None,
        }
    }

    /// Follow alias and ignorable wrappers down to the type they stand for
    pub fn canonical(&self) -> &SemanticType {
        match self {
            SemanticType::Alias { target, .. } => target.canonical(),
            SemanticType::Ignorable { replacement } => replacement.canonical(),
            other => other,
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::Builtin(spelling) => f.write_str(spelling),
            SemanticType::Record(name) => f.write_str(name),
            SemanticType::Container { kind, element } => {
                write!(f, "{}<{}>", kind.template_name(), element)
            }
            SemanticType::Alias { name, .. } => f.write_str(name),
            SemanticType::Ignorable { replacement } => write!(f, "ignore<{}>", replacement),
        }
    }
}
