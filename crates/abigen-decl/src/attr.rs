//! Contract attributes attached to declarations
//!
//! The front end hands attribute arguments over as raw argument text, so
//! `[[eosio::action("transfer")]]` arrives as `"\"transfer\""`. Parsing the
//! argument happens here; deciding what a bad argument means is left to the
//! generator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems with a raw attribute argument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("unterminated string literal `{raw}`")]
    Unterminated { raw: String },

    #[error("unexpected character {ch:?} in `{raw}`")]
    InvalidCharacter { raw: String, ch: char },

    #[error("unexpected input after string literal in `{raw}`")]
    TrailingInput { raw: String },
}

/// A single attribute occurrence, with its optional argument
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Raw argument text as written in source, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
}

impl Attribute {
    /// Attribute without an argument: `[[eosio::table]]`
    pub fn bare() -> Self {
        Self::default()
    }

    pub fn with_argument(raw: impl Into<String>) -> Self {
        Self {
            argument: Some(raw.into()),
        }
    }

    /// The explicit name carried by this attribute
    ///
    /// Returns `Ok(None)` when there is no argument or the argument is empty.
    pub fn explicit_name(&self) -> Result<Option<String>, AttributeError> {
        match &self.argument {
            Some(raw) => parse_argument(raw),
            None => Ok(None),
        }
    }
}

/// The attributes the generator cares about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<Attribute>,
}

impl Attributes {
    pub fn is_action(&self) -> bool {
        self.action.is_some()
    }

    pub fn is_table(&self) -> bool {
        self.table.is_some()
    }
}

/// Parse a raw argument: either a bare identifier or a double-quoted literal
fn parse_argument(raw: &str) -> Result<Option<String>, AttributeError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let Some(rest) = text.strip_prefix('"') else {
        if let Some(ch) = text
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '.'))
        {
            return Err(AttributeError::InvalidCharacter {
                raw: raw.to_string(),
                ch,
            });
        }
        return Ok(Some(text.to_string()));
    };

    let Some(end) = rest.find('"') else {
        return Err(AttributeError::Unterminated {
            raw: raw.to_string(),
        });
    };

    if !rest[end + 1..].is_empty() {
        return Err(AttributeError::TrailingInput {
            raw: raw.to_string(),
        });
    }

    let inner = &rest[..end];
    if let Some(ch) = inner.chars().find(|c| c.is_control() || *c == '\\') {
        return Err(AttributeError::InvalidCharacter {
            raw: raw.to_string(),
            ch,
        });
    }

    if inner.is_empty() {
        Ok(None)
    } else {
        Ok(Some(inner.to_string()))
    }
}
