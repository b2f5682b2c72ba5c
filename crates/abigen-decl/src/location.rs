//! Source location tracking

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a declaration was found by the front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let loc = Location::new("hello.cpp", 12, 5);
        assert_eq!(loc.to_string(), "hello.cpp:12:5");
    }

    #[test]
    fn test_column_defaults_to_zero() {
        let loc: Location = serde_json::from_str(r#"{"file": "a.hpp", "line": 3}"#).unwrap();
        assert_eq!(loc.column, 0);
    }
}
