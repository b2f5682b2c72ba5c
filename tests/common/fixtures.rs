use std::fs;
use std::path::{Path, PathBuf};

use abigen::builder::{generate, AbigenError, GenerationResult, GeneratorConfig};
use abigen::decl::DeclarationGraph;

/// Get path to a fixture in tests/fixtures/
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.json", name))
}

/// Load a declaration graph fixture
pub fn load_graph(name: &str) -> DeclarationGraph {
    let source = fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e));
    serde_json::from_str(&source)
        .unwrap_or_else(|e| panic!("Fixture {} is not a declaration graph: {}", name, e))
}

/// Run the generator on a fixture
pub fn generate_fixture(name: &str, contract: &str) -> Result<GenerationResult, AbigenError> {
    generate(&load_graph(name), GeneratorConfig::new(contract))
}
