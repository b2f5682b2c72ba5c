use abigen::builder::{Abi, ActionDef, StructDef, TableDef};

/// Assert the description has a struct with the given name
pub fn assert_has_struct<'a>(abi: &'a Abi, name: &str) -> &'a StructDef {
    abi.find_struct(name)
        .unwrap_or_else(|| panic!("Expected struct: {}", name))
}

/// Assert the description has an action with the given name
pub fn assert_has_action<'a>(abi: &'a Abi, name: &str) -> &'a ActionDef {
    abi.find_action(name)
        .unwrap_or_else(|| panic!("Expected action: {}", name))
}

/// Assert the description has a table with the given name
pub fn assert_has_table<'a>(abi: &'a Abi, name: &str) -> &'a TableDef {
    abi.find_table(name)
        .unwrap_or_else(|| panic!("Expected table: {}", name))
}

/// Assert a struct's fields as (name, type) pairs
pub fn assert_fields(def: &StructDef, expected: &[(&str, &str)]) {
    let actual: Vec<(&str, &str)> = def
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.ty.as_str()))
        .collect();
    assert_eq!(actual, expected, "fields of struct {}", def.name);
}
