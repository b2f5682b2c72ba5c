//! End-to-end integration tests for the ABI generator
//!
//! These tests run whole declaration graphs through `generate` and check the
//! emitted interface description.

mod common;

use abigen::builder::{
    generate, AbigenError, AbigenWarning, GeneratorConfig, NameViolation, PruneMode,
    ABI_VERSION, TABLE_INDEX_TYPE,
};
use abigen::decl::{Attribute, Decl, DeclarationGraph, MethodDecl, RecordDecl, SemanticType};

use common::assertions::*;
use common::fixtures::*;

#[test]
fn e2e_transfer_action() {
    let result = generate_fixture("hello", "hello").expect("hello should generate");
    let abi = &result.abi;

    assert_eq!(abi.actions.len(), 1);
    let action = assert_has_action(abi, "transfer");
    assert_eq!(action.ty, "transfer");
    assert!(action.doc.is_empty());

    let transfer = assert_has_struct(abi, "transfer");
    assert_fields(
        transfer,
        &[("from", "account"), ("to", "account"), ("quantity", "asset")],
    );

    // Reached through the parameter types and kept
    let account = assert_has_struct(abi, "account");
    assert_fields(account, &[("owner", "name"), ("balance", "asset")]);

    assert!(abi.find_struct("helper").is_none());
    assert!(abi.tables.is_empty());
    assert!(abi.typedefs.is_empty());
    assert!(!result.has_warnings());
}

#[test]
fn e2e_token_contract() {
    let result = generate_fixture("token", "eosio.token").expect("token should generate");
    let abi = &result.abi;

    assert_eq!(abi.version, ABI_VERSION);
    let names: Vec<&str> = abi.actions.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["create", "issue", "transfer", "open"]);
    assert_eq!(assert_has_action(abi, "open").ty, "open_account");

    assert_eq!(abi.structs.len(), 6);
    assert_fields(
        assert_has_struct(abi, "open_account"),
        &[("owner", "name"), ("symbols", "symbols_t")],
    );

    assert_eq!(abi.typedefs.len(), 1);
    assert_eq!(abi.typedefs[0].new_name, "symbols_t");
    assert_eq!(abi.typedefs[0].aliased_type, "symbol[]");
    assert!(!result.has_warnings());
}

#[test]
fn e2e_attribute_and_multi_index_tables_merge() {
    let result = generate_fixture("token", "eosio.token").unwrap();
    let tables = &result.abi.tables;

    // `account` is declared with the attribute and through multi_index
    let names: Vec<(&str, &str)> = tables
        .iter()
        .map(|t| (t.name.as_str(), t.ty.as_str()))
        .collect();
    assert_eq!(names, [("accounts", "account"), ("stat", "currency_stats")]);

    for table in tables {
        assert_eq!(table.index_type, TABLE_INDEX_TYPE);
        assert!(table.key_names.is_empty());
        assert!(table.key_types.is_empty());
    }
}

#[test]
fn e2e_other_contract_sees_nothing() {
    let result = generate_fixture("token", "hello").unwrap();
    assert!(result.abi.actions.is_empty());
    assert!(result.abi.tables.is_empty());
    assert!(result.abi.structs.is_empty());
}

#[test]
fn e2e_json_key_order() {
    let result = generate_fixture("token", "eosio.token").unwrap();
    let json = result.abi.to_json(false).unwrap();

    let top = [
        "\"____comment\"",
        "\"version\"",
        "\"structs\"",
        "\"types\"",
        "\"actions\"",
        "\"tables\"",
        "\"ricardian_clauses\"",
        "\"abi_extensions\"",
    ];
    let positions: Vec<usize> = top
        .iter()
        .map(|key| json.find(key).unwrap_or_else(|| panic!("missing key {}", key)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", json);

    assert!(json.contains(
        r#"{"name":"create","base":"","fields":[{"name":"issuer","type":"name"}"#
    ));
    assert!(json.contains(r#"{"name":"open","type":"open_account","ricardian_contract":""}"#));
    let stat = concat!(
        r#"{"name":"stat","type":"currency_stats","index_type":"i64","#,
        r#""key_names":[],"key_types":[]}"#
    );
    assert!(json.contains(stat));
    assert!(json.contains(r#"{"new_type_name":"symbols_t","type":"symbol[]"}"#));
}

#[test]
fn e2e_comment_names_tool() {
    let result = generate_fixture("hello", "hello").unwrap();
    assert!(result
        .abi
        .comment
        .starts_with("This file was generated with eosio-abigen. DO NOT EDIT "));
}

#[test]
fn e2e_multiple_inheritance_is_fatal() {
    let err = generate_fixture("multiple_bases", "hello").unwrap_err();
    assert_eq!(err.code(), "E-ABI-001");
    assert_eq!(
        err.to_string(),
        "abigen can only handle single inheritance <class both> (bases: left, right)"
    );
    assert_eq!(err.location().unwrap().to_string(), "hello.hpp:21:1");
}

#[test]
fn e2e_invalid_contract_name_is_fatal() {
    let err = generate_fixture("hello", "Hello").unwrap_err();
    assert!(matches!(err, AbigenError::InvalidContractName { .. }));
}

#[test]
fn e2e_invalid_names_are_warnings() {
    let result = generate_fixture("bad_names", "hello").expect("warnings are not fatal");

    assert!(result.abi.find_action("say_hello").is_some());
    assert!(result.abi.find_table("greetingsbook").is_some());

    assert_eq!(result.warnings.len(), 2);
    assert!(matches!(
        &result.warnings[0],
        AbigenWarning::InvalidActionName { source, .. }
            if source.violation == NameViolation::InvalidCharacter { ch: '_', position: 3 }
    ));
    assert!(matches!(
        &result.warnings[1],
        AbigenWarning::InvalidTableName { source, .. }
            if source.violation == NameViolation::TooLong { len: 13 }
    ));
    let lines: Vec<u32> = result
        .warnings
        .iter()
        .filter_map(|w| w.location().map(|loc| loc.line))
        .collect();
    assert_eq!(lines, [6, 10]);
}

#[test]
fn e2e_independent_runs() {
    let graph = load_graph("token");
    let first = generate(&graph, GeneratorConfig::new("eosio.token")).unwrap();
    let other = generate(&graph, GeneratorConfig::new("hello")).unwrap();
    let again = generate(&graph, GeneratorConfig::new("eosio.token")).unwrap();

    assert!(other.abi.structs.is_empty());
    assert_eq!(first.abi.structs, again.abi.structs);
    assert_eq!(first.abi.actions, again.abi.actions);
    assert_eq!(first.abi.tables, again.abi.tables);
}

/// Chain post -> entry -> log, plus a non-action method using `entry`
fn chain_graph() -> DeclarationGraph {
    let decls = vec![
        Decl::Record(
            RecordDecl::new("log").with_field("msg", SemanticType::builtin("std::string")),
        ),
        Decl::Record(
            RecordDecl::new("entry").with_field("log", SemanticType::record("log")),
        ),
        Decl::Record(
            RecordDecl::new("note").with_field("text", SemanticType::builtin("std::string")),
        ),
        Decl::Method(
            MethodDecl::new("post")
                .with_param("note", SemanticType::record("note"))
                .with_param("entry", SemanticType::optional(SemanticType::record("entry")))
                .with_action(Attribute::bare())
                .with_parent("hello"),
        ),
        Decl::Method(
            MethodDecl::new("drop")
                .with_param("entry", SemanticType::record("entry"))
                .with_parent("hello"),
        ),
    ];
    DeclarationGraph::from_decls(decls).unwrap()
}

#[test]
fn e2e_prune_modes_agree_on_reachable_chain() {
    let graph = chain_graph();
    for mode in [PruneMode::SinglePass, PruneMode::Closure] {
        let result = generate(&graph, GeneratorConfig::new("hello").with_prune(mode)).unwrap();
        let names: Vec<&str> = result.abi.structs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["note", "log", "entry", "post"], "{:?}", mode);
    }
}

#[test]
fn e2e_closure_drops_structs_only_a_dropped_struct_uses() {
    let graph = DeclarationGraph::from_decls(vec![
        Decl::Record(RecordDecl::new("leaf").with_field("v", SemanticType::builtin("uint8_t"))),
        Decl::Record(RecordDecl::new("orphan").with_field("leaf", SemanticType::record("leaf"))),
        Decl::Record(
            RecordDecl::new("row")
                .with_field("id", SemanticType::builtin("uint64_t"))
                .with_table(Attribute::bare())
                .with_parent("hello"),
        ),
    ])
    .unwrap();

    let mut builder =
        abigen::builder::AbiBuilder::new(&graph, GeneratorConfig::new("hello")).unwrap();
    builder.visit_all().unwrap();
    // Pull in a struct nothing in the contract refers to
    builder.resolve(&SemanticType::record("orphan")).unwrap();
    let single = builder.finalize();
    let names: Vec<&str> = single.abi.structs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["row", "leaf"]);

    let mut builder = abigen::builder::AbiBuilder::new(
        &graph,
        GeneratorConfig::new("hello").with_prune(PruneMode::Closure),
    )
    .unwrap();
    builder.visit_all().unwrap();
    builder.resolve(&SemanticType::record("orphan")).unwrap();
    let closure = builder.finalize();
    let names: Vec<&str> = closure.abi.structs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["row"]);
}
