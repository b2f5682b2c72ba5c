//! Final assembly: table merge, struct pruning, output model
//!
//! Pruning keeps a struct when it is the base of a struct, the element type
//! of a struct field, the type of an action, or the row type of a table.
//! With [`PruneMode::SinglePass`] "a struct" means any struct collected during
//! traversal, tested once; a struct referenced only from a struct that is
//! itself dropped is still kept. [`PruneMode::Closure`] follows references
//! from the action and table roots to a fixed point instead.

use std::collections::{HashMap, HashSet};

use abigen_decl::DeclSource;
use chrono::{DateTime, Local};
use tracing::debug;

use crate::{
    builtins, Abi, AbiBuilder, ActionDef, FieldDef, GenerationResult, PruneMode, StructDef,
    TableDef,
};

/// Provenance comment placed at the top of the description
pub fn generation_comment(tool_name: &str, now: DateTime<Local>) -> String {
    // ctime layout, without the trailing newline
    format!(
        "This file was generated with {tool_name}. DO NOT EDIT {}",
        now.format("%a %b %e %H:%M:%S %Y")
    )
}

impl<'g, G: DeclSource> AbiBuilder<'g, G> {
    /// Merge, prune and emit the description, stamped with the current time
    pub fn finalize(self) -> GenerationResult {
        self.finalize_at(Local::now())
    }

    /// Like [`finalize`](Self::finalize) with an explicit timestamp
    pub fn finalize_at(self, now: DateTime<Local>) -> GenerationResult {
        let abi = self.assemble(now);
        GenerationResult {
            abi,
            warnings: self.warnings,
        }
    }

    fn assemble(&self, now: DateTime<Local>) -> Abi {
        let tables = self.merged_tables();
        let structs = self.kept_structs(&tables);
        debug!(
            collected = self.interface.structs().len(),
            kept = structs.len(),
            tables = tables.len(),
            "assembled interface description"
        );

        Abi {
            comment: generation_comment(&self.config.tool_name, now),
            version: self.interface.version.clone(),
            structs,
            typedefs: self.interface.typedefs().to_vec(),
            actions: self.interface.actions().to_vec(),
            tables,
            ricardian_clauses: Vec::new(),
            abi_extensions: Vec::new(),
        }
    }

    /// Attribute tables, each replaced by the `multi_index` tables of the
    /// same row type, followed by the remaining `multi_index` tables
    pub fn merged_tables(&self) -> Vec<TableDef> {
        let templated = self.interface.tables();
        let mut emitted = vec![false; templated.len()];
        let mut merged = Vec::new();

        for attr in self.interface.attribute_tables() {
            let mut replaced = false;
            for (i, table) in templated.iter().enumerate() {
                if table.ty == attr.ty {
                    replaced = true;
                    if !emitted[i] {
                        emitted[i] = true;
                        merged.push(table.clone());
                    }
                }
            }
            if !replaced {
                merged.push(attr.clone());
            }
        }

        for (i, table) in templated.iter().enumerate() {
            if !emitted[i] {
                merged.push(table.clone());
            }
        }

        merged
    }

    fn kept_structs(&self, tables: &[TableDef]) -> Vec<StructDef> {
        let structs = self.interface.structs();
        let actions = self.interface.actions();

        match self.config.prune {
            PruneMode::SinglePass => structs
                .iter()
                .filter(|s| is_referenced(&s.name, structs, actions, tables))
                .cloned()
                .collect(),
            PruneMode::Closure => {
                let reachable = reachable_structs(structs, actions, tables);
                structs
                    .iter()
                    .filter(|s| !builtins::is_builtin_name(&s.name))
                    .filter(|s| reachable.contains(s.name.as_str()))
                    .cloned()
                    .collect()
            }
        }
    }
}

/// One membership test against everything collected
fn is_referenced(
    name: &str,
    structs: &[StructDef],
    actions: &[ActionDef],
    tables: &[TableDef],
) -> bool {
    if builtins::is_builtin_name(name) {
        return false;
    }
    structs.iter().any(|s| s.references(name))
        || actions.iter().any(|a| a.ty == name)
        || tables.iter().any(|t| t.ty == name)
}

/// Structs reachable from action and table types through bases and fields
fn reachable_structs<'a>(
    structs: &'a [StructDef],
    actions: &[ActionDef],
    tables: &[TableDef],
) -> HashSet<&'a str> {
    let by_name: HashMap<&str, &StructDef> =
        structs.iter().map(|s| (s.name.as_str(), s)).collect();

    let mut reachable = HashSet::new();
    let mut pending: Vec<&str> = actions
        .iter()
        .map(|a| a.ty.as_str())
        .chain(tables.iter().map(|t| t.ty.as_str()))
        .collect();

    while let Some(name) = pending.pop() {
        let Some(&def) = by_name.get(name) else {
            continue;
        };
        if !reachable.insert(def.name.as_str()) {
            continue;
        }
        if def.has_base() {
            pending.push(&def.base);
        }
        pending.extend(def.fields.iter().map(FieldDef::element_type));
    }

    reachable
}
