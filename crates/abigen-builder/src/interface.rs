//! Accumulated interface description
//!
//! Every collection keeps insertion order for output and a key index for
//! deduplication.

use std::collections::HashMap;
use std::hash::Hash;

use crate::{ActionDef, StructDef, TableDef, TypeDef, ABI_VERSION};

/// Insertion-ordered collection with unique keys
#[derive(Debug, Clone)]
struct Ordered<K, V> {
    items: Vec<V>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Ordered<K, V> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq, V> Ordered<K, V> {
    /// Insert, or overwrite in place; returns true when the key is new
    fn upsert(&mut self, key: K, value: V) -> bool {
        match self.index.get(&key) {
            Some(&i) => {
                self.items[i] = value;
                false
            }
            None => {
                self.index.insert(key, self.items.len());
                self.items.push(value);
                true
            }
        }
    }

    /// Insert only when the key is new; returns true when inserted
    fn insert_new(&mut self, key: K, value: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.items.len());
        self.items.push(value);
        true
    }

    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&i| &self.items[i])
    }

    fn contains<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    fn as_slice(&self) -> &[V] {
        &self.items
    }
}

/// Everything collected during one traversal, before merging and pruning
#[derive(Debug, Clone)]
pub struct InterfaceDescription {
    pub version: String,
    typedefs: Ordered<String, TypeDef>,
    structs: Ordered<String, StructDef>,
    actions: Ordered<(String, String), ActionDef>,
    /// Tables declared through `multi_index` instantiations
    tables: Ordered<(String, String), TableDef>,
    /// Tables declared through the table attribute, keyed by row type
    attribute_tables: Ordered<String, TableDef>,
}

impl Default for InterfaceDescription {
    fn default() -> Self {
        Self {
            version: ABI_VERSION.to_string(),
            typedefs: Ordered::default(),
            structs: Ordered::default(),
            actions: Ordered::default(),
            tables: Ordered::default(),
            attribute_tables: Ordered::default(),
        }
    }
}

impl InterfaceDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an alias; the first registration of a name wins
    pub fn insert_typedef(&mut self, typedef: TypeDef) -> bool {
        self.typedefs.insert_new(typedef.new_name.clone(), typedef)
    }

    /// Insert a struct, replacing an earlier one of the same name
    pub fn insert_struct(&mut self, def: StructDef) -> bool {
        self.structs.upsert(def.name.clone(), def)
    }

    pub fn insert_action(&mut self, action: ActionDef) -> bool {
        self.actions
            .insert_new((action.name.clone(), action.ty.clone()), action)
    }

    pub fn insert_table(&mut self, table: TableDef) -> bool {
        self.tables
            .insert_new((table.name.clone(), table.ty.clone()), table)
    }

    /// Record an attribute-declared table; a later one for the same row replaces it
    pub fn insert_attribute_table(&mut self, table: TableDef) -> bool {
        self.attribute_tables.upsert(table.ty.clone(), table)
    }

    pub fn has_struct(&self, name: &str) -> bool {
        self.structs.contains(name)
    }

    pub fn struct_named(&self, name: &str) -> Option<&StructDef> {
        self.structs.get(name)
    }

    pub fn typedef_named(&self, name: &str) -> Option<&TypeDef> {
        self.typedefs.get(name)
    }

    pub fn typedefs(&self) -> &[TypeDef] {
        self.typedefs.as_slice()
    }

    pub fn structs(&self) -> &[StructDef] {
        self.structs.as_slice()
    }

    pub fn actions(&self) -> &[ActionDef] {
        self.actions.as_slice()
    }

    pub fn tables(&self) -> &[TableDef] {
        self.tables.as_slice()
    }

    pub fn attribute_tables(&self) -> &[TableDef] {
        self.attribute_tables.as_slice()
    }
}
