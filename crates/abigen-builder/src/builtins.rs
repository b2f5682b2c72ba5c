//! Builtin type table
//!
//! Maps language spellings seen by the front end to ABI primitive names.
//! ABI spellings map to themselves so already-translated names are also
//! recognized as builtin.

/// Language spelling to ABI primitive
const LANGUAGE_BUILTINS: &[(&str, &str)] = &[
    ("bool", "bool"),
    ("char", "int8"),
    ("signed char", "int8"),
    ("int8_t", "int8"),
    ("unsigned char", "uint8"),
    ("uint8_t", "uint8"),
    ("short", "int16"),
    ("int16_t", "int16"),
    ("unsigned short", "uint16"),
    ("uint16_t", "uint16"),
    ("int", "int32"),
    ("long", "int32"),
    ("int32_t", "int32"),
    ("unsigned int", "uint32"),
    ("unsigned long", "uint32"),
    ("uint32_t", "uint32"),
    ("long long", "int64"),
    ("int64_t", "int64"),
    ("unsigned long long", "uint64"),
    ("uint64_t", "uint64"),
    ("__int128", "int128"),
    ("int128_t", "int128"),
    ("unsigned __int128", "uint128"),
    ("uint128_t", "uint128"),
    ("float", "float32"),
    ("double", "float64"),
    ("long double", "float128"),
    ("string", "string"),
    ("name", "name"),
    ("asset", "asset"),
    ("extended_asset", "extended_asset"),
    ("symbol", "symbol"),
    ("symbol_code", "symbol_code"),
    ("checksum160", "checksum160"),
    ("checksum256", "checksum256"),
    ("checksum512", "checksum512"),
    ("public_key", "public_key"),
    ("signature", "signature"),
    ("time_point", "time_point"),
    ("time_point_sec", "time_point_sec"),
    ("block_timestamp", "block_timestamp_type"),
    ("unsigned_int", "varuint32"),
    ("signed_int", "varint32"),
];

/// ABI primitive names
const ABI_BUILTINS: &[&str] = &[
    "bool",
    "int8",
    "uint8",
    "int16",
    "uint16",
    "int32",
    "uint32",
    "int64",
    "uint64",
    "int128",
    "uint128",
    "varint32",
    "varuint32",
    "float32",
    "float64",
    "float128",
    "time_point",
    "time_point_sec",
    "block_timestamp_type",
    "name",
    "bytes",
    "string",
    "checksum160",
    "checksum256",
    "checksum512",
    "public_key",
    "signature",
    "symbol",
    "symbol_code",
    "asset",
    "extended_asset",
];

/// Element spelling for which `vector<T>` is the `bytes` primitive
const BYTE_ELEMENT: &str = "char";

fn strip_namespace(spelling: &str) -> &str {
    spelling
        .strip_prefix("std::")
        .or_else(|| spelling.strip_prefix("eosio::"))
        .unwrap_or(spelling)
}

/// ABI primitive for a builtin spelling, if it is one
pub fn abi_name(spelling: &str) -> Option<&'static str> {
    let bare = strip_namespace(spelling.trim());
    LANGUAGE_BUILTINS
        .iter()
        .find(|(lang, _)| *lang == bare)
        .map(|(_, abi)| *abi)
        .or_else(|| ABI_BUILTINS.iter().find(|abi| **abi == bare).copied())
}

/// Whether a name is a builtin, in either spelling
pub fn is_builtin_name(name: &str) -> bool {
    abi_name(name).is_some()
}

/// Whether `vector<spelling>` is the `bytes` primitive
pub fn is_byte_element(spelling: &str) -> bool {
    spelling.trim() == BYTE_ELEMENT
}
