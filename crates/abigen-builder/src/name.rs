//! Contract names: validation and the 64-bit encoding
//!
//! A name is up to 12 characters from `.12345abcdefghijklmnopqrstuvwxyz`,
//! packed 5 bits per character from the most significant end of a `u64`.

use thiserror::Error;

/// Symbol alphabet, indexed by the encoded 5-bit value
pub const NAME_CHARSET: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";

/// Longest name accepted for actions, tables and contracts
pub const MAX_NAME_LEN: usize = 12;

/// Which rule a rejected name broke
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameViolation {
    #[error("name is empty")]
    Empty,

    #[error("{len} characters long, at most {MAX_NAME_LEN} allowed")]
    TooLong { len: usize },

    #[error("character {ch:?} at position {position} is outside `.12345a-z`")]
    InvalidCharacter { ch: char, position: usize },

    #[error("name ends with `.`")]
    TrailingDot,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{name}` is not a valid name: {violation}")]
pub struct InvalidNameError {
    pub name: String,
    pub violation: NameViolation,
}

/// Check a name against the charset and length rules
pub fn validate_name(name: &str) -> Result<(), InvalidNameError> {
    let fail = |violation| {
        Err(InvalidNameError {
            name: name.to_string(),
            violation,
        })
    };

    if name.is_empty() {
        return fail(NameViolation::Empty);
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return fail(NameViolation::TooLong { len });
    }

    if let Some((position, ch)) = name
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii() || !NAME_CHARSET.contains(&(*c as u8)))
    {
        return fail(NameViolation::InvalidCharacter { ch, position });
    }

    if name.ends_with('.') {
        return fail(NameViolation::TrailingDot);
    }

    Ok(())
}

fn char_to_symbol(c: u8) -> u64 {
    match c {
        b'a'..=b'z' => (c - b'a') as u64 + 6,
        b'1'..=b'5' => (c - b'1') as u64 + 1,
        _ => 0,
    }
}

/// Encode a name; characters outside the alphabet encode as `.`
pub fn string_to_name(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut value = 0u64;
    for i in 0..=12 {
        let mut c = bytes.get(i).map(|&b| char_to_symbol(b)).unwrap_or(0);
        if i < 12 {
            c &= 0x1f;
            c <<= 64 - 5 * (i + 1);
        } else {
            c &= 0x0f;
        }
        value |= c;
    }
    value
}

/// Decode an encoded name, trimming trailing dots
pub fn name_to_string(value: u64) -> String {
    let mut out = [b'.'; 13];
    let mut tmp = value;
    for i in 0..=12 {
        let (mask, shift) = if i == 0 { (0x0f, 4) } else { (0x1f, 5) };
        out[12 - i] = NAME_CHARSET[(tmp & mask) as usize];
        tmp >>= shift;
    }
    let decoded: String = out.iter().map(|&b| b as char).collect();
    decoded.trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_lowercase_names() {
        for name in ["transfer", "a", "hi", "accounts", "eosio.token", "abcdefghijkl", "user1.5"] {
            assert!(validate_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_rejects_long_names() {
        let err = validate_name("abcdefghijklm").unwrap_err();
        assert_eq!(err.violation, NameViolation::TooLong { len: 13 });
        assert_eq!(err.name, "abcdefghijklm");
    }

    #[test]
    fn test_rejects_characters_outside_alphabet() {
        let cases = [
            ("Transfer", 'T', 0),
            ("set_code", '_', 3),
            ("user6", '6', 4),
            ("user0", '0', 4),
            ("héllo", 'é', 1),
        ];
        for (name, ch, position) in cases {
            let err = validate_name(name).unwrap_err();
            assert_eq!(
                err.violation,
                NameViolation::InvalidCharacter { ch, position },
                "{name}"
            );
        }
    }

    #[test]
    fn test_rejects_empty_and_trailing_dot() {
        assert_eq!(validate_name("").unwrap_err().violation, NameViolation::Empty);
        assert_eq!(
            validate_name("hello.").unwrap_err().violation,
            NameViolation::TrailingDot
        );
    }

    #[test]
    fn test_known_encoding() {
        assert_eq!(string_to_name("eosio"), 6138663577826885632);
        assert_eq!(name_to_string(6138663577826885632), "eosio");
        assert_eq!(string_to_name(""), 0);
        assert_eq!(name_to_string(0), "");
    }

    #[test]
    fn test_decode_inverts_encode_for_valid_names() {
        for name in ["accounts", "stat", "eosio.token", "a1b2c3d4e5", "zzzzzzzzzzzz"] {
            assert_eq!(name_to_string(string_to_name(name)), name);
        }
    }

    #[test]
    fn test_thirteenth_character_uses_four_bits() {
        // Only the low nibble survives in the 13th slot
        let value = string_to_name("aaaaaaaaaaaaj");
        assert_eq!(name_to_string(value), "aaaaaaaaaaaaj");
        assert_eq!(value & 0x0f, char_to_symbol(b'j'));
    }
}
