//! Identifier rules for declared names.

use crate::errors::{invalid_symbol_name, EvalError};

/// Whether `name` is a legal symbol: an ASCII letter or underscore,
/// followed by ASCII letters, digits or underscores.
pub fn is_valid_symbol_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Fail with a naming error unless `name` is a legal symbol.
pub fn validate_symbol_name(name: &str) -> Result<(), EvalError> {
    if is_valid_symbol_name(name) {
        Ok(())
    } else {
        Err(invalid_symbol_name(name))
    }
}
