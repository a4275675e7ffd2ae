//! String validation functions

use alloc::format;
use alloc::string::{String, ToString};

/// Number of characters in `s`.
///
/// Multi-byte characters count once, so "Zoë" has length 3.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Validates that a string is present.
///
/// With `trim` set, a value made only of whitespace counts as empty.
pub fn validate_required(s: &str, trim: bool, message: &str) -> Result<(), String> {
    let candidate = if trim { s.trim() } else { s };
    if candidate.is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Validates minimum string length (inclusive)
pub fn validate_min_length(s: &str, min: usize, label: &str) -> Result<(), String> {
    if char_len(s) >= min {
        Ok(())
    } else {
        Err(format!("{} must be at least {} characters", label, min))
    }
}

/// Validates maximum string length (inclusive)
pub fn validate_max_length(s: &str, max: usize, label: &str) -> Result<(), String> {
    if char_len(s) <= max {
        Ok(())
    } else {
        Err(format!("{} must be at most {} characters", label, max))
    }
}

/// Validates string length within `[min, max]`.
///
/// Reports the bound that was actually violated.
pub fn validate_length(s: &str, min: usize, max: usize, label: &str) -> Result<(), String> {
    validate_min_length(s, min, label)?;
    validate_max_length(s, max, label)
}

/// Enum/value restriction
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

/// Validates a single choice against an option set.
///
/// An empty value is "nothing selected" and reports `required_message`;
/// anything else outside `allowed` reports `invalid_message`.
pub fn validate_choice(
    value: &str,
    allowed: &[&str],
    required_message: &str,
    invalid_message: &str,
) -> Result<(), String> {
    if value.is_empty() {
        return Err(required_message.to_string());
    }
    if is_one_of(value, allowed) {
        Ok(())
    } else {
        Err(invalid_message.to_string())
    }
}
