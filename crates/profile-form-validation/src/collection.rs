//! Collection validation functions

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::{String, ToString};

/// Validates minimum number of items in a collection
pub fn validate_min_items<T>(items: &[T], min: usize, message: &str) -> Result<(), String> {
    if items.len() >= min {
        Ok(())
    } else if message.is_empty() {
        Err(format!("Must have at least {} items", min))
    } else {
        Err(message.to_string())
    }
}

/// Validates all items in a string collection are unique
pub fn validate_unique_strings(items: &[String], message: &str) -> Result<(), String> {
    let mut seen = BTreeSet::new();

    for item in items {
        if !seen.insert(item.as_str()) {
            return Err(message.to_string());
        }
    }

    Ok(())
}

/// Validates every item is a member of `allowed`
pub fn validate_all_one_of(items: &[String], allowed: &[&str], message: &str) -> Result<(), String> {
    if items.iter().all(|item| allowed.contains(&item.as_str())) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_min_items() {
        let items = vec![1, 2, 3];
        assert!(validate_min_items(&items, 2, "").is_ok());
        assert!(validate_min_items(&items, 3, "").is_ok());
        assert_eq!(
            validate_min_items(&items, 5, ""),
            Err("Must have at least 5 items".to_string())
        );

        let empty: Vec<String> = Vec::new();
        assert_eq!(
            validate_min_items(&empty, 1, "Pick one"),
            Err("Pick one".to_string())
        );
    }

    #[test]
    fn test_unique_strings() {
        let unique = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(validate_unique_strings(&unique, "dup").is_ok());

        let duplicates = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        assert!(validate_unique_strings(&duplicates, "dup").is_err());
    }

    #[test]
    fn test_all_one_of() {
        let allowed = &["reading", "music"];
        assert!(validate_all_one_of(&["music".to_string()], allowed, "bad").is_ok());
        assert!(validate_all_one_of(&[], allowed, "bad").is_ok());
        assert!(validate_all_one_of(&["music".to_string(), "chess".to_string()], allowed, "bad").is_err());
    }
}
