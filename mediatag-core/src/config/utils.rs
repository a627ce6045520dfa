//! Configuration utility functions
//!
//! Helpers for reading configuration values from environment variables (or
//! any other string lookup). Unparsable values fall back to the default.

use std::path::PathBuf;
use std::str::FromStr;

/// Reads a variable from the process environment.
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get a boolean value from the lookup or use the default
pub fn get_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => {
            let val = val.trim().to_lowercase();
            match val.as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => default,
            }
        }
        None => default,
    }
}

/// Get a parsed value from the lookup or use the default
pub fn get_parsed<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(val) => val.parse().unwrap_or(default),
        None => default,
    }
}

/// Get an optional path from the lookup; empty values count as unset
pub fn get_path<F>(lookup: &F, key: &str, default: Option<PathBuf>) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) if !val.trim().is_empty() => Some(PathBuf::from(val)),
        Some(_) => None,
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(key: &str) -> Option<String> {
        match key {
            "FLAG" => Some("Yes".to_string()),
            "NUMBER" => Some("12".to_string()),
            "GARBAGE" => Some("twelve".to_string()),
            "EMPTY" => Some(String::new()),
            _ => None,
        }
    }

    #[test]
    fn bools() {
        assert!(get_bool(&lookup, "FLAG", false));
        assert!(get_bool(&lookup, "MISSING", true));
        assert!(!get_bool(&lookup, "GARBAGE", false));
    }

    #[test]
    fn parsed_values_fall_back() {
        assert_eq!(get_parsed(&lookup, "NUMBER", 3u32), 12);
        assert_eq!(get_parsed(&lookup, "GARBAGE", 3u32), 3);
    }

    #[test]
    fn empty_path_clears() {
        let default = Some(PathBuf::from("/var/log"));
        assert_eq!(get_path(&lookup, "EMPTY", default.clone()), None);
        assert_eq!(get_path(&lookup, "MISSING", default.clone()), default);
    }
}
