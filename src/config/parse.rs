//! Primitive parsers for raw environment values.
//!
//! # Responsibilities
//! - Turn a raw string (empty means absent) into an integer, boolean,
//!   string or ordered string list
//! - Fall back to the caller's default on absent or malformed input
//!
//! # Design Decisions
//! - Parsers never fail; range and shape checks belong to `validation.rs`
//! - Integers are not range-checked so the validator can report them

/// Parse an integer, returning `default` when the value is empty or not a number.
pub fn parse_int(raw: &str, default: i64) -> i64 {
    if raw.is_empty() {
        return default;
    }
    raw.parse().unwrap_or(default)
}

/// Parse a boolean flag.
///
/// Accepts `true`/`1`/`yes`/`on` and `false`/`0`/`no`/`off` in any case.
/// Anything else yields `default`.
pub fn parse_bool(raw: &str, default: bool) -> bool {
    if raw.is_empty() {
        return default;
    }
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => default,
    }
}

/// Parse a comma-separated list.
///
/// Elements are trimmed and blanks dropped. If nothing survives the
/// filter the default list is returned, never an empty one.
pub fn parse_list(raw: &str, default: &[&str]) -> Vec<String> {
    let items: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if items.is_empty() {
        return default.iter().map(|s| s.to_string()).collect();
    }
    items
}

/// Return the raw value, or `default` when it is empty.
pub fn parse_string(raw: &str, default: &str) -> String {
    if raw.is_empty() {
        default.to_string()
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("", 7860), 7860);
        assert_eq!(parse_int("8080", 7860), 8080);
        assert_eq!(parse_int("-5", 0), -5);
        assert_eq!(parse_int("65536", 7860), 65536);
    }

    #[test]
    fn test_parse_int_malformed_returns_default() {
        for raw in ["abc", "12abc", "1.5", " 42", "0x10", "9999999999999999999999"] {
            assert_eq!(parse_int(raw, 30), 30, "input {:?}", raw);
        }
    }

    #[test]
    fn test_parse_bool() {
        for raw in ["true", "TRUE", "1", "yes", "Yes", "on", "ON"] {
            assert!(parse_bool(raw, false), "input {:?}", raw);
        }
        for raw in ["false", "False", "0", "no", "NO", "off", "Off"] {
            assert!(!parse_bool(raw, true), "input {:?}", raw);
        }
    }

    #[test]
    fn test_parse_bool_unknown_returns_default() {
        for raw in ["", "maybe", "2", "enabled", " true"] {
            assert!(parse_bool(raw, true), "input {:?}", raw);
            assert!(!parse_bool(raw, false), "input {:?}", raw);
        }
    }

    #[test]
    fn test_parse_list_drops_blank_entries() {
        assert_eq!(parse_list("a, ,b", &["x"]), vec!["a", "b"]);
        assert_eq!(
            parse_list(" https://a.example , https://b.example,", &[]),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_parse_list_all_blank_returns_default() {
        assert_eq!(parse_list(" , ,", &["*"]), vec!["*"]);
        assert_eq!(parse_list("", &["GET", "POST"]), vec!["GET", "POST"]);
        assert!(parse_list("   ", &[]).is_empty());
    }

    #[test]
    fn test_parse_string() {
        assert_eq!(parse_string("", "0.0.0.0"), "0.0.0.0");
        assert_eq!(parse_string("127.0.0.1", "0.0.0.0"), "127.0.0.1");
    }
}
