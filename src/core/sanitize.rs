// src/core/sanitize.rs

/// Characters stripped from the end of a team name.
const NAME_TAIL: &[char] = &['(', ')', '.', ',', ' '];

/// Strip trailing `()., ` (repeatedly) and surrounding whitespace.
pub fn trim_name(s: &str) -> String {
    s.trim_end_matches(|c: char| NAME_TAIL.contains(&c) || c.is_whitespace())
        .trim_start()
        .to_string()
}

/// Lookup form of a team name: trimmed, lowercased.
pub fn alias_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Setting keys double as file stems: ASCII letters, digits, `_` and `-` only.
pub fn is_setting_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= 64
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_punctuation_only() {
        assert_eq!(trim_name("Clemson,   "), "Clemson");
        assert_eq!(trim_name("  Miami (FL)."), "Miami (FL");
        assert_eq!(trim_name("St. John's"), "St. John's");
        assert_eq!(trim_name(" .,() "), "");
    }

    #[test]
    fn alias_key_lowercases() {
        assert_eq!(alias_key("  Ohio State "), "ohio state");
    }

    #[test]
    fn setting_keys() {
        assert!(is_setting_key("rankings_top25"));
        assert!(is_setting_key("big-10"));
        assert!(!is_setting_key(""));
        assert!(!is_setting_key("../etc/passwd"));
        assert!(!is_setting_key("rankings top25"));
    }
}
