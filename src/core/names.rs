//! Person name heuristics.
//!
//! Credited actor text on movie records is given-name first, while the
//! catalog's person search and romanized names are family-name first.

/// Check if every character is in the ASCII range (Latin-script name).
pub fn is_plain_text(s: &str) -> bool {
    s.is_ascii()
}

/// Key under which a credited name is cached.
///
/// Latin-script names are case-folded; other scripts are kept as is.
pub fn cache_key(raw: &str) -> String {
    if is_plain_text(raw) {
        raw.to_lowercase()
    } else {
        raw.to_string()
    }
}

/// Turn a given-name-first credit into a family-name-first search query.
///
/// Only plain-text names made of exactly two space-separated tokens are
/// swapped.
pub fn reorder_for_query(raw: &str) -> String {
    if !is_plain_text(raw) {
        return raw.to_string();
    }

    let tokens: Vec<&str> = raw.split(' ').collect();
    match tokens.as_slice() {
        [given, family] if !given.is_empty() && !family.is_empty() => {
            format!("{} {}", family, given)
        }
        _ => raw.to_string(),
    }
}

/// Display form (given name first) of a family-name-first romanized name.
pub fn display_name(romanized: &str) -> String {
    let mut tokens: Vec<&str> = romanized.split_whitespace().collect();
    tokens.reverse();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_plain_text() {
        assert!(is_plain_text("Yui Hatano"));
        assert!(is_plain_text(""));
        assert!(!is_plain_text("波多野結衣"));
        assert!(!is_plain_text("Yui 波多野"));
    }

    #[test]
    fn test_cache_key() {
        assert_eq!(cache_key("Yui Hatano"), "yui hatano");
        assert_eq!(cache_key("波多野結衣"), "波多野結衣");
        // Mixed scripts are not folded either
        assert_eq!(cache_key("Ai 波多野"), "Ai 波多野");
    }

    #[test]
    fn test_reorder_for_query() {
        assert_eq!(reorder_for_query("Yui Hatano"), "Hatano Yui");
        assert_eq!(reorder_for_query("Madonna"), "Madonna");
        assert_eq!(reorder_for_query("Anna Maria Lee"), "Anna Maria Lee");
        assert_eq!(reorder_for_query("波多野 結衣"), "波多野 結衣");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Hatano Yui"), "Yui Hatano");
        assert_eq!(display_name("Madonna"), "Madonna");
        assert_eq!(display_name("Lee Maria Anna"), "Anna Maria Lee");
        assert_eq!(display_name(""), "");
    }
}
