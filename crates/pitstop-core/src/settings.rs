//! # Settings Defaults
//!
//! The canonical default value for every application setting, plus the
//! right-to-left language table that keeps `language` and `rtl` coherent.
//!
//! The database layer seeds these with `INSERT OR IGNORE`, so a value the
//! user has changed is never clobbered by a reseed.

/// Every setting the application knows about, with its factory default.
///
/// Values are stored as text; the consuming widget owns the parse (the same
/// contract the settings screen has always had).
pub const DEFAULT_SETTINGS: &[(&str, &str)] = &[
    ("language", "en"),
    ("rtl", "false"),
    ("theme_index", "0"),
    ("backup_interval", "0"),
    ("low_stock_threshold", "10"),
    ("default_currency", "usd"),
    ("auto_restock", "true"),
    ("primary_color", "#1a73e8"),
    ("secondary_color", "#f5f5f5"),
];

/// Languages rendered right-to-left.
///
/// Switching the UI to one of these must also flip the `rtl` setting; the
/// settings repository does both in one call.
pub const RTL_LANGUAGES: &[&str] = &["ar", "fa", "he", "ur"];

/// True when the given language code renders right-to-left.
///
/// ## Example
/// ```rust
/// use pitstop_core::settings::is_rtl_language;
///
/// assert!(is_rtl_language("he"));
/// assert!(!is_rtl_language("en"));
/// ```
pub fn is_rtl_language(lang: &str) -> bool {
    RTL_LANGUAGES.contains(&lang.trim().to_ascii_lowercase().as_str())
}

/// Looks up the factory default for a setting key.
pub fn default_for(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_rtl_language() {
        assert!(is_rtl_language("he"));
        assert!(is_rtl_language("AR"));
        assert!(is_rtl_language(" fa "));
        assert!(!is_rtl_language("en"));
        assert!(!is_rtl_language(""));
    }

    #[test]
    fn test_default_for() {
        assert_eq!(default_for("low_stock_threshold"), Some("10"));
        assert_eq!(default_for("language"), Some("en"));
        assert_eq!(default_for("nonexistent"), None);
    }

    #[test]
    fn test_defaults_have_unique_keys() {
        let mut keys: Vec<_> = DEFAULT_SETTINGS.iter().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), DEFAULT_SETTINGS.len());
    }
}
