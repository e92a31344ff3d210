// ==========================================
// Internationalization (i18n) module
// ==========================================
// rust-i18n helpers for the user-facing notification strings.
// Note: the rust_i18n::i18n! macro is initialized in lib.rs.
// ==========================================

/// Current locale.
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Set the locale (e.g. "en").
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Translate a message without arguments.
///
/// # Example
/// ```no_run
/// use shopfront::i18n::t;
/// let msg = t("import.parse_error");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Translate a message with `%{name}` placeholders.
///
/// # Example
/// ```no_run
/// use shopfront::i18n::t_with_args;
/// let msg = t_with_args("import.success", &[("count", "12")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_resolve() {
        set_locale("en");
        assert!(t("import.parse_error").contains("CSV"));
        assert!(t("import.invalid_rows").to_lowercase().contains("missing"));
    }

    #[test]
    fn test_t_with_args_interpolates() {
        set_locale("en");
        let msg = t_with_args("import.success", &[("count", "5")]);
        assert!(msg.contains('5'));
        assert!(!msg.contains("%{count}"));
    }
}
