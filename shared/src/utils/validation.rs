//! Common validation utilities

/// Common validation functions
pub mod validators {
    /// Check if a string has at least one non-whitespace character
    pub fn not_blank(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Same as [`not_blank`], treating `None` as blank
    pub fn present(value: Option<&str>) -> bool {
        value.map(not_blank).unwrap_or(false)
    }

    /// Check if a string matches a pattern
    pub fn matches_pattern(value: &str, pattern: &regex::Regex) -> bool {
        pattern.is_match(value)
    }
}
