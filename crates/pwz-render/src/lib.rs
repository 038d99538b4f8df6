//! HTML escaping and slug utilities for PWZ.
//!
//! Two small text transforms shared by the admin page composer:
//!
//! - [`escape_html`] for inserting untrusted display text into markup
//! - [`slugify`] for deriving URL-safe identifiers from display strings
//!   (the stand-in for WordPress's `sanitize_title_with_dashes`)

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Convert text to a URL-safe slug.
///
/// Converts to lowercase, replaces whitespace/dash runs with single dashes,
/// and removes other non-alphanumeric characters. Underscores are kept
/// verbatim, matching WordPress slug sanitization, so identifiers like
/// `main_tab` survive a round trip. Leading and trailing dashes never
/// appear in the output.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true; // Prevents leading dash

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Whether `text` is already in slug form, i.e. `slugify` would return it
/// unchanged.
#[must_use]
pub fn is_slug(text: &str) -> bool {
    !text.is_empty() && slugify(text) == text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;"
        );
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("What's New?"), "whats-new");
        assert_eq!(slugify("  Spaces  "), "spaces");
        assert_eq!(slugify("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify("kebab-case"), "kebab-case");
        assert_eq!(slugify("main_tab"), "main_tab");
        assert_eq!(slugify("Trailing-"), "trailing");
        assert_eq!(slugify("--Leading"), "leading");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_is_slug() {
        assert!(is_slug("main-tab"));
        assert!(is_slug("main_tab"));
        assert!(is_slug("tab2"));
        assert!(!is_slug("Main Tab"));
        assert!(!is_slug("tab?"));
        assert!(!is_slug(""));
    }
}
