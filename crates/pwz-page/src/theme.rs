//! Theme metadata supplied by the host.

/// Read-only metadata about the active theme.
///
/// The host sources this from its theme registry (`WP_Theme` in WordPress
/// terms) and the composer never mutates it. All values are display text
/// and get escaped at the point of insertion into markup; `author` may
/// itself carry trusted markup (an author link) and is passed through for
/// the host's final sanitize pass to police.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeInfo {
    /// Machine-facing theme name, also the source of the page slug.
    pub name: String,
    /// Display title shown in the page header.
    pub title: String,
    /// Short description shown under the title.
    pub description: String,
    /// Theme version string.
    pub version: String,
    /// Author credit; may contain markup.
    pub author: String,
}

impl ThemeInfo {
    /// Create theme info with the given name and title, leaving the other
    /// fields empty.
    #[must_use]
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            ..Self::default()
        }
    }
}
