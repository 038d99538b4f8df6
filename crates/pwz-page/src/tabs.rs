//! Tab descriptors: the unit of content registration on the admin page.

use std::fmt;
use std::sync::Arc;

use pwz_render::is_slug;

/// Content provider for a tab. Receives the active tab slug and returns
/// the tab body markup. Escaping the returned markup is the provider's
/// responsibility; the composer inserts it verbatim ahead of the host's
/// final sanitize pass.
pub type TabContentFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A candidate tab on the admin page.
///
/// Extension code hands these back through the tabs filter chain and may
/// produce structurally incomplete records (no content provider). A
/// descriptor is usable only when it has a URL-safe slug, a non-empty
/// title, and a provider; tab resolution drops anything else rather than
/// letting one malformed extension break the whole page.
#[derive(Clone)]
pub struct TabDescriptor {
    /// Unique URL-safe identifier, carried in the `tab` query parameter.
    pub slug: String,
    /// Display title for the tab selector link.
    pub title: String,
    /// Body content provider; `None` marks an incomplete candidate.
    pub content: Option<TabContentFn>,
}

impl TabDescriptor {
    /// Create a complete descriptor.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        content: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            content: Some(Arc::new(content)),
        }
    }

    /// Create a descriptor with no content provider. Validation drops
    /// these; the constructor exists so extension code can be exercised
    /// against the lenient-degrade policy.
    #[must_use]
    pub fn incomplete(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            content: None,
        }
    }

    /// Check structural validity, returning the reason a descriptor is
    /// unusable.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !is_slug(&self.slug) {
            return Err("slug is empty or not URL-safe");
        }
        if self.title.is_empty() {
            return Err("title is empty");
        }
        if self.content.is_none() {
            return Err("no content provider");
        }
        Ok(())
    }
}

impl fmt::Debug for TabDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabDescriptor")
            .field("slug", &self.slug)
            .field("title", &self.title)
            .field("content", &self.content.is_some())
            .finish()
    }
}
