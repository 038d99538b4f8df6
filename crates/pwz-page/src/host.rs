//! The seam between the page composer and its host.
//!
//! The host owns menu registration, capability checks, the HTTP request,
//! and output sanitization. Each of those responsibilities appears here as
//! a trait or a small data carrier so the composer never touches host
//! internals directly.

use std::io;

/// The ambient request, reduced to the one query parameter the page reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Raw `tab` query parameter, untrusted.
    pub tab: Option<String>,
}

impl PageRequest {
    /// A request with no `tab` parameter.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// A request carrying a raw `tab` value.
    #[must_use]
    pub fn with_tab(tab: impl Into<String>) -> Self {
        Self {
            tab: Some(tab.into()),
        }
    }
}

/// Everything the host menu system needs to hang the page off its
/// Appearance menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRegistration {
    /// Identifier of the parent menu entry (`themes.php` by default).
    pub parent_menu: String,
    /// Browser title for the page.
    pub page_title: String,
    /// Label for the menu entry.
    pub menu_title: String,
    /// Capability the host must check before rendering.
    pub capability: String,
    /// URL slug identifying the page.
    pub page_slug: String,
}

/// Host-owned menu system accepting page registrations.
pub trait ThemeMenu {
    /// Register an admin page. Called once at the host's menu lifecycle
    /// event.
    fn add_theme_page(&mut self, registration: PageRegistration);
}

/// Host-owned allowlist sanitizer applied to the full page markup before
/// it reaches the response (`wp_kses_post` in WordPress terms).
pub trait Sanitizer {
    /// Reduce `html` to the host's allowed markup subset.
    fn sanitize(&self, html: &str) -> String;
}

/// Sanitizer that passes markup through untouched. For tests and for
/// hosts that sanitize elsewhere in their output path.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughSanitizer;

impl Sanitizer for PassthroughSanitizer {
    fn sanitize(&self, html: &str) -> String {
        html.to_owned()
    }
}

/// The contract a theme admin page implementation satisfies.
///
/// Construction and configuration are deliberately outside the contract;
/// a concrete page is built first and then handed to the host through
/// these two capabilities.
pub trait ThemeAdminPage {
    /// Hand the page's registration data to the host menu system.
    fn register(&self, menu: &mut dyn ThemeMenu);

    /// Compose the page markup for one request.
    fn render(&self, request: &PageRequest) -> String;

    /// Compose, sanitize, and write the page to the host output channel.
    /// The markup is written exactly once.
    ///
    /// # Errors
    ///
    /// Returns any error from the output channel.
    fn emit(
        &self,
        request: &PageRequest,
        sanitizer: &dyn Sanitizer,
        out: &mut dyn io::Write,
    ) -> io::Result<()> {
        let html = sanitizer.sanitize(&self.render(request));
        out.write_all(html.as_bytes())
    }
}
