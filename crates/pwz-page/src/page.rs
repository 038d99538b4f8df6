//! The admin page composer.
//!
//! [`AdminPage`] assembles the whole page markup for one request:
//! resolve the tab list through the tabs hook, validate it, pick the
//! active tab from the untrusted `tab` query parameter, then concatenate
//! wrapper-open, intro, upper section, tab selector, active tab body, and
//! wrapper-close. Every render builds a fresh [`PageState`]; nothing is
//! cached or shared between requests.

use std::sync::Arc;

use pwz_config::PageSettings;
use pwz_render::slugify;

use crate::hooks::{HookContext, HookRegistry};
use crate::host::{PageRegistration, PageRequest, ThemeAdminPage, ThemeMenu};
use crate::markup;
use crate::tabs::TabDescriptor;
use crate::theme::ThemeInfo;

/// Per-render state, built once per request and threaded through the
/// composition steps.
#[derive(Clone, Debug)]
pub struct PageState {
    /// Slug identifying the page itself, derived from the theme name.
    pub page_slug: String,
    /// Slug of the tab whose body renders; empty when no tabs exist.
    pub active_tab_slug: String,
    /// Validated tabs, in registration order.
    pub tabs: Vec<TabDescriptor>,
}

/// The extendable theme admin page.
///
/// Built once from settings, theme metadata, and a hook registry; renders
/// any number of independent requests afterwards.
pub struct AdminPage {
    settings: PageSettings,
    theme: Arc<ThemeInfo>,
    hooks: Arc<HookRegistry>,
}

impl AdminPage {
    /// Slug of the built-in tab.
    pub const MAIN_TAB_SLUG: &'static str = "main_tab";

    /// Create a page for the given theme.
    #[must_use]
    pub fn new(settings: PageSettings, theme: ThemeInfo, hooks: Arc<HookRegistry>) -> Self {
        Self {
            settings,
            theme: Arc::new(theme),
            hooks,
        }
    }

    /// The hook-namespace prefix this page was configured with.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.settings.prefix
    }

    /// Slug identifying the page, derived from the theme name.
    #[must_use]
    pub fn page_slug(&self) -> String {
        slugify(&self.theme.name)
    }

    /// The built-in tab list before any extension code runs.
    ///
    /// The main tab's provider applies the main-tab hook and falls back to
    /// the built-in info block when the hook yields nothing.
    fn built_in_tabs(&self) -> Vec<TabDescriptor> {
        let hooks = Arc::clone(&self.hooks);
        let theme = Arc::clone(&self.theme);
        vec![TabDescriptor::new(
            Self::MAIN_TAB_SLUG,
            "Main Tab",
            move |active_slug| {
                let ctx = HookContext {
                    active_tab_slug: active_slug.to_owned(),
                    theme: Arc::clone(&theme),
                };
                let html = hooks.filter_tab_main(&ctx);
                if html.is_empty() {
                    markup::main_tab_default(&theme)
                } else {
                    html
                }
            },
        )]
    }

    /// Resolve the page's tabs: built-ins, then the tabs hook, then
    /// validation.
    ///
    /// Extension code may append, remove, or replace entries wholesale.
    /// Structurally unusable entries and duplicate slugs are dropped with
    /// a warning rather than failing the page. The result can be empty.
    #[must_use]
    pub fn resolve_tabs(&self) -> Vec<TabDescriptor> {
        let candidates = self.hooks.filter_tabs(self.built_in_tabs());

        let mut tabs: Vec<TabDescriptor> = Vec::with_capacity(candidates.len());
        for tab in candidates {
            if let Err(reason) = tab.validate() {
                tracing::warn!(slug = %tab.slug, reason, "dropping invalid admin page tab");
                continue;
            }
            if tabs.iter().any(|kept| kept.slug == tab.slug) {
                tracing::warn!(slug = %tab.slug, "dropping admin page tab with duplicate slug");
                continue;
            }
            tabs.push(tab);
        }
        tabs
    }

    /// Resolve the active tab slug from the untrusted request value.
    ///
    /// The raw value is normalized to slug form and then only compared for
    /// equality against known tab slugs; it is never used otherwise. A
    /// missing or unknown value falls back to the first tab's slug, or the
    /// empty string when no tabs exist.
    #[must_use]
    pub fn resolve_active_tab(requested: Option<&str>, tabs: &[TabDescriptor]) -> String {
        if let Some(raw) = requested {
            let candidate = slugify(raw);
            if tabs.iter().any(|tab| tab.slug == candidate) {
                return candidate;
            }
            tracing::debug!(
                requested = %raw,
                "unknown tab requested, falling back to first tab"
            );
        }
        tabs.first().map(|tab| tab.slug.clone()).unwrap_or_default()
    }

    /// Build the per-request state for one render.
    #[must_use]
    pub fn state_for(&self, request: &PageRequest) -> PageState {
        let tabs = self.resolve_tabs();
        let active_tab_slug = Self::resolve_active_tab(request.tab.as_deref(), &tabs);
        PageState {
            page_slug: self.page_slug(),
            active_tab_slug,
            tabs,
        }
    }

    /// Compose the full page markup for the given state.
    ///
    /// The section order is fixed. Only the active tab's content provider
    /// runs; when no tab matches the active slug the body section is
    /// empty. The caller owns sanitization of the result.
    #[must_use]
    pub fn compose(&self, state: &PageState) -> String {
        let wrappers = self.hooks.filter_wrappers(markup::ContentWrappers::default());
        let ctx = HookContext {
            active_tab_slug: state.active_tab_slug.clone(),
            theme: Arc::clone(&self.theme),
        };

        let mut html = String::new();
        html.push_str(&wrappers.open_markup);

        let intro = self.hooks.filter_intro(&ctx);
        if intro.is_empty() {
            html.push_str(&markup::intro_default(&self.theme));
        } else {
            html.push_str(&intro);
        }

        let upper = self.hooks.filter_upper(&ctx);
        if upper.is_empty() {
            html.push_str(&markup::upper_default(&self.theme));
        } else {
            html.push_str(&upper);
        }

        html.push_str(&markup::tab_selector(
            &state.page_slug,
            &state.active_tab_slug,
            &state.tabs,
        ));

        let active = state
            .tabs
            .iter()
            .find(|tab| tab.slug == state.active_tab_slug);
        if let Some(content) = active.and_then(|tab| tab.content.as_ref()) {
            html.push_str(&content(&state.active_tab_slug));
        }

        html.push_str(&wrappers.close_markup);
        html
    }
}

impl ThemeAdminPage for AdminPage {
    fn register(&self, menu: &mut dyn ThemeMenu) {
        menu.add_theme_page(PageRegistration {
            parent_menu: self.settings.parent_menu.clone(),
            page_title: self.theme.name.clone(),
            menu_title: self.theme.name.clone(),
            capability: self.settings.capability.clone(),
            page_slug: self.page_slug(),
        });
    }

    fn render(&self, request: &PageRequest) -> String {
        let state = self.state_for(request);
        self.compose(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn theme() -> ThemeInfo {
        ThemeInfo {
            name: "Demo Theme".to_owned(),
            title: "Demo Theme".to_owned(),
            description: "A demonstration theme".to_owned(),
            version: "1.0.0".to_owned(),
            author: "Someone".to_owned(),
        }
    }

    fn page_with(hooks: HookRegistry) -> AdminPage {
        AdminPage::new(PageSettings::default(), theme(), Arc::new(hooks))
    }

    fn extra_tab() -> TabDescriptor {
        TabDescriptor::new("extra", "Extra", |slug| format!("<p>extra body for {slug}</p>"))
    }

    #[test]
    fn page_slug_derives_from_theme_name() {
        let page = page_with(HookRegistry::new());
        assert_eq!(page.page_slug(), "demo-theme");
    }

    #[test]
    fn default_tab_list_is_the_main_tab() {
        let page = page_with(HookRegistry::new());
        let tabs = page.resolve_tabs();
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].slug, AdminPage::MAIN_TAB_SLUG);
        assert_eq!(tabs[0].title, "Main Tab");
    }

    #[test]
    fn tabs_hook_can_append_tabs() {
        let mut hooks = HookRegistry::new();
        hooks.on_tabs(|mut tabs| {
            tabs.push(extra_tab());
            tabs
        });
        let page = page_with(hooks);

        let tabs = page.resolve_tabs();
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[1].slug, "extra");
    }

    #[test]
    fn invalid_candidates_are_dropped_silently() {
        let mut hooks = HookRegistry::new();
        hooks.on_tabs(|mut tabs| {
            tabs.push(TabDescriptor::incomplete("no-provider", "No Provider"));
            tabs.push(TabDescriptor::new("Bad Slug", "Bad", |_| String::new()));
            tabs.push(TabDescriptor::new("untitled", "", |_| String::new()));
            tabs.push(extra_tab());
            tabs
        });
        let page = page_with(hooks);

        let tabs = page.resolve_tabs();
        let slugs: Vec<&str> = tabs.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, ["main_tab", "extra"]);
    }

    #[test]
    fn duplicate_slugs_keep_the_first_registration() {
        let mut hooks = HookRegistry::new();
        hooks.on_tabs(|mut tabs| {
            tabs.push(TabDescriptor::new("extra", "First", |_| String::new()));
            tabs.push(TabDescriptor::new("extra", "Second", |_| String::new()));
            tabs
        });
        let page = page_with(hooks);

        let tabs = page.resolve_tabs();
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[1].title, "First");
    }

    #[test]
    fn tab_list_can_end_up_empty() {
        let mut hooks = HookRegistry::new();
        hooks.on_tabs(|_| vec![TabDescriptor::incomplete("broken", "Broken")]);
        let page = page_with(hooks);
        assert!(page.resolve_tabs().is_empty());
    }

    #[test]
    fn active_tab_matches_a_known_slug() {
        let tabs = vec![
            TabDescriptor::new("main_tab", "Main", |_| String::new()),
            extra_tab(),
        ];
        assert_eq!(AdminPage::resolve_active_tab(Some("extra"), &tabs), "extra");
    }

    #[test]
    fn active_tab_request_is_normalized_before_matching() {
        let tabs = vec![
            TabDescriptor::new("main_tab", "Main", |_| String::new()),
            extra_tab(),
        ];
        assert_eq!(AdminPage::resolve_active_tab(Some("  Extra "), &tabs), "extra");
        assert_eq!(AdminPage::resolve_active_tab(Some("MAIN_TAB"), &tabs), "main_tab");
    }

    #[test]
    fn unknown_or_missing_request_falls_back_to_first_tab() {
        let tabs = vec![TabDescriptor::new("main_tab", "Main", |_| String::new())];
        assert_eq!(AdminPage::resolve_active_tab(Some("bogus"), &tabs), "main_tab");
        assert_eq!(
            AdminPage::resolve_active_tab(Some("<script>"), &tabs),
            "main_tab"
        );
        assert_eq!(AdminPage::resolve_active_tab(None, &tabs), "main_tab");
    }

    #[test]
    fn no_tabs_resolves_to_empty_slug() {
        assert_eq!(AdminPage::resolve_active_tab(Some("anything"), &[]), "");
        assert_eq!(AdminPage::resolve_active_tab(None, &[]), "");
    }

    #[test]
    fn render_with_defaults_contains_every_default_section() {
        let page = page_with(HookRegistry::new());
        let html = page.render(&PageRequest::none());

        assert!(html.starts_with(r#"<div class="wrap about-wrap full-width-layout">"#));
        assert!(html.ends_with("</div>"));
        assert!(html.contains("<h1>Demo Theme</h1>"));
        assert!(html.contains(r#"<div class="feature-section one-col">"#));
        // One tab: separator, no selector.
        assert!(html.contains("<hr>"));
        assert!(!html.contains("nav-tab-wrapper"));
        // Built-in main tab body.
        assert!(html.contains("Theme Version: 1.0.0"));
    }

    #[test]
    fn two_tabs_render_a_selector_with_the_active_marker() {
        let mut hooks = HookRegistry::new();
        hooks.on_tabs(|mut tabs| {
            tabs.push(extra_tab());
            tabs
        });
        let page = page_with(hooks);
        let html = page.render(&PageRequest::with_tab("extra"));

        assert!(html.contains(r#"<a href="?page=demo-theme&amp;tab=main_tab" class="nav-tab">"#));
        assert!(
            html.contains(r#"<a href="?page=demo-theme&amp;tab=extra" class="nav-tab nav-tab-active">"#)
        );
        assert!(html.contains("<p>extra body for extra</p>"));
        // Only the active tab's provider output appears.
        assert!(!html.contains("Theme Version: 1.0.0"));
    }

    #[test]
    fn bogus_tab_request_renders_the_first_tab() {
        let page = page_with(HookRegistry::new());
        let html = page.render(&PageRequest::with_tab("bogus"));

        assert!(html.contains("Theme Version: 1.0.0"));
        assert!(html.contains("<hr>"));
        assert!(!html.contains("nav-tab-wrapper"));
    }

    #[test]
    fn intro_override_replaces_the_default_block() {
        let mut hooks = HookRegistry::new();
        hooks.on_intro(|_, ctx| format!("<h1>Custom for {}</h1>", ctx.active_tab_slug));
        let page = page_with(hooks);
        let html = page.render(&PageRequest::none());

        assert!(html.contains("<h1>Custom for main_tab</h1>"));
        assert!(!html.contains(r#"<p class="about-text">"#));
    }

    #[test]
    fn empty_intro_override_falls_back_to_the_default() {
        let mut hooks = HookRegistry::new();
        hooks.on_intro(|_, _| String::new());
        let page = page_with(hooks);
        let html = page.render(&PageRequest::none());

        assert!(html.contains("<h1>Demo Theme</h1>"));
        assert!(html.contains(r#"<p class="about-text">A demonstration theme</p>"#));
    }

    #[test]
    fn upper_override_replaces_the_feature_section() {
        let mut hooks = HookRegistry::new();
        hooks.on_upper(|_, _| "<section>upper</section>".to_owned());
        let page = page_with(hooks);
        let html = page.render(&PageRequest::none());

        assert!(html.contains("<section>upper</section>"));
        assert!(!html.contains("feature-section"));
    }

    #[test]
    fn main_tab_hook_replaces_the_built_in_body() {
        let mut hooks = HookRegistry::new();
        hooks.on_tab_main(|_, ctx| format!("<p>hooked body on {}</p>", ctx.active_tab_slug));
        let page = page_with(hooks);
        let html = page.render(&PageRequest::none());

        assert!(html.contains("<p>hooked body on main_tab</p>"));
        assert!(!html.contains("info-cols"));
    }

    #[test]
    fn wrapper_hook_replaces_the_frame() {
        let mut hooks = HookRegistry::new();
        hooks.on_wrappers(|_| markup::ContentWrappers {
            open_markup: "<main>".to_owned(),
            close_markup: "</main>".to_owned(),
        });
        let page = page_with(hooks);
        let html = page.render(&PageRequest::none());

        assert!(html.starts_with("<main>"));
        assert!(html.ends_with("</main>"));
        assert!(!html.contains("about-wrap"));
    }

    #[test]
    fn zero_valid_tabs_render_an_empty_body_without_error() {
        let mut hooks = HookRegistry::new();
        hooks.on_tabs(|_| Vec::new());
        let page = page_with(hooks);
        let html = page.render(&PageRequest::with_tab("main_tab"));

        assert!(html.contains("<hr>"));
        assert!(!html.contains("info-cols"));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn registration_carries_settings_and_derived_slug() {
        struct RecordingMenu(Vec<PageRegistration>);
        impl ThemeMenu for RecordingMenu {
            fn add_theme_page(&mut self, registration: PageRegistration) {
                self.0.push(registration);
            }
        }

        let page = page_with(HookRegistry::new());
        let mut menu = RecordingMenu(Vec::new());
        page.register(&mut menu);

        assert_eq!(menu.0.len(), 1);
        let reg = &menu.0[0];
        assert_eq!(reg.parent_menu, "themes.php");
        assert_eq!(reg.capability, "manage_options");
        assert_eq!(reg.page_title, "Demo Theme");
        assert_eq!(reg.page_slug, "demo-theme");
    }
}
