//! Extension points for the admin page.
//!
//! The page exposes five filter hooks, each namespaced by the configured
//! prefix. With the default prefix they are:
//!
//! - `pattonwebz_filter_admin_page_tabs`
//! - `pattonwebz_filter_admin_page_intro`
//! - `pattonwebz_filter_admin_page_upper`
//! - `pattonwebz_filter_admin_tab_main`
//! - `pattonwebz_filter_admin_page_content_wrappers`
//!
//! Unlike WordPress's global `apply_filters` dispatch, registration is
//! explicit: the host builds a [`HookRegistry`], adds handlers, and passes
//! the registry to the page constructor. Handlers run synchronously in
//! registration order; the html hooks start from an empty string, and an
//! empty chain result means the built-in default block is used.

use std::sync::Arc;

use pwz_hooks::{FilterChain, hook_name};

use crate::markup::ContentWrappers;
use crate::tabs::TabDescriptor;
use crate::theme::ThemeInfo;

/// Read-only context handed to the html filter hooks, mirroring the extra
/// arguments the original hooks carry.
#[derive(Clone, Debug)]
pub struct HookContext {
    /// Slug of the tab being rendered.
    pub active_tab_slug: String,
    /// Metadata for the active theme.
    pub theme: Arc<ThemeInfo>,
}

/// Identifiers for the admin page extension points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdminPageHook {
    /// Add, remove, or replace page tabs.
    Tabs,
    /// Replace the intro section markup.
    Intro,
    /// Replace the upper (feature) section markup.
    Upper,
    /// Replace the built-in main tab's body markup.
    TabMain,
    /// Replace the page wrapper markup pair.
    ContentWrappers,
}

impl AdminPageHook {
    /// All extension points, in composition order.
    pub const ALL: [Self; 5] = [
        Self::Tabs,
        Self::Intro,
        Self::Upper,
        Self::TabMain,
        Self::ContentWrappers,
    ];

    /// The unprefixed part of the hook identifier.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Tabs => "filter_admin_page_tabs",
            Self::Intro => "filter_admin_page_intro",
            Self::Upper => "filter_admin_page_upper",
            Self::TabMain => "filter_admin_tab_main",
            Self::ContentWrappers => "filter_admin_page_content_wrappers",
        }
    }

    /// Full hook identifier under the given prefix.
    #[must_use]
    pub fn name(self, prefix: &str) -> String {
        hook_name(prefix, self.suffix())
    }
}

/// Registry of handlers for the admin page extension points.
///
/// One typed chain per hook. The registry is built by the host before the
/// page is constructed and is not mutated afterwards.
#[derive(Debug, Default)]
pub struct HookRegistry {
    tabs: FilterChain<Vec<TabDescriptor>>,
    intro: FilterChain<String, HookContext>,
    upper: FilterChain<String, HookContext>,
    tab_main: FilterChain<String, HookContext>,
    wrappers: FilterChain<ContentWrappers>,
}

impl HookRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler on the tabs hook.
    pub fn on_tabs(
        &mut self,
        handler: impl Fn(Vec<TabDescriptor>) -> Vec<TabDescriptor> + Send + Sync + 'static,
    ) -> &mut Self {
        self.tabs.add(move |tabs, _| handler(tabs));
        self
    }

    /// Register a handler on the intro section hook.
    pub fn on_intro(
        &mut self,
        handler: impl Fn(String, &HookContext) -> String + Send + Sync + 'static,
    ) -> &mut Self {
        self.intro.add(handler);
        self
    }

    /// Register a handler on the upper section hook.
    pub fn on_upper(
        &mut self,
        handler: impl Fn(String, &HookContext) -> String + Send + Sync + 'static,
    ) -> &mut Self {
        self.upper.add(handler);
        self
    }

    /// Register a handler on the main tab body hook.
    pub fn on_tab_main(
        &mut self,
        handler: impl Fn(String, &HookContext) -> String + Send + Sync + 'static,
    ) -> &mut Self {
        self.tab_main.add(handler);
        self
    }

    /// Register a handler on the content wrappers hook.
    pub fn on_wrappers(
        &mut self,
        handler: impl Fn(ContentWrappers) -> ContentWrappers + Send + Sync + 'static,
    ) -> &mut Self {
        self.wrappers.add(move |wrappers, _| handler(wrappers));
        self
    }

    /// Number of handlers registered on a hook.
    #[must_use]
    pub fn handler_count(&self, hook: AdminPageHook) -> usize {
        match hook {
            AdminPageHook::Tabs => self.tabs.len(),
            AdminPageHook::Intro => self.intro.len(),
            AdminPageHook::Upper => self.upper.len(),
            AdminPageHook::TabMain => self.tab_main.len(),
            AdminPageHook::ContentWrappers => self.wrappers.len(),
        }
    }

    pub(crate) fn filter_tabs(&self, tabs: Vec<TabDescriptor>) -> Vec<TabDescriptor> {
        self.tabs.apply(tabs, &())
    }

    pub(crate) fn filter_intro(&self, ctx: &HookContext) -> String {
        self.intro.apply(String::new(), ctx)
    }

    pub(crate) fn filter_upper(&self, ctx: &HookContext) -> String {
        self.upper.apply(String::new(), ctx)
    }

    pub(crate) fn filter_tab_main(&self, ctx: &HookContext) -> String {
        self.tab_main.apply(String::new(), ctx)
    }

    pub(crate) fn filter_wrappers(&self, defaults: ContentWrappers) -> ContentWrappers {
        self.wrappers.apply(defaults, &())
    }
}
