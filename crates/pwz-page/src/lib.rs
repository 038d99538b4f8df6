//! Extendable theme admin page composer for the PWZ framework.
//!
//! Builds the markup for a single settings-style page under the host's
//! Appearance menu. All built-in content is overridable through typed
//! filter hooks, and new tabs can be added by handing an extra descriptor
//! (slug, title, content provider) back from the tabs hook.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use pwz_config::PageSettings;
//! use pwz_page::{AdminPage, HookRegistry, PageRequest, TabDescriptor, ThemeAdminPage, ThemeInfo};
//!
//! let mut hooks = HookRegistry::new();
//! hooks.on_tabs(|mut tabs| {
//!     tabs.push(TabDescriptor::new("support", "Support", |_| {
//!         "<p>Open a ticket.</p>".to_owned()
//!     }));
//!     tabs
//! });
//!
//! let theme = ThemeInfo::new("Demo Theme", "Demo Theme");
//! let page = AdminPage::new(PageSettings::default(), theme, Arc::new(hooks));
//!
//! let html = page.render(&PageRequest::with_tab("support"));
//! assert!(html.contains("<p>Open a ticket.</p>"));
//! assert!(html.contains("nav-tab-active"));
//! ```
//!
//! Rendering is request-scoped and synchronous: each call builds a fresh
//! tab list and page state, runs only the active tab's content provider,
//! and returns one string for the host to sanitize and write.

mod hooks;
mod host;
mod markup;
mod page;
mod tabs;
mod theme;

pub use hooks::{AdminPageHook, HookContext, HookRegistry};
pub use host::{
    PageRegistration, PageRequest, PassthroughSanitizer, Sanitizer, ThemeAdminPage, ThemeMenu,
};
pub use markup::ContentWrappers;
pub use page::{AdminPage, PageState};
pub use tabs::{TabContentFn, TabDescriptor};
pub use theme::ThemeInfo;
