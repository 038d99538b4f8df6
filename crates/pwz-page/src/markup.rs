//! Built-in markup for the admin page.
//!
//! Every block here is a fallback: it renders only when the matching
//! extension point returns empty. All theme-sourced display text is
//! escaped at insertion; the one exception is the author credit, which may
//! carry markup and is policed by the host's final sanitize pass.

use std::fmt::Write;

use pwz_render::escape_html;

use crate::tabs::TabDescriptor;
use crate::theme::ThemeInfo;

const EMOJI_HEART: &str = r#"<img draggable="false" class="emoji" alt="❤" src="https://s.w.org/images/core/emoji/2.4/svg/2764.svg">"#;
const EMOJI_WRENCH: &str = r#"<img draggable="false" class="emoji" alt="🔧" src="https://s.w.org/images/core/emoji/2.4/svg/1f527.svg">"#;

const FRAMEWORK_BLURB: &str = "The framework is intended to provide setup actions and \
     basic defaults for a theme. It does this through extendable classes, interfaces \
     and traits that can be utilised in a child theme - or a parent theme including \
     the framework directly.";

/// Opening and closing markup framing the whole page body.
///
/// Replaceable wholesale through the content wrappers hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentWrappers {
    /// Markup emitted before any page content.
    pub open_markup: String,
    /// Markup emitted after all page content.
    pub close_markup: String,
}

impl Default for ContentWrappers {
    fn default() -> Self {
        Self {
            open_markup: r#"<div class="wrap about-wrap full-width-layout">"#.to_owned(),
            close_markup: "</div>".to_owned(),
        }
    }
}

/// Default intro section: theme title and description.
pub(crate) fn intro_default(theme: &ThemeInfo) -> String {
    format!(
        "<h1>{}</h1><p class=\"about-text\">{}</p>",
        escape_html(&theme.title),
        escape_html(&theme.description)
    )
}

/// Default upper (feature) section: a promotional block naming the theme.
pub(crate) fn upper_default(theme: &ThemeInfo) -> String {
    format!(
        r#"<div class="feature-section one-col"><div class="col"><h2>{} Is Built With {EMOJI_HEART} Using The <br> PattonWebz Theme Framework</h2><p>{FRAMEWORK_BLURB}</p></div></div>"#,
        escape_html(&theme.name)
    )
}

/// Default body for the built-in main tab: theme and support info columns.
pub(crate) fn main_tab_default(theme: &ThemeInfo) -> String {
    let mut html = String::new();
    html.push_str(r#"<div class="info-cols">"#);
    let _ = write!(html, "<h2>Framework Info {EMOJI_WRENCH}</h2>");
    html.push_str(r#"<div class="two-col">"#);
    let _ = write!(
        html,
        "<div class=\"col\"><h3>Theme Info:</h3><ul><li>{}</li><li>{}</li></ul></div>",
        escape_html(&format!("Theme Name: {}", theme.name)),
        escape_html(&format!("Theme Version: {}", theme.version)),
    );
    let _ = write!(
        html,
        "<div class=\"col\"><h3>Help Support:</h3><ul>\
         <li>Support for this theme is likely provided by the theme author: {}</li>\
         <li>Framework or development support can be found at the github repo: \
         <a href=\"https://github.com/pattonwebz/theme-framework/\">PattonWebz Framework</a>.</li>\
         </ul></div>",
        theme.author,
    );
    html.push_str("</div></div>");
    html
}

/// Markup for the tab selector row.
///
/// With fewer than two tabs there is nothing to select, so a bare
/// separator is emitted instead. Otherwise one link per tab, in
/// registration order, with the active tab marked.
pub(crate) fn tab_selector(page_slug: &str, active_tab_slug: &str, tabs: &[TabDescriptor]) -> String {
    if tabs.len() <= 1 {
        return "<hr>".to_owned();
    }

    let mut html = String::new();
    html.push_str(r#"<h2 class="nav-tab-wrapper wp-clearfix">"#);
    for tab in tabs {
        let active = if tab.slug == active_tab_slug {
            " nav-tab-active"
        } else {
            ""
        };
        // Slugs are validated URL-safe before this point; only the
        // separator needs attribute escaping.
        let _ = write!(
            html,
            r#"<a href="?page={page_slug}&amp;tab={}" class="nav-tab{active}">{}</a>"#,
            tab.slug,
            escape_html(&tab.title),
        );
    }
    html.push_str("</h2>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn theme() -> ThemeInfo {
        ThemeInfo {
            name: "Demo Theme".to_owned(),
            title: "Demo <Theme>".to_owned(),
            description: "A theme & a half".to_owned(),
            version: "1.2.0".to_owned(),
            author: r#"<a href="https://example.com">Someone</a>"#.to_owned(),
        }
    }

    #[test]
    fn intro_escapes_title_and_description() {
        let html = intro_default(&theme());
        assert_eq!(
            html,
            "<h1>Demo &lt;Theme&gt;</h1><p class=\"about-text\">A theme &amp; a half</p>"
        );
    }

    #[test]
    fn upper_names_the_theme_escaped() {
        let html = upper_default(&theme());
        assert!(html.contains("Demo Theme Is Built With"));
        assert!(html.starts_with(r#"<div class="feature-section one-col">"#));
    }

    #[test]
    fn main_tab_lists_name_version_and_author() {
        let html = main_tab_default(&theme());
        assert!(html.contains("Theme Name: Demo Theme"));
        assert!(html.contains("Theme Version: 1.2.0"));
        // Author credit passes through unescaped for the host sanitizer.
        assert!(html.contains(r#"<a href="https://example.com">Someone</a>"#));
    }

    #[test]
    fn selector_is_a_separator_below_two_tabs() {
        let one = vec![TabDescriptor::new("main_tab", "Main Tab", |_| String::new())];
        assert_eq!(tab_selector("demo", "main_tab", &one), "<hr>");
        assert_eq!(tab_selector("demo", "", &[]), "<hr>");
    }

    #[test]
    fn selector_links_every_tab_and_marks_the_active_one() {
        let tabs = vec![
            TabDescriptor::new("main_tab", "Main Tab", |_| String::new()),
            TabDescriptor::new("extras", "Extra > Stuff", |_| String::new()),
        ];
        let html = tab_selector("demo-theme", "extras", &tabs);

        assert!(html.starts_with(r#"<h2 class="nav-tab-wrapper wp-clearfix">"#));
        assert!(html.contains(r#"<a href="?page=demo-theme&amp;tab=main_tab" class="nav-tab">"#));
        assert!(
            html.contains(r#"<a href="?page=demo-theme&amp;tab=extras" class="nav-tab nav-tab-active">"#)
        );
        assert!(html.contains("Extra &gt; Stuff"));
    }
}
