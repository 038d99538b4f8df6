//! Settings loading for the PWZ theme admin page.
//!
//! Parses an optional `[admin_page]` TOML section into [`PageSettings`].
//! Every field has a sensible default, so a missing file or empty section
//! yields a fully usable configuration:
//!
//! ```toml
//! [admin_page]
//! prefix = "mytheme"
//! capability = "manage_options"
//! parent_menu = "themes.php"
//! ```
//!
//! The `prefix` namespaces every extension-point identifier the page
//! exposes (`{prefix}_filter_admin_page_tabs` and friends), so two themes
//! built on the framework never collide in the host's hook namespace.

use std::path::Path;

use serde::Deserialize;

/// Settings for a theme admin page.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PageSettings {
    /// Prefix used when naming anything placed into a shared namespace.
    pub prefix: String,
    /// Capability the host must require before rendering the page.
    pub capability: String,
    /// Identifier of the host menu the page registers under.
    pub parent_menu: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            prefix: "pattonwebz".to_owned(),
            capability: "manage_options".to_owned(),
            parent_menu: "themes.php".to_owned(),
        }
    }
}

/// Top-level file shape: settings live under `[admin_page]`.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SettingsFile {
    admin_page: PageSettings,
}

impl PageSettings {
    /// Create settings with the given prefix and default everything else.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Parse settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Parse` if the text is not valid TOML or the
    /// `[admin_page]` section has the wrong shape.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let file: SettingsFile = toml::from_str(text)?;
        Ok(file.admin_page)
    }

    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Io` if the file cannot be read and
    /// `SettingsError::Parse` if its contents are not valid.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Error loading page settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// I/O error reading the settings file.
    #[error("failed to read settings file")]
    Io(#[from] std::io::Error),

    /// TOML parse error.
    #[error("failed to parse settings")]
    Parse(#[from] toml::de::Error),
}
