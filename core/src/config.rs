use log::debug;

use crate::{
    error::SwitcherError,
    theme::{ThemeCatalog, ThemeOption},
};

pub const MENU_ID: &str = "menu";
pub const SELECTOR_ID: &str = "menu_select";
pub const STYLESHEET_ID: &str = "color_css";

/// Element ids and theme options the switcher works with.
///
/// Every field falls back to the built-in value when missing, so an empty
/// document deserializes to [`SwitcherConfig::default`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct SwitcherConfig {
    /// Container the selector gets appended to
    #[serde(default = "default_menu_id")]
    pub menu_id: String,
    #[serde(default = "default_selector_id")]
    pub selector_id: String,
    /// Stylesheet link whose `href` is swapped
    #[serde(default = "default_stylesheet_id")]
    pub stylesheet_id: String,
    #[serde(default = "ThemeOption::light")]
    pub light: ThemeOption,
    #[serde(default = "ThemeOption::dark")]
    pub dark: ThemeOption,
}

fn default_menu_id() -> String {
    MENU_ID.to_string()
}

fn default_selector_id() -> String {
    SELECTOR_ID.to_string()
}

fn default_stylesheet_id() -> String {
    STYLESHEET_ID.to_string()
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            menu_id: default_menu_id(),
            selector_id: default_selector_id(),
            stylesheet_id: default_stylesheet_id(),
            light: ThemeOption::light(),
            dark: ThemeOption::dark(),
        }
    }
}

impl SwitcherConfig {
    pub fn from_toml<S: AsRef<str>>(toml: S) -> Result<Self, SwitcherError> {
        let config: Self = toml::from_str(toml.as_ref())?;
        debug!("Loaded switcher config: {:?}", config);
        Ok(config)
    }

    pub fn catalog(&self) -> ThemeCatalog {
        ThemeCatalog::new(self.light.clone(), self.dark.clone())
    }
}
