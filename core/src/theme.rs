use std::fmt::Display;

pub const LIGHT_LABEL: &str = "Light";
pub const LIGHT_STYLESHEET: &str = "./css/light.css";
pub const DARK_LABEL: &str = "Dark";
pub const DARK_STYLESHEET: &str = "./css/dark.css";

/// The two themes a page can be switched between.
///
/// The declaration order is the order the options appear in the selector,
/// so `Light` is always index `0` and `Dark` index `1`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Translates the position of an option in the selector into a theme.
    /// Any index without an option maps to `None`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Theme::Light => 0,
            Theme::Dark => 1,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// A label shown in the selector and the stylesheet it activates.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ThemeOption {
    pub label: String,
    pub path: String,
}

impl ThemeOption {
    pub fn new<S: AsRef<str>, T: AsRef<str>>(label: S, path: T) -> Self {
        Self {
            label: label.as_ref().to_string(),
            path: path.as_ref().to_string(),
        }
    }

    pub fn light() -> Self {
        Self::new(LIGHT_LABEL, LIGHT_STYLESHEET)
    }

    pub fn dark() -> Self {
        Self::new(DARK_LABEL, DARK_STYLESHEET)
    }
}

/// The fixed pair of options offered by the switcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeCatalog {
    light: ThemeOption,
    dark: ThemeOption,
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self {
            light: ThemeOption::light(),
            dark: ThemeOption::dark(),
        }
    }
}

impl ThemeCatalog {
    pub fn new(light: ThemeOption, dark: ThemeOption) -> Self {
        Self { light, dark }
    }

    pub fn option(&self, theme: Theme) -> &ThemeOption {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    pub fn option_at(&self, index: usize) -> Option<&ThemeOption> {
        Theme::from_index(index).map(|theme| self.option(theme))
    }

    /// Options in selector order.
    pub fn options(&self) -> impl Iterator<Item = (Theme, &ThemeOption)> {
        Theme::ALL.into_iter().map(|theme| (theme, self.option(theme)))
    }

    // Finds which theme a stylesheet path belongs to, if any
    pub fn theme_for_path<S: AsRef<str>>(&self, path: S) -> Option<Theme> {
        let path = path.as_ref();
        self.options()
            .find(|(_, option)| option.path == path)
            .map(|(theme, _)| theme)
    }
}

#[cfg(test)]
mod tests {
    use super::{Theme, ThemeCatalog, ThemeOption};

    #[test]
    fn index_maps_to_theme_in_selector_order() {
        assert_eq!(Some(Theme::Light), Theme::from_index(0));
        assert_eq!(Some(Theme::Dark), Theme::from_index(1));
        assert_eq!(None, Theme::from_index(2));
        assert_eq!(None, Theme::from_index(usize::MAX));

        for theme in Theme::ALL {
            assert_eq!(Some(theme), Theme::from_index(theme.index()));
        }
    }

    #[test]
    fn default_catalog_has_fixed_labels_and_paths() {
        let catalog = ThemeCatalog::default();
        let options: Vec<(Theme, ThemeOption)> = catalog
            .options()
            .map(|(theme, option)| (theme, option.to_owned()))
            .collect();

        assert_eq!(
            vec![
                (Theme::Light, ThemeOption::new("Light", "./css/light.css")),
                (Theme::Dark, ThemeOption::new("Dark", "./css/dark.css")),
            ],
            options
        );
    }

    #[test]
    fn option_at_ignores_unknown_indices() {
        let catalog = ThemeCatalog::default();
        assert_eq!("Dark", catalog.option_at(1).unwrap().label);
        assert!(catalog.option_at(2).is_none());
    }

    #[test]
    fn theme_is_found_by_path() {
        let catalog = ThemeCatalog::default();
        assert_eq!(Some(Theme::Dark), catalog.theme_for_path("./css/dark.css"));
        assert_eq!(Some(Theme::Light), catalog.theme_for_path("./css/light.css"));
        assert_eq!(None, catalog.theme_for_path("./css/solarized.css"));
    }
}
