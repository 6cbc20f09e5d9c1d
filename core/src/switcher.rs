use log::{debug, info, warn};

use crate::{
    config::SwitcherConfig,
    error::SwitcherError,
    page::{Element, HostPage},
    theme::{Theme, ThemeCatalog},
};

const HREF: &str = "href";

/// Injects the theme selector into a page and swaps the page stylesheet
/// whenever the selection changes.
///
/// The page owns the elements, the switcher only keeps the theme that is
/// currently applied. Change events of the produced selector have to be
/// routed to [`ThemeSwitcher::on_selection_change`] by whoever renders it.
#[derive(Clone, Debug)]
pub struct ThemeSwitcher<P: HostPage> {
    page: P,
    config: SwitcherConfig,
    catalog: ThemeCatalog,
    selected: Theme,
    initialized: bool,
}

impl<P: HostPage> ThemeSwitcher<P> {
    pub fn new(page: P) -> Self {
        Self::with_config(page, SwitcherConfig::default())
    }

    pub fn with_config(page: P, config: SwitcherConfig) -> Self {
        let catalog = config.catalog();
        Self {
            page,
            config,
            catalog,
            selected: Theme::default(),
            initialized: false,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn config(&self) -> &SwitcherConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    pub fn selected(&self) -> Theme {
        self.selected
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Appends the selector to the menu container. Runs once: later calls
    /// leave the page untouched.
    pub fn initialize(&mut self) -> Result<(), SwitcherError> {
        if self.initialized {
            debug!("Theme selector already in the page, skipping");
            return Ok(());
        }

        let selected = self.stylesheet_theme();
        let selector = self.build_selector(selected);
        self.page.append_child(&self.config.menu_id, selector)?;

        self.selected = selected;
        self.initialized = true;
        info!(
            "Theme selector added to #{} with {} selected",
            self.config.menu_id, selected
        );
        Ok(())
    }

    /// Handles a change of the selector. Indices without an option are
    /// ignored and return `Ok(None)`.
    pub fn on_selection_change(
        &mut self,
        selected_index: usize,
    ) -> Result<Option<Theme>, SwitcherError> {
        let Some(theme) = Theme::from_index(selected_index) else {
            debug!("No theme at index {}, ignoring", selected_index);
            return Ok(None);
        };
        info!("{}", self.catalog.option(theme).label);
        self.apply(theme)?;
        Ok(Some(theme))
    }

    /// Points the stylesheet reference at the theme's stylesheet.
    pub fn apply(&mut self, theme: Theme) -> Result<(), SwitcherError> {
        let path = &self.catalog.option(theme).path;
        self.page
            .set_attribute(&self.config.stylesheet_id, HREF, path)?;
        self.selected = theme;
        Ok(())
    }

    fn build_selector(&self, selected: Theme) -> Element {
        self.catalog
            .options()
            .fold(
                Element::new("select").with_id(&self.config.selector_id),
                |selector, (theme, option)| {
                    let mut entry = Element::new("option").with_text(&option.label);
                    if theme == selected {
                        entry.set_attribute("selected", "");
                    }
                    selector.with_child(entry)
                },
            )
    }

    // The theme the page markup starts with, light unless it links the dark stylesheet
    fn stylesheet_theme(&self) -> Theme {
        match self.page.attribute(&self.config.stylesheet_id, HREF) {
            Ok(Some(href)) => self.catalog.theme_for_path(href).unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Can't read the initial stylesheet: {}", e);
                Theme::default()
            }
        }
    }
}
