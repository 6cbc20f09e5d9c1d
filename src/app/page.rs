use dioxus::prelude::*;
use theme_switcher_core::{page::Element as PageElement, HostPage, PageError, SwitcherConfig};

/// The host page as rendered by [`super::App`]: the menu container and the
/// stylesheet link, each backed by a signal so mutations show up on screen.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalPage {
    menu: Signal<PageElement>,
    stylesheet: Signal<PageElement>,
}

impl SignalPage {
    pub fn new(config: &SwitcherConfig) -> Self {
        let menu = PageElement::new("div").with_id(&config.menu_id);
        let stylesheet = PageElement::new("link")
            .with_id(&config.stylesheet_id)
            .with_attribute("rel", "stylesheet")
            .with_attribute("href", &config.light.path);
        Self {
            menu: Signal::new(menu),
            stylesheet: Signal::new(stylesheet),
        }
    }

    pub fn menu_id(&self) -> String {
        self.menu.read().id().unwrap_or_default().to_string()
    }

    pub fn menu_children(&self) -> Vec<PageElement> {
        self.menu.read().children().to_vec()
    }

    pub fn stylesheet_id(&self) -> String {
        self.stylesheet.read().id().unwrap_or_default().to_string()
    }

    pub fn stylesheet_href(&self) -> String {
        self.stylesheet
            .read()
            .attribute("href")
            .unwrap_or_default()
            .to_string()
    }

    fn element(&self, id: &str) -> Result<Signal<PageElement>, PageError> {
        [self.menu, self.stylesheet]
            .into_iter()
            .find(|element| element.peek().id() == Some(id))
            .ok_or_else(|| PageError::not_found(id))
    }
}

impl HostPage for SignalPage {
    fn append_child(&mut self, parent_id: &str, element: PageElement) -> Result<(), PageError> {
        let mut parent = self.element(parent_id)?;
        parent.write().append_child(element);
        Ok(())
    }

    fn set_attribute(
        &mut self,
        element_id: &str,
        name: &str,
        value: &str,
    ) -> Result<(), PageError> {
        let mut element = self.element(element_id)?;
        element.write().set_attribute(name, value);
        Ok(())
    }

    fn attribute(&self, element_id: &str, name: &str) -> Result<Option<String>, PageError> {
        let element = self.element(element_id)?;
        let value = element.peek().attribute(name).map(str::to_string);
        Ok(value)
    }
}
