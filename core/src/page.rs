use log::debug;

use crate::error::PageError;

const SELECT_TAG: &str = "select";
const OPTION_TAG: &str = "option";
const SELECTED_ATTRIBUTE: &str = "selected";

/// A page element: a tag with an optional id, attributes, text and children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new<S: AsRef<str>>(tag: S) -> Self {
        Self {
            tag: tag.as_ref().to_string(),
            ..Default::default()
        }
    }

    pub fn with_id<S: AsRef<str>>(mut self, id: S) -> Self {
        self.id = Some(id.as_ref().to_string());
        self
    }

    pub fn with_attribute<S: AsRef<str>, T: AsRef<str>>(mut self, name: S, value: T) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_text<S: AsRef<str>>(mut self, text: S) -> Self {
        self.text = Some(text.as_ref().to_string());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn attribute<S: AsRef<str>>(&self, name: S) -> Option<&str> {
        let name = name.as_ref();
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attribute<S: AsRef<str>>(&self, name: S) -> bool {
        self.attribute(name).is_some()
    }

    pub fn set_attribute<S: AsRef<str>, T: AsRef<str>>(&mut self, name: S, value: T) {
        let name = name.as_ref();
        let value = value.as_ref().to_string();
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, current)) => *current = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn remove_attribute<S: AsRef<str>>(&mut self, name: S) {
        let name = name.as_ref();
        self.attributes.retain(|(n, _)| n != name);
    }

    pub fn is_selector(&self) -> bool {
        self.tag == SELECT_TAG
    }

    /// The option children of a selector, in display order.
    pub fn options(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter(|child| child.tag == OPTION_TAG)
    }

    /// Index of the option marked as selected. A selector without any
    /// marked option shows its first one.
    pub fn selected_index(&self) -> Option<usize> {
        if !self.is_selector() {
            return None;
        }
        let mut options = self.options().peekable();
        options.peek()?;
        Some(
            options
                .position(|option| option.has_attribute(SELECTED_ATTRIBUTE))
                .unwrap_or(0),
        )
    }

    // Depth first search, the element itself included
    pub fn find<S: AsRef<str>>(&self, id: S) -> Option<&Element> {
        let id = id.as_ref();
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut<S: AsRef<str>>(&mut self, id: S) -> Option<&mut Element> {
        let id = id.as_ref();
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }
}

/// The rendering tree of the page hosting the switcher.
///
/// Elements are addressed by id; operating on an id that is not in the page
/// fails with [`PageError::ElementNotFound`].
pub trait HostPage {
    /// Appends `element` as the last child of the element `parent_id`.
    fn append_child(&mut self, parent_id: &str, element: Element) -> Result<(), PageError>;
    fn set_attribute(&mut self, element_id: &str, name: &str, value: &str)
        -> Result<(), PageError>;
    /// Reads an attribute, `Ok(None)` when the element exists but the
    /// attribute is unset.
    fn attribute(&self, element_id: &str, name: &str) -> Result<Option<String>, PageError>;
}

/// A page held entirely in memory, rooted at a `body` element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryPage {
    body: Element,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    pub fn new() -> Self {
        Self {
            body: Element::new("body"),
        }
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.body.append_child(element);
        self
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn find<S: AsRef<str>>(&self, id: S) -> Option<&Element> {
        self.body.find(id)
    }

    pub fn children_of<S: AsRef<str>>(&self, id: S) -> Result<&[Element], PageError> {
        let id = id.as_ref();
        self.find(id)
            .map(Element::children)
            .ok_or_else(|| PageError::not_found(id))
    }

    /// Selects the option at `index` the way a user picking it would,
    /// returning the new selected index.
    pub fn select_option<S: AsRef<str>>(&mut self, id: S, index: usize) -> Result<usize, PageError> {
        let id = id.as_ref();
        let selector = self
            .body
            .find_mut(id)
            .ok_or_else(|| PageError::not_found(id))?;
        if !selector.is_selector() {
            return Err(PageError::NotASelector { id: id.to_string() });
        }

        let len = selector.options().count();
        if index >= len {
            return Err(PageError::OptionOutOfRange {
                id: id.to_string(),
                index,
                len,
            });
        }

        selector
            .children
            .iter_mut()
            .filter(|child| child.tag == OPTION_TAG)
            .enumerate()
            .for_each(|(position, option)| {
                if position == index {
                    option.set_attribute(SELECTED_ATTRIBUTE, "");
                } else {
                    option.remove_attribute(SELECTED_ATTRIBUTE);
                }
            });
        debug!("Selected option {} of {}", index, id);
        Ok(index)
    }
}

impl HostPage for MemoryPage {
    fn append_child(&mut self, parent_id: &str, element: Element) -> Result<(), PageError> {
        let parent = self
            .body
            .find_mut(parent_id)
            .ok_or_else(|| PageError::not_found(parent_id))?;
        parent.append_child(element);
        Ok(())
    }

    fn set_attribute(
        &mut self,
        element_id: &str,
        name: &str,
        value: &str,
    ) -> Result<(), PageError> {
        let element = self
            .body
            .find_mut(element_id)
            .ok_or_else(|| PageError::not_found(element_id))?;
        element.set_attribute(name, value);
        Ok(())
    }

    fn attribute(&self, element_id: &str, name: &str) -> Result<Option<String>, PageError> {
        let element = self
            .find(element_id)
            .ok_or_else(|| PageError::not_found(element_id))?;
        Ok(element.attribute(name).map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::PageError;

    use super::{Element, HostPage, MemoryPage};

    fn selector_page() -> MemoryPage {
        MemoryPage::new().with_element(
            Element::new("div").with_id("menu").with_child(
                Element::new("select")
                    .with_id("menu_select")
                    .with_child(Element::new("option").with_text("Light"))
                    .with_child(Element::new("option").with_text("Dark")),
            ),
        )
    }

    #[test]
    fn finds_nested_elements() {
        let page = selector_page();
        let selector = page.find("menu_select").unwrap();
        assert_eq!("select", selector.tag());
        assert_eq!(2, selector.options().count());
        assert!(page.find("color_css").is_none());
    }

    #[test]
    fn append_child_adds_last_child() -> Result<(), PageError> {
        let mut page = selector_page();
        page.append_child("menu", Element::new("span").with_id("badge"))?;

        let children = page.children_of("menu")?;
        assert_eq!(2, children.len());
        assert_eq!(Some("badge"), children[1].id());
        Ok(())
    }

    #[test]
    fn append_child_to_missing_parent_fails() {
        let mut page = MemoryPage::new();
        let result = page.append_child("menu", Element::new("select"));
        assert_eq!(Err(PageError::not_found("menu")), result);
    }

    #[test]
    fn set_attribute_overwrites_existing_value() -> Result<(), PageError> {
        let mut page = MemoryPage::new().with_element(
            Element::new("link")
                .with_id("color_css")
                .with_attribute("rel", "stylesheet")
                .with_attribute("href", "./css/light.css"),
        );

        page.set_attribute("color_css", "href", "./css/dark.css")?;

        assert_eq!(
            Some("./css/dark.css".to_string()),
            page.attribute("color_css", "href")?
        );
        assert_eq!(Some("stylesheet".to_string()), page.attribute("color_css", "rel")?);
        assert_eq!(None, page.attribute("color_css", "media")?);
        Ok(())
    }

    #[test]
    fn select_option_moves_the_selected_mark() -> Result<(), PageError> {
        let mut page = selector_page();
        assert_eq!(Some(0), page.find("menu_select").unwrap().selected_index());

        assert_eq!(1, page.select_option("menu_select", 1)?);
        assert_eq!(Some(1), page.find("menu_select").unwrap().selected_index());

        assert_eq!(0, page.select_option("menu_select", 0)?);
        let selector = page.find("menu_select").unwrap();
        assert_eq!(Some(0), selector.selected_index());
        assert_eq!(
            1,
            selector
                .options()
                .filter(|option| option.has_attribute("selected"))
                .count()
        );
        Ok(())
    }

    #[test]
    fn select_option_rejects_what_a_user_cannot_pick() {
        let mut page = selector_page();

        assert_eq!(
            Err(PageError::OptionOutOfRange {
                id: "menu_select".to_string(),
                index: 2,
                len: 2
            }),
            page.select_option("menu_select", 2)
        );
        assert_eq!(
            Err(PageError::NotASelector {
                id: "menu".to_string()
            }),
            page.select_option("menu", 0)
        );
        assert_eq!(
            Err(PageError::not_found("theme_select")),
            page.select_option("theme_select", 0)
        );
    }
}
