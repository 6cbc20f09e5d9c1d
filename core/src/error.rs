use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("Element with id {id:?} not found in the page")]
    ElementNotFound { id: String },
    #[error("Element with id {id:?} is not a selector")]
    NotASelector { id: String },
    #[error("Selector {id:?} has {len} options, index {index} is out of range")]
    OptionOutOfRange { id: String, index: usize, len: usize },
}

impl PageError {
    pub fn not_found<S: AsRef<str>>(id: S) -> Self {
        Self::ElementNotFound {
            id: id.as_ref().to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SwitcherError {
    #[error("Page Error: {0}")]
    Page(#[from] PageError),
    #[error("Config Error: {0}")]
    Config(#[from] toml::de::Error),
}
