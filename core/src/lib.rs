pub mod config;
pub mod error;
pub mod page;
pub mod switcher;
pub mod theme;

pub use config::SwitcherConfig;
pub use error::{PageError, SwitcherError};
pub use page::{Element, HostPage, MemoryPage};
pub use switcher::ThemeSwitcher;
pub use theme::{Theme, ThemeCatalog, ThemeOption};
