mod menu;
mod page;

use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, error};
use menu::ThemeSelect;
use page::SignalPage;
use theme_switcher_core::ThemeSwitcher;

use crate::settings;

// Urls are relative to your Cargo.toml file
const STYLE: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Copy)]
pub struct AppContext {
    pub current_error: Signal<Option<String>>,
}

#[allow(non_snake_case)]
pub fn App() -> Element {
    let config = use_hook(settings::load_config);
    let page = use_hook(|| SignalPage::new(&config));
    let mut switcher =
        use_context_provider(|| Signal::new(ThemeSwitcher::with_config(page, config.clone())));
    let app_context = use_context_provider(|| AppContext {
        current_error: Signal::new(None),
    });
    let mut error_message = app_context.current_error;

    // Only writes, so this runs once after the first render
    use_effect(move || {
        debug!("Initializing theme selector");
        if let Err(e) = switcher.write().initialize() {
            error!("Error initializing the theme selector: {}", e);
            error_message.set(Some(e.to_string()));
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: STYLE }
        link {
            id: "{page.stylesheet_id()}",
            rel: "stylesheet",
            href: "{page.stylesheet_href()}",
        }
        div { class: "container",
            header { class: "header",
                h1 { "Theme Switcher" }
                div { id: "{page.menu_id()}", class: "menu",
                    for selector in page.menu_children() {
                        ThemeSelect { selector }
                    }
                }
            }
            div { class: "mainarea",
                p { "Pick a theme from the menu to swap the page stylesheet." }
            }
            footer { class: "footer",
                if let Some(err) = &*error_message.read() {
                    p { "{err}" }
                }
            }
        }
    }
}
