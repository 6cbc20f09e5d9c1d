use dioxus::prelude::*;
use dioxus_logger::tracing::{error, warn};
use theme_switcher_core::{page::Element as PageElement, ThemeSwitcher};

use super::{page::SignalPage, AppContext};

/// Renders a selector appended to the menu and routes its change events to
/// the switcher.
#[component]
pub fn ThemeSelect(selector: PageElement) -> Element {
    let mut switcher: Signal<ThemeSwitcher<SignalPage>> = use_context();
    let app_context: AppContext = use_context();
    let mut current_error = app_context.current_error;

    // The menu only ever receives the selector
    if !selector.is_selector() {
        warn!("Skipping <{}> in the menu", selector.tag());
        return rsx! {};
    }
    let id = selector.id().unwrap_or_default().to_string();

    rsx! {
        select {
            id: "{id}",
            class: "custom-select",
            onchange: move |e| {
                let value = e.data().value();
                let Ok(index) = value.parse::<usize>() else {
                    warn!("Option value {} is not an index", value);
                    return;
                };
                match switcher.write().on_selection_change(index) {
                    Ok(_) => current_error.set(None),
                    Err(err) => {
                        error!("Error switching theme: {}", err);
                        current_error.set(Some(err.to_string()));
                    }
                }
            },
            for (index, entry) in selector.options().enumerate() {
                option {
                    value: "{index}",
                    selected: entry.has_attribute("selected"),
                    "{entry.text().unwrap_or_default()}"
                }
            }
        }
    }
}
