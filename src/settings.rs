use anyhow::Context;
use dioxus_logger::tracing::{debug, error};
use theme_switcher_core::SwitcherConfig;

// Embedded so the web build needs no filesystem access
const SWITCHER_CONFIG: &str = include_str!("../switcher.toml");

pub fn load_config() -> SwitcherConfig {
    parse_config(SWITCHER_CONFIG).unwrap_or_else(|e| {
        error!("Error loading the switcher config, using defaults: {:#}", e);
        SwitcherConfig::default()
    })
}

fn parse_config(text: &str) -> anyhow::Result<SwitcherConfig> {
    let config = SwitcherConfig::from_toml(text).context("Parsing switcher.toml")?;
    debug!(
        "Switcher config loaded, menu: #{}, stylesheet: #{}",
        config.menu_id, config.stylesheet_id
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use theme_switcher_core::SwitcherConfig;

    use super::{parse_config, SWITCHER_CONFIG};

    #[test]
    fn shipped_config_matches_defaults() -> anyhow::Result<()> {
        let config = parse_config(SWITCHER_CONFIG)?;
        assert_eq!(SwitcherConfig::default(), config);
        Ok(())
    }

    #[test]
    fn broken_config_carries_context() {
        let err = parse_config("[light").unwrap_err();
        assert!(err.to_string().contains("switcher.toml"));
    }
}
