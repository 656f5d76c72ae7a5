use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What to do when the persisted task data fails to decode at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
    /// Treat malformed data as "no prior state" and start with an empty list
    #[default]
    Reset,
    /// Fail loudly at startup instead of discarding the stored bytes
    Fail,
}

/// Configuration from .triage/config.toml (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Decode-failure policy for tasks.json
    #[serde(default)]
    pub on_corrupt: CorruptPolicy,
    /// Surface persistence write failures as a non-blocking warning.
    /// Mutations always succeed in memory regardless.
    #[serde(default)]
    pub warn_on_save_failure: bool,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme color overrides, hex strings keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_on_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.on_corrupt, CorruptPolicy::Reset);
        assert!(!config.warn_on_save_failure);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn parses_policies_and_colors() {
        let config: Config = toml::from_str(
            r##"
on_corrupt = "fail"
warn_on_save_failure = true

[ui.colors]
highlight = "#FB4196"
"##,
        )
        .unwrap();
        assert_eq!(config.on_corrupt, CorruptPolicy::Fail);
        assert!(config.warn_on_save_failure);
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FB4196");
    }
}
