use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::{Config, ConfigSource};

/// Resolved value of one setting.
///
/// Serialized untagged, so booleans stay JSON booleans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Flag(bool),
    Text(String),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A setting together with the layer that supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveValue {
    pub value: SettingValue,
    pub source: ConfigSource,
}

impl Config {
    fn source_of(&self, key: &str) -> ConfigSource {
        self.source_attribution
            .get(key)
            .cloned()
            .unwrap_or(ConfigSource::Default)
    }

    /// Effective configuration keyed by option name, sorted by key.
    #[must_use]
    pub fn effective_config(&self) -> BTreeMap<String, EffectiveValue> {
        let mut config = BTreeMap::new();

        let mut add = |key: &str, value: SettingValue| {
            let source = self.source_of(key);
            config.insert(key.to_string(), EffectiveValue { value, source });
        };

        add("width", SettingValue::Text(self.width.to_string()));
        add("overflow", SettingValue::Text(self.overflow.to_string()));
        add("verbose", SettingValue::Flag(self.verbose));
        add("json", SettingValue::Flag(self.json));
        if let Some(path) = &self.config_path {
            add(
                "config_path",
                SettingValue::Text(path.display().to_string()),
            );
        }

        config
    }
}
