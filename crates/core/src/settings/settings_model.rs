use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_CURRENCY, DEFAULT_THEME};

/// User preferences, with defaults applied for anything not yet stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: String,
    pub base_currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: DEFAULT_THEME.to_string(),
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
        }
    }
}

/// Partial settings update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub theme: Option<String>,
    pub base_currency: Option<String>,
}
