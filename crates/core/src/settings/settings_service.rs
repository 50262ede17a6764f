use std::sync::Arc;

use super::settings_model::{Settings, SettingsUpdate};
use super::settings_traits::SettingsRepositoryTrait;
use crate::constants::{DEFAULT_BASE_CURRENCY, DEFAULT_THEME};
use crate::errors::{Error, StoreError};
use crate::Result;

const THEME_KEY: &str = "theme";
const BASE_CURRENCY_KEY: &str = "base_currency";

/// Trait defining the contract for settings service operations.
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;
    fn update_settings(&self, update: &SettingsUpdate) -> Result<()>;
    fn get_theme(&self) -> Result<String>;
    fn set_theme(&self, theme: &str) -> Result<()>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }

    fn get_or_default(&self, key: &str, default: &str) -> Result<String> {
        match self.settings_repository.get_setting(key) {
            Ok(value) => Ok(value),
            Err(Error::Store(StoreError::NotFound(_))) => Ok(default.to_string()),
            Err(e) => Err(e),
        }
    }
}

impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        Ok(Settings {
            theme: self.get_or_default(THEME_KEY, DEFAULT_THEME)?,
            base_currency: self.get_or_default(BASE_CURRENCY_KEY, DEFAULT_BASE_CURRENCY)?,
        })
    }

    fn update_settings(&self, update: &SettingsUpdate) -> Result<()> {
        if let Some(ref theme) = update.theme {
            self.settings_repository.update_setting(THEME_KEY, theme)?;
        }
        if let Some(ref base_currency) = update.base_currency {
            self.settings_repository
                .update_setting(BASE_CURRENCY_KEY, base_currency)?;
        }
        Ok(())
    }

    fn get_theme(&self) -> Result<String> {
        self.get_or_default(THEME_KEY, DEFAULT_THEME)
    }

    fn set_theme(&self, theme: &str) -> Result<()> {
        self.settings_repository.update_setting(THEME_KEY, theme)
    }
}
