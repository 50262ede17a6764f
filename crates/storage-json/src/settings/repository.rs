use std::collections::BTreeMap;
use std::sync::Arc;

use tally_core::errors::StoreError;
use tally_core::settings::SettingsRepositoryTrait;
use tally_core::{Error, Result};

use crate::store::{load_collection, save_collection, KeyValueStore};

const STORE_KEY: &str = "settings";

/// Settings persisted as a flat string key → value JSON mapping.
pub struct SettingsRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        SettingsRepository { store }
    }

    fn load_map(&self) -> Result<BTreeMap<String, String>> {
        load_collection(self.store.as_ref(), STORE_KEY)
    }
}

impl SettingsRepositoryTrait for SettingsRepository {
    fn get_setting(&self, key: &str) -> Result<String> {
        self.load_map()?
            .remove(key)
            .ok_or_else(|| Error::Store(StoreError::NotFound(key.to_string())))
    }

    fn update_setting(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.load_map()?;
        map.insert(key.to_string(), value.to_string());
        save_collection(self.store.as_ref(), STORE_KEY, &map)
    }
}
