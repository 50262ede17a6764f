use crate::Result;

/// Trait for settings repository operations.
///
/// Missing keys are reported as `StoreError::NotFound`; the service maps
/// them to defaults.
pub trait SettingsRepositoryTrait: Send + Sync {
    fn get_setting(&self, key: &str) -> Result<String>;
    fn update_setting(&self, key: &str, value: &str) -> Result<()>;
}
