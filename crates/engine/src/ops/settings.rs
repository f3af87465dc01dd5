//! Settings operations.

use uuid::Uuid;

use crate::{Engine, EngineError, ResultEngine, Setting};

impl Engine {
    pub fn setting(&self, key: &str) -> ResultEngine<Setting> {
        self.settings
            .get(key)
            .cloned()
            .ok_or_else(|| EngineError::KeyNotFound(key.to_string()))
    }

    /// Upsert a setting.
    ///
    /// An existing key is mutated in place, so repeated sets never create a
    /// second record for the same key.
    pub fn set_setting(&mut self, key: &str, value: &str) -> Setting {
        match self.settings.get_mut(key) {
            Some(setting) => {
                setting.value = value.to_string();
                setting.clone()
            }
            None => {
                let setting = Setting {
                    id: Uuid::new_v4(),
                    key: key.to_string(),
                    value: value.to_string(),
                };
                self.settings.insert(setting.key.clone(), setting.clone());
                setting
            }
        }
    }
}
