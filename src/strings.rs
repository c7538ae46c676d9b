//! Load-time string table
//!
//! Headless counterpart of the data a page resolves once at load and
//! then reads synchronously: localized strings and policy flags. Keys
//! keep the backend's camelCase names.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{PageError, PageResult};

/// String and boolean resources resolved at page load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadTimeData {
    strings: HashMap<String, String>,
    booleans: HashMap<String, bool>,
}

static DOWNLOADS_DEFAULTS: Lazy<LoadTimeData> = Lazy::new(|| {
    let mut data = LoadTimeData::new();
    data.set_boolean("isManaged", false);
    data.set_string(
        "browserManagedByOrg",
        "Your browser is managed by your organization",
    );
    data.set_string("toastClearedAll", "All downloads removed");
    data.set_string("toastRemovedFromList", "Removed from list");
    data.set_string("undo", "Undo");
    data
});

impl LoadTimeData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table the downloads page boots with
    pub fn downloads_defaults() -> Self {
        DOWNLOADS_DEFAULTS.clone()
    }

    pub fn set_string<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.strings.insert(key.into(), value.into());
    }

    pub fn set_boolean<K: Into<String>>(&mut self, key: K, value: bool) {
        self.booleans.insert(key.into(), value);
    }

    pub fn get_string(&self, key: &str) -> PageResult<String> {
        self.strings
            .get(key)
            .cloned()
            .ok_or_else(|| PageError::missing_resource(key))
    }

    pub fn get_boolean(&self, key: &str) -> PageResult<bool> {
        self.booleans
            .get(key)
            .copied()
            .ok_or_else(|| PageError::missing_resource(key))
    }
}
