//! In-memory weather record store.

use crate::{error::WeatherError, models::WeatherRecord};
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

/// Process-lifetime map from identifier to record
///
/// Clones share the same map. There is no update, delete, size bound, or
/// expiry; records live until the process exits.
#[derive(Clone, Default)]
pub struct WeatherStore {
    records: Arc<RwLock<HashMap<String, Arc<WeatherRecord>>>>,
}

impl WeatherStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own id. An existing entry with the same id
    /// is replaced.
    pub fn put(&self, record: WeatherRecord) {
        // Writers never panic mid-update, so a poisoned map is still consistent.
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.insert(record.id.clone(), Arc::new(record));
    }

    pub fn get(&self, id: &str) -> Result<Arc<WeatherRecord>, WeatherError> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        records
            .get(id)
            .cloned()
            .ok_or_else(|| WeatherError::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
