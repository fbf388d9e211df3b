use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use nhldata_interface::errors::{AppError, Result};
use nhldata_interface::storage::{model::StorageKey, service::StorageService};

// Keeps game files in process memory. Used for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStorageService {
    bucket: String,
    objects: Mutex<BTreeMap<String, Vec<u8>>>,
    writes: Mutex<Vec<String>>,
}

impl MemoryStorageService {
    pub fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().ok()?.get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects
            .lock()
            .map(|objects| objects.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn poisoned(&self) -> AppError {
        AppError::StorageError {
            msg: format!("memory bucket '{}' is poisoned", self.bucket),
        }
    }

    // Every key written, in write order, overwrites included.
    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .map(|writes| writes.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl StorageService for MemoryStorageService {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn store_game(&self, key: &StorageKey, game_data: Vec<u8>) -> Result<()> {
        self.objects
            .lock()
            .map_err(|_| self.poisoned())?
            .insert(key.key(), game_data);
        self.writes
            .lock()
            .map_err(|_| self.poisoned())?
            .push(key.key());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[tokio::test]
    async fn store_game_overwrites_existing_object() {
        let storage = MemoryStorageService::new("output");
        let key = StorageKey::new(7, NaiveDate::from_ymd_opt(2021, 2, 3).unwrap());

        storage.store_game(&key, b"first".to_vec()).await.unwrap();
        storage.store_game(&key, b"second".to_vec()).await.unwrap();

        assert_eq!(storage.bucket(), "output");
        assert_eq!(storage.keys(), vec!["20210203_7.csv".to_string()]);
        assert_eq!(storage.get("20210203_7.csv"), Some(b"second".to_vec()));
        assert_eq!(storage.writes().len(), 2);
    }
}
