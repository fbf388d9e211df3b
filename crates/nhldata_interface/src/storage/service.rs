use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::storage::model::StorageKey;

#[async_trait]
pub trait StorageService {
    // Bucket (or container) every game file is written to.
    fn bucket(&self) -> &str;

    // Writes or overwrites the object at `key`.
    async fn store_game(&self, key: &StorageKey, game_data: Vec<u8>) -> Result<()>;
}

pub type StorageServiceHandle = Arc<dyn StorageService + Send + Sync>;
