use std::sync::Arc;
use std::time::Duration;

use nhldata_interface::errors::Result;
use nhldata_interface::nhl::service::NhlServiceHandle;
use nhldata_interface::storage::service::StorageServiceHandle;

pub mod memory_storage_service;
pub mod nhl_service;
pub mod storage_service;

use memory_storage_service::MemoryStorageService;
use nhl_service::HttpNhlService;
use storage_service::S3StorageService;

use crate::http_client::HttpClientManager;
use crate::settings::{Settings, StorageBackend};

#[derive(Clone)]
pub struct ServiceRegistry {
    pub nhl_service: NhlServiceHandle,
    pub storage_service: StorageServiceHandle,
}

impl ServiceRegistry {
    pub async fn new(settings: &Settings) -> Result<Self> {
        let client = HttpClientManager::new_client(Duration::from_secs(settings.api.timeout_secs))?;
        let nhl_service = Arc::new(HttpNhlService::new(client, &settings.api.base_url));

        let storage_service: StorageServiceHandle = match settings.storage.backend {
            StorageBackend::S3 => {
                Arc::new(S3StorageService::from_settings(&settings.storage).await)
            }
            StorageBackend::Memory => Arc::new(MemoryStorageService::new(&settings.storage.bucket)),
        };

        Ok(Self {
            nhl_service,
            storage_service,
        })
    }
}
