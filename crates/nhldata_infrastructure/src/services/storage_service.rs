use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use nhldata_interface::errors::{AppError, Result};
use nhldata_interface::storage::{model::StorageKey, service::StorageService};

use crate::settings::Storage;

#[derive(Clone)]
pub struct S3StorageService {
    client: Client,
    bucket: String,
}

impl S3StorageService {
    pub fn new(client: Client, bucket: &str) -> Self {
        Self {
            client,
            bucket: bucket.to_string(),
        }
    }

    // Credentials and region come from the default AWS provider chain.
    pub async fn from_settings(storage: &Storage) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest()).load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint_url) = &storage.endpoint_url {
            // Local S3 implementations don't resolve virtual-hosted buckets.
            builder = builder.endpoint_url(endpoint_url).force_path_style(true);
        }

        Self::new(Client::from_conf(builder.build()), &storage.bucket)
    }
}

#[async_trait]
impl StorageService for S3StorageService {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn store_game(&self, key: &StorageKey, game_data: Vec<u8>) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key.key())
            .content_type("text/csv")
            .body(ByteStream::from(game_data))
            .send()
            .await
            .map_err(|e| AppError::StorageError {
                msg: format!(
                    "put s3://{}/{}: {}",
                    self.bucket,
                    key,
                    aws_sdk_s3::error::DisplayErrorContext(&e)
                ),
            })?;

        Ok(())
    }
}
