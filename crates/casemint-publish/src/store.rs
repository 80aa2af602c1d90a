use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

use crate::errors::PublishError;

/// Minimal object-storage surface the publisher needs.
#[async_trait]
pub trait ObjectStore {
    /// Upload the file at `path` to `bucket` under `key`.
    async fn put_object(&self, bucket: &str, key: &str, path: &Path) -> Result<(), PublishError>;
}

/// S3-backed store using the SDK's default credential chain and timeouts.
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }

    /// Build a client from the ambient AWS environment.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_s3::Client::new(&config))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, bucket: &str, key: &str, path: &Path) -> Result<(), PublishError> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|err| PublishError::Upload(err.to_string()))?;
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|err| PublishError::Upload(err.to_string()))?;
        Ok(())
    }
}
