use async_trait::async_trait;
use thiserror::Error;


/// Version id S3 reports for objects written while versioning was disabled.
pub const NULL_VERSION_ID: &str = "null";

/// One stored object version or one delete marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedObjectEntry {
    pub key: String,
    pub version_id: String,
}

impl VersionedObjectEntry {
    pub fn new(key: impl Into<String>, version_id: impl Into<String>) -> Self {
        Self { key: key.into(), version_id: version_id.into() }
    }
}

/// Result of a single list-object-versions call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionListing {
    pub versions: Vec<VersionedObjectEntry>,
    pub delete_markers: Vec<VersionedObjectEntry>,
    /// the provider has more entries than returned in this (single) page
    pub truncated: bool,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Bucket not found: {0}")]
    BucketNotFound(String),

    #[error("{0}")]
    Provider(String),
}

pub type StoreResult<T> = Result<T, StoreError>;


/// The remote calls needed to empty a bucket.
#[async_trait]
pub trait BucketStore: Send + Sync {
    /// Probe the bucket. Fails with `StoreError::BucketNotFound` when it does not exist.
    async fn head_bucket(&self, bucket: &str) -> StoreResult<()>;

    /// List all object versions and delete markers in one call (no pagination).
    async fn list_object_versions(&self, bucket: &str) -> StoreResult<VersionListing>;

    async fn delete_object(&self, bucket: &str, key: &str, version_id: &str) -> StoreResult<()>;
}
