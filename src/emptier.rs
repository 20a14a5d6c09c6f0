use thiserror::Error;
use tracing::{error, info, warn};

use crate::store::{BucketStore, StoreError, VersionedObjectEntry};


#[derive(Error, Debug)]
pub enum EmptyError {
    #[error("no bucket name given")]
    InvalidArgument,

    #[error("bucket {0} does not exist")]
    BucketNotFound(String),

    #[error(transparent)]
    Provider(StoreError),
}

impl From<StoreError> for EmptyError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::BucketNotFound(bucket) => EmptyError::BucketNotFound(bucket),
            other => EmptyError::Provider(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyOutcome {
    /// all listed entries were deleted
    Emptied { versions: usize, delete_markers: usize },
    /// the bucket does not exist, which is the desired end state
    BucketAbsent,
}


/// Deletes every object version and delete marker of a bucket, one call per entry.
///
/// By default the bucket is probed first and a missing bucket counts as
/// success. `without_existence_check` skips the probe; a missing bucket then
/// surfaces as a failure of the listing call.
pub struct BucketEmptier<S> {
    store: S,
    check_existence: bool,
}

impl<S: BucketStore> BucketEmptier<S> {

    pub fn new(store: S) -> Self {
        Self { store, check_existence: true }
    }

    pub fn without_existence_check(store: S) -> Self {
        Self { store, check_existence: false }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Empty the bucket and collapse the result into success/failure.
    /// Failures are logged with their message.
    pub async fn empty_bucket(&self, bucket: &str) -> bool {
        match self.try_empty_bucket(bucket).await {
            Ok(EmptyOutcome::BucketAbsent) => {
                info!("Bucket {bucket} does not exist");
                true
            }
            Ok(EmptyOutcome::Emptied { .. }) => {
                info!("Cleanup of bucket {bucket} completed.");
                true
            }
            Err(EmptyError::InvalidArgument) => {
                error!("Error: no bucket name specified");
                false
            }
            Err(err) => {
                error!("An error occurred: {err}");
                false
            }
        }
    }

    pub async fn try_empty_bucket(&self, bucket: &str) -> Result<EmptyOutcome, EmptyError> {
        if bucket.is_empty() {
            return Err(EmptyError::InvalidArgument);
        }
        info!("Deleting all objects and versions in bucket {bucket}...");

        match self.delete_all_versions(bucket).await {
            // the bucket may also disappear between the probe and the listing
            Err(EmptyError::BucketNotFound(_)) if self.check_existence => Ok(EmptyOutcome::BucketAbsent),
            res => res,
        }
    }

    async fn delete_all_versions(&self, bucket: &str) -> Result<EmptyOutcome, EmptyError> {
        if self.check_existence {
            self.store.head_bucket(bucket).await?;
        }

        let listing = self.store.list_object_versions(bucket).await?;
        if listing.truncated {
            warn!("Listing of bucket {bucket} is truncated; entries beyond the first page are not deleted");
        }

        if !listing.versions.is_empty() {
            info!("Deleting {} versions...", listing.versions.len());
            self.delete_entries(bucket, &listing.versions).await?;
        }

        if !listing.delete_markers.is_empty() {
            info!("Deleting {} delete markers...", listing.delete_markers.len());
            self.delete_entries(bucket, &listing.delete_markers).await?;
        }

        Ok(EmptyOutcome::Emptied {
            versions: listing.versions.len(),
            delete_markers: listing.delete_markers.len(),
        })
    }

    // stops at the first failing delete
    async fn delete_entries(&self, bucket: &str, entries: &[VersionedObjectEntry]) -> Result<(), StoreError> {
        for entry in entries {
            self.store.delete_object(bucket, &entry.key, &entry.version_id).await?;
        }
        Ok(())
    }
}
