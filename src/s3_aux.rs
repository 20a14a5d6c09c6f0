use std::fmt::Debug;

use async_trait::async_trait;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::types::{DeleteMarkerEntry, ObjectVersion};
use aws_sdk_s3::Client;

use crate::store::{
    BucketStore, StoreError, StoreResult, VersionListing, VersionedObjectEntry, NULL_VERSION_ID,
};


/// `BucketStore` backed by the AWS S3 SDK.
#[derive(Debug, Clone)]
pub struct S3BucketStore {
    client: Client,
}

impl S3BucketStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

// Map an SDK failure onto the store errors. Missing buckets show up as
// `NoSuchBucket` on list/delete and as a bare 404 (`NotFound`) on HEAD requests.
fn classify_error<E, R>(bucket: &str, err: SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: Debug,
{
    match err.code() {
        Some("NoSuchBucket") | Some("NotFound") | Some("404") => {
            StoreError::BucketNotFound(bucket.to_owned())
        }
        _ => StoreError::Provider(DisplayErrorContext(&err).to_string()),
    }
}

fn entry(key: Option<&str>, version_id: Option<&str>) -> StoreResult<VersionedObjectEntry> {
    let key = key.ok_or_else(|| StoreError::Provider("listing entry without key".to_owned()))?;
    Ok(VersionedObjectEntry::new(key, version_id.unwrap_or(NULL_VERSION_ID)))
}

fn version_entry(version: &ObjectVersion) -> StoreResult<VersionedObjectEntry> {
    entry(version.key(), version.version_id())
}

fn marker_entry(marker: &DeleteMarkerEntry) -> StoreResult<VersionedObjectEntry> {
    entry(marker.key(), marker.version_id())
}


#[async_trait]
impl BucketStore for S3BucketStore {

    async fn head_bucket(&self, bucket: &str) -> StoreResult<()> {
        match self.client.head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(()),
            Err(err) if err.as_service_error().map(|e| e.is_not_found()) == Some(true) => {
                Err(StoreError::BucketNotFound(bucket.to_owned()))
            }
            Err(err) => Err(classify_error(bucket, err)),
        }
    }

    async fn list_object_versions(&self, bucket: &str) -> StoreResult<VersionListing> {
        let resp = self.client
            .list_object_versions()
            .bucket(bucket)
            .send()
            .await
            .map_err(|err| classify_error(bucket, err))?;

        Ok(VersionListing {
            versions: resp.versions().iter().map(version_entry).collect::<StoreResult<_>>()?,
            delete_markers: resp.delete_markers().iter().map(marker_entry).collect::<StoreResult<_>>()?,
            truncated: resp.is_truncated().unwrap_or(false),
        })
    }

    async fn delete_object(&self, bucket: &str, key: &str, version_id: &str) -> StoreResult<()> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .version_id(version_id)
            .send()
            .await
            .map_err(|err| classify_error(bucket, err))?;
        Ok(())
    }
}
