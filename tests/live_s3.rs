//! Runs against a real S3 account using the ambient AWS credentials.
//! `cargo test -- --ignored` to include it.

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{
    BucketLocationConstraint, BucketVersioningStatus, CreateBucketConfiguration,
    VersioningConfiguration,
};
use aws_sdk_s3::Client;
use bytes::Bytes;
use uuid::Uuid;

use s3_bucket_emptier::client::get_region_client;
use s3_bucket_emptier::{BucketEmptier, BucketStore, EmptyOutcome, S3BucketStore};


async fn create_versioned_bucket(client: &Client, bucket_name: &str, region: &str) {
    let mut req = client.create_bucket().bucket(bucket_name);
    // us-east-1 rejects an explicit location constraint
    if region != "us-east-1" {
        let cfg = CreateBucketConfiguration::builder()
            .location_constraint(BucketLocationConstraint::from(region))
            .build();
        req = req.create_bucket_configuration(cfg);
    }
    req.send().await.expect("Failed to create bucket");

    client
        .put_bucket_versioning()
        .bucket(bucket_name)
        .versioning_configuration(
            VersioningConfiguration::builder()
                .status(BucketVersioningStatus::Enabled)
                .build(),
        )
        .send()
        .await
        .expect("Failed to enable versioning");
}

async fn upload_object(client: &Client, bucket_name: &str, key: &str, body: &'static [u8]) {
    client
        .put_object()
        .bucket(bucket_name)
        .key(key)
        .body(ByteStream::from(Bytes::from_static(body)))
        .send()
        .await
        .expect("Failed to create Object in bucket");
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "needs AWS credentials"]
async fn test_empty_versioned_bucket() {
    let (region, client) = get_region_client().await;
    let region = region.expect("no region configured");
    let bucket_name = format!("{}{}", "empty-bucket-test-", Uuid::new_v4());

    create_versioned_bucket(&client, &bucket_name, region.as_ref()).await;
    upload_object(&client, &bucket_name, "a.txt", b"first").await;
    upload_object(&client, &bucket_name, "a.txt", b"second").await;
    upload_object(&client, &bucket_name, "b.txt", b"only").await;
    // plain delete on a versioned bucket leaves a delete marker behind
    client.delete_object().bucket(&bucket_name).key("b.txt").send().await
        .expect("Failed to place delete marker");

    let emptier = BucketEmptier::new(S3BucketStore::new(client.clone()));
    let outcome = emptier.try_empty_bucket(&bucket_name).await.expect("emptying failed");
    assert_eq!(outcome, EmptyOutcome::Emptied { versions: 3, delete_markers: 1 });

    let listing = emptier.store().list_object_versions(&bucket_name).await.unwrap();
    assert!(listing.versions.is_empty());
    assert!(listing.delete_markers.is_empty());

    client.delete_bucket().bucket(&bucket_name).send().await.expect("Failed to delete bucket");

    // the bucket is gone now, which still counts as emptied
    assert_eq!(emptier.try_empty_bucket(&bucket_name).await.unwrap(), EmptyOutcome::BucketAbsent);
    assert!(!BucketEmptier::without_existence_check(S3BucketStore::new(client))
        .empty_bucket(&bucket_name)
        .await);
}
