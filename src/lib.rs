//! Empty a (versioned) S3 bucket ahead of its teardown: every object version
//! and every delete marker is removed with an individual delete call.

pub mod client;
pub mod emptier;
pub mod s3_aux;
pub mod store;

pub use client::{get_client, REGION};
pub use emptier::{BucketEmptier, EmptyError, EmptyOutcome};
pub use s3_aux::S3BucketStore;
pub use store::{BucketStore, StoreError, VersionListing, VersionedObjectEntry};
