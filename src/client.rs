use aws_config::{meta::region::RegionProviderChain, BehaviorVersion};
use aws_sdk_s3::{
    config::Region,
    Client};

/// Region used when the environment (AWS_REGION, profile) does not name one.
pub const REGION: &str = "eu-central-1";

// the current region and a client for this region
pub async fn get_region_client() -> (Option<Region>, Client) {
    let region_provider = RegionProviderChain::default_provider().or_else(REGION);
    let region = region_provider.region().await;

    let shared_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;
    let client = Client::new(&shared_config);

    (region, client)
}

/// get a client configured from the ambient AWS environment
pub async fn get_client() -> Client {
    let (region, client) = get_region_client().await;
    tracing::debug!("S3 client configured for region {:?}", region);

    client
}
