//! AWS SDK client construction.

use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_dynamodb::Client;

/// Build the AWS SDK DynamoDB client.
///
/// Region priority: default provider chain (env var, profile), then
/// us-east-1. Credentials come from the default chain (env vars, profile,
/// IAM role). An endpoint override points the client at DynamoDB Local.
pub(crate) async fn build_client(endpoint_url: Option<String>) -> Client {
    let region_provider = RegionProviderChain::default_provider().or_else("us-east-1");

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    let mut dynamo_config = aws_sdk_dynamodb::config::Builder::from(&sdk_config);

    if let Some(url) = endpoint_url {
        dynamo_config = dynamo_config.endpoint_url(url);
    }

    Client::from_conf(dynamo_config.build())
}
