//! Terraformik AWS Provider
//!
//! Implements the bucket and lock-table calls with S3 and DynamoDB.

mod dynamodb;
mod s3;

use aws_config::Region;
use aws_config::retry::RetryConfig;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::error::DisplayErrorContext;

pub use dynamodb::{TableDefinition, table_definition};
pub use s3::{encryption_configuration, location_constraint};

/// AWS Provider
///
/// Both clients share one `SdkConfig`. SDK retries are disabled: a throttled
/// or failed call is reported immediately.
pub struct AwsProvider {
    s3_client: S3Client,
    dynamodb_client: DynamoDbClient,
}

impl AwsProvider {
    /// Create a new AWS Provider for `region`
    ///
    /// Credentials are resolved by the default AWS provider chain.
    pub async fn new(region: &str) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        Self {
            s3_client: S3Client::new(&config),
            dynamodb_client: DynamoDbClient::new(&config),
        }
    }
}

/// Render an SDK error with its full source chain
///
/// Service errors carry the provider code and message (e.g.
/// `BucketAlreadyOwnedByYou`), which plain `Display` hides.
fn error_message<E: std::error::Error>(err: &E) -> String {
    DisplayErrorContext(err).to_string()
}
