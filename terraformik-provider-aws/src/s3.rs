//! S3 calls for the state bucket

use async_trait::async_trait;
use aws_sdk_s3::types::{
    BucketLocationConstraint, BucketVersioningStatus, CreateBucketConfiguration,
    ServerSideEncryption, ServerSideEncryptionByDefault, ServerSideEncryptionConfiguration,
    ServerSideEncryptionRule, VersioningConfiguration,
};
use terraformik_core::provider::{BucketApi, ProviderError, ProviderResult, Step};
use terraformik_core::settings::SseAlgorithm;

use crate::{AwsProvider, error_message};

/// Region that rejects an explicit location constraint
const DEFAULT_REGION: &str = "us-east-1";

/// Location constraint for a bucket created in `region`
///
/// `us-east-1` is S3's default location and must not be passed explicitly.
pub fn location_constraint(region: &str) -> Option<CreateBucketConfiguration> {
    if region == DEFAULT_REGION {
        return None;
    }
    let constraint = BucketLocationConstraint::from(region);
    Some(
        CreateBucketConfiguration::builder()
            .location_constraint(constraint)
            .build(),
    )
}

/// Default encryption rule applying `algorithm` to every new object
pub fn encryption_configuration(
    algorithm: SseAlgorithm,
) -> Result<ServerSideEncryptionConfiguration, String> {
    let sse = match algorithm {
        SseAlgorithm::Aes256 => ServerSideEncryption::Aes256,
    };
    let by_default = ServerSideEncryptionByDefault::builder()
        .sse_algorithm(sse)
        .build()
        .map_err(|e| e.to_string())?;
    let rule = ServerSideEncryptionRule::builder()
        .apply_server_side_encryption_by_default(by_default)
        .build();

    ServerSideEncryptionConfiguration::builder()
        .rules(rule)
        .build()
        .map_err(|e| e.to_string())
}

#[async_trait]
impl BucketApi for AwsProvider {
    async fn create_bucket(&self, name: &str, region: &str) -> ProviderResult<()> {
        let mut request = self.s3_client.create_bucket().bucket(name);
        if let Some(config) = location_constraint(region) {
            request = request.create_bucket_configuration(config);
        }

        let output = request
            .send()
            .await
            .map_err(|e| ProviderError::new(name, Step::CreateBucket, error_message(&e)))?;
        log::debug!("created bucket at {}", output.location().unwrap_or(name));
        Ok(())
    }

    async fn enable_versioning(&self, name: &str) -> ProviderResult<()> {
        let versioning_config = VersioningConfiguration::builder()
            .status(BucketVersioningStatus::Enabled)
            .build();

        self.s3_client
            .put_bucket_versioning()
            .bucket(name)
            .versioning_configuration(versioning_config)
            .send()
            .await
            .map_err(|e| ProviderError::new(name, Step::EnableVersioning, error_message(&e)))?;

        Ok(())
    }

    async fn enable_encryption(&self, name: &str, algorithm: SseAlgorithm) -> ProviderResult<()> {
        let config = encryption_configuration(algorithm)
            .map_err(|e| ProviderError::new(name, Step::EnableEncryption, e))?;

        self.s3_client
            .put_bucket_encryption()
            .bucket(name)
            .server_side_encryption_configuration(config)
            .send()
            .await
            .map_err(|e| ProviderError::new(name, Step::EnableEncryption, error_message(&e)))?;

        Ok(())
    }
}
