//! State bucket provisioner

use crate::provider::{BucketApi, Progress, ProviderResult, Step};
use crate::resource::BucketSpec;

use super::run_step;

/// Create the state bucket, then enable versioning, then default encryption
///
/// Returns `true` only when all three calls succeed. A bucket whose later
/// steps fail is left in place.
pub async fn create_storage_bucket(
    api: &dyn BucketApi,
    spec: &BucketSpec,
    progress: &dyn Progress,
) -> bool {
    match configure_bucket(api, spec, progress).await {
        Ok(()) => {
            log::info!("bucket {} ready in {}", spec.name, spec.region);
            progress.resource_ready(&spec.name);
            true
        }
        Err(err) => {
            log::debug!("bucket provisioning failed: {}", err);
            progress.resource_failed(&err);
            false
        }
    }
}

async fn configure_bucket(
    api: &dyn BucketApi,
    spec: &BucketSpec,
    progress: &dyn Progress,
) -> ProviderResult<()> {
    let name = spec.name.as_str();

    run_step(progress, name, Step::CreateBucket, api.create_bucket(name, &spec.region)).await?;

    run_step(progress, name, Step::EnableVersioning, api.enable_versioning(name)).await?;

    run_step(
        progress,
        name,
        Step::EnableEncryption,
        api.enable_encryption(name, spec.encryption),
    )
    .await
}
