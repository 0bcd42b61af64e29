//! Lock table provisioner

use std::time::Duration;

use crate::provider::{LockTableApi, Progress, ProviderResult, Step};
use crate::resource::LockTableSpec;

use super::run_step;

/// Create the lock table and wait until it reports active
///
/// A failed create returns `false` without waiting.
pub async fn create_lock_table(
    api: &dyn LockTableApi,
    spec: &LockTableSpec,
    max_wait: Duration,
    progress: &dyn Progress,
) -> bool {
    match build_table(api, spec, max_wait, progress).await {
        Ok(()) => {
            log::info!("lock table {} active", spec.name);
            progress.resource_ready(&spec.name);
            true
        }
        Err(err) => {
            log::debug!("lock table provisioning failed: {}", err);
            progress.resource_failed(&err);
            false
        }
    }
}

async fn build_table(
    api: &dyn LockTableApi,
    spec: &LockTableSpec,
    max_wait: Duration,
    progress: &dyn Progress,
) -> ProviderResult<()> {
    let name = spec.name.as_str();
    run_step(progress, name, Step::CreateTable, api.create_table(spec)).await?;
    run_step(
        progress,
        name,
        Step::WaitForTable,
        api.wait_until_active(name, max_wait),
    )
    .await
}
