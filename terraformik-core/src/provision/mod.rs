//! Provisioners for the two backend resources
//!
//! Each provisioner runs its remote steps strictly in order and stops at the
//! first failure. Completed steps are never rolled back. Failures are reported
//! through [`Progress`](crate::provider::Progress) and turned into `false`;
//! they never propagate past the provisioner.

mod bucket;
mod lock_table;

pub use bucket::create_storage_bucket;
pub use lock_table::create_lock_table;

use crate::provider::{Progress, ProviderResult, Step};

/// Run one remote step with progress reporting
async fn run_step<F>(
    progress: &dyn Progress,
    resource: &str,
    step: Step,
    call: F,
) -> ProviderResult<()>
where
    F: Future<Output = ProviderResult<()>>,
{
    progress.step_started(resource, step);
    log::debug!("{}: {}", resource, step);
    call.await?;
    progress.step_succeeded(resource, step);
    Ok(())
}
