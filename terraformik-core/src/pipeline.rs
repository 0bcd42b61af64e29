//! Provisioning pipeline: validate, derive names, provision bucket, provision table
//!
//! The two provisioners are independent: the lock table is provisioned even
//! when the bucket fails.

use std::fmt;

use crate::provider::{BucketApi, LockTableApi, Progress};
use crate::provision::{create_lock_table, create_storage_bucket};
use crate::request::{ProvisioningRequest, ValidationError};
use crate::resource::BackendPlan;
use crate::settings::ProvisionSettings;

/// Final result of a provisioning run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// Both resources exist and are configured
    Success,
    /// Input was rejected; no remote call was made
    ValidationFailed(ValidationError),
    /// The bucket failed, the table succeeded
    BucketFailed,
    /// The table failed, the bucket succeeded
    TableFailed,
    /// Neither resource was fully provisioned
    BothFailed,
}

impl ProvisionOutcome {
    fn from_results(bucket_ok: bool, table_ok: bool) -> Self {
        match (bucket_ok, table_ok) {
            (true, true) => Self::Success,
            (false, true) => Self::BucketFailed,
            (true, false) => Self::TableFailed,
            (false, false) => Self::BothFailed,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

impl fmt::Display for ProvisionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "provisioning succeeded"),
            Self::ValidationFailed(err) => write!(f, "invalid input: {}", err),
            Self::BucketFailed => write!(f, "state bucket provisioning failed"),
            Self::TableFailed => write!(f, "lock table provisioning failed"),
            Self::BothFailed => write!(f, "state bucket and lock table provisioning failed"),
        }
    }
}

/// Provision both resources for a validated request
pub async fn provision(
    request: &ProvisioningRequest,
    settings: &ProvisionSettings,
    buckets: &dyn BucketApi,
    tables: &dyn LockTableApi,
    progress: &dyn Progress,
) -> ProvisionOutcome {
    let plan = BackendPlan::new(request, settings);
    log::debug!(
        "provisioning {} and {} for {} in {}",
        plan.bucket.name,
        plan.table.name,
        request.environment,
        request.region
    );

    let bucket_ok = create_storage_bucket(buckets, &plan.bucket, progress).await;
    let table_ok = create_lock_table(tables, &plan.table, settings.table_wait, progress).await;

    ProvisionOutcome::from_results(bucket_ok, table_ok)
}

/// Validate raw inputs, then provision
///
/// Library entry point for callers that already hold both APIs. On invalid
/// input this returns [`ProvisionOutcome::ValidationFailed`] without touching
/// either API. The CLI validates first and calls [`provision`] instead, so no
/// AWS client is built for rejected input.
pub async fn run(
    app_name: &str,
    environment: &str,
    region: &str,
    settings: &ProvisionSettings,
    buckets: &dyn BucketApi,
    tables: &dyn LockTableApi,
    progress: &dyn Progress,
) -> ProvisionOutcome {
    match ProvisioningRequest::new(app_name, environment, region) {
        Ok(request) => provision(&request, settings, buckets, tables, progress).await,
        Err(err) => ProvisionOutcome::ValidationFailed(err),
    }
}
